use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use spc700_decode::disasm::fmt_instruction;
use spc700_decode::isa::spc700;
use spc700_decode::table::{build_from_listing, DecodeTable};
use spc700_decode::Arg;

/// JSON artifact: the table plus the argument-type enumeration consumers
/// index with.
#[derive(serde::Serialize)]
struct Artifact<'a> {
    arg_types: Vec<&'static str>,
    #[serde(flatten)]
    table: &'a DecodeTable,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "SPC700 decode-table generator", long_about = None)]
struct Cli {
    /// Instruction listing file (default: built-in SPC700 listing)
    #[arg(long, value_name = "FILE")]
    listing: Option<String>,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Emit the dense 256-entry decode table
    Gen {
        /// Output format: text or json
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Write output to file instead of stdout
        #[arg(long, value_name = "FILE")]
        out: Option<String>,
    },
    /// Decode a raw binary through the table
    Dis {
        /// Input binary path
        #[arg(value_name = "BINFILE")]
        input: String,
        /// Skip N bytes at start of file before decoding
        #[arg(long, default_value_t = 0usize)]
        skip: usize,
        /// Limit bytes decoded (default: to EOF after --skip)
        #[arg(long)]
        len: Option<usize>,
        /// Base address for the listing column
        #[arg(long, default_value_t = 0u16)]
        base: u16,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let table = match &cli.listing {
        Some(path) => build_from_listing(&std::fs::read_to_string(path)?)?,
        None => spc700::decode_table()?,
    };

    match cli.cmd {
        Command::Gen { format, out } => {
            let text = match format {
                OutputFormat::Json => serde_json::to_string_pretty(&Artifact {
                    arg_types: Arg::ALL.iter().map(|a| a.token()).collect(),
                    table: &table,
                })?,
                OutputFormat::Text => render_text(&table),
            };
            match out {
                Some(path) => std::fs::write(path, text)?,
                None => print!("{text}"),
            }
        }
        Command::Dis {
            input,
            skip,
            len,
            base,
        } => {
            let data = std::fs::read(&input)?;
            anyhow::ensure!(skip <= data.len(), "--skip exceeds file size");
            let mut slice = &data[skip..];
            if let Some(lim) = len {
                anyhow::ensure!(lim <= slice.len(), "--len exceeds remaining file size after skip");
                slice = &slice[..lim];
            }

            let mut addr = base;
            while !slice.is_empty() {
                match fmt_instruction(&table, slice) {
                    Some((text, n)) => {
                        println!("{addr:04X}  {text}");
                        addr = addr.wrapping_add(n as u16);
                        slice = &slice[n..];
                    }
                    None => {
                        // Operand bytes run past the end of the input.
                        println!("{addr:04X}  .db ${:02X}", slice[0]);
                        addr = addr.wrapping_add(1);
                        slice = &slice[1..];
                    }
                }
            }
        }
    }

    Ok(())
}

fn render_text(table: &DecodeTable) -> String {
    let mut out = String::new();
    for entry in &table.entries {
        let args: Vec<&str> = entry.args.iter().flatten().map(|a| a.token()).collect();
        let args = if args.is_empty() {
            "nil".to_string()
        } else {
            args.join(",")
        };
        out.push_str(&format!(
            "{:02X}  {:<5} {}  {}\n",
            entry.opcode,
            table.mnemonic(entry),
            entry.len,
            args
        ));
    }
    out
}
