use serde::Serialize;
use tracing::debug;

use crate::argument::Arg;
use crate::catalog::{parse_listing, Catalog, ParseError};

/// Synthetic mnemonic assigned to opcode bytes the listing does not define.
pub const UNK_MNEMONIC: &str = "UNK";

pub const TABLE_SIZE: usize = 256;
pub const MAX_OPERANDS: usize = 3;

/// Decode metadata for one opcode byte. `mnemonic` indexes the table's
/// sorted mnemonic list; `args` holds the operand descriptors left to right,
/// `None`-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DecodeEntry {
    pub opcode: u8,
    pub mnemonic: u16,
    pub len: u8,
    pub args: [Option<Arg>; MAX_OPERANDS],
}

/// Dense decode table: exactly [`TABLE_SIZE`] entries, entry index equals
/// opcode byte. Built once from a listing and never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DecodeTable {
    /// Sorted, duplicate-free mnemonic names; `DecodeEntry::mnemonic` indexes
    /// this list.
    pub mnemonics: Vec<String>,
    /// Index of [`UNK_MNEMONIC`] within `mnemonics`.
    pub unk: u16,
    pub entries: Vec<DecodeEntry>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("unknown addressing mode {token:?} on opcode {opcode:#04X}")]
    UnknownAddressingMode { token: String, opcode: u8 },
    #[error(
        "opcode {opcode:#04X} declares length {declared} but its operands encode {derived} bytes"
    )]
    LengthMismatch {
        opcode: u8,
        declared: u8,
        derived: u8,
    },
}

/// Materialize the dense decode table from a parsed catalog.
///
/// Any resolution failure aborts the whole build; a table with gaps or
/// unresolved slots is never produced, because a partial table silently
/// corrupts every downstream consumer.
pub fn build(catalog: &Catalog) -> Result<DecodeTable, BuildError> {
    let mut mnemonics = catalog.mnemonics.clone();
    mnemonics.push(UNK_MNEMONIC.to_string());
    mnemonics.sort_unstable();
    mnemonics.dedup();

    // Sorted and deduplicated, so every lookup below must hit.
    let index_of = |name: &str| -> u16 {
        mnemonics
            .binary_search_by(|m| m.as_str().cmp(name))
            .unwrap_or_else(|_| unreachable!("mnemonic {name:?} missing from sorted index"))
            as u16
    };
    let unk = index_of(UNK_MNEMONIC);

    let mut entries = Vec::with_capacity(TABLE_SIZE);
    for b in 0u8..=0xFF {
        let entry = match catalog.entries.get(&b) {
            Some(src) => {
                let mut args = [None; MAX_OPERANDS];
                let mut derived = 1u8;
                for (slot, token) in args.iter_mut().zip(&src.operands) {
                    let arg = Arg::from_token(token).ok_or_else(|| {
                        BuildError::UnknownAddressingMode {
                            token: token.clone(),
                            opcode: b,
                        }
                    })?;
                    derived += arg.operand_width();
                    *slot = Some(arg);
                }
                if derived != src.len {
                    return Err(BuildError::LengthMismatch {
                        opcode: b,
                        declared: src.len,
                        derived,
                    });
                }
                DecodeEntry {
                    opcode: b,
                    mnemonic: index_of(&src.mnemonic),
                    len: src.len,
                    args,
                }
            }
            None => DecodeEntry {
                opcode: b,
                mnemonic: unk,
                len: 1,
                args: [None; MAX_OPERANDS],
            },
        };
        entries.push(entry);
    }

    debug!(
        defined = catalog.entries.len(),
        mnemonics = mnemonics.len(),
        "decode table built"
    );

    Ok(DecodeTable {
        mnemonics,
        unk,
        entries,
    })
}

/// Parse a listing and build its decode table in one step.
pub fn build_from_listing(text: &str) -> Result<DecodeTable, BuildError> {
    build(&parse_listing(text)?)
}

impl DecodeTable {
    pub fn lookup(&self, opcode: u8) -> &DecodeEntry {
        &self.entries[opcode as usize]
    }

    pub fn mnemonic(&self, entry: &DecodeEntry) -> &str {
        &self.mnemonics[entry.mnemonic as usize]
    }

    /// False for bytes the listing left undefined.
    pub fn is_defined(&self, opcode: u8) -> bool {
        self.lookup(opcode).mnemonic != self.unk
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn undefined_bytes_get_the_unk_sentinel() {
        let table = build_from_listing("NOP nil 00 1").unwrap();
        let entry = table.lookup(0x42);
        assert_eq!(table.mnemonic(entry), "UNK");
        assert_eq!(entry.len, 1);
        assert_eq!(entry.args, [None, None, None]);
        assert!(!table.is_defined(0x42));
        assert!(table.is_defined(0x00));
    }

    #[test]
    fn mnemonic_index_is_sorted_and_contains_unk() {
        let table = build_from_listing("MOV A,dp E4 2\nADC A,dp 84 2").unwrap();
        assert_eq!(
            table.mnemonics,
            vec!["ADC".to_string(), "MOV".to_string(), "UNK".to_string()]
        );
        assert_eq!(table.unk, 2);
    }

    #[test]
    fn operand_slots_resolve_left_to_right_with_none_padding() {
        let table = build_from_listing("MOV A,#inm E8 2").unwrap();
        let entry = table.lookup(0xE8);
        assert_eq!(table.mnemonic(entry), "MOV");
        assert_eq!(entry.len, 2);
        assert_eq!(entry.args, [Some(Arg::A), Some(Arg::Imm), None]);
    }

    #[test]
    fn three_operand_entry_fills_every_slot() {
        let table = build_from_listing("AND1 C,rel,bit 4A 3").unwrap();
        let entry = table.lookup(0x4A);
        assert_eq!(
            entry.args,
            [Some(Arg::Carry), Some(Arg::Rel), Some(Arg::Bit)]
        );
    }

    #[test]
    fn unknown_token_names_the_token_and_opcode() {
        let err = build_from_listing("MOV A,dpp E4 2").unwrap_err();
        assert_eq!(
            err,
            BuildError::UnknownAddressingMode {
                token: "dpp".to_string(),
                opcode: 0xE4,
            }
        );
    }

    #[test]
    fn parse_errors_propagate() {
        let err = build_from_listing("NOP nil 00 1\nBRK nil 00 1").unwrap_err();
        assert!(matches!(err, BuildError::Parse(_)));
    }

    #[test]
    fn declared_length_must_match_operand_widths() {
        let err = build_from_listing("MOV A,abs E5 2").unwrap_err();
        assert_eq!(
            err,
            BuildError::LengthMismatch {
                opcode: 0xE5,
                declared: 2,
                derived: 3,
            }
        );
    }

    #[test]
    fn table_is_always_dense() {
        let table = build_from_listing("").unwrap();
        assert_eq!(table.entries.len(), TABLE_SIZE);
        for (i, entry) in table.entries.iter().enumerate() {
            assert_eq!(entry.opcode as usize, i);
        }
    }
}
