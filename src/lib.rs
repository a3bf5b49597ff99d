pub mod argument;
pub mod catalog;
pub mod disasm;
pub mod table;

pub mod isa {
    pub mod spc700; // SPC700 core found in the SNES APU
}

pub use argument::Arg;
pub use catalog::{parse_listing, Catalog, CatalogEntry, ParseError};
pub use table::{build, build_from_listing, BuildError, DecodeEntry, DecodeTable};
