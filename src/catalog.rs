use std::collections::BTreeMap;

/// One defined opcode from the instruction listing. `len` is the total
/// encoded size in bytes as stated by the listing; the table builder
/// cross-checks it against the operand widths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub opcode: u8,
    pub mnemonic: String,
    pub operands: Vec<String>,
    pub len: u8,
}

/// Sparse parse result: only the opcodes the listing defines, keyed by byte,
/// plus the distinct mnemonics in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub entries: BTreeMap<u8, CatalogEntry>,
    pub mnemonics: Vec<String>,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("malformed listing entry at line {lineno}: {line:?}")]
    MalformedEntry { lineno: usize, line: String },
    #[error("opcode {opcode:#04X} defined twice, at line {lineno}: {line:?}")]
    DuplicateOpcode { opcode: u8, lineno: usize, line: String },
}

/// Parse a textual instruction listing into a [`Catalog`].
///
/// One encoding per non-blank line, four whitespace-delimited fields:
/// mnemonic, operand spec (`nil` or 1-3 comma-joined tokens), opcode byte as
/// two hex digits, encoded length 1-3. The listing is hand-authored, so a
/// repeated opcode byte is a fatal error rather than a last-one-wins merge.
pub fn parse_listing(text: &str) -> Result<Catalog, ParseError> {
    let mut catalog = Catalog::default();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = idx + 1;
        let malformed = || ParseError::MalformedEntry {
            lineno,
            line: line.to_string(),
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        let &[mnemonic, operand_spec, opcode_hex, len_str] = fields.as_slice() else {
            return Err(malformed());
        };

        if opcode_hex.len() != 2 {
            return Err(malformed());
        }
        let opcode = u8::from_str_radix(opcode_hex, 16).map_err(|_| malformed())?;

        let len: u8 = len_str.parse().map_err(|_| malformed())?;
        if !(1..=3).contains(&len) {
            return Err(malformed());
        }

        let operands: Vec<String> = if operand_spec == "nil" {
            Vec::new()
        } else {
            operand_spec.split(',').map(str::to_string).collect()
        };
        if operands.len() > 3 || operands.iter().any(|t| t.is_empty()) {
            return Err(malformed());
        }

        if catalog.entries.contains_key(&opcode) {
            return Err(ParseError::DuplicateOpcode {
                opcode,
                lineno,
                line: line.to_string(),
            });
        }
        catalog.entries.insert(
            opcode,
            CatalogEntry {
                opcode,
                mnemonic: mnemonic.to_string(),
                operands,
                len,
            },
        );
        if !catalog.mnemonics.iter().any(|m| m == mnemonic) {
            catalog.mnemonics.push(mnemonic.to_string());
        }
    }

    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_a_two_operand_line() {
        let cat = parse_listing("MOV A,#inm E8 2").unwrap();
        let entry = &cat.entries[&0xE8];
        assert_eq!(entry.mnemonic, "MOV");
        assert_eq!(entry.operands, vec!["A".to_string(), "#inm".to_string()]);
        assert_eq!(entry.len, 2);
        assert_eq!(cat.mnemonics, vec!["MOV".to_string()]);
    }

    #[test]
    fn nil_means_zero_operands() {
        let cat = parse_listing("NOP nil 00 1").unwrap();
        assert!(cat.entries[&0x00].operands.is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let cat = parse_listing("\n  \nRET nil 6F 1\n\n").unwrap();
        assert_eq!(cat.entries.len(), 1);
    }

    #[test]
    fn mnemonics_are_distinct_in_first_seen_order() {
        let cat = parse_listing("MOV A,dp E4 2\nADC A,dp 84 2\nMOV X,dp F8 2").unwrap();
        assert_eq!(cat.mnemonics, vec!["MOV".to_string(), "ADC".to_string()]);
    }

    #[test]
    fn wrong_field_count_is_malformed() {
        let err = parse_listing("MOV A,#inm E8").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEntry { lineno: 1, .. }));
    }

    #[test]
    fn non_hex_opcode_is_malformed() {
        let err = parse_listing("MOV A,#inm G8 2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEntry { .. }));
    }

    #[test]
    fn length_out_of_range_is_malformed() {
        assert!(parse_listing("MOV A,#inm E8 0").is_err());
        assert!(parse_listing("MOV A,#inm E8 4").is_err());
    }

    #[test]
    fn four_operands_are_malformed() {
        let err = parse_listing("BAD A,X,Y,SP 01 1").unwrap_err();
        assert!(matches!(err, ParseError::MalformedEntry { .. }));
    }

    #[test]
    fn duplicate_opcode_is_fatal() {
        let err = parse_listing("NOP nil 00 1\nBRK nil 00 1").unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicateOpcode {
                opcode: 0x00,
                lineno: 2,
                line: "BRK nil 00 1".to_string(),
            }
        );
    }
}
