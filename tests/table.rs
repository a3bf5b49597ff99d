use pretty_assertions::assert_eq;
use spc700_decode::{build_from_listing, Arg, BuildError, ParseError};

const SMALL: &str = "
  MOV    A,#inm      E8    2
  AND1   C,rel,bit   4A    3
  NOP    nil         00    1
  JMP    (abs+X)     1F    3
";

#[test]
fn every_byte_has_exactly_one_entry() {
    let table = build_from_listing(SMALL).unwrap();
    assert_eq!(table.entries.len(), 256);
    for b in 0u8..=0xFF {
        assert_eq!(table.lookup(b).opcode, b);
    }
}

#[test]
fn absent_bytes_are_unk_len_one_all_none() {
    let table = build_from_listing(SMALL).unwrap();
    for b in 0u8..=0xFF {
        if ![0xE8, 0x4A, 0x00, 0x1F].contains(&b) {
            let entry = table.lookup(b);
            assert_eq!(table.mnemonic(entry), "UNK");
            assert_eq!(entry.len, 1);
            assert_eq!(entry.args, [None, None, None]);
        }
    }
}

#[test]
fn defined_bytes_resolve_in_source_order_with_none_padding() {
    let table = build_from_listing(SMALL).unwrap();

    let entry = table.lookup(0xE8);
    assert_eq!(table.mnemonic(entry), "MOV");
    assert_eq!(entry.len, 2);
    assert_eq!(entry.args, [Some(Arg::A), Some(Arg::Imm), None]);

    let entry = table.lookup(0x4A);
    assert_eq!(
        entry.args,
        [Some(Arg::Carry), Some(Arg::Rel), Some(Arg::Bit)]
    );

    assert_eq!(table.lookup(0x00).args, [None, None, None]);

    let entry = table.lookup(0x1F);
    assert_eq!(entry.args, [Some(Arg::IndAbsPlusX), None, None]);
    assert_eq!(entry.len, 3);
}

#[test]
fn mnemonic_index_is_sorted_and_duplicate_free() {
    let table = build_from_listing(SMALL).unwrap();
    assert_eq!(
        table.mnemonics,
        vec![
            "AND1".to_string(),
            "JMP".to_string(),
            "MOV".to_string(),
            "NOP".to_string(),
            "UNK".to_string(),
        ]
    );
    assert_eq!(&table.mnemonics[table.unk as usize], "UNK");
}

#[test]
fn regeneration_is_deterministic() {
    let a = serde_json::to_string(&build_from_listing(SMALL).unwrap()).unwrap();
    let b = serde_json::to_string(&build_from_listing(SMALL).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn duplicate_opcode_aborts_the_build() {
    let err = build_from_listing("NOP nil 00 1\nMOV A,#inm 00 2").unwrap_err();
    assert!(matches!(
        err,
        BuildError::Parse(ParseError::DuplicateOpcode { opcode: 0x00, .. })
    ));
}

#[test]
fn typo_token_aborts_the_build() {
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
fn declared_length_is_cross_checked_against_widths() {
    // abs needs two operand bytes, so the declared 2 is a transcription error.
    let err = build_from_listing("JMP abs 5F 2").unwrap_err();
    assert_eq!(
        err,
        BuildError::LengthMismatch {
            opcode: 0x5F,
            declared: 2,
            derived: 3,
        }
    );
}
