use crate::argument::Arg;
use crate::table::DecodeTable;

/// Format the instruction at the head of `bytes` using the decode table.
///
/// Returns the rendered text and the encoded length consumed, or `None` when
/// the slice is shorter than the instruction requires. Operand bytes are
/// assigned to descriptors left to right; undefined opcodes come back as the
/// one-byte `UNK` entry, so a dense byte stream always makes progress.
pub fn fmt_instruction(table: &DecodeTable, bytes: &[u8]) -> Option<(String, usize)> {
    let &opcode = bytes.first()?;
    let entry = table.lookup(opcode);
    let len = entry.len as usize;
    if bytes.len() < len {
        return None;
    }

    let mut text = table.mnemonic(entry).to_string();
    let mut cursor = 1usize;
    for (i, arg) in entry.args.iter().flatten().enumerate() {
        text.push(if i == 0 { ' ' } else { ',' });
        text.push_str(&fmt_arg(*arg, bytes, &mut cursor));
    }
    Some((text, len))
}

fn fmt_arg(arg: Arg, bytes: &[u8], cursor: &mut usize) -> String {
    match arg {
        Arg::A => "A".to_string(),
        Arg::X => "X".to_string(),
        Arg::Y => "Y".to_string(),
        Arg::Ya => "YA".to_string(),
        Arg::Sp => "SP".to_string(),
        Arg::Psw => "PSW".to_string(),
        Arg::Carry => "C".to_string(),
        Arg::IndX => "(X)".to_string(),
        Arg::IndXInc => "(X)+".to_string(),
        Arg::IndY => "(Y)".to_string(),
        Arg::Imm => format!("#${:02X}", take_u8(bytes, cursor)),
        Arg::Dp => format!("${:02X}", take_u8(bytes, cursor)),
        Arg::DpPlusX => format!("${:02X}+X", take_u8(bytes, cursor)),
        Arg::DpPlusY => format!("${:02X}+Y", take_u8(bytes, cursor)),
        Arg::Rel => format!("{:+}", take_u8(bytes, cursor) as i8),
        Arg::IndDpPlusX => format!("(${:02X}+X)", take_u8(bytes, cursor)),
        Arg::IndDpPlusY => format!("(${:02X})+Y", take_u8(bytes, cursor)),
        Arg::Bit => format!("{}", take_u8(bytes, cursor) & 0x07),
        Arg::NotBit => format!("/${:02X}", take_u8(bytes, cursor)),
        Arg::Abs => format!("${:04X}", take_u16(bytes, cursor)),
        Arg::AbsPlusX => format!("${:04X}+X", take_u16(bytes, cursor)),
        Arg::AbsPlusY => format!("${:04X}+Y", take_u16(bytes, cursor)),
        Arg::IndAbsPlusX => format!("(${:04X}+X)", take_u16(bytes, cursor)),
    }
}

fn take_u8(bytes: &[u8], cursor: &mut usize) -> u8 {
    let b = bytes[*cursor];
    *cursor += 1;
    b
}

fn take_u16(bytes: &[u8], cursor: &mut usize) -> u16 {
    let v = u16::from_le_bytes([bytes[*cursor], bytes[*cursor + 1]]);
    *cursor += 2;
    v
}
