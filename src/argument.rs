use serde::{Deserialize, Serialize};

/// SPC700 addressing-mode vocabulary, one variant per operand token that may
/// appear in the instruction listing. The set is closed: a token outside it
/// is a build error, never a silent default. Unused operand slots in the
/// decode table are `None`, not a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Arg {
    A,
    X,
    Y,
    Ya,
    Sp,
    Psw,
    /// `#inm` — immediate byte
    Imm,
    /// `(X)` — memory at X
    IndX,
    /// `(X)+` — memory at X, post-increment
    IndXInc,
    /// `(Y)` — memory at Y
    IndY,
    /// `dp` — direct page
    Dp,
    DpPlusX,
    DpPlusY,
    /// `rel` — signed PC-relative byte
    Rel,
    /// `abs` — 16-bit absolute address
    Abs,
    AbsPlusX,
    AbsPlusY,
    /// `(dp+X)` — indirect through direct page indexed by X
    IndDpPlusX,
    /// `(dp)+Y` — indirect through direct page, then indexed by Y
    IndDpPlusY,
    /// `(abs+X)` — indirect jump target
    IndAbsPlusX,
    /// `C` — carry flag
    Carry,
    /// `bit` — bit number within a memory operand
    Bit,
    /// `/mem` — complemented memory bit
    NotBit,
}

impl Arg {
    /// Every vocabulary member in a stable order; position is the
    /// argument-type index exported alongside the decode table.
    pub const ALL: [Arg; 23] = [
        Arg::A,
        Arg::X,
        Arg::Y,
        Arg::Ya,
        Arg::Sp,
        Arg::Psw,
        Arg::Imm,
        Arg::IndX,
        Arg::IndXInc,
        Arg::IndY,
        Arg::Dp,
        Arg::DpPlusX,
        Arg::DpPlusY,
        Arg::Rel,
        Arg::Abs,
        Arg::AbsPlusX,
        Arg::AbsPlusY,
        Arg::IndDpPlusX,
        Arg::IndDpPlusY,
        Arg::IndAbsPlusX,
        Arg::Carry,
        Arg::Bit,
        Arg::NotBit,
    ];

    pub fn from_token(token: &str) -> Option<Arg> {
        let arg = match token {
            "A" => Arg::A,
            "X" => Arg::X,
            "Y" => Arg::Y,
            "YA" => Arg::Ya,
            "SP" => Arg::Sp,
            "PSW" => Arg::Psw,
            "#inm" => Arg::Imm,
            "(X)" => Arg::IndX,
            "(X)+" => Arg::IndXInc,
            "(Y)" => Arg::IndY,
            "dp" => Arg::Dp,
            "dp+X" => Arg::DpPlusX,
            "dp+Y" => Arg::DpPlusY,
            "rel" => Arg::Rel,
            "abs" => Arg::Abs,
            "abs+X" => Arg::AbsPlusX,
            "abs+Y" => Arg::AbsPlusY,
            "(dp+X)" => Arg::IndDpPlusX,
            "(dp)+Y" => Arg::IndDpPlusY,
            "(abs+X)" => Arg::IndAbsPlusX,
            "C" => Arg::Carry,
            "bit" => Arg::Bit,
            "/mem" => Arg::NotBit,
            _ => return None,
        };
        Some(arg)
    }

    pub fn token(self) -> &'static str {
        match self {
            Arg::A => "A",
            Arg::X => "X",
            Arg::Y => "Y",
            Arg::Ya => "YA",
            Arg::Sp => "SP",
            Arg::Psw => "PSW",
            Arg::Imm => "#inm",
            Arg::IndX => "(X)",
            Arg::IndXInc => "(X)+",
            Arg::IndY => "(Y)",
            Arg::Dp => "dp",
            Arg::DpPlusX => "dp+X",
            Arg::DpPlusY => "dp+Y",
            Arg::Rel => "rel",
            Arg::Abs => "abs",
            Arg::AbsPlusX => "abs+X",
            Arg::AbsPlusY => "abs+Y",
            Arg::IndDpPlusX => "(dp+X)",
            Arg::IndDpPlusY => "(dp)+Y",
            Arg::IndAbsPlusX => "(abs+X)",
            Arg::Carry => "C",
            Arg::Bit => "bit",
            Arg::NotBit => "/mem",
        }
    }

    /// Operand bytes this descriptor contributes to the encoded instruction.
    /// Registers and register-indirect forms are encoded entirely in the
    /// opcode byte; `bit` and `/mem` each take one byte alongside their
    /// companion operand.
    pub fn operand_width(self) -> u8 {
        match self {
            Arg::A
            | Arg::X
            | Arg::Y
            | Arg::Ya
            | Arg::Sp
            | Arg::Psw
            | Arg::IndX
            | Arg::IndXInc
            | Arg::IndY
            | Arg::Carry => 0,
            Arg::Imm
            | Arg::Dp
            | Arg::DpPlusX
            | Arg::DpPlusY
            | Arg::Rel
            | Arg::IndDpPlusX
            | Arg::IndDpPlusY
            | Arg::Bit
            | Arg::NotBit => 1,
            Arg::Abs | Arg::AbsPlusX | Arg::AbsPlusY | Arg::IndAbsPlusX => 2,
        }
    }
}
