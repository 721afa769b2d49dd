//! Opcode decoding.
//!
//! Only the 151 documented opcodes decode. Everything else returns `None`
//! and the core runs it as a one-byte, two-cycle NOP.

/// Addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Implied,
    Accumulator,
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    Indirect,
    IndirectX,
    IndirectY,
    Relative,
}

/// How an operation touches its effective address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Read,
    Write,
    Modify,
}

/// Documented 6502 operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
}

impl Op {
    #[must_use]
    pub const fn access(self) -> Access {
        match self {
            Op::Sta | Op::Stx | Op::Sty => Access::Write,
            Op::Asl | Op::Lsr | Op::Rol | Op::Ror | Op::Inc | Op::Dec => Access::Modify,
            _ => Access::Read,
        }
    }

    #[must_use]
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Op::Adc => "ADC",
            Op::And => "AND",
            Op::Asl => "ASL",
            Op::Bcc => "BCC",
            Op::Bcs => "BCS",
            Op::Beq => "BEQ",
            Op::Bit => "BIT",
            Op::Bmi => "BMI",
            Op::Bne => "BNE",
            Op::Bpl => "BPL",
            Op::Brk => "BRK",
            Op::Bvc => "BVC",
            Op::Bvs => "BVS",
            Op::Clc => "CLC",
            Op::Cld => "CLD",
            Op::Cli => "CLI",
            Op::Clv => "CLV",
            Op::Cmp => "CMP",
            Op::Cpx => "CPX",
            Op::Cpy => "CPY",
            Op::Dec => "DEC",
            Op::Dex => "DEX",
            Op::Dey => "DEY",
            Op::Eor => "EOR",
            Op::Inc => "INC",
            Op::Inx => "INX",
            Op::Iny => "INY",
            Op::Jmp => "JMP",
            Op::Jsr => "JSR",
            Op::Lda => "LDA",
            Op::Ldx => "LDX",
            Op::Ldy => "LDY",
            Op::Lsr => "LSR",
            Op::Nop => "NOP",
            Op::Ora => "ORA",
            Op::Pha => "PHA",
            Op::Php => "PHP",
            Op::Pla => "PLA",
            Op::Plp => "PLP",
            Op::Rol => "ROL",
            Op::Ror => "ROR",
            Op::Rti => "RTI",
            Op::Rts => "RTS",
            Op::Sbc => "SBC",
            Op::Sec => "SEC",
            Op::Sed => "SED",
            Op::Sei => "SEI",
            Op::Sta => "STA",
            Op::Stx => "STX",
            Op::Sty => "STY",
            Op::Tax => "TAX",
            Op::Tay => "TAY",
            Op::Tsx => "TSX",
            Op::Txa => "TXA",
            Op::Txs => "TXS",
            Op::Tya => "TYA",
        }
    }
}

/// A decoded opcode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub op: Op,
    pub mode: Mode,
}

impl Instruction {
    /// What undefined opcodes execute as.
    pub const UNDEFINED: Self = Self::new(Op::Nop, Mode::Implied);

    const fn new(op: Op, mode: Mode) -> Self {
        Self { op, mode }
    }
}

/// Decode a documented opcode.
#[must_use]
#[allow(clippy::enum_glob_use)]
pub const fn decode(opcode: u8) -> Option<Instruction> {
    use Mode::{
        Absolute as Abs, AbsoluteX as Abx, AbsoluteY as Aby, Accumulator as Acc, Immediate as Imm,
        Implied as Imp, Indirect as Ind, IndirectX as Izx, IndirectY as Izy, Relative as Rel,
        ZeroPage as Zp, ZeroPageX as Zpx, ZeroPageY as Zpy,
    };
    use Op::*;

    let (op, mode) = match opcode {
        0x00 => (Brk, Imp),
        0x01 => (Ora, Izx),
        0x05 => (Ora, Zp),
        0x06 => (Asl, Zp),
        0x08 => (Php, Imp),
        0x09 => (Ora, Imm),
        0x0A => (Asl, Acc),
        0x0D => (Ora, Abs),
        0x0E => (Asl, Abs),

        0x10 => (Bpl, Rel),
        0x11 => (Ora, Izy),
        0x15 => (Ora, Zpx),
        0x16 => (Asl, Zpx),
        0x18 => (Clc, Imp),
        0x19 => (Ora, Aby),
        0x1D => (Ora, Abx),
        0x1E => (Asl, Abx),

        0x20 => (Jsr, Abs),
        0x21 => (And, Izx),
        0x24 => (Bit, Zp),
        0x25 => (And, Zp),
        0x26 => (Rol, Zp),
        0x28 => (Plp, Imp),
        0x29 => (And, Imm),
        0x2A => (Rol, Acc),
        0x2C => (Bit, Abs),
        0x2D => (And, Abs),
        0x2E => (Rol, Abs),

        0x30 => (Bmi, Rel),
        0x31 => (And, Izy),
        0x35 => (And, Zpx),
        0x36 => (Rol, Zpx),
        0x38 => (Sec, Imp),
        0x39 => (And, Aby),
        0x3D => (And, Abx),
        0x3E => (Rol, Abx),

        0x40 => (Rti, Imp),
        0x41 => (Eor, Izx),
        0x45 => (Eor, Zp),
        0x46 => (Lsr, Zp),
        0x48 => (Pha, Imp),
        0x49 => (Eor, Imm),
        0x4A => (Lsr, Acc),
        0x4C => (Jmp, Abs),
        0x4D => (Eor, Abs),
        0x4E => (Lsr, Abs),

        0x50 => (Bvc, Rel),
        0x51 => (Eor, Izy),
        0x55 => (Eor, Zpx),
        0x56 => (Lsr, Zpx),
        0x58 => (Cli, Imp),
        0x59 => (Eor, Aby),
        0x5D => (Eor, Abx),
        0x5E => (Lsr, Abx),

        0x60 => (Rts, Imp),
        0x61 => (Adc, Izx),
        0x65 => (Adc, Zp),
        0x66 => (Ror, Zp),
        0x68 => (Pla, Imp),
        0x69 => (Adc, Imm),
        0x6A => (Ror, Acc),
        0x6C => (Jmp, Ind),
        0x6D => (Adc, Abs),
        0x6E => (Ror, Abs),

        0x70 => (Bvs, Rel),
        0x71 => (Adc, Izy),
        0x75 => (Adc, Zpx),
        0x76 => (Ror, Zpx),
        0x78 => (Sei, Imp),
        0x79 => (Adc, Aby),
        0x7D => (Adc, Abx),
        0x7E => (Ror, Abx),

        0x81 => (Sta, Izx),
        0x84 => (Sty, Zp),
        0x85 => (Sta, Zp),
        0x86 => (Stx, Zp),
        0x88 => (Dey, Imp),
        0x8A => (Txa, Imp),
        0x8C => (Sty, Abs),
        0x8D => (Sta, Abs),
        0x8E => (Stx, Abs),

        0x90 => (Bcc, Rel),
        0x91 => (Sta, Izy),
        0x94 => (Sty, Zpx),
        0x95 => (Sta, Zpx),
        0x96 => (Stx, Zpy),
        0x98 => (Tya, Imp),
        0x99 => (Sta, Aby),
        0x9A => (Txs, Imp),
        0x9D => (Sta, Abx),

        0xA0 => (Ldy, Imm),
        0xA1 => (Lda, Izx),
        0xA2 => (Ldx, Imm),
        0xA4 => (Ldy, Zp),
        0xA5 => (Lda, Zp),
        0xA6 => (Ldx, Zp),
        0xA8 => (Tay, Imp),
        0xA9 => (Lda, Imm),
        0xAA => (Tax, Imp),
        0xAC => (Ldy, Abs),
        0xAD => (Lda, Abs),
        0xAE => (Ldx, Abs),

        0xB0 => (Bcs, Rel),
        0xB1 => (Lda, Izy),
        0xB4 => (Ldy, Zpx),
        0xB5 => (Lda, Zpx),
        0xB6 => (Ldx, Zpy),
        0xB8 => (Clv, Imp),
        0xB9 => (Lda, Aby),
        0xBA => (Tsx, Imp),
        0xBC => (Ldy, Abx),
        0xBD => (Lda, Abx),
        0xBE => (Ldx, Aby),

        0xC0 => (Cpy, Imm),
        0xC1 => (Cmp, Izx),
        0xC4 => (Cpy, Zp),
        0xC5 => (Cmp, Zp),
        0xC6 => (Dec, Zp),
        0xC8 => (Iny, Imp),
        0xC9 => (Cmp, Imm),
        0xCA => (Dex, Imp),
        0xCC => (Cpy, Abs),
        0xCD => (Cmp, Abs),
        0xCE => (Dec, Abs),

        0xD0 => (Bne, Rel),
        0xD1 => (Cmp, Izy),
        0xD5 => (Cmp, Zpx),
        0xD6 => (Dec, Zpx),
        0xD8 => (Cld, Imp),
        0xD9 => (Cmp, Aby),
        0xDD => (Cmp, Abx),
        0xDE => (Dec, Abx),

        0xE0 => (Cpx, Imm),
        0xE1 => (Sbc, Izx),
        0xE4 => (Cpx, Zp),
        0xE5 => (Sbc, Zp),
        0xE6 => (Inc, Zp),
        0xE8 => (Inx, Imp),
        0xE9 => (Sbc, Imm),
        0xEA => (Nop, Imp),
        0xEC => (Cpx, Abs),
        0xED => (Sbc, Abs),
        0xEE => (Inc, Abs),

        0xF0 => (Beq, Rel),
        0xF1 => (Sbc, Izy),
        0xF5 => (Sbc, Zpx),
        0xF6 => (Inc, Zpx),
        0xF8 => (Sed, Imp),
        0xF9 => (Sbc, Aby),
        0xFD => (Sbc, Abx),
        0xFE => (Inc, Abx),

        _ => return None,
    };

    Some(Instruction::new(op, mode))
}
