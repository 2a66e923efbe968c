//! # Opcode Descriptor Table
//!
//! The 256-entry table mapping each opcode byte to its instruction
//! descriptor. It is the single source of truth for decoding: mnemonic,
//! addressing mode, instruction length, and base cycle count all come from
//! here.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! byte values are undocumented instructions and decode to `None`; fetching
//! one surfaces [`ExecutionError::IllegalOpcode`](crate::ExecutionError).

use crate::addressing::AddressingMode;

/// Canonical instruction mnemonics.
///
/// One variant per documented instruction, with distinct variants for the
/// accumulator forms of the shift and rotate instructions (they have their
/// own table entries and their own semantics, operating on A instead of
/// memory).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    AslAccumulator,
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
    LsrAccumulator,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    RolAccumulator,
    Ror,
    RorAccumulator,
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

/// Descriptor for a single recognized opcode.
///
/// # Fields
///
/// - `mnemonic`: which instruction this byte encodes
/// - `addressing_mode`: how the operand bytes are interpreted
/// - `size_bytes`: total instruction length including the opcode (1-3)
/// - `base_cycles`: documented minimum cycle cost; tracked for observability
///   only, the core never stalls on it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpCode {
    /// Instruction mnemonic.
    pub mnemonic: Mnemonic,

    /// Addressing mode for this encoding.
    pub addressing_mode: AddressingMode,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Base cycle cost, excluding page-crossing penalties.
    pub base_cycles: u8,
}

const fn op(
    mnemonic: Mnemonic,
    addressing_mode: AddressingMode,
    size_bytes: u8,
    base_cycles: u8,
) -> Option<OpCode> {
    Some(OpCode {
        mnemonic,
        addressing_mode,
        size_bytes,
        base_cycles,
    })
}

/// The 256-entry opcode table, indexed by opcode byte.
///
/// Documented opcodes carry their descriptor; undocumented byte values are
/// `None`. The table is immutable for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = OPCODE_TABLE[0xA9].unwrap();
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// assert!(OPCODE_TABLE[0x02].is_none()); // undocumented
/// ```
pub const OPCODE_TABLE: [Option<OpCode>; 256] = {
    use AddressingMode::*;
    use Mnemonic::*;

    let mut table: [Option<OpCode>; 256] = [None; 256];

    // ADC
    table[0x69] = op(Adc, Immediate, 2, 2);
    table[0x65] = op(Adc, ZeroPage, 2, 3);
    table[0x75] = op(Adc, ZeroPageX, 2, 4);
    table[0x6D] = op(Adc, Absolute, 3, 4);
    table[0x7D] = op(Adc, AbsoluteX, 3, 4);
    table[0x79] = op(Adc, AbsoluteY, 3, 4);
    table[0x61] = op(Adc, IndirectX, 2, 6);
    table[0x71] = op(Adc, IndirectY, 2, 5);

    // AND
    table[0x29] = op(And, Immediate, 2, 2);
    table[0x25] = op(And, ZeroPage, 2, 3);
    table[0x35] = op(And, ZeroPageX, 2, 4);
    table[0x2D] = op(And, Absolute, 3, 4);
    table[0x3D] = op(And, AbsoluteX, 3, 4);
    table[0x39] = op(And, AbsoluteY, 3, 4);
    table[0x21] = op(And, IndirectX, 2, 6);
    table[0x31] = op(And, IndirectY, 2, 5);

    // ASL
    table[0x0A] = op(AslAccumulator, Accumulator, 1, 2);
    table[0x06] = op(Asl, ZeroPage, 2, 5);
    table[0x16] = op(Asl, ZeroPageX, 2, 6);
    table[0x0E] = op(Asl, Absolute, 3, 6);
    table[0x1E] = op(Asl, AbsoluteX, 3, 7);

    // Branches
    table[0x90] = op(Bcc, Relative, 2, 2);
    table[0xB0] = op(Bcs, Relative, 2, 2);
    table[0xF0] = op(Beq, Relative, 2, 2);
    table[0x30] = op(Bmi, Relative, 2, 2);
    table[0xD0] = op(Bne, Relative, 2, 2);
    table[0x10] = op(Bpl, Relative, 2, 2);
    table[0x50] = op(Bvc, Relative, 2, 2);
    table[0x70] = op(Bvs, Relative, 2, 2);

    // BIT
    table[0x24] = op(Bit, ZeroPage, 2, 3);
    table[0x2C] = op(Bit, Absolute, 3, 4);

    // BRK
    table[0x00] = op(Brk, Implied, 1, 7);

    // Flag manipulation
    table[0x18] = op(Clc, Implied, 1, 2);
    table[0xD8] = op(Cld, Implied, 1, 2);
    table[0x58] = op(Cli, Implied, 1, 2);
    table[0xB8] = op(Clv, Implied, 1, 2);
    table[0x38] = op(Sec, Implied, 1, 2);
    table[0xF8] = op(Sed, Implied, 1, 2);
    table[0x78] = op(Sei, Implied, 1, 2);

    // CMP
    table[0xC9] = op(Cmp, Immediate, 2, 2);
    table[0xC5] = op(Cmp, ZeroPage, 2, 3);
    table[0xD5] = op(Cmp, ZeroPageX, 2, 4);
    table[0xCD] = op(Cmp, Absolute, 3, 4);
    table[0xDD] = op(Cmp, AbsoluteX, 3, 4);
    table[0xD9] = op(Cmp, AbsoluteY, 3, 4);
    table[0xC1] = op(Cmp, IndirectX, 2, 6);
    table[0xD1] = op(Cmp, IndirectY, 2, 5);

    // CPX
    table[0xE0] = op(Cpx, Immediate, 2, 2);
    table[0xE4] = op(Cpx, ZeroPage, 2, 3);
    table[0xEC] = op(Cpx, Absolute, 3, 4);

    // CPY
    table[0xC0] = op(Cpy, Immediate, 2, 2);
    table[0xC4] = op(Cpy, ZeroPage, 2, 3);
    table[0xCC] = op(Cpy, Absolute, 3, 4);

    // DEC
    table[0xC6] = op(Dec, ZeroPage, 2, 5);
    table[0xD6] = op(Dec, ZeroPageX, 2, 6);
    table[0xCE] = op(Dec, Absolute, 3, 6);
    table[0xDE] = op(Dec, AbsoluteX, 3, 7);

    // DEX / DEY
    table[0xCA] = op(Dex, Implied, 1, 2);
    table[0x88] = op(Dey, Implied, 1, 2);

    // EOR
    table[0x49] = op(Eor, Immediate, 2, 2);
    table[0x45] = op(Eor, ZeroPage, 2, 3);
    table[0x55] = op(Eor, ZeroPageX, 2, 4);
    table[0x4D] = op(Eor, Absolute, 3, 4);
    table[0x5D] = op(Eor, AbsoluteX, 3, 4);
    table[0x59] = op(Eor, AbsoluteY, 3, 4);
    table[0x41] = op(Eor, IndirectX, 2, 6);
    table[0x51] = op(Eor, IndirectY, 2, 5);

    // INC
    table[0xE6] = op(Inc, ZeroPage, 2, 5);
    table[0xF6] = op(Inc, ZeroPageX, 2, 6);
    table[0xEE] = op(Inc, Absolute, 3, 6);
    table[0xFE] = op(Inc, AbsoluteX, 3, 7);

    // INX / INY
    table[0xE8] = op(Inx, Implied, 1, 2);
    table[0xC8] = op(Iny, Implied, 1, 2);

    // JMP
    table[0x4C] = op(Jmp, Absolute, 3, 3);
    table[0x6C] = op(Jmp, Indirect, 3, 5);

    // JSR / RTS / RTI
    table[0x20] = op(Jsr, Absolute, 3, 6);
    table[0x60] = op(Rts, Implied, 1, 6);
    table[0x40] = op(Rti, Implied, 1, 6);

    // LDA
    table[0xA9] = op(Lda, Immediate, 2, 2);
    table[0xA5] = op(Lda, ZeroPage, 2, 3);
    table[0xB5] = op(Lda, ZeroPageX, 2, 4);
    table[0xAD] = op(Lda, Absolute, 3, 4);
    table[0xBD] = op(Lda, AbsoluteX, 3, 4);
    table[0xB9] = op(Lda, AbsoluteY, 3, 4);
    table[0xA1] = op(Lda, IndirectX, 2, 6);
    table[0xB1] = op(Lda, IndirectY, 2, 5);

    // LDX
    table[0xA2] = op(Ldx, Immediate, 2, 2);
    table[0xA6] = op(Ldx, ZeroPage, 2, 3);
    table[0xB6] = op(Ldx, ZeroPageY, 2, 4);
    table[0xAE] = op(Ldx, Absolute, 3, 4);
    table[0xBE] = op(Ldx, AbsoluteY, 3, 4);

    // LDY
    table[0xA0] = op(Ldy, Immediate, 2, 2);
    table[0xA4] = op(Ldy, ZeroPage, 2, 3);
    table[0xB4] = op(Ldy, ZeroPageX, 2, 4);
    table[0xAC] = op(Ldy, Absolute, 3, 4);
    table[0xBC] = op(Ldy, AbsoluteX, 3, 4);

    // LSR
    table[0x4A] = op(LsrAccumulator, Accumulator, 1, 2);
    table[0x46] = op(Lsr, ZeroPage, 2, 5);
    table[0x56] = op(Lsr, ZeroPageX, 2, 6);
    table[0x4E] = op(Lsr, Absolute, 3, 6);
    table[0x5E] = op(Lsr, AbsoluteX, 3, 7);

    // NOP
    table[0xEA] = op(Nop, Implied, 1, 2);

    // ORA
    table[0x09] = op(Ora, Immediate, 2, 2);
    table[0x05] = op(Ora, ZeroPage, 2, 3);
    table[0x15] = op(Ora, ZeroPageX, 2, 4);
    table[0x0D] = op(Ora, Absolute, 3, 4);
    table[0x1D] = op(Ora, AbsoluteX, 3, 4);
    table[0x19] = op(Ora, AbsoluteY, 3, 4);
    table[0x01] = op(Ora, IndirectX, 2, 6);
    table[0x11] = op(Ora, IndirectY, 2, 5);

    // Stack
    table[0x48] = op(Pha, Implied, 1, 3);
    table[0x08] = op(Php, Implied, 1, 3);
    table[0x68] = op(Pla, Implied, 1, 4);
    table[0x28] = op(Plp, Implied, 1, 4);

    // ROL
    table[0x2A] = op(RolAccumulator, Accumulator, 1, 2);
    table[0x26] = op(Rol, ZeroPage, 2, 5);
    table[0x36] = op(Rol, ZeroPageX, 2, 6);
    table[0x2E] = op(Rol, Absolute, 3, 6);
    table[0x3E] = op(Rol, AbsoluteX, 3, 7);

    // ROR
    table[0x6A] = op(RorAccumulator, Accumulator, 1, 2);
    table[0x66] = op(Ror, ZeroPage, 2, 5);
    table[0x76] = op(Ror, ZeroPageX, 2, 6);
    table[0x6E] = op(Ror, Absolute, 3, 6);
    table[0x7E] = op(Ror, AbsoluteX, 3, 7);

    // SBC
    table[0xE9] = op(Sbc, Immediate, 2, 2);
    table[0xE5] = op(Sbc, ZeroPage, 2, 3);
    table[0xF5] = op(Sbc, ZeroPageX, 2, 4);
    table[0xED] = op(Sbc, Absolute, 3, 4);
    table[0xFD] = op(Sbc, AbsoluteX, 3, 4);
    table[0xF9] = op(Sbc, AbsoluteY, 3, 4);
    table[0xE1] = op(Sbc, IndirectX, 2, 6);
    table[0xF1] = op(Sbc, IndirectY, 2, 5);

    // STA
    table[0x85] = op(Sta, ZeroPage, 2, 3);
    table[0x95] = op(Sta, ZeroPageX, 2, 4);
    table[0x8D] = op(Sta, Absolute, 3, 4);
    table[0x9D] = op(Sta, AbsoluteX, 3, 5);
    table[0x99] = op(Sta, AbsoluteY, 3, 5);
    table[0x81] = op(Sta, IndirectX, 2, 6);
    table[0x91] = op(Sta, IndirectY, 2, 6);

    // STX
    table[0x86] = op(Stx, ZeroPage, 2, 3);
    table[0x96] = op(Stx, ZeroPageY, 2, 4);
    table[0x8E] = op(Stx, Absolute, 3, 4);

    // STY
    table[0x84] = op(Sty, ZeroPage, 2, 3);
    table[0x94] = op(Sty, ZeroPageX, 2, 4);
    table[0x8C] = op(Sty, Absolute, 3, 4);

    // Transfers
    table[0xAA] = op(Tax, Implied, 1, 2);
    table[0xA8] = op(Tay, Implied, 1, 2);
    table[0xBA] = op(Tsx, Implied, 1, 2);
    table[0x8A] = op(Txa, Implied, 1, 2);
    table[0x9A] = op(Txs, Implied, 1, 2);
    table[0x98] = op(Tya, Implied, 1, 2);

    table
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_opcode_count() {
        let documented = OPCODE_TABLE.iter().filter(|e| e.is_some()).count();
        assert_eq!(documented, 151);
    }

    #[test]
    fn test_accumulator_forms_are_distinct_mnemonics() {
        assert_eq!(OPCODE_TABLE[0x0A].unwrap().mnemonic, Mnemonic::AslAccumulator);
        assert_eq!(OPCODE_TABLE[0x06].unwrap().mnemonic, Mnemonic::Asl);
        assert_eq!(OPCODE_TABLE[0x4A].unwrap().mnemonic, Mnemonic::LsrAccumulator);
        assert_eq!(OPCODE_TABLE[0x2A].unwrap().mnemonic, Mnemonic::RolAccumulator);
        assert_eq!(OPCODE_TABLE[0x6A].unwrap().mnemonic, Mnemonic::RorAccumulator);
    }
}
