//! # Addressing Modes
//!
//! This module defines the addressing modes of the documented 6502
//! instruction set. Each mode determines how the CPU interprets the operand
//! bytes that follow an opcode and how it computes the effective memory
//! address, if any.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how the operand bytes after an opcode are
/// turned into an effective address (or into no address at all, for the
/// implied and accumulator forms).
///
/// # Operand Sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative,
///   IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A, ROR A
    Accumulator,

    /// 8-bit constant embedded in the instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address into the zero page (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X; wraps within the zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y; wraps within the zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset used by the branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X.
    ///
    /// Example: LDA $1234,X
    AbsoluteX,

    /// 16-bit address indexed by Y.
    ///
    /// Example: LDA $1234,Y
    AbsoluteY,

    /// Jump through a 16-bit pointer. Only used by JMP.
    ///
    /// Reproduces the NMOS page-crossing bug: a pointer ending in 0xFF
    /// fetches its high byte from the start of the same page.
    Indirect,

    /// Indexed indirect: (zero page + X), then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: zero page dereference, then + Y.
    ///
    /// Example: LDA ($40),Y
    IndirectY,
}
