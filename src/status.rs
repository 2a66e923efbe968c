//! # Status Register Bit Masks
//!
//! The 6502 packs its processor status into a single byte, P. Each constant
//! below masks one bit; combine them with `|` and test them through
//! [`CPU::flag_set`](crate::CPU::flag_set).
//!
//! Bit layout (bit 0 = LSB): `NV-BDIZC`.

/// Carry flag (bit 0). Set by unsigned overflow out of bit 7.
pub const FLAG_CARRY: u8 = 1 << 0;

/// Zero flag (bit 1). Set when the last relevant result was 0x00.
pub const FLAG_ZERO: u8 = 1 << 1;

/// Interrupt-disable flag (bit 2). Set on reset.
pub const FLAG_INTERRUPT_DISABLE: u8 = 1 << 2;

/// Decimal-mode flag (bit 3). Settable and clearable, but never consulted by
/// ADC/SBC in this core (the NES 6502 has no BCD mode).
pub const FLAG_DECIMAL: u8 = 1 << 3;

/// Break flag (bit 4). Set by BRK; forced set in the byte PHP pushes and
/// forced clear by PLP and RTI.
pub const FLAG_BREAK: u8 = 1 << 4;

/// Reserved bit 5. Reads as 1 on real hardware; kept set here.
pub const FLAG_UNUSED: u8 = 1 << 5;

/// Overflow flag (bit 6). Set by signed overflow in ADC/SBC and by bit 6 of
/// the operand in BIT.
pub const FLAG_OVERFLOW: u8 = 1 << 6;

/// Negative flag (bit 7). Mirrors bit 7 of the last relevant result.
pub const FLAG_NEGATIVE: u8 = 1 << 7;
