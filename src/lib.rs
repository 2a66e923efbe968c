//! # MOS 6502 CPU Emulator Core
//!
//! An interpreter for the documented NMOS 6502 instruction set, the 8-bit CPU
//! used by the NES and many early microcomputers.
//!
//! The crate executes raw machine code and maintains the full architectural
//! state: accumulator, X/Y index registers, stack pointer, packed status
//! register, program counter, and 64 KiB of byte-addressable memory. The
//! well-known hardware quirks that programs rely on are reproduced, most
//! notably the `JMP (indirect)` page-crossing bug.
//!
//! ## Quick Start
//!
//! ```rust
//! use mos6502::{FlatMemory, CPU};
//!
//! let mut cpu = CPU::new(FlatMemory::new());
//!
//! // LDA #$C0; TAX; INX; BRK
//! cpu.load_and_run(&[0xA9, 0xC0, 0xAA, 0xE8, 0x00]).unwrap();
//!
//! assert_eq!(cpu.a(), 0xC0);
//! assert_eq!(cpu.x(), 0xC1);
//! ```
//!
//! ## Architecture
//!
//! - **Table-driven decode**: every recognized opcode maps to an immutable
//!   descriptor (mnemonic, addressing mode, length, base cycle count) in
//!   [`OPCODE_TABLE`].
//! - **Modularity**: the CPU is generic over the [`MemoryBus`] trait; the
//!   provided [`FlatMemory`] is a flat 64 KiB array, and hosts can substitute
//!   mapped memory without touching the interpreter.
//! - **Determinism**: no OS dependencies and no allocation inside the
//!   execution loop, so the core runs unchanged under WebAssembly.
//!
//! ## Modules
//!
//! - `cpu` - CPU state, lifecycle, and the fetch-decode-execute driver
//! - `memory` - `MemoryBus` trait and the flat 64 KiB implementation
//! - `opcodes` - the 256-entry opcode descriptor table
//! - `addressing` - addressing mode enumeration
//! - `status` - status register (P) bit masks
//!
//! ## What is not emulated
//!
//! Cycle-accurate timing (base cycle counts are tracked but never stalled
//! on), undocumented opcodes, decimal-mode arithmetic (the D flag exists but
//! never alters ADC/SBC, matching the NES variant), and hardware interrupts
//! other than the reset vector.

pub mod addressing;
pub mod cpu;
pub mod memory;
pub mod opcodes;
pub mod status;

// Instruction semantics, grouped by behavioral family (not public API).
mod instructions;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::AddressingMode;
pub use cpu::{CPU, PROGRAM_START, RESET_VECTOR};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{Mnemonic, OpCode, OPCODE_TABLE};

/// Errors surfaced by the CPU.
///
/// The interpreter has exactly two failure conditions: a program byte that
/// decodes to no documented 6502 instruction, and a program image too large
/// for the load region. Everything else (arithmetic, addressing, stack
/// movement) wraps and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode byte is not a documented 6502 instruction.
    ///
    /// Carries the offending byte and the address it was fetched from.
    IllegalOpcode { opcode: u8, pc: u16 },

    /// The program image does not fit in the 32 KiB region at 0x8000.
    ProgramTooLarge { size: usize },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::IllegalOpcode { opcode, pc } => {
                write!(
                    f,
                    "Opcode 0x{:02X} at 0x{:04X} is not a documented 6502 instruction",
                    opcode, pc
                )
            }
            ExecutionError::ProgramTooLarge { size } => {
                write!(
                    f,
                    "Program of {} bytes exceeds the 32768-byte load region",
                    size
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
