//! # Status Flag Instructions
//!
//! Direct flag manipulation: CLC, SEC, CLD, SED, CLI, SEI, CLV.
//!
//! All are implied-mode, one byte, and touch exactly one flag. There is no
//! SEV: the 6502 has no instruction that sets overflow directly.

use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::{FLAG_CARRY, FLAG_DECIMAL, FLAG_INTERRUPT_DISABLE, FLAG_OVERFLOW};

/// CLC - clear carry.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.clear_flag(FLAG_CARRY);
}

/// SEC - set carry.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_flag(FLAG_CARRY);
}

/// CLD - clear decimal mode. The flag is bookkeeping only; arithmetic
/// ignores it in this core.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.clear_flag(FLAG_DECIMAL);
}

/// SED - set decimal mode.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_flag(FLAG_DECIMAL);
}

/// CLI - clear interrupt disable.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.clear_flag(FLAG_INTERRUPT_DISABLE);
}

/// SEI - set interrupt disable.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_flag(FLAG_INTERRUPT_DISABLE);
}

/// CLV - clear overflow.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.clear_flag(FLAG_OVERFLOW);
}
