//! # Register Transfer Instructions
//!
//! TAX, TAY, TSX, TXA, TYA copy between registers and update Z and N on the
//! destination. TXS is the exception: it writes the stack pointer and leaves
//! the flags untouched.

use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// TAX - copy A into X.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_x(cpu.a);
}

/// TAY - copy A into Y.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_y(cpu.a);
}

/// TSX - copy SP into X.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_x(cpu.sp);
}

/// TXA - copy X into A.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_a(cpu.x);
}

/// TXS - copy X into SP. Flags are not affected.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.sp = cpu.x;
}

/// TYA - copy Y into A.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_a(cpu.y);
}
