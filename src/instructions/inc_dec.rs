//! # Increment and Decrement Instructions
//!
//! INC/DEC on memory, INX/INY/DEX/DEY on the index registers. All are ±1
//! modulo 256 and update Z and N from the result.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// INC - increment a memory cell.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.mem_read(addr).wrapping_add(1);

    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}

/// DEC - decrement a memory cell.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let result = cpu.mem_read(addr).wrapping_sub(1);

    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}

/// INX - increment the X register.
pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_x(cpu.x.wrapping_add(1));
}

/// INY - increment the Y register.
pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_y(cpu.y.wrapping_add(1));
}

/// DEX - decrement the X register.
pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_x(cpu.x.wrapping_sub(1));
}

/// DEY - decrement the Y register.
pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) {
    cpu.set_register_y(cpu.y.wrapping_sub(1));
}
