//! # Load and Store Instructions
//!
//! LDA/LDX/LDY read the byte at the effective address into a register and
//! update Z and N. STA/STX/STY write a register to the effective address and
//! leave every flag alone.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::memory::MemoryBus;

/// LDA - load the accumulator.
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_a(value);
}

/// LDX - load the X register.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_x(value);
}

/// LDY - load the Y register.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_y(value);
}

/// STA - store the accumulator.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.mem_write(addr, cpu.a);
}

/// STX - store the X register.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.mem_write(addr, cpu.x);
}

/// STY - store the Y register.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    cpu.mem_write(addr, cpu.y);
}
