//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR in both forms: the accumulator variants operate on A,
//! the memory variants read-modify-write the effective address. All four put
//! the ejected bit into carry and update Z and N from the result.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::FLAG_CARRY;

/// One left shift: C takes old bit 7, bit 0 becomes 0.
fn shift_left<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.assign_flag(FLAG_CARRY, value & 0x80 != 0);
    value << 1
}

/// One right shift: C takes old bit 0, bit 7 becomes 0.
fn shift_right<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    cpu.assign_flag(FLAG_CARRY, value & 0x01 != 0);
    value >> 1
}

/// One left rotate through carry: C takes old bit 7, bit 0 takes old C.
fn rotate_left<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_set(FLAG_CARRY) as u8;
    cpu.assign_flag(FLAG_CARRY, value & 0x80 != 0);
    (value << 1) | carry_in
}

/// One right rotate through carry: C takes old bit 0, bit 7 takes old C.
fn rotate_right<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) -> u8 {
    let carry_in = cpu.flag_set(FLAG_CARRY) as u8;
    cpu.assign_flag(FLAG_CARRY, value & 0x01 != 0);
    (value >> 1) | (carry_in << 7)
}

/// ASL A - arithmetic shift left of the accumulator.
pub(crate) fn execute_asl_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    let result = shift_left(cpu, value);
    cpu.set_register_a(result);
}

/// ASL - arithmetic shift left of a memory cell.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    let result = shift_left(cpu, value);
    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}

/// LSR A - logical shift right of the accumulator.
pub(crate) fn execute_lsr_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    let result = shift_right(cpu, value);
    cpu.set_register_a(result);
}

/// LSR - logical shift right of a memory cell.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    let result = shift_right(cpu, value);
    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}

/// ROL A - rotate the accumulator left through carry.
pub(crate) fn execute_rol_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    let result = rotate_left(cpu, value);
    cpu.set_register_a(result);
}

/// ROL - rotate a memory cell left through carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    let result = rotate_left(cpu, value);
    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}

/// ROR A - rotate the accumulator right through carry.
pub(crate) fn execute_ror_accumulator<M: MemoryBus>(cpu: &mut CPU<M>) {
    let value = cpu.a;
    let result = rotate_right(cpu, value);
    cpu.set_register_a(result);
}

/// ROR - rotate a memory cell right through carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    let result = rotate_right(cpu, value);
    cpu.mem_write(addr, result);
    cpu.update_zero_and_negative_flags(result);
}
