//! # ALU Instructions
//!
//! Arithmetic, logical, compare, and bit-test operations:
//! ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT.
//!
//! ADC and SBC share one adder. SBC(v) is literally ADC(v XOR 0xFF): the
//! 6502 convention is that the programmer sets carry before a subtraction
//! chain, so no pre-complement of C happens here.

use crate::addressing::AddressingMode;
use crate::cpu::CPU;
use crate::memory::MemoryBus;
use crate::status::{FLAG_CARRY, FLAG_NEGATIVE, FLAG_OVERFLOW, FLAG_ZERO};

/// Adds `value` plus the carry flag into the accumulator.
///
/// The sum is formed in 16 bits so both carry-out and signed overflow are
/// visible. C is set iff the sum exceeds 0xFF. V is set iff the sign of both
/// inputs differs from the sign of the result:
/// `((A ^ r) & (v ^ r) & 0x80) != 0`.
fn add_to_register_a<M: MemoryBus>(cpu: &mut CPU<M>, value: u8) {
    let carry_in = cpu.flag_set(FLAG_CARRY) as u16;
    let sum = cpu.a as u16 + value as u16 + carry_in;

    cpu.assign_flag(FLAG_CARRY, sum > 0xFF);

    let result = sum as u8;
    cpu.assign_flag(FLAG_OVERFLOW, ((cpu.a ^ result) & (value ^ result) & 0x80) != 0);

    cpu.set_register_a(result);
}

/// Shared compare: C iff `register >= value` (unsigned), Z iff equal, N from
/// bit 7 of the wrapped 8-bit difference. The register is not modified.
fn compare<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, register: u8) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    cpu.assign_flag(FLAG_CARRY, register >= value);
    cpu.update_zero_and_negative_flags(register.wrapping_sub(value));
}

/// ADC - Add with Carry.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    add_to_register_a(cpu, value);
}

/// SBC - Subtract with Carry, implemented as ADC of the one's complement.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    add_to_register_a(cpu, value ^ 0xFF);
}

/// AND - bitwise AND into the accumulator. Updates Z and N.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_a(cpu.a & value);
}

/// ORA - bitwise OR into the accumulator. Updates Z and N.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_a(cpu.a | value);
}

/// EOR - bitwise exclusive OR into the accumulator. Updates Z and N.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);
    cpu.set_register_a(cpu.a ^ value);
}

/// CMP - compare the accumulator against the operand.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.a;
    compare(cpu, mode, register);
}

/// CPX - compare the X register against the operand.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.x;
    compare(cpu, mode, register);
}

/// CPY - compare the Y register against the operand.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let register = cpu.y;
    compare(cpu, mode, register);
}

/// BIT - test accumulator bits against memory.
///
/// Z reflects `(A AND value) == 0`; N and V are copied straight from bits 7
/// and 6 of the operand. The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) {
    let addr = cpu.operand_address(mode);
    let value = cpu.mem_read(addr);

    cpu.assign_flag(FLAG_ZERO, (cpu.a & value) == 0);
    cpu.assign_flag(FLAG_NEGATIVE, value & 0x80 != 0);
    cpu.assign_flag(FLAG_OVERFLOW, value & 0x40 != 0);
}
