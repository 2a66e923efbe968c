//! Fuzz target for single-instruction execution.
//!
//! Builds an arbitrary machine state (registers, flags, zero page, stack
//! page, instruction bytes) and executes one instruction. Nothing the fuzzer
//! produces may panic the interpreter: undocumented opcodes must surface as
//! `IllegalOpcode` and all arithmetic must wrap.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{ExecutionError, FlatMemory, MemoryBus, CPU};

/// Arbitrary CPU register state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    status: u8,
}

/// Arbitrary memory contents around the regions one instruction can touch.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (opcode + operands)
    instruction_bytes: [u8; 3],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Region at 0x4000 for absolute addressing
    main_memory: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    memory.write_u16(0xFFFC, 0x8000);

    for (i, &byte) in input.memory.instruction_bytes.iter().enumerate() {
        memory.write(0x8000 + i as u16, byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }
    for (i, &byte) in input.memory.main_memory.iter().enumerate() {
        memory.write(0x4000 + i as u16, byte);
    }

    let mut cpu = CPU::new(memory);
    cpu.reset();

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    match cpu.step() {
        Ok(()) => {}
        Err(ExecutionError::IllegalOpcode { opcode, pc }) => {
            // The decode error must report exactly what was fetched.
            assert_eq!(pc, 0x8000);
            assert_eq!(opcode, input.memory.instruction_bytes[0]);
        }
        Err(other) => panic!("step() produced a non-decode error: {other}"),
    }
});
