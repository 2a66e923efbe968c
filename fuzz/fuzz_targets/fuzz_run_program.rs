//! Fuzz target for whole-program execution.
//!
//! Loads an arbitrary byte stream as a program and steps it with a bounded
//! instruction budget (programs without a reachable BRK run forever by
//! design, so the fuzz harness cannot use `run`).

#![no_main]

use libfuzzer_sys::fuzz_target;
use mos6502::status::FLAG_BREAK;
use mos6502::{FlatMemory, CPU};

const STEP_BUDGET: u32 = 4096;

fuzz_target!(|program: &[u8]| {
    let mut cpu = CPU::new(FlatMemory::new());

    if cpu.load(program).is_err() {
        // Oversized images are rejected up front; nothing to execute.
        return;
    }
    cpu.reset();

    for _ in 0..STEP_BUDGET {
        if cpu.step().is_err() || cpu.flag_set(FLAG_BREAK) {
            break;
        }
    }
});
