//! WASM API for the 6502 core.
//!
//! Exposes CPU construction, program loading, execution, and state
//! inspection to JavaScript hosts. Errors cross the boundary as strings.

use crate::{ExecutionError, FlatMemory, CPU};
use wasm_bindgen::prelude::*;

fn to_js(err: ExecutionError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// A 6502 CPU with flat 64 KiB memory, owned by the JavaScript host.
#[wasm_bindgen]
pub struct WasmCpu {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl WasmCpu {
    /// Creates a CPU over zeroed flat memory.
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmCpu {
        WasmCpu {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Copies a program to 0x8000 and points the reset vector at it.
    pub fn load(&mut self, program: &[u8]) -> Result<(), JsValue> {
        self.cpu.load(program).map_err(to_js)
    }

    /// Restores the power-on register state and loads PC from the reset
    /// vector.
    pub fn reset(&mut self) {
        self.cpu.reset();
    }

    /// Runs until BRK. Rejects with a message on an undocumented opcode.
    pub fn run(&mut self) -> Result<(), JsValue> {
        self.cpu.run().map_err(to_js)
    }

    /// Loads, resets, and runs in one call.
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<(), JsValue> {
        self.cpu.load_and_run(program).map_err(to_js)
    }

    /// Executes a single instruction.
    pub fn step(&mut self) -> Result<(), JsValue> {
        self.cpu.step().map_err(to_js)
    }

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u64 {
        self.cpu.cycles()
    }

    /// Reads the byte at `addr`.
    pub fn mem_read(&self, addr: u16) -> u8 {
        self.cpu.mem_read(addr)
    }

    /// Writes a byte to `addr`.
    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.cpu.mem_write(addr, value);
    }
}

impl Default for WasmCpu {
    fn default() -> Self {
        Self::new()
    }
}
