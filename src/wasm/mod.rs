//! # WebAssembly Bindings
//!
//! JavaScript-callable surface over the CPU core, enabled with the `wasm`
//! feature. The core itself has no OS dependencies, so the bindings are a
//! thin ownership wrapper around `CPU<FlatMemory>`.

mod api;

pub use api::WasmCpu;
