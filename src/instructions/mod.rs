//! # 6502 Instruction Implementations
//!
//! Instruction semantics grouped by behavioral family. Each instruction is a
//! free function over a mutable CPU reference; handlers that take a memory
//! operand receive the addressing mode from the opcode table and resolve the
//! effective address themselves.
//!
//! Handlers never advance PC past their operand bytes — the driver in
//! `cpu::step` does that for every instruction that did not write PC itself.
//!
//! ## Families
//!
//! - **alu**: ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT
//! - **branches**: BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS
//! - **control**: BRK, JMP, JSR, RTS, RTI, NOP
//! - **flags**: CLC, SEC, CLD, SED, CLI, SEI, CLV
//! - **inc_dec**: INC, DEC, INX, INY, DEX, DEY
//! - **load_store**: LDA, LDX, LDY, STA, STX, STY
//! - **shifts**: ASL, LSR, ROL, ROR (accumulator and memory forms)
//! - **stack**: PHA, PHP, PLA, PLP
//! - **transfer**: TAX, TAY, TSX, TXA, TXS, TYA

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;
