//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state
//! and the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! - **Registers**: accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of the next instruction
//! - **Stack pointer** (SP): 8-bit offset into the stack page (0x0100-0x01FF)
//! - **Status register** (P): packed flag byte, see [`crate::status`]
//! - **Cycle counter**: monotonically increasing count of base cycles, for
//!   observability only
//!
//! ## Execution Model
//!
//! - [`CPU::load`] copies a program image to 0x8000 and points the reset
//!   vector at it
//! - [`CPU::reset`] restores the power-on register state and loads PC from
//!   the reset vector
//! - [`CPU::run`] executes instructions until BRK sets the B flag
//! - [`CPU::step`] executes exactly one instruction
//!
//! Each `step` fetches the opcode at PC, advances PC past it, looks the byte
//! up in [`OPCODE_TABLE`], executes the instruction, and finally advances PC
//! past the operand bytes unless the instruction wrote PC itself. That last
//! rule is what unifies fall-through instructions with jumps, branches, and
//! returns.

use crate::addressing::AddressingMode;
use crate::instructions::{alu, branches, control, flags, inc_dec, load_store, shifts, stack, transfer};
use crate::memory::MemoryBus;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::status::{FLAG_BREAK, FLAG_INTERRUPT_DISABLE, FLAG_NEGATIVE, FLAG_UNUSED, FLAG_ZERO};
use crate::{ExecutionError, FlatMemory};

/// First address of the program load region.
pub const PROGRAM_START: u16 = 0x8000;

/// Address of the reset vector (little-endian PC loaded by [`CPU::reset`]).
pub const RESET_VECTOR: u16 = 0xFFFC;

/// The load region runs from 0x8000 through 0xFFFF.
const PROGRAM_CAPACITY: usize = 0x8000;

/// Base address of the stack page.
const STACK_BASE: u16 = 0x0100;

/// Stack pointer value after reset.
const STACK_RESET: u8 = 0xFD;

/// Status register value after reset: U and I set, everything else clear.
const STATUS_RESET: u8 = FLAG_UNUSED | FLAG_INTERRUPT_DISABLE;

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the [`MemoryBus`] trait; the
/// CPU owns its memory for its lifetime and is the only writer.
///
/// # Examples
///
/// ```
/// use mos6502::{FlatMemory, CPU};
/// use mos6502::status::{FLAG_CARRY, FLAG_ZERO};
///
/// let mut cpu = CPU::new(FlatMemory::new());
///
/// // LDA #$05; CMP #$05; BRK
/// cpu.load_and_run(&[0xA9, 0x05, 0xC9, 0x05, 0x00]).unwrap();
///
/// assert!(cpu.flag_set(FLAG_ZERO));
/// assert!(cpu.flag_set(FLAG_CARRY));
/// ```
pub struct CPU<M: MemoryBus = FlatMemory> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + sp is the full stack address)
    pub(crate) sp: u8,

    /// Packed status register (NV-BDIZC)
    pub(crate) status: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Total base cycles accumulated since construction
    pub(crate) cycles: u64,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a CPU over the given memory bus with every register zeroed.
    ///
    /// The machine is not runnable until [`CPU::reset`] (or
    /// [`CPU::load_and_run`]) establishes the power-on state and loads PC
    /// from the reset vector.
    pub fn new(memory: M) -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: 0,
            status: 0,
            pc: 0,
            cycles: 0,
            memory,
        }
    }

    /// Copies a program image into the load region at 0x8000 and writes
    /// 0x8000 to the reset vector.
    ///
    /// Programs longer than the 32 KiB load region are rejected with
    /// [`ExecutionError::ProgramTooLarge`]; nothing is written in that case.
    pub fn load(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        if program.len() > PROGRAM_CAPACITY {
            return Err(ExecutionError::ProgramTooLarge {
                size: program.len(),
            });
        }

        for (offset, byte) in program.iter().enumerate() {
            self.mem_write(PROGRAM_START.wrapping_add(offset as u16), *byte);
        }
        self.mem_write_u16(RESET_VECTOR, PROGRAM_START);

        Ok(())
    }

    /// Restores the power-on register state.
    ///
    /// A, X, and Y are zeroed, SP becomes 0xFD, the status register keeps
    /// only U and I set, and PC is loaded from the reset vector at 0xFFFC.
    /// Memory is left untouched.
    pub fn reset(&mut self) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = STACK_RESET;
        self.status = STATUS_RESET;
        self.pc = self.mem_read_u16(RESET_VECTOR);
    }

    /// Loads a program, resets, and runs it to the terminating BRK.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_and_run(&[0xA9, 0x05, 0x00]).unwrap(); // LDA #$05; BRK
    /// assert_eq!(cpu.a(), 0x05);
    /// ```
    pub fn load_and_run(&mut self, program: &[u8]) -> Result<(), ExecutionError> {
        self.load(program)?;
        self.reset();
        self.run()
    }

    /// Executes instructions until BRK sets the B flag.
    ///
    /// Returns [`ExecutionError::IllegalOpcode`] if an undocumented opcode
    /// byte is fetched. A program that never reaches BRK loops forever.
    pub fn run(&mut self) -> Result<(), ExecutionError> {
        self.run_with_callback(|_| {})
    }

    /// Like [`CPU::run`], but invokes `callback` before each instruction.
    ///
    /// The callback is a cooperative inspection point for host code (trace
    /// logging, test probes); it runs on the caller's thread and should
    /// return promptly.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{FlatMemory, CPU};
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load(&[0xE8, 0xE8, 0x00]).unwrap(); // INX; INX; BRK
    /// cpu.reset();
    ///
    /// let mut executed = 0;
    /// cpu.run_with_callback(|_cpu| executed += 1).unwrap();
    /// assert_eq!(executed, 3);
    /// ```
    pub fn run_with_callback<F>(&mut self, mut callback: F) -> Result<(), ExecutionError>
    where
        F: FnMut(&CPU<M>),
    {
        loop {
            callback(self);
            self.step()?;
            if self.flag_set(FLAG_BREAK) {
                return Ok(());
            }
        }
    }

    /// Executes exactly one instruction.
    ///
    /// Fetches the opcode at PC, advances PC past it, decodes through
    /// [`OPCODE_TABLE`], and dispatches on the mnemonic. Instructions that
    /// did not write PC themselves have PC advanced past their operand
    /// bytes afterwards; JMP/JSR/RTS/RTI and taken branches keep the PC they
    /// installed.
    pub fn step(&mut self) -> Result<(), ExecutionError> {
        let op_pc = self.pc;
        let opcode = self.mem_read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        let pre_pc = self.pc;

        let descriptor = match OPCODE_TABLE[opcode as usize] {
            Some(descriptor) => descriptor,
            None => return Err(ExecutionError::IllegalOpcode { opcode, pc: op_pc }),
        };
        let mode = descriptor.addressing_mode;

        match descriptor.mnemonic {
            Mnemonic::Adc => alu::execute_adc(self, mode),
            Mnemonic::And => alu::execute_and(self, mode),
            Mnemonic::Asl => shifts::execute_asl(self, mode),
            Mnemonic::AslAccumulator => shifts::execute_asl_accumulator(self),
            Mnemonic::Bcc => branches::execute_bcc(self),
            Mnemonic::Bcs => branches::execute_bcs(self),
            Mnemonic::Beq => branches::execute_beq(self),
            Mnemonic::Bit => alu::execute_bit(self, mode),
            Mnemonic::Bmi => branches::execute_bmi(self),
            Mnemonic::Bne => branches::execute_bne(self),
            Mnemonic::Bpl => branches::execute_bpl(self),
            Mnemonic::Brk => control::execute_brk(self),
            Mnemonic::Bvc => branches::execute_bvc(self),
            Mnemonic::Bvs => branches::execute_bvs(self),
            Mnemonic::Clc => flags::execute_clc(self),
            Mnemonic::Cld => flags::execute_cld(self),
            Mnemonic::Cli => flags::execute_cli(self),
            Mnemonic::Clv => flags::execute_clv(self),
            Mnemonic::Cmp => alu::execute_cmp(self, mode),
            Mnemonic::Cpx => alu::execute_cpx(self, mode),
            Mnemonic::Cpy => alu::execute_cpy(self, mode),
            Mnemonic::Dec => inc_dec::execute_dec(self, mode),
            Mnemonic::Dex => inc_dec::execute_dex(self),
            Mnemonic::Dey => inc_dec::execute_dey(self),
            Mnemonic::Eor => alu::execute_eor(self, mode),
            Mnemonic::Inc => inc_dec::execute_inc(self, mode),
            Mnemonic::Inx => inc_dec::execute_inx(self),
            Mnemonic::Iny => inc_dec::execute_iny(self),
            Mnemonic::Jmp => control::execute_jmp(self, mode),
            Mnemonic::Jsr => control::execute_jsr(self, mode),
            Mnemonic::Lda => load_store::execute_lda(self, mode),
            Mnemonic::Ldx => load_store::execute_ldx(self, mode),
            Mnemonic::Ldy => load_store::execute_ldy(self, mode),
            Mnemonic::Lsr => shifts::execute_lsr(self, mode),
            Mnemonic::LsrAccumulator => shifts::execute_lsr_accumulator(self),
            Mnemonic::Nop => control::execute_nop(self),
            Mnemonic::Ora => alu::execute_ora(self, mode),
            Mnemonic::Pha => stack::execute_pha(self),
            Mnemonic::Php => stack::execute_php(self),
            Mnemonic::Pla => stack::execute_pla(self),
            Mnemonic::Plp => stack::execute_plp(self),
            Mnemonic::Rol => shifts::execute_rol(self, mode),
            Mnemonic::RolAccumulator => shifts::execute_rol_accumulator(self),
            Mnemonic::Ror => shifts::execute_ror(self, mode),
            Mnemonic::RorAccumulator => shifts::execute_ror_accumulator(self),
            Mnemonic::Rti => control::execute_rti(self),
            Mnemonic::Rts => control::execute_rts(self),
            Mnemonic::Sbc => alu::execute_sbc(self, mode),
            Mnemonic::Sec => flags::execute_sec(self),
            Mnemonic::Sed => flags::execute_sed(self),
            Mnemonic::Sei => flags::execute_sei(self),
            Mnemonic::Sta => load_store::execute_sta(self, mode),
            Mnemonic::Stx => load_store::execute_stx(self, mode),
            Mnemonic::Sty => load_store::execute_sty(self, mode),
            Mnemonic::Tax => transfer::execute_tax(self),
            Mnemonic::Tay => transfer::execute_tay(self),
            Mnemonic::Tsx => transfer::execute_tsx(self),
            Mnemonic::Txa => transfer::execute_txa(self),
            Mnemonic::Txs => transfer::execute_txs(self),
            Mnemonic::Tya => transfer::execute_tya(self),
        }

        self.cycles += descriptor.base_cycles as u64;

        // Instructions that left PC alone fall through to the next opcode.
        if self.pc == pre_pc {
            self.pc = self.pc.wrapping_add((descriptor.size_bytes - 1) as u16);
        }

        Ok(())
    }

    // ========== Addressing-Mode Resolution ==========

    /// Computes the effective address for a memory-operand addressing mode.
    ///
    /// PC must point at the first operand byte; resolution never mutates PC.
    /// Only called for opcodes whose table entry carries a memory operand —
    /// the implied, accumulator, and relative forms have no effective
    /// address and are handled by their instruction handlers directly.
    pub(crate) fn operand_address(&self, mode: AddressingMode) -> u16 {
        match mode {
            // The operand byte itself is the value.
            AddressingMode::Immediate => self.pc,

            AddressingMode::ZeroPage => self.mem_read(self.pc) as u16,

            AddressingMode::ZeroPageX => self.mem_read(self.pc).wrapping_add(self.x) as u16,

            AddressingMode::ZeroPageY => self.mem_read(self.pc).wrapping_add(self.y) as u16,

            AddressingMode::Absolute => self.mem_read_u16(self.pc),

            AddressingMode::AbsoluteX => self.mem_read_u16(self.pc).wrapping_add(self.x as u16),

            AddressingMode::AbsoluteY => self.mem_read_u16(self.pc).wrapping_add(self.y as u16),

            AddressingMode::Indirect => {
                let ptr = self.mem_read_u16(self.pc);

                // NMOS bug: a pointer ending in 0xFF wraps within its page
                // instead of carrying into the next one.
                if ptr & 0x00FF == 0x00FF {
                    let lo = self.mem_read(ptr) as u16;
                    let hi = self.mem_read(ptr & 0xFF00) as u16;
                    (hi << 8) | lo
                } else {
                    self.mem_read_u16(ptr)
                }
            }

            AddressingMode::IndirectX => {
                let ptr = self.mem_read(self.pc).wrapping_add(self.x);
                let lo = self.mem_read(ptr as u16) as u16;
                let hi = self.mem_read(ptr.wrapping_add(1) as u16) as u16;
                (hi << 8) | lo
            }

            AddressingMode::IndirectY => {
                let ptr = self.mem_read(self.pc);
                let lo = self.mem_read(ptr as u16) as u16;
                let hi = self.mem_read(ptr.wrapping_add(1) as u16) as u16;
                ((hi << 8) | lo).wrapping_add(self.y as u16)
            }

            AddressingMode::Accumulator | AddressingMode::Implied | AddressingMode::Relative => {
                unreachable!("{:?} mode has no operand address", mode)
            }
        }
    }

    // ========== Memory Access ==========

    /// Reads the byte at `addr`.
    pub fn mem_read(&self, addr: u16) -> u8 {
        self.memory.read(addr)
    }

    /// Writes a byte to `addr`.
    pub fn mem_write(&mut self, addr: u16, value: u8) {
        self.memory.write(addr, value);
    }

    /// Reads a little-endian 16-bit value starting at `addr`.
    pub fn mem_read_u16(&self, addr: u16) -> u16 {
        self.memory.read_u16(addr)
    }

    /// Writes a little-endian 16-bit value starting at `addr`.
    pub fn mem_write_u16(&mut self, addr: u16, value: u16) {
        self.memory.write_u16(addr, value);
    }

    /// Returns a shared reference to the memory bus.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the memory bus.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    // ========== Stack Helpers ==========

    /// Pushes a byte: write at 0x0100 + SP, then decrement SP (wrapping
    /// within the stack page).
    pub(crate) fn stack_push(&mut self, value: u8) {
        self.mem_write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pops a byte: increment SP, then read at 0x0100 + SP.
    pub(crate) fn stack_pop(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.mem_read(STACK_BASE | self.sp as u16)
    }

    /// Pushes a 16-bit value, high byte first, so the low byte pops first.
    pub(crate) fn stack_push_u16(&mut self, value: u16) {
        self.stack_push((value >> 8) as u8);
        self.stack_push((value & 0xFF) as u8);
    }

    /// Pops a 16-bit value pushed by [`CPU::stack_push_u16`].
    pub(crate) fn stack_pop_u16(&mut self) -> u16 {
        let lo = self.stack_pop() as u16;
        let hi = self.stack_pop() as u16;
        (hi << 8) | lo
    }

    // ========== Status Flag Helpers ==========

    /// Returns true if every bit of `mask` is set in the status register.
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{FlatMemory, CPU};
    /// use mos6502::status::FLAG_CARRY;
    ///
    /// let mut cpu = CPU::new(FlatMemory::new());
    /// cpu.load_and_run(&[0x38, 0x00]).unwrap(); // SEC; BRK
    /// assert!(cpu.flag_set(FLAG_CARRY));
    /// ```
    pub fn flag_set(&self, mask: u8) -> bool {
        self.status & mask != 0
    }

    /// Sets the masked status bits.
    pub(crate) fn set_flag(&mut self, mask: u8) {
        self.status |= mask;
    }

    /// Clears the masked status bits.
    pub(crate) fn clear_flag(&mut self, mask: u8) {
        self.status &= !mask;
    }

    /// Sets or clears the masked status bits depending on `condition`.
    pub(crate) fn assign_flag(&mut self, mask: u8, condition: bool) {
        if condition {
            self.set_flag(mask);
        } else {
            self.clear_flag(mask);
        }
    }

    /// Applies the Z/N policy for `value`: Z iff zero, N iff bit 7 set.
    pub(crate) fn update_zero_and_negative_flags(&mut self, value: u8) {
        self.assign_flag(FLAG_ZERO, value == 0);
        self.assign_flag(FLAG_NEGATIVE, value & 0x80 != 0);
    }

    // ========== Register Writers (flag-updating) ==========

    /// Writes the accumulator and applies the Z/N policy.
    pub(crate) fn set_register_a(&mut self, value: u8) {
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// Writes the X register and applies the Z/N policy.
    pub(crate) fn set_register_x(&mut self, value: u8) {
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// Writes the Y register and applies the Z/N policy.
    pub(crate) fn set_register_y(&mut self, value: u8) {
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    // ========== Register Getters ==========

    /// Returns the accumulator value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer. The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the packed status register (NV-BDIZC).
    pub fn status(&self) -> u8 {
        self.status
    }

    /// Returns the program counter.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the total base cycles accumulated since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ========== Register Setters (for test harnesses) ==========

    /// Sets the accumulator without touching flags.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register without touching flags.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register without touching flags.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the stack pointer.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the packed status register.
    pub fn set_status(&mut self, value: u8) {
        self.status = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }
}
