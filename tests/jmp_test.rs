//! Tests for the JMP instruction, including the indirect page-crossing bug.

use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_jmp_absolute() {
    let mut cpu = setup_cpu();

    // JMP $8005; NOP; BRK; LDA #$09; BRK
    cpu.load_and_run(&[0x4C, 0x05, 0x80, 0xEA, 0x00, 0xA9, 0x09, 0x00])
        .unwrap();

    assert_eq!(cpu.a(), 0x09);
}

#[test]
fn test_jmp_absolute_sets_pc_exactly() {
    let mut cpu = setup_cpu();
    cpu.load(&[0x4C, 0x34, 0x12]).unwrap();
    cpu.reset();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn test_jmp_indirect() {
    let mut cpu = setup_cpu();
    cpu.mem_write_u16(0x0200, 0x8004);

    // JMP ($0200); BRK; LDA #$55; BRK
    cpu.load_and_run(&[0x6C, 0x00, 0x02, 0x00, 0xA9, 0x55, 0x00])
        .unwrap();

    assert_eq!(cpu.a(), 0x55);
}

#[test]
fn test_jmp_indirect_page_crossing_bug() {
    let mut cpu = setup_cpu();
    cpu.load(&[0x6C, 0xFF, 0x30]).unwrap();

    // Pointer 0x30FF: low byte at 0x30FF, high byte fetched from 0x3000
    // (same page), NOT from 0x3100.
    cpu.mem_write(0x30FF, 0x40);
    cpu.mem_write(0x3100, 0x50);
    cpu.mem_write(0x3000, 0x80);
    cpu.reset();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x8040); // buggy fetch; 0x5040 would be the fixed one
}

#[test]
fn test_jmp_indirect_bug_end_to_end() {
    let mut cpu = setup_cpu();
    cpu.load(&[0x6C, 0xFF, 0x30, 0x00]).unwrap();

    cpu.mem_write(0x30FF, 0x40);
    cpu.mem_write(0x3100, 0x50);
    cpu.mem_write(0x3000, 0x80);

    // Landing pad at 0x8040: LDA #$77; BRK
    cpu.mem_write(0x8040, 0xA9);
    cpu.mem_write(0x8041, 0x77);
    cpu.mem_write(0x8042, 0x00);

    cpu.reset();
    cpu.run().unwrap();

    assert_eq!(cpu.a(), 0x77);
}

#[test]
fn test_jmp_indirect_without_page_boundary_reads_normally() {
    let mut cpu = setup_cpu();
    cpu.load(&[0x6C, 0xFE, 0x30]).unwrap();

    // Pointer 0x30FE does not end the page: bytes at 0x30FE/0x30FF
    cpu.mem_write(0x30FE, 0x40);
    cpu.mem_write(0x30FF, 0x50);
    cpu.reset();

    cpu.step().unwrap();

    assert_eq!(cpu.pc(), 0x5040);
}
