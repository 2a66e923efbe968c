//! Tests for the INC (Increment Memory) instruction.

use mos6502::status::{FLAG_NEGATIVE, FLAG_ZERO};
use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_inc_zero_page() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0x41);

    // INC $10; BRK
    cpu.load_and_run(&[0xE6, 0x10, 0x00]).unwrap();

    assert_eq!(cpu.mem_read(0x0010), 0x42);
    assert!(!cpu.flag_set(FLAG_ZERO));
    assert!(!cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_inc_wraps_to_zero() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0xFF);

    cpu.load_and_run(&[0xE6, 0x10, 0x00]).unwrap();

    assert_eq!(cpu.mem_read(0x0010), 0x00);
    assert!(cpu.flag_set(FLAG_ZERO));
}

#[test]
fn test_inc_into_negative_range() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0x7F);

    cpu.load_and_run(&[0xE6, 0x10, 0x00]).unwrap();

    assert_eq!(cpu.mem_read(0x0010), 0x80);
    assert!(cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_inc_absolute_x() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0305, 0x10);

    // LDX #$05; INC $0300,X; BRK
    cpu.load_and_run(&[0xA2, 0x05, 0xFE, 0x00, 0x03, 0x00]).unwrap();

    assert_eq!(cpu.mem_read(0x0305), 0x11);
}
