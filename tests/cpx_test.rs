//! Tests for the CPX (Compare X Register) instruction.

use mos6502::status::{FLAG_CARRY, FLAG_NEGATIVE, FLAG_ZERO};
use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_cpx_equal() {
    let mut cpu = setup_cpu();

    // LDX #$20; CPX #$20; BRK
    cpu.load_and_run(&[0xA2, 0x20, 0xE0, 0x20, 0x00]).unwrap();

    assert!(cpu.flag_set(FLAG_ZERO));
    assert!(cpu.flag_set(FLAG_CARRY));
    assert_eq!(cpu.x(), 0x20);
}

#[test]
fn test_cpx_less() {
    let mut cpu = setup_cpu();

    // LDX #$10; CPX #$20; BRK
    cpu.load_and_run(&[0xA2, 0x10, 0xE0, 0x20, 0x00]).unwrap();

    assert!(!cpu.flag_set(FLAG_CARRY));
    assert!(cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_cpx_absolute_operand() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0300, 0x05);

    // LDX #$10; CPX $0300; BRK
    cpu.load_and_run(&[0xA2, 0x10, 0xEC, 0x00, 0x03, 0x00]).unwrap();

    assert!(cpu.flag_set(FLAG_CARRY));
    assert!(!cpu.flag_set(FLAG_ZERO));
}
