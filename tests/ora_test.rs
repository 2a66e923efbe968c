//! Tests for the ORA (Logical OR) instruction.

use mos6502::status::{FLAG_NEGATIVE, FLAG_ZERO};
use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_ora_immediate() {
    let mut cpu = setup_cpu();

    // LDA #$05; ORA #$0A; BRK
    cpu.load_and_run(&[0xA9, 0x05, 0x09, 0x0A, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x0F);
    assert!(!cpu.flag_set(FLAG_ZERO));
}

#[test]
fn test_ora_zero_with_zero_sets_zero_flag() {
    let mut cpu = setup_cpu();

    // LDA #$00; ORA #$00; BRK
    cpu.load_and_run(&[0xA9, 0x00, 0x09, 0x00, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_set(FLAG_ZERO));
}

#[test]
fn test_ora_sets_negative_from_bit7() {
    let mut cpu = setup_cpu();

    // LDA #$01; ORA #$80; BRK
    cpu.load_and_run(&[0xA9, 0x01, 0x09, 0x80, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x81);
    assert!(cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_ora_absolute_operand() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0300, 0x22);

    // LDA #$11; ORA $0300; BRK
    cpu.load_and_run(&[0xA9, 0x11, 0x0D, 0x00, 0x03, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x33);
}
