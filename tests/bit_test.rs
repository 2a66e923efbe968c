//! Tests for the BIT (Bit Test) instruction.
//!
//! Z comes from `A AND value`; N and V are copied straight from bits 7 and 6
//! of the operand, regardless of A. The accumulator is never modified.

use mos6502::status::{FLAG_NEGATIVE, FLAG_OVERFLOW, FLAG_ZERO};
use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_bit_zero_page_disjoint_sets_zero() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0xF0);

    // LDA #$0F; BIT $10; BRK
    cpu.load_and_run(&[0xA9, 0x0F, 0x24, 0x10, 0x00]).unwrap();

    assert!(cpu.flag_set(FLAG_ZERO));
    assert!(cpu.flag_set(FLAG_NEGATIVE)); // bit 7 of 0xF0
    assert!(cpu.flag_set(FLAG_OVERFLOW)); // bit 6 of 0xF0
    assert_eq!(cpu.a(), 0x0F); // A untouched
}

#[test]
fn test_bit_overlapping_bits_clear_zero() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0x01);

    // LDA #$01; BIT $10; BRK
    cpu.load_and_run(&[0xA9, 0x01, 0x24, 0x10, 0x00]).unwrap();

    assert!(!cpu.flag_set(FLAG_ZERO));
    assert!(!cpu.flag_set(FLAG_NEGATIVE));
    assert!(!cpu.flag_set(FLAG_OVERFLOW));
}

#[test]
fn test_bit_copies_n_and_v_even_when_a_masks_them() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0xC0);

    // LDA #$FF; BIT $10; BRK - A covers bits 7/6, flags still come from memory
    cpu.load_and_run(&[0xA9, 0xFF, 0x24, 0x10, 0x00]).unwrap();

    assert!(!cpu.flag_set(FLAG_ZERO)); // 0xFF & 0xC0 != 0
    assert!(cpu.flag_set(FLAG_NEGATIVE));
    assert!(cpu.flag_set(FLAG_OVERFLOW));
}

#[test]
fn test_bit_absolute() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0300, 0x40);

    // LDA #$FF; BIT $0300; BRK
    cpu.load_and_run(&[0xA9, 0xFF, 0x2C, 0x00, 0x03, 0x00]).unwrap();

    assert!(!cpu.flag_set(FLAG_NEGATIVE));
    assert!(cpu.flag_set(FLAG_OVERFLOW));
}
