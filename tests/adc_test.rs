//! Tests for the ADC (Add with Carry) instruction.
//!
//! Covers carry in/out, the signed overflow predicate on both boundaries,
//! Z/N updates, and the rule that decimal mode never changes the arithmetic.

use mos6502::status::{FLAG_CARRY, FLAG_NEGATIVE, FLAG_OVERFLOW, FLAG_ZERO};
use mos6502::{FlatMemory, CPU};

/// Helper to create a CPU over zeroed flat memory
fn setup_cpu() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_adc_without_carry() {
    let mut cpu = setup_cpu();

    // LDA #$05; ADC #$05; BRK
    cpu.load_and_run(&[0xA9, 0x05, 0x69, 0x05, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x0A);
    assert!(!cpu.flag_set(FLAG_CARRY));
    assert!(!cpu.flag_set(FLAG_OVERFLOW));
}

#[test]
fn test_adc_with_carry_in_adds_one() {
    let mut cpu = setup_cpu();

    // LDA #$05; SEC; ADC #$05; BRK
    cpu.load_and_run(&[0xA9, 0x05, 0x38, 0x69, 0x05, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x0B);
}

#[test]
fn test_adc_sets_carry_on_unsigned_overflow() {
    let mut cpu = setup_cpu();

    // LDA #$FF; ADC #$01; BRK
    cpu.load_and_run(&[0xA9, 0xFF, 0x69, 0x01, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x00);
    assert!(cpu.flag_set(FLAG_CARRY));
    assert!(cpu.flag_set(FLAG_ZERO));
    assert!(!cpu.flag_set(FLAG_OVERFLOW)); // -1 + 1 does not overflow signed
}

#[test]
fn test_adc_clears_stale_carry() {
    let mut cpu = setup_cpu();

    // SEC; LDA #$10; ADC #$10; BRK - sum fits, so C must come back clear
    cpu.load_and_run(&[0x38, 0xA9, 0x10, 0x69, 0x10, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x21); // carry-in contributed 1
    assert!(!cpu.flag_set(FLAG_CARRY));
}

#[test]
fn test_adc_overflow_positive_plus_positive() {
    let mut cpu = setup_cpu();

    // LDA #$50; ADC #$50; BRK - 80 + 80 = 160, out of signed range
    cpu.load_and_run(&[0xA9, 0x50, 0x69, 0x50, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0xA0);
    assert!(cpu.flag_set(FLAG_OVERFLOW));
    assert!(cpu.flag_set(FLAG_NEGATIVE));
    assert!(!cpu.flag_set(FLAG_CARRY));
}

#[test]
fn test_adc_overflow_negative_plus_negative() {
    let mut cpu = setup_cpu();

    // LDA #$80; ADC #$FF; BRK - (-128) + (-1) = -129, out of signed range
    cpu.load_and_run(&[0xA9, 0x80, 0x69, 0xFF, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_set(FLAG_OVERFLOW));
    assert!(cpu.flag_set(FLAG_CARRY));
    assert!(!cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_adc_mixed_signs_never_overflow() {
    let mut cpu = setup_cpu();

    // LDA #$50; ADC #$90; BRK - 80 + (-112) = -32
    cpu.load_and_run(&[0xA9, 0x50, 0x69, 0x90, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0xE0);
    assert!(!cpu.flag_set(FLAG_OVERFLOW));
    assert!(cpu.flag_set(FLAG_NEGATIVE));
}

#[test]
fn test_adc_zero_page_operand() {
    let mut cpu = setup_cpu();
    cpu.mem_write(0x0010, 0x07);

    // LDA #$03; ADC $10; BRK
    cpu.load_and_run(&[0xA9, 0x03, 0x65, 0x10, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x0A);
}

#[test]
fn test_adc_ignores_decimal_mode() {
    let mut cpu = setup_cpu();

    // SED; LDA #$09; ADC #$01; BRK - binary result, not BCD 0x10
    cpu.load_and_run(&[0xF8, 0xA9, 0x09, 0x69, 0x01, 0x00]).unwrap();

    assert_eq!(cpu.a(), 0x0A);
}
