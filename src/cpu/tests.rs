//! Whole-program scenarios driven through the `Cpu` facade.

use proptest::prelude::*;

use crate::cpu::core::Cpu;
use crate::cpu::decode::{ADD, IFE, IFN, JSR, MUL, SET, SUB};
use crate::cpu::operand::{NEXT_ADDR, NEXT_LITERAL, O, PC, POP, PUSH};
use crate::cpu::state::Register;
use crate::error::CpuFault;
use crate::memory::IMAGE_BYTES;
use crate::test_utils::{basic, cpu_with_program, extended, image_from_words, lit};

const A: u8 = Register::A as u8;
const B: u8 = Register::B as u8;
const C: u8 = Register::C as u8;
const I: u8 = Register::I as u8;

#[test]
fn zero_image_reads_back_zero() {
    let cpu = Cpu::from_image(&vec![0u8; IMAGE_BYTES]).unwrap();
    assert!(cpu.memory().as_slice().iter().all(|&w| w == 0));
    assert_eq!(cpu.memory().as_slice().len(), 0x1_0000);
}

#[test]
fn set_a_from_image_bytes() {
    let mut bytes = vec![0u8; IMAGE_BYTES];
    bytes[..4].copy_from_slice(&[0x7C, 0x01, 0x00, 0x30]);
    let mut cpu = Cpu::from_image(&bytes).unwrap();
    let cost = cpu.step().unwrap();
    assert_eq!(cpu.reg(Register::A), 0x0030);
    assert_eq!(cpu.pc(), 2);
    // Base 1 + 1 for the trailing literal word.
    assert_eq!(cost, 2);
    assert_eq!(cpu.cycles(), 2);
}

#[test]
fn skip_lands_after_register_offset_operand() {
    // 0: IFE A, 1         (A == 0, false)
    // 1: SET [B + 0x10], C
    // 2:   0x0010
    // 3: SET I, 7
    let mut cpu = cpu_with_program(&[
        basic(IFE, A, lit(1)),
        basic(SET, 0x0F + B, C),
        0x0010,
        basic(SET, I, lit(7)),
    ]);
    cpu.step().unwrap();
    assert!(cpu.is_skipping());
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.read_memory(0x0010), 0);
    cpu.step().unwrap();
    assert_eq!(cpu.reg(Register::I), 7);
}

#[test]
fn skip_lands_after_two_trailing_words() {
    // IFN A, A is always false; the skipped ADD carries two trailing words.
    let mut cpu = cpu_with_program(&[
        basic(IFN, A, A),
        basic(ADD, 0x0F, NEXT_LITERAL),
        0x0100,
        0x0005,
        basic(SET, B, lit(2)),
    ]);
    cpu.run_for(3).unwrap();
    assert_eq!(cpu.pc(), 5);
    assert_eq!(cpu.read_memory(0x0100), 0);
    assert_eq!(cpu.reg(Register::B), 2);
}

#[test]
fn jsr_from_arbitrary_address() {
    let p = 0x0200;
    let mut cpu = Cpu::new();
    cpu.memory_mut()
        .load_words(p, &[extended(JSR, NEXT_LITERAL), 0x1234]);
    cpu.set_pc(p);
    cpu.step().unwrap();
    assert_eq!(cpu.sp(), 0xFFFE);
    assert_eq!(cpu.read_memory(0xFFFE), p + 2);
    assert_eq!(cpu.pc(), 0x1234);
}

#[test]
fn ifn_equal_costs_three_and_skips_once() {
    let mut cpu = cpu_with_program(&[
        basic(IFN, A, B),
        basic(SET, C, lit(1)),
        basic(SET, C, lit(2)),
    ]);
    assert_eq!(cpu.step().unwrap(), 3);
    assert!(cpu.is_skipping());
    cpu.step().unwrap();
    assert!(!cpu.is_skipping());
    cpu.step().unwrap();
    assert_eq!(cpu.reg(Register::C), 2);
    assert_eq!(cpu.cycles(), 4);
}

#[test]
fn fault_keeps_earlier_effects() {
    let mut cpu = cpu_with_program(&[
        basic(SET, A, lit(9)),
        extended(0x3F, NEXT_ADDR),
        0x4000,
    ]);
    cpu.step().unwrap();
    let err = cpu.step().unwrap_err();
    assert_eq!(
        err,
        CpuFault::UndefinedExtendedOpcode {
            opcode: 0x3F,
            address: 1
        }
    );
    assert_eq!(cpu.reg(Register::A), 9);
    assert_eq!(cpu.pc(), 3);
    assert_eq!(cpu.cycles(), 1);
}

#[test]
fn counting_loop() {
    // 0: SET I, 0
    // 1: ADD I, 1
    // 2: IFN I, 10
    // 3: SET PC, 1
    // 4: SET A, I
    let mut cpu = cpu_with_program(&[
        basic(SET, I, lit(0)),
        basic(ADD, I, lit(1)),
        basic(IFN, I, lit(10)),
        basic(SET, PC, lit(1)),
        basic(SET, A, I),
    ]);
    while cpu.pc() != 5 {
        cpu.step().unwrap();
    }
    assert_eq!(cpu.reg(Register::A), 10);
    assert_eq!(cpu.o(), 0);
}

#[test]
fn subroutine_with_stack_frame() {
    // 0: SET PUSH, 3
    // 1: JSR 5
    // 2: SET B, POP
    // 3: <fault>
    // 5: SET A, 0x1F ; MUL A, 2 ; SET PC, POP
    let mut cpu = cpu_with_program(&[
        basic(SET, PUSH, lit(3)),
        extended(JSR, lit(5)),
        basic(SET, B, POP),
        0x0000,
        0x0000,
        basic(SET, A, lit(0x1F)),
        basic(MUL, A, lit(2)),
        basic(SET, PC, POP),
    ]);
    let err = cpu.run().unwrap_err();
    assert!(matches!(err, CpuFault::UndefinedExtendedOpcode { address: 3, .. }));
    assert_eq!(cpu.reg(Register::A), 0x3E);
    assert_eq!(cpu.reg(Register::B), 3);
    assert_eq!(cpu.sp(), 0xFFFF);
}

#[test]
fn sub_into_o_keeps_result() {
    let mut cpu = cpu_with_program(&[basic(SUB, O, lit(1))]);
    cpu.step().unwrap();
    assert_eq!(cpu.o(), 0xFFFF);
}

proptest! {
    #[test]
    fn literal_destination_discards_writes(code in 0x20u8..=0x3F, v in any::<u16>()) {
        let mut cpu = cpu_with_program(&[basic(SET, code, NEXT_LITERAL), v]);
        let before = cpu.clone();
        cpu.step().unwrap();
        prop_assert_eq!(cpu.memory(), before.memory());
        for r in Register::ALL {
            prop_assert_eq!(cpu.reg(r), 0);
        }
        prop_assert_eq!(cpu.sp(), 0xFFFF);
        prop_assert_eq!(cpu.o(), 0);
        prop_assert_eq!(cpu.pc(), 2);
    }

    #[test]
    fn next_literal_destination_discards_writes(v in any::<u16>(), w in any::<u16>()) {
        let mut cpu = cpu_with_program(&[basic(ADD, NEXT_LITERAL, NEXT_LITERAL), v, w]);
        let before = cpu.clone();
        cpu.step().unwrap();
        prop_assert_eq!(cpu.memory(), before.memory());
        prop_assert_eq!(cpu.pc(), 3);
        // O is still updated by arithmetic; only the destination write is dropped.
        prop_assert_eq!(cpu.o(), if u32::from(v) + u32::from(w) > 0xFFFF { 1 } else { 0 });
    }

    #[test]
    fn add_then_sub_restores_register(x in any::<u16>(), y in any::<u16>()) {
        let mut cpu = cpu_with_program(&[basic(ADD, A, B), basic(SUB, A, B)]);
        cpu.set_reg(Register::A, x);
        cpu.set_reg(Register::B, y);
        cpu.run_for(2).unwrap();
        prop_assert_eq!(cpu.reg(Register::A), x);
    }
}

#[test]
fn image_helper_is_full_size() {
    assert_eq!(image_from_words(&[1, 2]).len(), IMAGE_BYTES);
}
