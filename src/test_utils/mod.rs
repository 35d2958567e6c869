//! Shared test utilities for assembling DCPU-16 programs and memory images.
//!
//! Word layout used by the encoders:
//! - basic:    `bbbbbb aaaaaa oooo` (opcode in the low 4 bits)
//! - extended: `aaaaaa oooooo 0000` (extended opcode in the `a` field)
//!
//! Operand codes are passed raw (register index, 0x1E, 0x1F, ...); `lit`
//! builds the short-literal codes 0x20..=0x3F.

#![allow(dead_code)]

use crate::cpu::core::Cpu;
use crate::cpu::state::CpuState;
use crate::memory::IMAGE_BYTES;

/// Encode a basic (two-operand) instruction word.
pub fn basic(op: u8, a: u8, b: u8) -> u16 {
    (u16::from(b & 0x3F) << 10) | (u16::from(a & 0x3F) << 4) | u16::from(op & 0x0F)
}

/// Encode an extended (one-operand) instruction word.
pub fn extended(op: u8, a: u8) -> u16 {
    (u16::from(a & 0x3F) << 10) | (u16::from(op & 0x3F) << 4)
}

/// Short-literal operand code for `n` (0..=0x1F).
pub fn lit(n: u8) -> u8 {
    assert!(n < 0x20, "short literal out of range: {n:#x}");
    0x20 + n
}

/// Build a full-size big-endian image with `words` at address $0000.
pub fn image_from_words(words: &[u16]) -> Vec<u8> {
    let mut bytes = vec![0u8; IMAGE_BYTES];
    for (i, w) in words.iter().enumerate() {
        bytes[i * 2..i * 2 + 2].copy_from_slice(&w.to_be_bytes());
    }
    bytes
}

/// Raw state at power-up with `words` loaded at $0000.
pub fn state_with_program(words: &[u16]) -> CpuState {
    let mut state = CpuState::new();
    state.memory.load_words(0, words);
    state
}

/// CPU facade at power-up with `words` loaded at $0000.
pub fn cpu_with_program(words: &[u16]) -> Cpu {
    let mut cpu = Cpu::new();
    cpu.memory_mut().load_words(0, words);
    cpu
}
