/*!
cycles.rs - Cycle cost helpers for the DCPU-16 core.

Purpose
=======
Provides:
  - `basic_cycles(op)`    : base cost of a two-operand instruction.
  - `extended_cycles(op)` : base cost of a one-operand instruction.
  - `operand_cycles(code)`: surcharge for an operand addressing mode.
  - `reads_next_word(code)`: whether an operand code consumes a trailing word.

Scope
=====
Only static costs live here. The dynamic +1 for a conditional that fails
is added by the compare handlers, and the dispatcher sums everything.
Skipped instructions are never charged.

Cost Summary
============
  SET AND BOR XOR          1
  ADD SUB MUL SHL SHR      2
  DIV MOD                  3
  IFE IFN IFG IFB          2 (+1 when the condition fails)
  JSR                      2
  [reg] [reg+next] [next] next  +1 each
*/

use crate::cpu::decode::{
    ADD, AND, BOR, DIV, IFB, IFE, IFG, IFN, JSR, MOD, MUL, SET, SHL, SHR, SUB, XOR,
};

pub(crate) fn basic_cycles(op: u8) -> u32 {
    match op {
        SET | AND | BOR | XOR => 1,
        ADD | SUB | MUL | SHL | SHR => 2,
        DIV | MOD => 3,
        IFE | IFN | IFG | IFB => 2,
        _ => 0,
    }
}

pub(crate) fn extended_cycles(op: u8) -> u32 {
    match op {
        JSR => 2,
        _ => 0,
    }
}

pub(crate) fn operand_cycles(code: u8) -> u32 {
    match code {
        0x08..=0x17 | 0x1E | 0x1F => 1,
        _ => 0,
    }
}

/// True for operand codes that take the word after the instruction.
pub(crate) fn reads_next_word(code: u8) -> bool {
    matches!(code, 0x0F..=0x17 | 0x1E | 0x1F)
}
