/*!
table.rs - Static opcode tables.

Design
------
- Basic table: `[Option<BasicOp>; 16]` indexed by the 4-bit opcode field.
  Slot 0 is empty; the dispatcher routes opcode 0 to the extended table.
- Extended table: `[Option<ExtendedOp>; 64]` indexed by the 6-bit extended
  opcode. Only JSR (0x01) is populated; an empty slot is an undefined
  instruction and the dispatcher turns it into `CpuFault`.
- Each entry carries the mnemonic (for tracing) and the handler. Base
  cycle costs stay in `cycles.rs`.

Handlers receive operands that are already resolved. They may bump
`cycles` for dynamic penalties (the failed-conditional +1) but never touch
the cycle counter in `CpuState` directly.
*/

use crate::cpu::decode::{
    ADD, AND, BOR, DIV, IFB, IFE, IFG, IFN, JSR, MOD, MUL, SET, SHL, SHR, SUB, XOR,
};
use crate::cpu::dispatch::arithmetic::{op_add, op_div, op_mod, op_mul, op_shl, op_shr, op_sub};
use crate::cpu::dispatch::compare::{op_ifb, op_ife, op_ifg, op_ifn};
use crate::cpu::dispatch::control_flow::op_jsr;
use crate::cpu::dispatch::logical::{op_and, op_bor, op_set, op_xor};
use crate::cpu::operand::Operand;
use crate::cpu::state::CpuState;

pub(crate) type BasicHandler = fn(&mut CpuState, Operand, Operand, &mut u32);
pub(crate) type ExtendedHandler = fn(&mut CpuState, Operand, &mut u32);

#[derive(Clone, Copy)]
pub(crate) struct BasicOp {
    pub mnemonic: &'static str,
    pub exec: BasicHandler,
}

#[derive(Clone, Copy)]
pub(crate) struct ExtendedOp {
    pub mnemonic: &'static str,
    pub exec: ExtendedHandler,
}

const fn basic(mnemonic: &'static str, exec: BasicHandler) -> Option<BasicOp> {
    Some(BasicOp { mnemonic, exec })
}

pub(crate) static BASIC_TABLE: [Option<BasicOp>; 16] = {
    let mut t: [Option<BasicOp>; 16] = [None; 16];

    t[SET as usize] = basic("SET", op_set);
    t[ADD as usize] = basic("ADD", op_add);
    t[SUB as usize] = basic("SUB", op_sub);
    t[MUL as usize] = basic("MUL", op_mul);
    t[DIV as usize] = basic("DIV", op_div);
    t[MOD as usize] = basic("MOD", op_mod);
    t[SHL as usize] = basic("SHL", op_shl);
    t[SHR as usize] = basic("SHR", op_shr);
    t[AND as usize] = basic("AND", op_and);
    t[BOR as usize] = basic("BOR", op_bor);
    t[XOR as usize] = basic("XOR", op_xor);
    t[IFE as usize] = basic("IFE", op_ife);
    t[IFN as usize] = basic("IFN", op_ifn);
    t[IFG as usize] = basic("IFG", op_ifg);
    t[IFB as usize] = basic("IFB", op_ifb);

    t
};

pub(crate) static EXTENDED_TABLE: [Option<ExtendedOp>; 64] = {
    let mut t: [Option<ExtendedOp>; 64] = [None; 64];

    t[JSR as usize] = Some(ExtendedOp {
        mnemonic: "JSR",
        exec: op_jsr,
    });

    t
};
