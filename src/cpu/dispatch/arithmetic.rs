/*!
arithmetic.rs - ADD / SUB / MUL / DIV / MOD / SHL / SHR handlers

Overview
========
Each handler reads both operands, runs the matching `execute` helper and
writes the result back through `write_back`, which stores O before the
first operand. The O update is what separates this family from the plain
bitwise family in `logical`.

  ADD  O = 0x0001 on carry, else unchanged
  SUB  O = 0xFFFF on borrow, else unchanged
  MUL  O = high word of the 32-bit product
  DIV  O = fractional part ((a << 16) / b); a = O = 0 when b = 0
  MOD  a = O = 0 when b = 0, else O unchanged
  SHL  O = bits shifted out the top
  SHR  O = bits shifted out the bottom, left aligned

Caller Requirements
===================
The dispatcher has already resolved both operands (in order) and charged
the base and operand cycles. None of these handlers adds cycles.
*/

use crate::cpu::dispatch::write_back;
use crate::cpu::execute::{add, div, modulo, mul, shl, shr, sub};
use crate::cpu::operand::Operand;
use crate::cpu::state::CpuState;

pub(crate) fn op_add(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = add(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_sub(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = sub(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_mul(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = mul(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_div(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = div(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_mod(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = modulo(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_shl(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = shl(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}

pub(crate) fn op_shr(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let r = shr(a.read(cpu), b.read(cpu));
    write_back(cpu, a, r);
}
