/*!
compare.rs - Conditional opcode family handler (IFE / IFN / IFG / IFB)

Scope
=====
  IFE  execute next if a == b
  IFN  execute next if a != b
  IFG  execute next if a >  b (unsigned)
  IFB  execute next if (a & b) != 0

Behavior
========
When the condition fails the handler latches `skipping` and charges one
extra cycle on top of the base cost. The next dispatch then decodes the
following instruction only to step PC over it. Operands are only read;
a conditional never writes its first operand.
*/

use crate::cpu::execute::{ifb, ife, ifg, ifn};
use crate::cpu::operand::Operand;
use crate::cpu::state::CpuState;

#[inline]
fn branch(cpu: &mut CpuState, taken: bool, cycles: &mut u32) {
    cpu.skipping = !taken;
    if cpu.skipping {
        *cycles += 1;
    }
}

pub(crate) fn op_ife(cpu: &mut CpuState, a: Operand, b: Operand, cycles: &mut u32) {
    let taken = ife(a.read(cpu), b.read(cpu));
    branch(cpu, taken, cycles);
}

pub(crate) fn op_ifn(cpu: &mut CpuState, a: Operand, b: Operand, cycles: &mut u32) {
    let taken = ifn(a.read(cpu), b.read(cpu));
    branch(cpu, taken, cycles);
}

pub(crate) fn op_ifg(cpu: &mut CpuState, a: Operand, b: Operand, cycles: &mut u32) {
    let taken = ifg(a.read(cpu), b.read(cpu));
    branch(cpu, taken, cycles);
}

pub(crate) fn op_ifb(cpu: &mut CpuState, a: Operand, b: Operand, cycles: &mut u32) {
    let taken = ifb(a.read(cpu), b.read(cpu));
    branch(cpu, taken, cycles);
}
