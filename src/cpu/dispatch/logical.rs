/*!
logical.rs - SET / AND / BOR / XOR handlers

These write the first operand and never touch O.
*/

use crate::cpu::operand::Operand;
use crate::cpu::state::CpuState;

pub(crate) fn op_set(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let v = b.read(cpu);
    a.write(cpu, v);
}

pub(crate) fn op_and(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let v = a.read(cpu) & b.read(cpu);
    a.write(cpu, v);
}

pub(crate) fn op_bor(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let v = a.read(cpu) | b.read(cpu);
    a.write(cpu, v);
}

pub(crate) fn op_xor(cpu: &mut CpuState, a: Operand, b: Operand, _cycles: &mut u32) {
    let v = a.read(cpu) ^ b.read(cpu);
    a.write(cpu, v);
}
