/*!
control_flow.rs - Extended (one-operand) opcode handlers

Overview
========
  JSR a  (0x01)  push the return address, then PC = a

The return address is PC at handler entry: the dispatcher has already
stepped past the instruction word and the operand's trailing word, so the
pushed value is the address of the next instruction.

The push happens before the target is read. An operand that names SP or
the new stack slot therefore sees the post-push state (`JSR SP` jumps to
the new SP, `JSR [reg]` aimed at the slot jumps to the return address).

Every other extended code is undefined and faults in the dispatcher before
reaching this module.
*/

use crate::cpu::operand::Operand;
use crate::cpu::state::CpuState;

pub(crate) fn op_jsr(cpu: &mut CpuState, a: Operand, _cycles: &mut u32) {
    let ret = cpu.pc;
    cpu.push(ret);
    cpu.pc = a.read(cpu);
}
