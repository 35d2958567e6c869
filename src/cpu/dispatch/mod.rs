/*!
dispatch - Orchestrator for a single DCPU-16 step (fetch / decode / skip / execute)

Overview
========
One call to `step` handles exactly one instruction:
1. Fetch the word at PC and advance PC.
2. Decode it into opcode / a / b fields.
3. If the skip latch is set, step PC over the instruction's trailing words,
   clear the latch and stop. Nothing else changes and no cycles are charged.
4. Otherwise route to the basic table (opcode != 0) or the extended table
   (opcode == 0, real opcode in `a`), resolve operands, run the handler and
   add the instruction's cycles to the counter.

Operand Order
=============
For basic instructions `a` is resolved before `b`. Either may consume a
trailing word, so `b` sees the PC left behind by `a`. The same order
applies to the stack codes (`SET PUSH, POP` pushes before it pops).

Faults
======
An extended opcode with no table entry returns
`CpuFault::UndefinedExtendedOpcode`. PC is left after the faulting
instruction (trailing word included) and no cycles are charged. Effects of
earlier steps are kept.
*/

pub(crate) mod arithmetic;
pub(crate) mod compare;
pub(crate) mod control_flow;
pub(crate) mod logical;

use tracing::{trace, warn};

use crate::cpu::cycles::{basic_cycles, extended_cycles};
use crate::cpu::decode::Instruction;
use crate::cpu::execute::AluResult;
use crate::cpu::operand::{Operand, resolve, skip};
use crate::cpu::state::CpuState;
use crate::cpu::table::{BASIC_TABLE, EXTENDED_TABLE};
use crate::error::CpuFault;

/// Execute (or skip) one instruction and return the cycles it consumed.
pub(crate) fn step(cpu: &mut CpuState) -> Result<u32, CpuFault> {
    let address = cpu.pc;
    let word = cpu.fetch_word();
    let inst = Instruction::decode(word);

    if cpu.skipping {
        skip_instruction(cpu, inst);
        cpu.skipping = false;
        trace!(pc = address, word, "skipped");
        return Ok(0);
    }

    let cycles = if inst.is_extended() {
        execute_extended(cpu, inst, address)?
    } else {
        execute_basic(cpu, inst, address)
    };
    cpu.cycles += u64::from(cycles);
    Ok(cycles)
}

/// Step PC over any trailing operand words without resolving anything.
fn skip_instruction(cpu: &mut CpuState, inst: Instruction) {
    if inst.is_extended() {
        skip(cpu, inst.b);
    } else {
        skip(cpu, inst.a);
        skip(cpu, inst.b);
    }
}

fn execute_basic(cpu: &mut CpuState, inst: Instruction, address: u16) -> u32 {
    let Some(op) = BASIC_TABLE[inst.opcode as usize] else {
        unreachable!("basic opcode {:#x} has no table entry", inst.opcode);
    };
    let mut cycles = basic_cycles(inst.opcode);
    let a = resolve(cpu, inst.a, &mut cycles);
    let b = resolve(cpu, inst.b, &mut cycles);
    (op.exec)(cpu, a, b, &mut cycles);
    trace!(pc = address, op = op.mnemonic, a = inst.a, b = inst.b, cycles, "executed");
    cycles
}

fn execute_extended(cpu: &mut CpuState, inst: Instruction, address: u16) -> Result<u32, CpuFault> {
    let Some(op) = EXTENDED_TABLE[inst.a as usize] else {
        skip(cpu, inst.b);
        warn!(pc = address, opcode = inst.a, "undefined extended opcode");
        return Err(CpuFault::UndefinedExtendedOpcode {
            opcode: inst.a,
            address,
        });
    };
    let mut cycles = extended_cycles(inst.a);
    let a = resolve(cpu, inst.b, &mut cycles);
    (op.exec)(cpu, a, &mut cycles);
    trace!(pc = address, op = op.mnemonic, a = inst.b, cycles, "executed");
    Ok(cycles)
}

/// Store an arithmetic result: O first, then the first operand, so an
/// instruction targeting O itself ends up holding the result.
#[inline]
pub(crate) fn write_back(cpu: &mut CpuState, a: Operand, r: AluResult) {
    if let Some(o) = r.overflow {
        cpu.o = o;
    }
    a.write(cpu, r.value);
}
