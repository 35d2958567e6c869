/*!
operand.rs - Operand resolution for the 6-bit operand field.

Overview
========
`resolve` turns an operand code into an `Operand`: a tagged description of
the storage location the code designates. Handlers then `read` and `write`
through it. Any side effect of the encoding (consuming a trailing word,
moving SP for push/pop, the cycle surcharge) happens during `resolve`,
exactly once, in operand order.

Encoding
========
  0x00-0x07  register
  0x08-0x0E  [register]
  0x0F-0x17  [register + next word]
  0x18       POP   [SP++]
  0x19       PEEK  [SP]
  0x1A       PUSH  [--SP]
  0x1B       SP
  0x1C       PC
  0x1D       O
  0x1E       [next word]
  0x1F       next word (literal)
  0x20-0x3F  literal 0x00-0x1F

Literals
========
`Operand::Immediate` carries its value, not a location. Writing to it is
accepted and discarded, so `SET 0x05, A` is a no-op rather than an error.

Caller Assumptions
==================
- PC points at the word after the instruction (or after the previous
  operand's trailing word) when `resolve` is called.
- `skip` is the skip-path twin of `resolve`: it only moves PC past any
  trailing word, with no other side effect and no cycles.
*/

use crate::cpu::cycles::{operand_cycles, reads_next_word};
use crate::cpu::state::{CpuState, Register};

pub const POP: u8 = 0x18;
pub const PEEK: u8 = 0x19;
pub const PUSH: u8 = 0x1A;
pub const SP: u8 = 0x1B;
pub const PC: u8 = 0x1C;
pub const O: u8 = 0x1D;
pub const NEXT_ADDR: u8 = 0x1E;
pub const NEXT_LITERAL: u8 = 0x1F;
pub const LITERAL_BASE: u8 = 0x20;

/// A resolved operand location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operand {
    Register(Register),
    Memory(u16),
    Pc,
    Sp,
    Overflow,
    /// Read-only value; writes are discarded.
    Immediate(u16),
}

impl Operand {
    #[inline]
    pub fn read(self, cpu: &CpuState) -> u16 {
        match self {
            Operand::Register(r) => cpu.reg(r),
            Operand::Memory(addr) => cpu.memory.read(addr),
            Operand::Pc => cpu.pc,
            Operand::Sp => cpu.sp,
            Operand::Overflow => cpu.o,
            Operand::Immediate(v) => v,
        }
    }

    #[inline]
    pub fn write(self, cpu: &mut CpuState, value: u16) {
        match self {
            Operand::Register(r) => cpu.set_reg(r, value),
            Operand::Memory(addr) => cpu.memory.write(addr, value),
            Operand::Pc => cpu.pc = value,
            Operand::Sp => cpu.sp = value,
            Operand::Overflow => cpu.o = value,
            Operand::Immediate(_) => {}
        }
    }
}

/// Resolve `code` to a location, applying its side effects to `cpu` and
/// adding its cycle surcharge to `cycles`.
pub(crate) fn resolve(cpu: &mut CpuState, code: u8, cycles: &mut u32) -> Operand {
    *cycles += operand_cycles(code);
    match code {
        0x00..=0x07 => Operand::Register(Register::from_index(code as u16)),
        0x08..=0x0E => {
            let base = cpu.reg(Register::from_index((code - 0x08) as u16));
            Operand::Memory(base)
        }
        0x0F..=0x17 => {
            let base = cpu.reg(Register::from_index((code - 0x0F) as u16));
            let offset = cpu.fetch_word();
            Operand::Memory(base.wrapping_add(offset))
        }
        POP => Operand::Memory(cpu.pop_slot()),
        PEEK => Operand::Memory(cpu.sp),
        PUSH => Operand::Memory(cpu.push_slot()),
        SP => Operand::Sp,
        PC => Operand::Pc,
        O => Operand::Overflow,
        NEXT_ADDR => Operand::Memory(cpu.fetch_word()),
        NEXT_LITERAL => Operand::Immediate(cpu.fetch_word()),
        0x20..=0x3F => Operand::Immediate((code - LITERAL_BASE) as u16),
        _ => unreachable!("operand code {code:#04x} outside the 6-bit field"),
    }
}

/// Advance PC past the trailing word of `code`, if it has one.
#[inline]
pub(crate) fn skip(cpu: &mut CpuState, code: u8) {
    if reads_next_word(code) {
        cpu.advance_pc();
    }
}
