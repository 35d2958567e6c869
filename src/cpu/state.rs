/*!
state.rs - Canonical DCPU-16 architectural state.

Overview
========
`CpuState` is the single owner of everything an instruction can touch:
the eight general registers, the 64 Ki-word memory, PC, SP, the overflow
register O, plus two execution-control fields (the skip latch and the
cycle counter). It excludes:
  - Instruction decode / dispatch logic
  - Operand resolution
  - Cycle cost tables
Those live in the sibling modules (decode, operand, cycles, dispatch).

Power-up State
==============
  PC = $0000, SP = $FFFF, O = 0, all registers and memory 0,
  not skipping, 0 cycles.

Stack
=====
The stack grows downward from the top of memory:
  Push: SP = SP - 1, then write at [SP]
  Pop:  read at [SP], then SP = SP + 1
Both wrap at 16 bits.

Register Encoding
=================
Index: 0 1 2 3 4 5 6 7
       A B C X Y Z I J
*/

use crate::memory::Memory;

/// Initial stack pointer value.
pub const SP_RESET: u16 = 0xFFFF;

/// General purpose registers, in operand-encoding order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    A = 0,
    B = 1,
    C = 2,
    X = 3,
    Y = 4,
    Z = 5,
    I = 6,
    J = 7,
}

impl Register {
    pub const ALL: [Register; 8] = [
        Register::A,
        Register::B,
        Register::C,
        Register::X,
        Register::Y,
        Register::Z,
        Register::I,
        Register::J,
    ];

    /// Register for an encoding index. Only the low three bits are used.
    #[inline]
    pub fn from_index(index: u16) -> Register {
        Self::ALL[(index & 0x7) as usize]
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Register::A => "A",
            Register::B => "B",
            Register::C => "C",
            Register::X => "X",
            Register::Y => "Y",
            Register::Z => "Z",
            Register::I => "I",
            Register::J => "J",
        }
    }
}

#[derive(Debug, Clone)]
pub struct CpuState {
    pub registers: [u16; 8],
    pub memory: Memory,
    pub pc: u16,
    pub sp: u16,
    pub o: u16,
    /// Set by a failed conditional; consumed by the next dispatch.
    pub(crate) skipping: bool,
    pub(crate) cycles: u64,
}

impl Default for CpuState {
    fn default() -> Self {
        Self {
            registers: [0; 8],
            memory: Memory::new(),
            pc: 0x0000,
            sp: SP_RESET,
            o: 0,
            skipping: false,
            cycles: 0,
        }
    }
}

impl CpuState {
    // ---------------------------------------------------------------------
    // Construction / Reset
    // ---------------------------------------------------------------------

    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore power-up values for everything except memory.
    pub fn reset(&mut self) {
        self.registers = [0; 8];
        self.pc = 0x0000;
        self.sp = SP_RESET;
        self.o = 0;
        self.skipping = false;
        self.cycles = 0;
    }

    // ---------------------------------------------------------------------
    // Accessors
    // ---------------------------------------------------------------------
    #[inline]
    pub fn reg(&self, r: Register) -> u16 {
        self.registers[r.index()]
    }
    #[inline]
    pub fn set_reg(&mut self, r: Register, v: u16) {
        self.registers[r.index()] = v;
    }
    #[inline]
    pub fn skipping(&self) -> bool {
        self.skipping
    }
    #[inline]
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    // ---------------------------------------------------------------------
    // Program Counter Helpers
    // ---------------------------------------------------------------------

    /// Advance PC by one word (wrapping at 16 bits).
    #[inline]
    pub fn advance_pc(&mut self) {
        self.pc = self.pc.wrapping_add(1);
    }

    /// Read the word at PC, then advance PC.
    #[inline]
    pub fn fetch_word(&mut self) -> u16 {
        let w = self.memory.read(self.pc);
        self.advance_pc();
        w
    }

    // ---------------------------------------------------------------------
    // Stack Helpers
    // ---------------------------------------------------------------------

    /// Pre-decrement SP and return the new top-of-stack address.
    #[inline]
    pub fn push_slot(&mut self) -> u16 {
        self.sp = self.sp.wrapping_sub(1);
        self.sp
    }

    /// Return the top-of-stack address, then post-increment SP.
    #[inline]
    pub fn pop_slot(&mut self) -> u16 {
        let addr = self.sp;
        self.sp = self.sp.wrapping_add(1);
        addr
    }

    #[inline]
    pub fn push(&mut self, value: u16) {
        let addr = self.push_slot();
        self.memory.write(addr, value);
    }
}
