/*!
core::Cpu - DCPU-16 processor facade wrapping `CpuState`.

Design
======
- `Cpu` stores a single field: `state: CpuState`.
- Public API exposes construction, image loading, reset, register and
  memory accessors, and stepping (`step`, `run_for`, `run`).
- Dispatch and operand resolution work on `CpuState` directly; this type
  is the stable surface embedders and the runner binary talk to.

Loading
=======
Image loads are all-or-nothing: the new memory is decoded first and only
swapped in once it is complete, so a truncated image leaves the current
memory untouched. Loading does not reset registers; call `reset` for that.

Running
=======
`step` executes (or skips) one instruction. `run_for` stops after a step
budget and reports the cycles spent; `run` never stops on its own. Both
return early on the first `CpuFault`.
*/

use std::convert::Infallible;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::cpu::dispatch;
use crate::cpu::state::{CpuState, Register};
use crate::error::{CpuFault, ImageError};
use crate::image;
use crate::memory::Memory;

#[derive(Debug, Clone, Default)]
pub struct Cpu {
    state: CpuState,
}

impl Cpu {
    /// Construct a CPU with power-up defaults and zeroed memory.
    pub fn new() -> Self {
        Self {
            state: CpuState::new(),
        }
    }

    /// Construct a CPU at power-up over an existing memory.
    pub fn from_memory(memory: Memory) -> Self {
        let mut state = CpuState::new();
        state.memory = memory;
        Self { state }
    }

    /// Construct a CPU from a raw 131072-byte big-endian memory image.
    pub fn from_image(bytes: &[u8]) -> Result<Self, ImageError> {
        Ok(Self::from_memory(image::from_bytes(bytes)?))
    }

    /// Replace memory with the given image. Registers are kept.
    pub fn load_image(&mut self, bytes: &[u8]) -> Result<(), ImageError> {
        self.state.memory = image::from_bytes(bytes)?;
        Ok(())
    }

    pub fn load_image_reader<R: Read>(&mut self, reader: R) -> Result<(), ImageError> {
        self.state.memory = image::from_reader(reader)?;
        Ok(())
    }

    pub fn load_image_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), ImageError> {
        self.state.memory = image::from_file(path)?;
        Ok(())
    }

    /// Restore power-up register values. Memory is kept.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("cpu reset");
    }

    /// Return immutable reference to internal state (for inspection / testing).
    pub fn state(&self) -> &CpuState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut CpuState {
        &mut self.state
    }

    // ---------------------------------------------------------------------
    // Register accessors
    // ---------------------------------------------------------------------
    pub fn reg(&self, r: Register) -> u16 {
        self.state.reg(r)
    }
    pub fn set_reg(&mut self, r: Register, v: u16) {
        self.state.set_reg(r, v);
    }
    pub fn pc(&self) -> u16 {
        self.state.pc
    }
    pub fn set_pc(&mut self, v: u16) {
        self.state.pc = v;
    }
    pub fn sp(&self) -> u16 {
        self.state.sp
    }
    pub fn set_sp(&mut self, v: u16) {
        self.state.sp = v;
    }
    pub fn o(&self) -> u16 {
        self.state.o
    }
    pub fn set_o(&mut self, v: u16) {
        self.state.o = v;
    }

    // ---------------------------------------------------------------------
    // Memory
    // ---------------------------------------------------------------------
    pub fn read_memory(&self, addr: u16) -> u16 {
        self.state.memory.read(addr)
    }
    pub fn write_memory(&mut self, addr: u16, value: u16) {
        self.state.memory.write(addr, value);
    }
    pub fn memory(&self) -> &Memory {
        &self.state.memory
    }
    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.state.memory
    }

    // ---------------------------------------------------------------------
    // Execution
    // ---------------------------------------------------------------------

    /// Total cycles charged since power-up or the last reset.
    pub fn cycles(&self) -> u64 {
        self.state.cycles()
    }

    /// True if the next instruction will be skipped.
    pub fn is_skipping(&self) -> bool {
        self.state.skipping()
    }

    /// Execute (or skip) one instruction, returning the cycles it consumed.
    pub fn step(&mut self) -> Result<u32, CpuFault> {
        dispatch::step(&mut self.state)
    }

    /// Execute `max_steps` steps and return the cycles they consumed.
    pub fn run_for(&mut self, max_steps: u64) -> Result<u64, CpuFault> {
        let mut cycles = 0u64;
        for _ in 0..max_steps {
            cycles += u64::from(self.step()?);
        }
        Ok(cycles)
    }

    /// Step until a fault. There is no halt instruction, so this only
    /// returns with an error.
    pub fn run(&mut self) -> Result<Infallible, CpuFault> {
        loop {
            self.step()?;
        }
    }
}
