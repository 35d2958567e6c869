/*!
error.rs - Error and fault types surfaced by the interpreter.

Two families:
- `ImageError`: returned by the image loaders. Loading is all-or-nothing, so
  an `Err` guarantees memory was not touched.
- `CpuFault`: returned from `Cpu::step` (and the run helpers) when the
  dispatcher hits an instruction it cannot execute. State mutated by earlier
  steps is kept as-is.
*/

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("memory image too short: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
    #[error("failed to read memory image: {0}")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuFault {
    /// Extended instruction whose opcode field has no handler.
    #[error("undefined extended opcode {opcode:#04x} at {address:#06x}")]
    UndefinedExtendedOpcode { opcode: u8, address: u16 },
}
