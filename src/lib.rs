#![doc = r#"
DCPU-16 interpreter library crate.

This crate exposes the emulator core modules for use by the runner binary
and by embedding applications.

Modules:
- cpu: processor core (facade + state + operand resolution + dispatch)
- error: image load errors and execution faults
- image: memory image loading (bytes, streams, files)
- memory: 64 Ki-word, word-addressed memory

In tests, shared instruction encoders and image builders are available
under `crate::test_utils`.
"#]

// Core emulator modules
pub mod cpu;
pub mod error;
pub mod image;
pub mod memory;

// Re-export commonly used types at the crate root for convenience.
pub use cpu::core::Cpu;
pub use cpu::state::{CpuState, Register};
pub use error::{CpuFault, ImageError};
pub use memory::Memory;

// Shared test utilities (only compiled for tests)
#[cfg(test)]
pub mod test_utils;
