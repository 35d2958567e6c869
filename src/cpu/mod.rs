/*!
cpu::mod - Public facade for the DCPU-16 core.

Layout:

```text
    state.rs        - Architectural state (registers, memory, PC, SP, O) + stack helpers.
    decode.rs       - Instruction word field extraction and opcode constants.
    operand.rs      - Operand code resolution (register / memory / stack / literal).
    cycles.rs       - Base instruction costs and per-operand surcharges.
    execute.rs      - Pure ALU and comparison helpers.
    table.rs        - Static basic / extended opcode tables.
    dispatch/       - Single step orchestration + per-family handlers.
    core/           - `Cpu` facade over `CpuState`.
```

The public surface is the `Cpu` facade. Downstream code should not rely on
the internal module layout.

Usage:
```rust
use dcpu16::{Cpu, Register};

let mut cpu = Cpu::new();
cpu.write_memory(0x0000, 0x7C01); // SET A, next word
cpu.write_memory(0x0001, 0x0030);
cpu.step().unwrap();
assert_eq!(cpu.reg(Register::A), 0x0030);
```
*/

pub mod core;
pub(crate) mod cycles;
pub mod decode;
pub(crate) mod dispatch;
pub(crate) mod execute;
pub mod operand;
pub mod state;
pub(crate) mod table;

#[cfg(test)]
mod tests;

// Re-exports:
// - Cpu (facade over CpuState)
// - CpuState (raw state; exposed for tests and embedders)
pub use crate::cpu::core::Cpu;
pub use crate::cpu::decode::Instruction;
pub use crate::cpu::operand::Operand;
pub use crate::cpu::state::{CpuState, Register, SP_RESET};
