/*!
decode.rs - Instruction word layout and opcode numbering.

Word layout (bit 15 on the left):

```text
    bbbbbb aaaaaa oooo
```

  o (4 bits)  basic opcode; 0 selects the extended form
  a (6 bits)  first operand code  (extended form: the real opcode)
  b (6 bits)  second operand code (extended form: the only operand)

Decoding is total: every 16-bit word splits into fields without error.
Whether the opcode is actually defined is the dispatcher's concern.
*/

// Basic opcodes (4-bit field).
pub const SET: u8 = 0x1;
pub const ADD: u8 = 0x2;
pub const SUB: u8 = 0x3;
pub const MUL: u8 = 0x4;
pub const DIV: u8 = 0x5;
pub const MOD: u8 = 0x6;
pub const SHL: u8 = 0x7;
pub const SHR: u8 = 0x8;
pub const AND: u8 = 0x9;
pub const BOR: u8 = 0xA;
pub const XOR: u8 = 0xB;
pub const IFE: u8 = 0xC;
pub const IFN: u8 = 0xD;
pub const IFG: u8 = 0xE;
pub const IFB: u8 = 0xF;

// Extended opcodes (6-bit field, selected when the basic opcode is 0).
pub const JSR: u8 = 0x01;

/// A decoded instruction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instruction {
    pub opcode: u8,
    pub a: u8,
    pub b: u8,
}

impl Instruction {
    #[inline]
    pub fn decode(word: u16) -> Self {
        Self {
            opcode: (word & 0xF) as u8,
            a: ((word >> 4) & 0x3F) as u8,
            b: (word >> 10) as u8,
        }
    }

    /// Opcode field zero: `a` is the extended opcode and `b` the operand.
    #[inline]
    pub fn is_extended(&self) -> bool {
        self.opcode == 0
    }
}
