/*!
execute.rs - DCPU-16 ALU semantics as pure functions.

Purpose
=======
Every arithmetic, bitwise and conditional instruction reduces to a function
of two input words. Keeping those functions free of CPU state means the
family handlers in `dispatch` only deal with operand plumbing, and the
arithmetic laws can be tested exhaustively without building a machine.

Result Convention
=================
Arithmetic helpers return an `AluResult`: the value for the first operand
and an optional new O. `overflow: None` means the instruction leaves O
untouched on this path (ADD without carry, SUB without borrow, MOD).

Shift Amounts
=============
Shift counts are full 16-bit values. Counts at or past the width of the
intermediate shift to 0 instead of panicking.
*/

/// Outcome of an arithmetic instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AluResult {
    pub value: u16,
    pub overflow: Option<u16>,
}

impl AluResult {
    #[inline]
    fn new(value: u16, overflow: Option<u16>) -> Self {
        Self { value, overflow }
    }
}

// ---------------------------------------------------------------------------
// Arithmetic
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn add(a: u16, b: u16) -> AluResult {
    let (value, carry) = a.overflowing_add(b);
    AluResult::new(value, carry.then_some(0x0001))
}

#[inline]
pub(crate) fn sub(a: u16, b: u16) -> AluResult {
    let (value, borrow) = a.overflowing_sub(b);
    AluResult::new(value, borrow.then_some(0xFFFF))
}

#[inline]
pub(crate) fn mul(a: u16, b: u16) -> AluResult {
    let product = a as u32 * b as u32;
    AluResult::new(product as u16, Some((product >> 16) as u16))
}

#[inline]
pub(crate) fn div(a: u16, b: u16) -> AluResult {
    if b == 0 {
        return AluResult::new(0, Some(0));
    }
    let o = ((a as u32) << 16) / b as u32;
    AluResult::new(a / b, Some(o as u16))
}

#[inline]
pub(crate) fn modulo(a: u16, b: u16) -> AluResult {
    if b == 0 {
        return AluResult::new(0, Some(0));
    }
    AluResult::new(a % b, None)
}

#[inline]
pub(crate) fn shl(a: u16, b: u16) -> AluResult {
    let wide = (a as u32).checked_shl(b as u32).unwrap_or(0);
    AluResult::new(wide as u16, Some((wide >> 16) as u16))
}

#[inline]
pub(crate) fn shr(a: u16, b: u16) -> AluResult {
    let o = ((a as u32) << 16).checked_shr(b as u32).unwrap_or(0);
    let value = a.checked_shr(b as u32).unwrap_or(0);
    AluResult::new(value, Some(o as u16))
}

// ---------------------------------------------------------------------------
// Conditions (true = execute the next instruction)
// ---------------------------------------------------------------------------

#[inline]
pub(crate) fn ife(a: u16, b: u16) -> bool {
    a == b
}

#[inline]
pub(crate) fn ifn(a: u16, b: u16) -> bool {
    a != b
}

#[inline]
pub(crate) fn ifg(a: u16, b: u16) -> bool {
    a > b
}

#[inline]
pub(crate) fn ifb(a: u16, b: u16) -> bool {
    (a & b) != 0
}
