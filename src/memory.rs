/*!
Memory module: the 64 Ki-word (128 KiB) address space of the processor.

Address map:
- $0000-$FFFF: one 16-bit word per address, no mirroring, no I/O.

Every address arithmetic in the core is done on `u16`, so any address that
reaches this type is already in range; there is no out-of-bounds path.
The image decoder lives here too because the word layout (big-endian pairs)
is a property of memory, not of where the bytes came from.
*/

/// Number of addressable words.
pub const MEMORY_WORDS: usize = 0x1_0000;

/// Size in bytes of a full memory image (two bytes per word).
pub const IMAGE_BYTES: usize = MEMORY_WORDS * 2;

/// Word-addressed memory.
#[derive(Clone, PartialEq, Eq)]
pub struct Memory {
    data: Box<[u16]>,
}

impl std::fmt::Debug for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let used = self.data.iter().filter(|&&w| w != 0).count();
        f.debug_struct("Memory")
            .field("words", &self.data.len())
            .field("non_zero", &used)
            .finish()
    }
}

impl Default for Memory {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Memory {
    /// Create a zero-filled memory.
    pub fn new() -> Self {
        Self {
            data: vec![0; MEMORY_WORDS].into_boxed_slice(),
        }
    }

    /// Clear memory contents to 0.
    #[inline]
    pub fn reset(&mut self) {
        self.data.fill(0);
    }

    #[inline]
    pub fn read(&self, addr: u16) -> u16 {
        self.data[addr as usize]
    }

    #[inline]
    pub fn write(&mut self, addr: u16, value: u16) {
        self.data[addr as usize] = value;
    }

    /// Copy `words` into memory starting at `origin`, wrapping past $FFFF.
    pub fn load_words(&mut self, origin: u16, words: &[u16]) {
        let mut addr = origin;
        for &w in words {
            self.write(addr, w);
            addr = addr.wrapping_add(1);
        }
    }

    /// Read-only view of every word, indexed by address.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.data
    }

    /// Decode a full image (big-endian word pairs) into a fresh memory.
    ///
    /// `bytes` must hold at least `IMAGE_BYTES`; anything past that is ignored.
    /// Returns `None` when the slice is short.
    pub(crate) fn decode_image(bytes: &[u8]) -> Option<Self> {
        let image = bytes.get(..IMAGE_BYTES)?;
        let data: Box<[u16]> = image
            .chunks_exact(2)
            .map(|pair| u16::from_be_bytes([pair[0], pair[1]]))
            .collect();
        Some(Self { data })
    }
}
