/*!
Memory image loader.

Image format:
- Exactly `IMAGE_BYTES` (0x20000) bytes: 0x10000 big-endian words, loaded
  starting at address $0000.
- Trailing bytes past the image are ignored.
- A shorter stream is rejected with `ImageError::Truncated`.

Every loader decodes into a fresh `Memory` and only hands it back when the
whole image was read, so callers swapping it into a CPU never observe a
half-written address space.
*/

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::ImageError;
use crate::memory::{IMAGE_BYTES, Memory};

/// Decode an image held in memory.
pub fn from_bytes(bytes: &[u8]) -> Result<Memory, ImageError> {
    Memory::decode_image(bytes).ok_or(ImageError::Truncated {
        expected: IMAGE_BYTES,
        actual: bytes.len(),
    })
}

/// Read and decode an image from any byte stream.
///
/// Reads at most `IMAGE_BYTES`; the rest of the stream is left unread.
pub fn from_reader<R: Read>(reader: R) -> Result<Memory, ImageError> {
    let mut buffer = Vec::with_capacity(IMAGE_BYTES);
    reader.take(IMAGE_BYTES as u64).read_to_end(&mut buffer)?;
    let memory = from_bytes(&buffer)?;
    debug!(bytes = buffer.len(), "memory image loaded");
    Ok(memory)
}

/// Open a file on disk and decode it as an image.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Memory, ImageError> {
    let file = File::open(path.as_ref())?;
    from_reader(file)
}
