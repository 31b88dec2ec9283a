pub const BLOCK_SIZE: usize = 64;

/// Staging area that collects input until a full block is available.
#[derive(Debug, Clone)]
pub struct BlockBuffer {
    bytes: [u8; BLOCK_SIZE],
    len: usize,
}

impl BlockBuffer {
    pub fn new() -> Self {
        BlockBuffer { bytes: [0; BLOCK_SIZE], len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Copies as much of `data` as fits and returns how many bytes were taken.
    pub fn fill(&mut self, data: &[u8]) -> usize {
        let to_copy = data.len().min(BLOCK_SIZE - self.len);
        self.bytes[self.len..self.len + to_copy].copy_from_slice(&data[..to_copy]);
        self.len += to_copy;
        to_copy
    }

    pub fn is_full(&self) -> bool {
        self.len == BLOCK_SIZE
    }

    /// Hands back the full block and empties the buffer.
    pub fn take_block(&mut self) -> Option<&[u8; BLOCK_SIZE]> {
        if !self.is_full() {
            return None
        }
        self.len = 0;
        Some(&self.bytes)
    }

    pub(crate) fn push(&mut self, byte: u8) {
        self.bytes[self.len] = byte;
        self.len += 1;
    }

    /// Zero-fills from the current length up to `offset` and moves the length there.
    pub(crate) fn zero_until(&mut self, offset: usize) {
        self.bytes[self.len..offset].fill(0);
        self.len = offset;
    }

    pub(crate) fn write_length(&mut self, total_bits: u64) {
        self.bytes[BLOCK_SIZE - 8..].copy_from_slice(&total_bits.to_be_bytes());
        self.len = BLOCK_SIZE;
    }
}

impl Default for BlockBuffer {
    fn default() -> Self {
        Self::new()
    }
}
