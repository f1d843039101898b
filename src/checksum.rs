/// Disk Copy 4.2 data checksum
///
/// Each big-endian 16-bit word is added to a 32-bit accumulator (wrapping),
/// then the accumulator is rotated right by one bit.

/// Rolling add-then-rotate checksum over 16-bit words
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DataChecksum {
    acc: u32,
}

impl DataChecksum {
    /// Create a checksum with a zero accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one 16-bit word
    #[inline]
    pub fn update(&mut self, word: u16) {
        self.acc = self.acc.wrapping_add(word as u32).rotate_right(1);
    }

    /// Feed one word in its on-disk (big-endian) byte order
    #[inline]
    pub fn update_word_bytes(&mut self, word: [u8; 2]) {
        self.update(u16::from_be_bytes(word));
    }

    /// Feed a buffer of words; a trailing odd byte is ignored
    pub fn update_bytes(&mut self, bytes: &[u8]) {
        for pair in bytes.chunks_exact(2) {
            self.update_word_bytes([pair[0], pair[1]]);
        }
    }

    /// Consume the checksum and return the final value
    pub fn finalize(self) -> u32 {
        self.acc
    }

    /// Checksum of a whole buffer
    pub fn of(bytes: &[u8]) -> u32 {
        let mut checksum = Self::new();
        checksum.update_bytes(bytes);
        checksum.finalize()
    }
}
