// crates/xortool-core/src/freq.rs
//
// Per-offset byte histograms. For a key length L and offset o the histogram
// covers ciphertext positions o, o+L, o+2L, ... i.e. every byte that was
// XORed with key[o].

/// Occurrence counts indexed by byte value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ByteHistogram {
    counts: [usize; 256],
}

impl Default for ByteHistogram {
    fn default() -> Self {
        Self { counts: [0; 256] }
    }
}

impl ByteHistogram {
    #[inline]
    pub fn add(&mut self, b: u8) {
        self.counts[b as usize] += 1;
    }

    #[inline]
    pub fn count(&self, b: u8) -> usize {
        self.counts[b as usize]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Highest count in the table; 0 for an empty table.
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// Byte values whose count equals `n`, ascending.
    pub fn bytes_with_count(&self, n: usize) -> Vec<u8> {
        (0u8..=255u8).filter(|&b| self.counts[b as usize] == n).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }
}

/// Histogram of the ciphertext bytes sitting at `offset` modulo `key_length`.
pub fn frequencies(ciphertext: &[u8], key_length: usize, offset: usize) -> ByteHistogram {
    debug_assert!(key_length > 0);
    let mut h = ByteHistogram::default();
    for &b in ciphertext.iter().skip(offset).step_by(key_length) {
        h.add(b);
    }
    h
}
