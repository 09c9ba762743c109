// crates/xortool-core/src/coincidence.rs

use crate::freq::frequencies;

/// Matches a residue class gets for free: one byte always "coincides" with itself.
const FREE_MATCHES: usize = 1;

/// Sum over every offset of (most frequent byte count - 1) for the given key length.
///
/// At the true key length every byte of one residue class was XORed with the
/// same key byte, so a dominant plaintext byte shows up as a spike here.
/// Returns 0 when `key_length >= ciphertext.len()`.
pub fn count_equals(ciphertext: &[u8], key_length: usize) -> usize {
    if key_length == 0 || key_length >= ciphertext.len() {
        return 0;
    }

    (0..key_length)
        .map(|offset| {
            frequencies(ciphertext, key_length, offset)
                .max_count()
                .saturating_sub(FREE_MATCHES)
        })
        .sum()
}
