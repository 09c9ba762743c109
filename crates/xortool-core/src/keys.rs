// crates/xortool-core/src/keys.rs
//
// Key guessing from a known key length and an assumed dominant plaintext byte:
// - for each offset, every ciphertext byte reaching the offset's maximum count
//   is a candidate (ties are all kept)
// - candidate key byte = ciphertext byte ^ most_frequent_byte
// - full keys = Cartesian product of the per-offset sets, first offset slowest
//
// The product can grow exponentially with the number of tied offsets.
// `candidate_count` sizes it without materialising anything.

use tracing::debug;

use crate::error::{Result, XorError};
use crate::freq::frequencies;

/// Per-offset key byte candidates, ascending by ciphertext byte value.
/// An offset holding no ciphertext byte yields an empty set. When `key_length`
/// exceeds the ciphertext, every offset past its end is empty, so those offsets
/// collapse into one trailing empty set: the product is the same (empty) and
/// the table stays bounded by the ciphertext size.
pub fn key_byte_candidates(
    ciphertext: &[u8],
    key_length: usize,
    most_frequent_byte: u8,
) -> Vec<Vec<u8>> {
    let populated = key_length.min(ciphertext.len());
    let mut sets: Vec<Vec<u8>> = (0..populated)
        .map(|offset| {
            let h = frequencies(ciphertext, key_length, offset);
            h.bytes_with_count(h.max_count())
                .into_iter()
                .map(|b| b ^ most_frequent_byte)
                .collect()
        })
        .collect();
    if key_length > populated {
        sets.push(Vec::new());
    }
    sets
}

/// Size of the Cartesian product over `sets`, saturating at `u128::MAX`.
pub fn candidate_count(sets: &[Vec<u8>]) -> u128 {
    sets.iter()
        .fold(1u128, |acc, s| acc.saturating_mul(s.len() as u128))
}

/// Odometer over the Cartesian product of per-offset candidate sets.
/// The last offset varies fastest.
pub struct CandidateKeys<'a> {
    sets: &'a [Vec<u8>],
    idx: Vec<usize>,
    done: bool,
}

impl<'a> CandidateKeys<'a> {
    pub fn new(sets: &'a [Vec<u8>]) -> Self {
        Self {
            sets,
            idx: vec![0; sets.len()],
            done: sets.iter().any(|s| s.is_empty()),
        }
    }
}

impl Iterator for CandidateKeys<'_> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        if self.done {
            return None;
        }

        let key: Vec<u8> = self
            .idx
            .iter()
            .zip(self.sets.iter())
            .map(|(&i, set)| set[i])
            .collect();

        // advance
        for pos in (0..self.idx.len()).rev() {
            self.idx[pos] += 1;
            if self.idx[pos] < self.sets[pos].len() {
                return Some(key);
            }
            self.idx[pos] = 0;
        }
        self.done = true;
        Some(key)
    }
}

/// Candidate sets for `key_length`, after checking the preconditions shared by
/// every key-guessing entry point.
///
/// Fails with `MissingMostFrequentByte` when no dominant plaintext byte is
/// assumed and with `KeyLengthUndetermined` for a zero key length.
pub fn candidate_sets(
    ciphertext: &[u8],
    key_length: usize,
    most_frequent_byte: Option<u8>,
) -> Result<Vec<Vec<u8>>> {
    let most_frequent_byte = most_frequent_byte.ok_or(XorError::MissingMostFrequentByte)?;
    if key_length == 0 {
        return Err(XorError::KeyLengthUndetermined);
    }
    let sets = key_byte_candidates(ciphertext, key_length, most_frequent_byte);
    debug!(
        key_length,
        most_frequent_byte,
        candidates = %candidate_count(&sets),
        "key byte candidates collected"
    );
    Ok(sets)
}

/// Materialise the product of `sets`, at most `limit` keys when given.
pub fn expand(sets: &[Vec<u8>], limit: Option<usize>) -> Vec<Vec<u8>> {
    let candidates = CandidateKeys::new(sets);
    match limit {
        Some(n) => candidates.take(n).collect(),
        None => candidates.collect(),
    }
}

/// Every candidate key of `key_length` bytes.
pub fn generate(
    ciphertext: &[u8],
    key_length: usize,
    most_frequent_byte: Option<u8>,
) -> Result<Vec<Vec<u8>>> {
    let sets = candidate_sets(ciphertext, key_length, most_frequent_byte)?;
    Ok(expand(&sets, None))
}

/// Like `generate`, stopping after `limit` keys (same order).
pub fn generate_limited(
    ciphertext: &[u8],
    key_length: usize,
    most_frequent_byte: Option<u8>,
    limit: usize,
) -> Result<Vec<Vec<u8>>> {
    let sets = candidate_sets(ciphertext, key_length, most_frequent_byte)?;
    Ok(expand(&sets, Some(limit)))
}
