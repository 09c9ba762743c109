// crates/xortool-core/src/keylen.rs
//
// Key-length estimation:
// - raw score for each candidate length L = coincidence::count_equals(C, L)
// - fitness = raw / (FITNESS_BASE + sqrt(L))
// - strict three-point local maxima of the fitness curve form the table
// - the best length is the table entry with the highest fitness
// - divisors (>= 3) shared by many reported lengths form an advisory hint
//
// The normalisation constants are empirical. Changing them changes every
// reported percentage.

use tracing::debug;

use crate::coincidence::count_equals;

/// Additive term of the fitness denominator.
pub const FITNESS_BASE: f64 = 64.0;

/// Smallest divisor considered by the divisor hint.
pub const MIN_HINT_DIVISOR: usize = 3;

#[inline]
pub fn fitness(raw: usize, key_length: usize) -> f64 {
    raw as f64 / (FITNESS_BASE + (key_length as f64).sqrt())
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitnessEntry {
    pub key_length: usize,
    pub fitness: f64,
}

/// Local maxima of the fitness curve, ascending by key length.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FitnessTable {
    entries: Vec<FitnessEntry>,
}

impl FitnessTable {
    pub fn entries(&self) -> &[FitnessEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fitness_sum(&self) -> f64 {
        self.entries.iter().map(|e| e.fitness).sum()
    }

    /// Each entry's share of the summed fitness, in percent.
    pub fn percentages(&self) -> Vec<(usize, f64)> {
        let sum = self.fitness_sum();
        self.entries
            .iter()
            .map(|e| {
                let pct = if sum > 0.0 { 100.0 * e.fitness / sum } else { 0.0 };
                (e.key_length, pct)
            })
            .collect()
    }

    /// Key length with the highest fitness, first one on ties. 0 when empty.
    pub fn best_length(&self) -> usize {
        let mut best_fitness = 0.0;
        let mut best_length = 0;
        for e in &self.entries {
            if e.fitness > best_fitness {
                best_fitness = e.fitness;
                best_length = e.key_length;
            }
        }
        best_length
    }

    pub fn divisor_hint(&self) -> Option<DivisorHint> {
        let longest = self.entries.iter().map(|e| e.key_length).max()?;
        let mut counts = vec![0usize; longest + 1];
        for e in &self.entries {
            for d in MIN_HINT_DIVISOR..=e.key_length {
                if e.key_length % d == 0 {
                    counts[d] += 1;
                }
            }
        }

        let count = counts.iter().copied().max().unwrap_or(0);
        if count == 0 {
            return None;
        }
        let divisors = counts
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == count)
            .map(|(d, _)| d)
            .collect();
        Some(DivisorHint { divisors, count })
    }
}

/// "Key length may be a multiple of D". Purely advisory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DivisorHint {
    /// Every divisor reaching `count`, ascending.
    pub divisors: Vec<usize>,
    /// Number of reported lengths each of them divides.
    pub count: usize,
}

impl DivisorHint {
    /// The largest of the tied divisors.
    pub fn divisor(&self) -> usize {
        self.divisors.last().copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyLengthEstimate {
    /// 0 means no length could be determined.
    pub best_length: usize,
    pub table: FitnessTable,
    pub divisor_hint: Option<DivisorHint>,
}

/// Sweep key lengths `1..=max_key_length` and collect local fitness maxima.
pub fn estimate(ciphertext: &[u8], max_key_length: usize) -> KeyLengthEstimate {
    let raws = raw_counts(ciphertext, max_key_length);

    // A maximum at L-1 is only known once L has been scored. Both lookbehind
    // samples start at 0, the last length never gets a lookahead.
    let mut pprev = 0.0f64;
    let mut prev = 0.0f64;
    let mut entries = Vec::new();
    for (i, &raw) in raws.iter().enumerate() {
        let key_length = i + 1;
        let cur = fitness(raw, key_length);
        if pprev < prev && prev > cur {
            entries.push(FitnessEntry {
                key_length: key_length - 1,
                fitness: prev,
            });
        }
        pprev = prev;
        prev = cur;
    }

    let table = FitnessTable { entries };
    let best_length = table.best_length();
    let divisor_hint = table.divisor_hint();

    debug!(
        ciphertext_len = ciphertext.len(),
        max_key_length,
        maxima = table.len(),
        best_length,
        "key length sweep done"
    );

    KeyLengthEstimate {
        best_length,
        table,
        divisor_hint,
    }
}

#[cfg(feature = "parallel")]
fn raw_counts(ciphertext: &[u8], max_key_length: usize) -> Vec<usize> {
    use rayon::prelude::*;

    (1..=max_key_length)
        .into_par_iter()
        .map(|l| count_equals(ciphertext, l))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn raw_counts(ciphertext: &[u8], max_key_length: usize) -> Vec<usize> {
    (1..=max_key_length)
        .map(|l| count_equals(ciphertext, l))
        .collect()
}
