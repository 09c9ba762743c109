// crates/xortool-core/src/analysis.rs
//
// One analysis run over an explicit AnalysisConfig:
//   1) key length: configured, or estimated by the sweep (0 = failure)
//   2) candidate keys for that length and the assumed dominant byte

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::error::{Result, XorError};
use crate::keylen::{self, KeyLengthEstimate};
use crate::keys;

/// Candidate counts above this are logged as a warning.
pub const LARGE_CANDIDATE_COUNT: u128 = 10_000;

#[derive(Clone, Debug, PartialEq)]
pub struct Analysis {
    pub key_length: usize,
    /// Present when the key length was estimated rather than configured.
    pub estimate: Option<KeyLengthEstimate>,
    pub keys: Vec<Vec<u8>>,
    /// Size of the full product, before any candidate limit.
    pub total_candidates: u128,
}

/// Run the key length sweep unless the length is configured.
pub fn estimate_key_length(
    ciphertext: &[u8],
    cfg: &AnalysisConfig,
) -> Result<Option<KeyLengthEstimate>> {
    cfg.validate()?;
    if cfg.key_length.is_some() {
        return Ok(None);
    }
    Ok(Some(keylen::estimate(ciphertext, cfg.max_key_length)))
}

/// The configured key length, else the sweep's best guess. A best guess of 0
/// means no length was found and is an error.
pub fn chosen_key_length(
    cfg: &AnalysisConfig,
    estimate: Option<&KeyLengthEstimate>,
) -> Result<usize> {
    let key_length = match (cfg.key_length, estimate) {
        (Some(l), _) => l,
        (None, Some(est)) => est.best_length,
        (None, None) => 0,
    };
    if key_length == 0 {
        return Err(XorError::KeyLengthUndetermined);
    }
    Ok(key_length)
}

/// Candidate keys of `key_length` bytes, honouring `cfg.candidate_limit`.
/// Also returns the size of the full product.
pub fn guess_keys(
    ciphertext: &[u8],
    key_length: usize,
    cfg: &AnalysisConfig,
) -> Result<(Vec<Vec<u8>>, u128)> {
    let sets = keys::candidate_sets(ciphertext, key_length, cfg.most_frequent_byte)?;
    let total = keys::candidate_count(&sets);
    if total > LARGE_CANDIDATE_COUNT {
        warn!(total_candidates = %total, key_length, "large number of candidate keys");
    }

    let out = keys::expand(&sets, cfg.candidate_limit);
    debug!(key_length, keys = out.len(), total_candidates = %total, "keys guessed");
    Ok((out, total))
}

/// Key length and candidate keys for `ciphertext`.
pub fn run(ciphertext: &[u8], cfg: &AnalysisConfig) -> Result<Analysis> {
    let estimate = estimate_key_length(ciphertext, cfg)?;
    let key_length = chosen_key_length(cfg, estimate.as_ref())?;
    let (keys, total_candidates) = guess_keys(ciphertext, key_length, cfg)?;
    Ok(Analysis {
        key_length,
        estimate,
        keys,
        total_candidates,
    })
}
