// crates/xortool-core/src/config.rs

use crate::error::{Result, XorError};

pub const DEFAULT_MAX_KEY_LENGTH: usize = 65;

/// Everything one analysis run needs besides the ciphertext itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Known key length. When set, the length sweep is skipped.
    pub key_length: Option<usize>,
    /// Assumed dominant plaintext byte (b' ' for text, 0x00 for binary).
    pub most_frequent_byte: Option<u8>,
    /// Largest key length probed by the sweep.
    pub max_key_length: usize,
    /// Stop enumerating candidate keys after this many. `None` enumerates all.
    pub candidate_limit: Option<usize>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            key_length: None,
            most_frequent_byte: None,
            max_key_length: DEFAULT_MAX_KEY_LENGTH,
            candidate_limit: None,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_key_length == 0 {
            return Err(XorError::Config("max_key_length must be >= 1".into()));
        }
        if self.key_length == Some(0) {
            return Err(XorError::Config("key_length must be >= 1".into()));
        }
        if self.candidate_limit == Some(0) {
            return Err(XorError::Config("candidate_limit must be >= 1".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let c = AnalysisConfig::default();
        assert_eq!(c.max_key_length, 65);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn zero_lengths_are_rejected() {
        let c = AnalysisConfig {
            max_key_length: 0,
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(XorError::Config(_))));

        let c = AnalysisConfig {
            key_length: Some(0),
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(XorError::Config(_))));

        let c = AnalysisConfig {
            candidate_limit: Some(0),
            ..Default::default()
        };
        assert!(matches!(c.validate(), Err(XorError::Config(_))));
    }
}
