pub mod error;
pub mod config;

pub mod coincidence;
pub mod freq;
pub mod keylen;
pub mod keys;
pub mod dexor;
pub mod analysis;

pub use crate::analysis::Analysis;
pub use crate::config::AnalysisConfig;
pub use crate::error::{Result, XorError};
pub use crate::keylen::{FitnessEntry, FitnessTable, KeyLengthEstimate};
