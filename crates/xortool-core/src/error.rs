use thiserror::Error;

pub type Result<T> = std::result::Result<T, XorError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum XorError {
    #[error("most frequent plaintext byte is needed to guess the key")]
    MissingMostFrequentByte,

    #[error("key length could not be determined")]
    KeyLengthUndetermined,

    #[error("config error: {0}")]
    Config(String),
}
