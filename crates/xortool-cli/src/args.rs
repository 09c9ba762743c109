// crates/xortool-cli/src/args.rs

use clap::Parser;
use xortool_core::config::{AnalysisConfig, DEFAULT_MAX_KEY_LENGTH};

pub const DEFAULT_OUT_DIR: &str = "xortool_out";

#[derive(Parser, Debug)]
#[command(name = "xortool")]
#[command(
    about = "Guess the length and value of a repeating XOR key",
    long_about = None
)]
pub struct Cli {
    /// Ciphertext file. Reads stdin when omitted or "-".
    pub file: Option<String>,

    /// Length of the key. Skips the key length sweep.
    #[arg(short = 'l', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub key_length: Option<u64>,

    /// Most frequent plaintext byte: a character (' '), two hex digits (20) or \xNN
    #[arg(short = 'c', long = "char", value_parser = parse_char)]
    pub most_frequent_char: Option<u8>,

    /// Input is hex-encoded text
    #[arg(short = 'x', long)]
    pub hex: bool,

    /// Maximum key length to probe
    #[arg(
        short = 'm',
        long = "max-keylen",
        default_value_t = DEFAULT_MAX_KEY_LENGTH as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_key_length: u64,

    /// Directory receiving one plaintext per candidate key (recreated on each run)
    #[arg(short = 'o', long, default_value = DEFAULT_OUT_DIR)]
    pub out_dir: String,

    /// Stop after this many candidate keys
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Only print the report, do not write plaintexts
    #[arg(long, default_value_t = false)]
    pub no_plaintexts: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn analysis_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            key_length: self.key_length.map(|l| l as usize),
            most_frequent_byte: self.most_frequent_char,
            max_key_length: self.max_key_length as usize,
            candidate_limit: self.limit.map(|n| n as usize),
        }
    }
}

/// Accepts a single ASCII character, two hex digits, or `\xNN` / `0xNN`.
pub fn parse_char(s: &str) -> Result<u8, String> {
    let mut chars = s.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return if c.is_ascii() {
            Ok(c as u8)
        } else {
            Err(format!("not a single byte: {s:?}"))
        };
    }

    let digits = s
        .strip_prefix("\\x")
        .or_else(|| s.strip_prefix("0x"))
        .unwrap_or(s);
    if digits.len() == 2 {
        if let Ok(b) = u8::from_str_radix(digits, 16) {
            return Ok(b);
        }
    }
    Err(format!(
        "expected a character, two hex digits or \\xNN, got {s:?}"
    ))
}
