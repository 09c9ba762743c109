// crates/xortool-cli/src/io/input.rs

use std::io::Read;

use anyhow::{Context, Result};

/// Read the whole ciphertext from `path`, or from stdin for `None` / "-".
pub fn load(path: Option<&str>) -> Result<Vec<u8>> {
    match path {
        None | Some("-") => {
            let mut buf = Vec::new();
            std::io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .context("read ciphertext from stdin")?;
            Ok(buf)
        }
        Some(p) => std::fs::read(p).with_context(|| format!("read ciphertext {p}")),
    }
}

/// Decode hex text, ignoring ASCII whitespace (line breaks, indentation).
pub fn decode_hex(text: &[u8]) -> Result<Vec<u8>> {
    let digits: Vec<u8> = text
        .iter()
        .copied()
        .filter(|b| !b.is_ascii_whitespace())
        .collect();
    hex::decode(&digits).context("decode hex input")
}
