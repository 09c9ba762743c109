// crates/xortool-cli/src/io/output.rs
//
// Plaintext materialisation: one file per candidate key under a fresh
// directory. File name = <index, zero-padded to the width of the last index>
// "_" <escaped key>, with '/' written as \x2f. On Windows only the ASCII
// alphanumerics of the key are kept.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};
use xortool_core::dexor::dexor;

/// Printable rendering of key bytes: printable ASCII as-is, backslash and
/// control bytes escaped.
pub fn key_repr(key: &[u8]) -> String {
    let mut s = String::with_capacity(key.len());
    for &b in key {
        match b {
            b'\\' => s.push_str("\\\\"),
            b'\t' => s.push_str("\\t"),
            b'\n' => s.push_str("\\n"),
            b'\r' => s.push_str("\\r"),
            0x20..=0x7e => s.push(b as char),
            _ => s.push_str(&format!("\\x{b:02x}")),
        }
    }
    s
}

fn key_file_part(key: &[u8]) -> String {
    if cfg!(windows) {
        key.iter()
            .filter(|b| b.is_ascii_alphanumeric())
            .map(|&b| b as char)
            .collect()
    } else {
        key_repr(key).replace('/', "\\x2f")
    }
}

pub fn file_name(index: usize, key_count: usize, key: &[u8]) -> String {
    let width = key_count.saturating_sub(1).to_string().len();
    format!("{index:0width$}_{}", key_file_part(key))
}

/// Recreate `dir` and write `dexor(ciphertext, key)` for every key.
pub fn write_plaintexts(dir: &Path, ciphertext: &[u8], keys: &[Vec<u8>]) -> Result<usize> {
    if dir.exists() {
        debug!(dir = %dir.display(), "removing previous output");
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("remove output dir {}", dir.display()))?;
    }
    std::fs::create_dir_all(dir).with_context(|| format!("create output dir {}", dir.display()))?;

    for (index, key) in keys.iter().enumerate() {
        let path = dir.join(file_name(index, keys.len(), key));
        std::fs::write(&path, dexor(ciphertext, key))
            .with_context(|| format!("write plaintext {}", path.display()))?;
    }

    info!(dir = %dir.display(), files = keys.len(), "plaintexts written");
    Ok(keys.len())
}
