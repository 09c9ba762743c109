// crates/xortool-core/src/dexor.rs

/// Repeating-key XOR. Encrypts and decrypts alike; an empty key returns the input.
pub fn dexor(data: &[u8], key: &[u8]) -> Vec<u8> {
    if key.is_empty() {
        return data.to_vec();
    }
    data.iter()
        .zip(key.iter().cycle())
        .map(|(d, k)| d ^ k)
        .collect()
}
