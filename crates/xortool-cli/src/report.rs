// crates/xortool-cli/src/report.rs

use xortool_core::keylen::{DivisorHint, FitnessTable};

use crate::io::output::key_repr;

/// Keys printed before the listing is cut with "...".
pub const KEYS_SHOWN: usize = 5;

pub fn print_fitnesses(table: &FitnessTable) {
    println!("Probable key lengths:");
    for (key_length, pct) in table.percentages() {
        println!("{key_length:>4}:   {pct:.1} %");
    }
}

pub fn print_divisor_hint(hint: Option<&DivisorHint>) {
    if let Some(h) = hint {
        for d in &h.divisors {
            println!("Key-length can be {d}*n");
        }
    }
}

pub fn print_keys(keys: &[Vec<u8>], key_length: usize, total: u128) {
    if total == 0 {
        println!("No keys guessed!");
        return;
    }
    println!("{} possible key(s) of length {}:", total, key_length);
    for key in keys.iter().take(KEYS_SHOWN) {
        println!("{}", key_repr(key));
    }
    if keys.len() > KEYS_SHOWN || (keys.len() as u128) < total {
        println!("...");
    }
}
