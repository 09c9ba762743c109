// crates/xortool-cli/src/io/mod.rs

pub mod input;
pub mod output;
