// crates/xortool-cli/src/main.rs

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use xortool_core::analysis;

mod args;
mod io;
mod report;

use crate::args::Cli;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let cfg = cli.analysis_config();

    let mut ciphertext = io::input::load(cli.file.as_deref())?;
    if cli.hex {
        ciphertext = io::input::decode_hex(&ciphertext)?;
    }
    info!(bytes = ciphertext.len(), hex = cli.hex, "ciphertext loaded");

    let estimate = analysis::estimate_key_length(&ciphertext, &cfg)?;
    if let Some(est) = &estimate {
        report::print_fitnesses(&est.table);
        report::print_divisor_hint(est.divisor_hint.as_ref());
    }
    let key_length = analysis::chosen_key_length(&cfg, estimate.as_ref()).with_context(|| {
        format!(
            "no probable key length found up to {} (ciphertext is {} bytes)",
            cfg.max_key_length,
            ciphertext.len()
        )
    })?;

    let (keys, total) = analysis::guess_keys(&ciphertext, key_length, &cfg)?;
    report::print_keys(&keys, key_length, total);

    if !cli.no_plaintexts && !keys.is_empty() {
        let n = io::output::write_plaintexts(Path::new(&cli.out_dir), &ciphertext, &keys)?;
        println!("Found {} plaintexts in {}/", n, cli.out_dir);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(cli)
}
