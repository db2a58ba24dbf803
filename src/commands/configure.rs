//! `chronon configure` — validate a prime pair, then persist it.
use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::config::{resolve_config_path, save_profile, ChannelProfile};
use crate::core::channel::SecureChannel;

pub fn run(p1: u64, p2: u64, config: &Option<PathBuf>) -> Result<()> {
    // Prove the pair out before touching the stored profile, so a bad
    // pair leaves the previous key in place.
    SecureChannel::new(p1, p2).with_context(|| format!("prime pair ({p1}, {p2}) rejected"))?;

    let path = resolve_config_path(config)
        .context("no home directory found; pass --config <FILE>")?;
    save_profile(&path, &ChannelProfile { prime_a: p1, prime_b: p2 })?;

    println!(
        "{} channel keyed to ({p1}, {p2}) -> {}",
        "ok".green().bold(),
        path.display()
    );
    Ok(())
}
