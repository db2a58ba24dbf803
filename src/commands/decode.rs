//! `chronon decode` — replay a JSON time array back into bytes.
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use base64::{engine::general_purpose, Engine as _};
use colored::Colorize;

use crate::config::{load_profile, resolve_config_path};
use crate::core::channel::SecureChannel;

pub fn run(times_path: &Path, as_base64: bool, config: &Option<PathBuf>) -> Result<()> {
    let raw = if times_path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read times from stdin")?;
        buf
    } else {
        fs::read_to_string(times_path)
            .with_context(|| format!("read time array {}", times_path.display()))?
    };
    let times: Vec<f64> = serde_json::from_str(raw.trim()).context("parse JSON time array")?;

    let path = resolve_config_path(config);
    let profile = load_profile(path.as_deref())?;
    let mut channel = SecureChannel::new(profile.prime_a, profile.prime_b).with_context(|| {
        format!(
            "stored prime pair ({}, {}) rejected",
            profile.prime_a, profile.prime_b
        )
    })?;

    let bytes = channel.decode(&times);

    if as_base64 {
        println!("{}", general_purpose::STANDARD.encode(&bytes));
    } else {
        match String::from_utf8(bytes) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                // Non-text payload: fall back to base64 rather than mangling it.
                let bytes = e.into_bytes();
                eprintln!("{} payload is not UTF-8; printing base64", "note".yellow());
                println!("{}", general_purpose::STANDARD.encode(&bytes));
            }
        }
    }
    Ok(())
}
