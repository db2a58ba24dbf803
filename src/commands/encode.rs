//! `chronon encode` — batch-encode a message into a JSON time array.
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use base64::{engine::general_purpose, Engine as _};
use colored::Colorize;

use crate::config::{load_profile, resolve_config_path};
use crate::core::channel::SecureChannel;

pub fn run(
    message: &str,
    from_base64: bool,
    start: f64,
    out: Option<&Path>,
    config: &Option<PathBuf>,
) -> Result<()> {
    let bytes = if from_base64 {
        general_purpose::STANDARD
            .decode(message.trim())
            .context("decode base64 message")?
    } else {
        message.as_bytes().to_vec()
    };
    if bytes.is_empty() {
        bail!("nothing to encode");
    }

    let path = resolve_config_path(config);
    let profile = load_profile(path.as_deref())?;
    let mut channel = SecureChannel::new(profile.prime_a, profile.prime_b).with_context(|| {
        format!(
            "stored prime pair ({}, {}) rejected",
            profile.prime_a, profile.prime_b
        )
    })?;

    let times = channel.encode(&bytes, start).context("encode failed")?;
    let json = serde_json::to_string(&times)?;

    match out {
        Some(p) => {
            fs::write(p, &json).with_context(|| format!("write time array {}", p.display()))?;
            eprintln!(
                "{} {} byte(s) -> {} time value(s) -> {}",
                "ok".green().bold(),
                bytes.len(),
                times.len(),
                p.display()
            );
        }
        None => {
            println!("{json}");
            eprintln!(
                "{} {} byte(s) -> {} time value(s)",
                "ok".green().bold(),
                bytes.len(),
                times.len()
            );
        }
    }
    Ok(())
}
