use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "chronon",
    about = "Chronon — prime-keyed time-domain channel: configure, encode, decode",
    version,
    propagate_version = true,
    disable_help_subcommand = true
)]
pub struct ChrononCli {
    /// Global: path to channel profile (TOML); default: ~/.chronon/channel.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Validate a prime pair and persist it as the channel profile
    ///
    /// Examples:
    ///   chronon configure 61 97
    Configure {
        #[arg(value_name = "P1")]
        p1: u64,
        #[arg(value_name = "P2")]
        p2: u64,
    },

    /// Encode a message into channel time values (JSON array on stdout)
    ///
    /// Examples:
    ///   chronon encode "meet at noon"
    ///   chronon encode --base64 bWVldA== --start 2.5 -o times.json
    Encode {
        /// Message text (UTF-8), or base64 bytes with --base64
        #[arg(value_name = "MESSAGE")]
        message: String,

        /// Interpret MESSAGE as base64-encoded bytes
        #[arg(long = "base64", action = ArgAction::SetTrue)]
        base64: bool,

        /// Evolution time to start the first search at
        #[arg(long = "start", value_name = "T", default_value_t = 0.0)]
        start: f64,

        /// Write the JSON time array here instead of stdout
        #[arg(short = 'o', long = "out", value_name = "FILE")]
        out: Option<PathBuf>,
    },

    /// Decode a JSON array of time values back into the original bytes
    ///
    /// Examples:
    ///   chronon decode times.json
    ///   chronon decode - --base64   (times on stdin, bytes out as base64)
    Decode {
        /// Path to a JSON time array, or `-` for stdin
        #[arg(value_name = "TIMES")]
        times: PathBuf,

        /// Print the recovered bytes as base64 instead of UTF-8 text
        #[arg(long = "base64", action = ArgAction::SetTrue)]
        base64: bool,
    },

    /// List primes usable as channel key material
    Primes,
}
