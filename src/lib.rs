pub mod cli;
pub mod commands;
pub mod config;
pub mod core;

pub use crate::core::channel::{SecureChannel, BYTE_SPACING, DEFAULT_PRIMES, SEARCH_BUDGET};
pub use crate::core::coupled::{CoupledSystem, COUPLING, DT};
pub use crate::core::error::ChannelError;
