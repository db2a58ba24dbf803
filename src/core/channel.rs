//! Shared-secret channel surface: configure, encode, decode.
//!
//! One channel owns one coupled system. Every mutating operation takes
//! `&mut self`, so at most one encode/decode/reset can be in flight per
//! instance and reconfiguration is serialized with respect to both.
use crate::core::coupled::CoupledSystem;
use crate::core::error::ChannelError;

/// Default key pair; both primes are ≡ 1 (mod 12).
pub const DEFAULT_PRIMES: (u64, u64) = (13, 37);
/// Forward-search budget for one byte.
pub const SEARCH_BUDGET: usize = 20_000;
/// Gap appended after each hit time in batch encoding (10 grid steps).
pub const BYTE_SPACING: f64 = 0.1;

pub struct SecureChannel {
    system: CoupledSystem,
    primes: (u64, u64),
}

impl SecureChannel {
    pub fn new(p1: u64, p2: u64) -> Result<Self, ChannelError> {
        Ok(Self {
            system: CoupledSystem::new(p1, p2)?,
            primes: (p1, p2),
        })
    }

    pub fn with_default_primes() -> Result<Self, ChannelError> {
        Self::new(DEFAULT_PRIMES.0, DEFAULT_PRIMES.1)
    }

    pub fn primes(&self) -> (u64, u64) {
        self.primes
    }

    /// Rekey the channel. The replacement system is built first; on failure
    /// the previous configuration survives untouched.
    pub fn configure(&mut self, p1: u64, p2: u64) -> Result<(), ChannelError> {
        let system = CoupledSystem::new(p1, p2)?;
        self.system = system;
        self.primes = (p1, p2);
        Ok(())
    }

    /// Encode one byte as the first grid time after `start_time` whose
    /// read-out matches. Fails with the observed read-out range when the
    /// search budget runs out.
    pub fn encode_byte(&mut self, byte: u8, start_time: f64) -> Result<f64, ChannelError> {
        self.search(byte, start_time, SEARCH_BUDGET)
    }

    /// Decode one time value: replay to it and read once. Cannot fail.
    pub fn decode_byte(&mut self, time: f64) -> u8 {
        self.system.reset(time);
        self.system.read_byte()
    }

    /// Batch encode with the +0.1 continuation rule. All-or-nothing: the
    /// first exhausted byte drops every previously found time.
    pub fn encode(&mut self, bytes: &[u8], start_time: f64) -> Result<Vec<f64>, ChannelError> {
        let mut times = Vec::with_capacity(bytes.len());
        let mut t = start_time;
        for &byte in bytes {
            let hit = self.encode_byte(byte, t)?;
            t = hit + BYTE_SPACING;
            times.push(hit);
        }
        Ok(times)
    }

    /// Batch decode; each time is replayed independently, in order.
    pub fn decode(&mut self, times: &[f64]) -> Vec<u8> {
        times.iter().map(|&t| self.decode_byte(t)).collect()
    }

    fn search(&mut self, byte: u8, start_time: f64, budget: usize) -> Result<f64, ChannelError> {
        self.system.reset(start_time);
        let mut observed_min = u8::MAX;
        let mut observed_max = u8::MIN;
        for _ in 0..budget {
            self.system.step();
            let b = self.system.read_byte();
            observed_min = observed_min.min(b);
            observed_max = observed_max.max(b);
            if b == byte {
                return Ok(self.system.time());
            }
        }
        Err(ChannelError::encoding_exhausted(
            byte,
            start_time,
            observed_min,
            observed_max,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::coupled::{CoupledSystem, DT};

    #[test]
    fn default_channel_uses_13_and_37() {
        let chan = SecureChannel::with_default_primes().unwrap();
        assert_eq!(chan.primes(), (13, 37));
    }

    #[test]
    fn encode_returns_grid_aligned_time() {
        let mut chan = SecureChannel::with_default_primes().unwrap();
        let t = chan.encode_byte(42, 0.0).unwrap();
        assert!(t > 0.0);
        let steps = t / DT;
        assert!((steps - steps.round()).abs() < 1e-9, "t={t} off the dt grid");
        assert_eq!(chan.decode_byte(t), 42);
    }

    #[test]
    fn failed_configure_preserves_previous_key() {
        let mut chan = SecureChannel::with_default_primes().unwrap();
        let before = chan.decode_byte(0.5);

        assert!(chan.configure(15, 37).is_err()); // composite
        assert!(chan.configure(13, 17).is_err()); // prime, wrong residue
        assert_eq!(chan.primes(), (13, 37));
        assert_eq!(chan.decode_byte(0.5), before);

        chan.configure(61, 97).unwrap();
        assert_eq!(chan.primes(), (61, 97));
    }

    #[test]
    fn exhausted_search_reports_observed_range() {
        // Probe the first three read-outs, then ask for a byte that is
        // provably not among them under a budget of three steps.
        let mut probe = CoupledSystem::new(13, 37).unwrap();
        probe.reset(0.0);
        let mut seen = Vec::new();
        for _ in 0..3 {
            probe.step();
            seen.push(probe.read_byte());
        }
        let missing = (0u8..=255).find(|b| !seen.contains(b)).unwrap();

        let mut chan = SecureChannel::with_default_primes().unwrap();
        match chan.search(missing, 0.0, 3) {
            Err(ChannelError::EncodingExhausted {
                byte,
                observed_min,
                observed_max,
                ..
            }) => {
                assert_eq!(byte, missing);
                assert_eq!(observed_min, *seen.iter().min().unwrap());
                assert_eq!(observed_max, *seen.iter().max().unwrap());
            }
            other => panic!("expected EncodingExhausted, got {other:?}"),
        }
    }
}
