//! Simulated two-particle coupled system keyed by a pair of primes.
//!
//! Construction derives one quaternion per prime, builds the joint
//! Hamiltonian H = H1⊗I + I⊗H2 + γ·(σz⊗σz), and fixes the per-step
//! propagator U = exp(−i·dt·H) once. Everything after that is pure
//! deterministic replay.
use nalgebra::DVector;
use num_complex::Complex64 as C64;

use crate::core::error::ChannelError;
use crate::core::math::algebra::{kron, matrix_exp, scale, CMatrix, CVector};
use crate::core::math::gates;
use crate::core::math::quaternion::Quaternion;
use crate::core::primes::prime_quaternion;

/// Fixed evolution time step.
pub const DT: f64 = 0.01;
/// σz⊗σz coupling strength between the two particles.
pub const COUPLING: f64 = 5.0;
/// Per-component amplitude scale in the byte read-out.
const READOUT_SCALE: f64 = 1000.0;

pub struct CoupledSystem {
    u_step: CMatrix,
    state: CVector,
    steps: u64,
}

impl CoupledSystem {
    pub fn new(p1: u64, p2: u64) -> Result<Self, ChannelError> {
        let q1 = derive_quaternion(p1, (p1, p2))?;
        let q2 = derive_quaternion(p2, (p1, p2))?;

        let id = gates::i2();
        let h1 = single_particle_hamiltonian(&q1);
        let h2 = single_particle_hamiltonian(&q2);
        let zz = kron(&gates::sigma_z(), &gates::sigma_z());
        let h = kron(&h1, &id) + kron(&id, &h2) + scale(&zz, C64::new(COUPLING, 0.0));

        let u_step = matrix_exp(&scale(&h, C64::new(0.0, -DT)))?;
        Ok(Self {
            u_step,
            state: ground_state(),
            steps: 0,
        })
    }

    /// Advance the joint state by one dt.
    pub fn step(&mut self) {
        self.state = &self.u_step * &self.state;
        self.steps += 1;
    }

    /// Invariant: time == steps · dt.
    pub fn time(&self) -> f64 {
        self.steps as f64 * DT
    }

    /// Opaque deterministic read-out: scaled magnitude sum modulo 256.
    /// Not a measurement; both ends must reproduce it digit for digit.
    pub fn read_byte(&self) -> u8 {
        let total: f64 = self
            .state
            .iter()
            .map(|z| z.re.abs() * READOUT_SCALE + z.im.abs() * READOUT_SCALE)
            .sum();
        (total % 256.0).floor() as u8
    }

    /// Reinitialize to |00⟩ and replay round(t/dt) steps from zero.
    /// Negative t clamps to zero steps.
    pub fn reset(&mut self, t: f64) {
        self.state = ground_state();
        self.steps = 0;
        let steps = (t / DT).round() as u64;
        for _ in 0..steps {
            self.step();
        }
    }
}

fn ground_state() -> CVector {
    DVector::from_vec(vec![
        C64::new(1.0, 0.0),
        C64::new(0.0, 0.0),
        C64::new(0.0, 0.0),
        C64::new(0.0, 0.0),
    ])
}

/// H = x·σx + y·σy + z·σz with the quaternion's raw vector part.
fn single_particle_hamiltonian(q: &Quaternion) -> CMatrix {
    let [x, y, z] = q.bloch();
    scale(&gates::sigma_x(), C64::new(x, 0.0))
        + scale(&gates::sigma_y(), C64::new(y, 0.0))
        + scale(&gates::sigma_z(), C64::new(z, 0.0))
}

fn derive_quaternion(p: u64, pair: (u64, u64)) -> Result<Quaternion, ChannelError> {
    prime_quaternion(p).ok_or_else(|| {
        ChannelError::invalid_primes(
            pair.0,
            pair.1,
            format!("{p} has no quaternion (need a prime ≡ 1 mod 12)"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::algebra::norm;
    use approx::assert_relative_eq;

    #[test]
    fn rejects_bad_primes() {
        assert!(matches!(
            CoupledSystem::new(15, 37),
            Err(ChannelError::InvalidPrimes { p1: 15, p2: 37, .. })
        ));
        // 17 is prime but ≡ 5 (mod 12).
        assert!(CoupledSystem::new(13, 17).is_err());
        assert!(CoupledSystem::new(13, 37).is_ok());
    }

    #[test]
    fn time_tracks_step_count() {
        let mut sys = CoupledSystem::new(13, 37).unwrap();
        assert_eq!(sys.time(), 0.0);
        for _ in 0..25 {
            sys.step();
        }
        assert_relative_eq!(sys.time(), 0.25, epsilon = 1e-12);
    }

    #[test]
    fn ground_state_reads_232() {
        // |00⟩ sums to exactly 1000.0; 1000 mod 256 = 232.
        let sys = CoupledSystem::new(13, 37).unwrap();
        assert_eq!(sys.read_byte(), 232);
    }

    #[test]
    fn evolution_stays_normalized() {
        let mut sys = CoupledSystem::new(13, 37).unwrap();
        for _ in 0..2000 {
            sys.step();
        }
        assert_relative_eq!(norm(&sys.state), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn reset_replays_deterministically() {
        let mut a = CoupledSystem::new(13, 37).unwrap();
        let mut b = CoupledSystem::new(13, 37).unwrap();
        for _ in 0..137 {
            a.step();
        }
        b.reset(1.37);
        assert_eq!(a.read_byte(), b.read_byte());
        assert_relative_eq!(a.time(), b.time(), epsilon = 1e-12);
    }

    #[test]
    fn reset_snaps_to_grid_and_clamps_negative() {
        let mut sys = CoupledSystem::new(13, 37).unwrap();
        sys.reset(0.504); // rounds to 50 steps
        assert_relative_eq!(sys.time(), 0.5, epsilon = 1e-12);
        sys.reset(-3.0);
        assert_eq!(sys.time(), 0.0);
        assert_eq!(sys.read_byte(), 232);
    }
}
