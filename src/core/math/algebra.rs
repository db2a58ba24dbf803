//! Dimension-checked complex matrix operations and the fixed-order
//! matrix exponential behind the per-step propagator.
use nalgebra::{DMatrix, DVector};
use num_complex::Complex64 as C64;

use crate::core::error::ChannelError;

pub type CMatrix = DMatrix<C64>;
pub type CVector = DVector<C64>;

/// Taylor terms in `matrix_exp`. Both ends of a channel must agree on the
/// truncation: changing it changes every encoded time stream.
pub const EXP_TERMS: usize = 20;

/// Matrix product, shape-checked before any arithmetic.
pub fn matmul(a: &CMatrix, b: &CMatrix) -> Result<CMatrix, ChannelError> {
    if a.ncols() != b.nrows() {
        return Err(ChannelError::dimension_mismatch(
            "matmul",
            (a.nrows(), a.ncols()),
            (b.nrows(), b.ncols()),
        ));
    }
    Ok(a * b)
}

/// Matrix-vector product, shape-checked before any arithmetic.
pub fn apply(m: &CMatrix, v: &CVector) -> Result<CVector, ChannelError> {
    if m.ncols() != v.len() {
        return Err(ChannelError::dimension_mismatch(
            "apply",
            (m.nrows(), m.ncols()),
            (v.len(), 1),
        ));
    }
    Ok(m * v)
}

/// Kronecker product A ⊗ B: block (i, j) equals A[i, j]·B.
pub fn kron(a: &CMatrix, b: &CMatrix) -> CMatrix {
    let (ar, ac) = (a.nrows(), a.ncols());
    let (br, bc) = (b.nrows(), b.ncols());
    let mut out = CMatrix::from_element(ar * br, ac * bc, C64::new(0.0, 0.0));
    for i in 0..ar {
        for j in 0..ac {
            let aij = a[(i, j)];
            for k in 0..br {
                for l in 0..bc {
                    out[(i * br + k, j * bc + l)] = aij * b[(k, l)];
                }
            }
        }
    }
    out
}

pub fn scale(m: &CMatrix, z: C64) -> CMatrix {
    m.map(|w| w * z)
}

/// Euclidean norm over component magnitudes.
pub fn norm(v: &CVector) -> f64 {
    v.iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt()
}

/// Truncated series exp(M) ≈ I + M + M²/2! + … + M^(EXP_TERMS−1)/(EXP_TERMS−1)!.
/// Non-adaptive: no convergence check, fixed term count and evaluation order.
pub fn matrix_exp(m: &CMatrix) -> Result<CMatrix, ChannelError> {
    if m.nrows() != m.ncols() {
        return Err(ChannelError::dimension_mismatch(
            "matrix_exp",
            (m.nrows(), m.ncols()),
            (m.nrows(), m.ncols()),
        ));
    }
    let n = m.nrows();
    let mut sum = CMatrix::identity(n, n);
    let mut term = CMatrix::identity(n, n);
    for k in 1..EXP_TERMS {
        term = matmul(&term, m)?;
        term /= C64::from(k as f64);
        sum += &term;
    }
    Ok(sum)
}
