//! Pauli basis used to assemble the single-particle Hamiltonians.
use nalgebra::DMatrix;
use num_complex::Complex64 as C64;

#[inline]
fn c(r: f64, i: f64) -> C64 {
    C64::new(r, i)
}

pub fn i2() -> DMatrix<C64> {
    DMatrix::identity(2, 2)
}
pub fn sigma_x() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(1.0, 0.0), c(1.0, 0.0), c(0.0, 0.0)])
}
pub fn sigma_y() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(0.0, 0.0), c(0.0, -1.0), c(0.0, 1.0), c(0.0, 0.0)])
}
pub fn sigma_z() -> DMatrix<C64> {
    DMatrix::from_row_slice(2, 2, &[c(1.0, 0.0), c(0.0, 0.0), c(0.0, 0.0), c(-1.0, 0.0)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paulis_square_to_identity() {
        assert_eq!(&sigma_x() * &sigma_x(), i2());
        assert_eq!(&sigma_y() * &sigma_y(), i2());
        assert_eq!(&sigma_z() * &sigma_z(), i2());
    }

    #[test]
    fn xy_anticommute() {
        let xy = &sigma_x() * &sigma_y();
        let yx = &sigma_y() * &sigma_x();
        assert_eq!(xy, -yx);
    }
}
