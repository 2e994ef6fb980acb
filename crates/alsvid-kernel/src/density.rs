//! Density-matrix adapter: two-sided and half (one-sided) gate application.
//!
//! A density matrix over `n` qubits is a flat, row-major buffer of `4^n`
//! amplitudes — equivalently a state over `2n` qubits whose first `n`
//! positions index rows (bra side) and last `n` index columns (ket side).
//! The state-vector kernels are reused unchanged in that doubled space:
//! row-side targets keep their positions, column-side targets are offset by
//! `n` and get the conjugated gate, so the two passes together realize
//! `ρ' = U ρ U†`.

use alsvid_gate::Gate;
use num_complex::Complex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dispatch::{apply_unchecked, validate_gate};
use crate::error::{KernelError, KernelResult};
use crate::precision::Precision;

/// Which index space of the density matrix a half application acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// The row (bra) index space; the gate matrix is applied as given.
    Row,
    /// The column (ket) index space; the conjugated matrix is applied.
    Column,
}

fn validate_density<F: Precision>(
    rho: &[Complex<F>],
    n_qubits: u32,
    gate: &Gate<F>,
) -> KernelResult<()> {
    validate_gate(n_qubits, gate)?;
    let expected = 1usize << (2 * n_qubits);
    if rho.len() != expected {
        return Err(KernelError::StateDimension {
            len: rho.len(),
            expected,
            n_qubits,
        });
    }
    Ok(())
}

/// Apply one gate to a density matrix, `ρ' = U ρ U†`, in place.
///
/// Composed of a row-side half followed by a column-side half; the two
/// orderings commute since the sides touch disjoint index bits.
///
/// # Errors
///
/// Same validation as [`crate::apply`], with the buffer length checked
/// against `4^n`.
pub fn apply_density<F: Precision>(
    rho: &mut [Complex<F>],
    n_qubits: u32,
    gate: &Gate<F>,
) -> KernelResult<()> {
    validate_density(rho, n_qubits, gate)?;
    half_unchecked(rho, n_qubits, gate, Side::Row);
    half_unchecked(rho, n_qubits, gate, Side::Column);
    Ok(())
}

/// Apply one gate to only one index space of a density matrix.
///
/// Used when the caller composes the two sides itself, e.g. sandwiching
/// Kraus operators. Applying `Side::Row` then `Side::Column` with the same
/// gate equals [`apply_density`].
///
/// # Errors
///
/// Same validation as [`apply_density`].
pub fn apply_density_half<F: Precision>(
    rho: &mut [Complex<F>],
    n_qubits: u32,
    gate: &Gate<F>,
    side: Side,
) -> KernelResult<()> {
    validate_density(rho, n_qubits, gate)?;
    half_unchecked(rho, n_qubits, gate, side);
    Ok(())
}

fn half_unchecked<F: Precision>(rho: &mut [Complex<F>], n_qubits: u32, gate: &Gate<F>, side: Side) {
    debug!(kind = gate.name(), ?side, "density-matrix half application");
    let doubled = match side {
        Side::Row => gate.clone(),
        Side::Column => Gate {
            kind: gate.kind.conjugated(),
            targets: gate.targets.iter().map(|&q| q + n_qubits).collect(),
            controls: gate.controls.iter().map(|&q| q + n_qubits).collect(),
        },
    };
    apply_unchecked(rho, 2 * n_qubits, &doubled);
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_gate::GateKind;
    use ndarray::array;
    use num_complex::Complex64;
    use std::f64::consts::FRAC_1_SQRT_2;

    fn approx(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    /// Deterministic dense test matrix over `n` qubits, flattened row-major.
    fn test_density(n_qubits: u32) -> Vec<Complex64> {
        let dim = 1usize << n_qubits;
        let mut rho = vec![Complex64::new(0.0, 0.0); dim * dim];
        for r in 0..dim {
            for c in 0..dim {
                let z = Complex64::new(
                    ((r * dim + c) as f64 * 0.23).sin(),
                    ((r as f64) - (c as f64)) * 0.17,
                );
                rho[r * dim + c] = z;
            }
        }
        rho
    }

    /// Direct dense computation of `U ρ U†` for a single-qubit gate matrix
    /// embedded at `target`, no orbit machinery involved.
    fn dense_conjugate(
        rho: &[Complex64],
        n_qubits: u32,
        target: u32,
        m: &ndarray::Array2<Complex64>,
    ) -> Vec<Complex64> {
        let dim = 1usize << n_qubits;
        let stride = 1usize << (n_qubits - 1 - target);
        // Build the full 2^n x 2^n embedding of m.
        let mut u = vec![vec![Complex64::new(0.0, 0.0); dim]; dim];
        for i in 0..dim {
            let bi = usize::from(i & stride != 0);
            for j in 0..dim {
                if i & !stride == j & !stride {
                    let bj = usize::from(j & stride != 0);
                    u[i][j] = m[(bi, bj)];
                }
            }
        }
        let mut out = vec![Complex64::new(0.0, 0.0); dim * dim];
        for r in 0..dim {
            for c in 0..dim {
                let mut acc = Complex64::new(0.0, 0.0);
                for a in 0..dim {
                    for b in 0..dim {
                        acc += u[r][a] * rho[a * dim + b] * u[c][b].conj();
                    }
                }
                out[r * dim + c] = acc;
            }
        }
        out
    }

    #[test]
    fn test_full_application_matches_dense_conjugation() {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let h = array![[s, s], [s, -s]];
        let gate = Gate::new(GateKind::Unitary(h.clone()), vec![1]);

        let mut rho = test_density(3);
        let expected = dense_conjugate(&rho, 3, 1, &h);
        apply_density(&mut rho, 3, &gate).unwrap();
        for (a, b) in rho.iter().zip(&expected) {
            assert!(approx(*a, *b));
        }
    }

    #[test]
    fn test_two_halves_equal_full() {
        let gate = Gate::<f64>::y(0);
        let mut full = test_density(2);
        let mut halves = full.clone();
        apply_density(&mut full, 2, &gate).unwrap();
        apply_density_half(&mut halves, 2, &gate, Side::Row).unwrap();
        apply_density_half(&mut halves, 2, &gate, Side::Column).unwrap();
        for (a, b) in full.iter().zip(&halves) {
            assert!(approx(*a, *b));
        }
    }

    #[test]
    fn test_row_half_only_touches_row_space() {
        // X on the row side permutes rows; columns keep their order.
        let mut rho = test_density(1);
        let original = rho.clone();
        apply_density_half(&mut rho, 1, &Gate::x(0), Side::Row).unwrap();
        // Row 0 and row 1 exchanged, each row internally intact.
        assert!(approx(rho[0], original[2]));
        assert!(approx(rho[1], original[3]));
        assert!(approx(rho[2], original[0]));
        assert!(approx(rho[3], original[1]));
    }

    #[test]
    fn test_column_half_conjugates() {
        // Phase gate on the column side multiplies column 1 by e^{-iθ}.
        let theta = 0.777;
        let mut rho = test_density(1);
        let original = rho.clone();
        apply_density_half(&mut rho, 1, &Gate::phase(0, theta), Side::Column).unwrap();
        let p = Complex64::from_polar(1.0, -theta);
        assert!(approx(rho[0], original[0]));
        assert!(approx(rho[1], original[1] * p));
        assert!(approx(rho[2], original[2]));
        assert!(approx(rho[3], original[3] * p));
    }

    #[test]
    fn test_density_dimension_check() {
        let mut rho = vec![Complex64::new(0.0, 0.0); 8]; // not 4^n
        assert!(matches!(
            apply_density(&mut rho, 2, &Gate::x(0)),
            Err(KernelError::StateDimension { len: 8, expected: 16, .. })
        ));
    }

    #[test]
    fn test_hermiticity_preserved() {
        let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
        let h = array![[s, s], [s, -s]];
        let gate = Gate::new(GateKind::Unitary(h), vec![0]).controlled_by([1]);
        let dim = 4;
        // Symmetrize the test matrix so the input is actually Hermitian.
        let mut rho = test_density(2);
        for r in 0..dim {
            rho[r * dim + r] = Complex64::new(rho[r * dim + r].re, 0.0);
            for c in (r + 1)..dim {
                rho[c * dim + r] = rho[r * dim + c].conj();
            }
        }
        apply_density(&mut rho, 2, &gate).unwrap();
        for r in 0..dim {
            for c in 0..dim {
                assert!(approx(rho[r * dim + c], rho[c * dim + r].conj()));
            }
        }
    }
}
