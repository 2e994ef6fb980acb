//! Shared helpers for the kernel integration tests.
#![allow(dead_code)]

use ndarray::Array2;
use num_complex::Complex64;
use rand::Rng;
use rand::rngs::StdRng;

/// Normalized random state over `n_qubits`.
pub fn random_state(rng: &mut StdRng, n_qubits: u32) -> Vec<Complex64> {
    let dim = 1usize << n_qubits;
    let mut state: Vec<Complex64> = (0..dim)
        .map(|_| Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0)))
        .collect();
    let norm: f64 = state.iter().map(|a| a.norm_sqr()).sum::<f64>().sqrt();
    for a in &mut state {
        *a /= norm;
    }
    state
}

/// Random dense complex matrix (not unitary).
pub fn random_matrix(rng: &mut StdRng, dim: usize) -> Array2<Complex64> {
    Array2::from_shape_fn((dim, dim), |_| {
        Complex64::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0))
    })
}

/// Random unitary via Gram-Schmidt on a random complex matrix.
pub fn random_unitary(rng: &mut StdRng, dim: usize) -> Array2<Complex64> {
    let m = random_matrix(rng, dim);
    let mut cols: Vec<Vec<Complex64>> = (0..dim)
        .map(|c| (0..dim).map(|r| m[(r, c)]).collect())
        .collect();
    for c in 0..dim {
        for prev in 0..c {
            let proj: Complex64 = (0..dim).map(|r| cols[prev][r].conj() * cols[c][r]).sum();
            let prev_col = cols[prev].clone();
            for r in 0..dim {
                cols[c][r] -= proj * prev_col[r];
            }
        }
        let norm: f64 = cols[c].iter().map(|z| z.norm_sqr()).sum::<f64>().sqrt();
        for r in 0..dim {
            cols[c][r] /= norm;
        }
    }
    Array2::from_shape_fn((dim, dim), |(r, c)| cols[c][r])
}

/// Norm-squared of a state, for unitarity checks.
pub fn norm_sqr(state: &[Complex64]) -> f64 {
    state.iter().map(|a| a.norm_sqr()).sum()
}
