//! Two-qubit kernels: generic 4×4 application plus swap and f-sim fast paths.
//!
//! Orbit members are ordered `(a00, a01, a10, a11)` by the binary expansion
//! of the matrix row index over the target list, `t0` most significant. All
//! four members are read before any write.

use ndarray::ArrayView2;
use num_complex::Complex;

use crate::index::{Orbits, stride};
use crate::precision::Precision;

/// Apply a 4×4 matrix to every amplitude quadruple differing only in the two
/// target bits, restricted by the controls.
pub fn apply_matrix<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    t0: u32,
    t1: u32,
    controls: &[u32],
    matrix: ArrayView2<'_, Complex<F>>,
) {
    let s0 = stride(n_qubits, t0);
    let s1 = stride(n_qubits, t1);
    for base in Orbits::new(n_qubits, &[t0, t1], controls) {
        let idx = [base, base | s1, base | s0, base | s0 | s1];
        let a = [state[idx[0]], state[idx[1]], state[idx[2]], state[idx[3]]];
        for r in 0..4 {
            let mut acc = Complex::new(F::zero(), F::zero());
            for (c, &amp) in a.iter().enumerate() {
                acc = acc + matrix[(r, c)] * amp;
            }
            state[idx[r]] = acc;
        }
    }
}

/// SWAP fast path: exchange the `|01⟩` and `|10⟩` members, leave the rest.
pub fn apply_swap<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    t0: u32,
    t1: u32,
    controls: &[u32],
) {
    let s0 = stride(n_qubits, t0);
    let s1 = stride(n_qubits, t1);
    for base in Orbits::new(n_qubits, &[t0, t1], controls) {
        state.swap(base | s1, base | s0);
    }
}

/// Generalized f-sim fast path: 2×2 `matrix` on the `{|01⟩, |10⟩}` subspace,
/// `e^{iφ}` phase on `|11⟩`, identity on `|00⟩`.
pub fn apply_fsim<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    t0: u32,
    t1: u32,
    controls: &[u32],
    matrix: ArrayView2<'_, Complex<F>>,
    phase: F,
) {
    let s0 = stride(n_qubits, t0);
    let s1 = stride(n_qubits, t1);
    let p = Complex::from_polar(F::one(), phase);
    for base in Orbits::new(n_qubits, &[t0, t1], controls) {
        let i01 = base | s1;
        let i10 = base | s0;
        let i11 = base | s0 | s1;
        let a01 = state[i01];
        let a10 = state[i10];
        state[i01] = matrix[(0, 0)] * a01 + matrix[(0, 1)] * a10;
        state[i10] = matrix[(1, 0)] * a01 + matrix[(1, 1)] * a10;
        state[i11] = state[i11] * p;
    }
}
