//! One-qubit kernels: generic 2×2 application and structured fast paths.
//!
//! These functions assume their index arguments were validated; [`crate::apply`]
//! is the checked entry point. Each orbit pair is read in full before either
//! member is written, so there is no aliasing hazard within an orbit.

use ndarray::ArrayView2;
use num_complex::Complex;

use crate::index::{Orbits, stride};
use crate::precision::Precision;

/// Apply a 2×2 matrix to every amplitude pair differing only in the target
/// bit, restricted to pairs where all control bits are set.
pub fn apply_matrix<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    target: u32,
    controls: &[u32],
    matrix: ArrayView2<'_, Complex<F>>,
) {
    let s = stride(n_qubits, target);
    for i0 in Orbits::new(n_qubits, &[target], controls) {
        let i1 = i0 | s;
        let a0 = state[i0];
        let a1 = state[i1];
        state[i0] = matrix[(0, 0)] * a0 + matrix[(0, 1)] * a1;
        state[i1] = matrix[(1, 0)] * a0 + matrix[(1, 1)] * a1;
    }
}

/// Pauli-X fast path: swap the two orbit members.
pub fn apply_x<F: Precision>(state: &mut [Complex<F>], n_qubits: u32, target: u32, controls: &[u32]) {
    let s = stride(n_qubits, target);
    for i0 in Orbits::new(n_qubits, &[target], controls) {
        state.swap(i0, i0 | s);
    }
}

/// Pauli-Y fast path: swap with ±i phases.
pub fn apply_y<F: Precision>(state: &mut [Complex<F>], n_qubits: u32, target: u32, controls: &[u32]) {
    let s = stride(n_qubits, target);
    let im = Complex::new(F::zero(), F::one());
    for i0 in Orbits::new(n_qubits, &[target], controls) {
        let i1 = i0 | s;
        let a0 = state[i0];
        state[i0] = -im * state[i1];
        state[i1] = im * a0;
    }
}

/// Pauli-Z fast path: negate the target-bit-1 member.
pub fn apply_z<F: Precision>(state: &mut [Complex<F>], n_qubits: u32, target: u32, controls: &[u32]) {
    let s = stride(n_qubits, target);
    for i0 in Orbits::new(n_qubits, &[target], controls) {
        let i1 = i0 | s;
        state[i1] = -state[i1];
    }
}

/// Phase (U1 / ZPow) fast path: multiply the target-bit-1 member by `e^{iθ}`.
pub fn apply_phase<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    target: u32,
    controls: &[u32],
    theta: F,
) {
    let s = stride(n_qubits, target);
    let p = Complex::from_polar(F::one(), theta);
    for i0 in Orbits::new(n_qubits, &[target], controls) {
        let i1 = i0 | s;
        state[i1] = state[i1] * p;
    }
}
