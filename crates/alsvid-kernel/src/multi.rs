//! Generic k-qubit kernel: full matrix-vector product per orbit.
//!
//! No structural shortcuts. Works for any `k ≥ 1` (the one- and two-qubit
//! kernels are pure optimizations of this path and must agree with it), and
//! scales up to `k = n - |controls|`.

use ndarray::ArrayView2;
use num_complex::Complex;

use crate::index::{Orbits, member_offsets};
use crate::precision::Precision;

/// Apply a `2^k × 2^k` matrix over an ordered target list, restricted by the
/// controls. Each orbit's `2^k` amplitudes are gathered, multiplied, and
/// scattered back; the gather completes before any write.
pub fn apply_matrix<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    targets: &[u32],
    controls: &[u32],
    matrix: ArrayView2<'_, Complex<F>>,
) {
    let offsets = member_offsets(n_qubits, targets);
    let dim = offsets.len();
    let zero = Complex::new(F::zero(), F::zero());
    let mut amps = vec![zero; dim];
    for base in Orbits::new(n_qubits, targets, controls) {
        for (r, &off) in offsets.iter().enumerate() {
            amps[r] = state[base + off];
        }
        for (r, &off) in offsets.iter().enumerate() {
            let mut acc = zero;
            for (c, &amp) in amps.iter().enumerate() {
                acc = acc + matrix[(r, c)] * amp;
            }
            state[base + off] = acc;
        }
    }
}
