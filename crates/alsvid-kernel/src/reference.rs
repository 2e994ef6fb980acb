//! Unaccelerated reference implementation.
//!
//! Evaluates the gate action directly over the full index space, one output
//! amplitude at a time, with none of the orbit machinery. Every kernel is
//! judged against this within the precision tolerance, so it favors
//! obviousness over speed.

use alsvid_gate::Gate;
use num_complex::Complex;

use crate::dispatch::validate_gate;
use crate::error::{KernelError, KernelResult};
use crate::index::{control_mask, stride};
use crate::precision::Precision;

/// Compute the gate's action on `state` by direct summation, returning a new
/// buffer. For each flat index with all control bits set, the output is the
/// matrix row selected by that index's target bits (target-list order)
/// contracted against the amplitudes at every target-bit substitution;
/// indices failing the control condition pass through unchanged.
///
/// # Errors
///
/// Same validation as [`crate::apply`].
pub fn apply_reference<F: Precision>(
    state: &[Complex<F>],
    n_qubits: u32,
    gate: &Gate<F>,
) -> KernelResult<Vec<Complex<F>>> {
    validate_gate(n_qubits, gate)?;
    let expected = 1usize << n_qubits;
    if state.len() != expected {
        return Err(KernelError::StateDimension {
            len: state.len(),
            expected,
            n_qubits,
        });
    }

    let matrix = gate.kind.matrix();
    let k = gate.targets.len();
    let strides: Vec<usize> = gate.targets.iter().map(|&t| stride(n_qubits, t)).collect();
    let cmask = control_mask(n_qubits, &gate.controls);

    let mut out = state.to_vec();
    for (i, slot) in out.iter_mut().enumerate() {
        if i & cmask != cmask {
            continue;
        }
        // Row index: this amplitude's target bits in target-list order.
        let mut r = 0usize;
        for &s in &strides {
            r = (r << 1) | usize::from(i & s != 0);
        }
        let mut acc = Complex::new(F::zero(), F::zero());
        for c in 0..1usize << k {
            // Column index: i with its target bits replaced by c's bits.
            let mut j = i;
            for (b, &s) in strides.iter().enumerate() {
                if (c >> (k - 1 - b)) & 1 == 1 {
                    j |= s;
                } else {
                    j &= !s;
                }
            }
            acc = acc + matrix[(r, c)] * state[j];
        }
        *slot = acc;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alsvid_gate::Gate;
    use num_complex::Complex64;

    fn approx(a: Complex64, b: Complex64) -> bool {
        (a - b).norm() < 1e-12
    }

    #[test]
    fn test_reference_x_gate() {
        let mut state = vec![Complex64::new(0.0, 0.0); 8];
        state[7] = Complex64::new(1.0, 0.0);
        let out = apply_reference(&state, 3, &Gate::x(0).controlled_by([1, 2])).unwrap();
        assert!(approx(out[3], Complex64::new(1.0, 0.0)));
        assert!(out[7].norm() < 1e-12);
    }

    #[test]
    fn test_reference_leaves_uncontrolled_untouched() {
        let state: Vec<Complex64> = (0..8)
            .map(|i| Complex64::new(i as f64, -(i as f64)))
            .collect();
        let out = apply_reference(&state, 3, &Gate::x(0).controlled_by([1])).unwrap();
        // Indices with control bit (stride 2) clear must be identical.
        for i in [0, 1, 4, 5] {
            assert!(approx(out[i], state[i]));
        }
    }

    #[test]
    fn test_reference_validates() {
        let state = vec![Complex64::new(1.0, 0.0); 4];
        assert!(matches!(
            apply_reference(&state, 2, &Gate::x(5)),
            Err(KernelError::QubitOutOfRange { qubit: 5, .. })
        ));
    }
}
