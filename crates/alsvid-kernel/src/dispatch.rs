//! Validated gate application and kernel selection.

use alsvid_gate::{Gate, GateKind, Pauli};
use num_complex::Complex;
use tracing::debug;

use crate::error::{KernelError, KernelResult};
use crate::precision::Precision;
use crate::{multi, single, two};

/// Check targets and controls against the qubit count: in range, no repeats,
/// disjoint, at least one target.
pub(crate) fn validate_qubits(
    n_qubits: u32,
    targets: &[u32],
    controls: &[u32],
) -> KernelResult<()> {
    if targets.is_empty() {
        return Err(KernelError::NoTargets);
    }
    let mut seen = vec![false; n_qubits as usize];
    for &q in targets.iter().chain(controls) {
        if q >= n_qubits {
            return Err(KernelError::QubitOutOfRange { qubit: q, n_qubits });
        }
        if seen[q as usize] {
            return Err(KernelError::DuplicateQubit { qubit: q });
        }
        seen[q as usize] = true;
    }
    Ok(())
}

/// Full gate validation: qubit positions, target count per kind, matrix shape.
pub(crate) fn validate_gate<F: Precision>(n_qubits: u32, gate: &Gate<F>) -> KernelResult<()> {
    validate_qubits(n_qubits, &gate.targets, &gate.controls)?;
    let k = gate.targets.len();
    if let Some(expected) = gate.kind.expected_targets() {
        if k != expected {
            return Err(KernelError::TargetCountMismatch {
                kind: gate.name(),
                expected,
                got: k,
            });
        }
    }
    match &gate.kind {
        GateKind::Unitary(m) => {
            let dim = 1usize << k;
            if m.nrows() != dim || m.ncols() != dim {
                return Err(KernelError::MatrixDimension {
                    rows: m.nrows(),
                    cols: m.ncols(),
                    expected: dim,
                });
            }
        }
        GateKind::Fsim { matrix, .. } => {
            if matrix.nrows() != 2 || matrix.ncols() != 2 {
                return Err(KernelError::MatrixDimension {
                    rows: matrix.nrows(),
                    cols: matrix.ncols(),
                    expected: 2,
                });
            }
        }
        GateKind::Pauli(_) | GateKind::Phase(_) | GateKind::Swap => {}
    }
    Ok(())
}

/// Apply one gate to a state vector of `2^n` amplitudes, in place.
///
/// Validation happens up front: a returned error means the state was not
/// touched. The kernel chosen for a given kind is an implementation detail —
/// every fast path is numerically equivalent to the generic matrix path.
///
/// # Errors
///
/// Returns [`KernelError`] when targets/controls overlap or fall outside
/// `[0, n)`, when the matrix shape disagrees with the target count, or when
/// the state length is not `2^n`.
pub fn apply<F: Precision>(
    state: &mut [Complex<F>],
    n_qubits: u32,
    gate: &Gate<F>,
) -> KernelResult<()> {
    validate_gate(n_qubits, gate)?;
    let expected = 1usize << n_qubits;
    if state.len() != expected {
        return Err(KernelError::StateDimension {
            len: state.len(),
            expected,
            n_qubits,
        });
    }
    apply_unchecked(state, n_qubits, gate);
    Ok(())
}

/// Kernel dispatch after validation. Shared with the density-matrix adapter,
/// which validates in the doubled index space before calling in.
pub(crate) fn apply_unchecked<F: Precision>(state: &mut [Complex<F>], n_qubits: u32, gate: &Gate<F>) {
    debug!(
        kind = gate.name(),
        targets = ?gate.targets,
        controls = ?gate.controls,
        "applying gate"
    );
    let t = &gate.targets;
    let c = &gate.controls;
    match &gate.kind {
        GateKind::Pauli(Pauli::X) => single::apply_x(state, n_qubits, t[0], c),
        GateKind::Pauli(Pauli::Y) => single::apply_y(state, n_qubits, t[0], c),
        GateKind::Pauli(Pauli::Z) => single::apply_z(state, n_qubits, t[0], c),
        GateKind::Phase(theta) => single::apply_phase(state, n_qubits, t[0], c, *theta),
        GateKind::Swap => two::apply_swap(state, n_qubits, t[0], t[1], c),
        GateKind::Fsim { matrix, phase } => {
            two::apply_fsim(state, n_qubits, t[0], t[1], c, matrix.view(), *phase);
        }
        GateKind::Unitary(m) => match t.len() {
            1 => single::apply_matrix(state, n_qubits, t[0], c, m.view()),
            2 => two::apply_matrix(state, n_qubits, t[0], t[1], c, m.view()),
            _ => multi::apply_matrix(state, n_qubits, t, c, m.view()),
        },
    }
}
