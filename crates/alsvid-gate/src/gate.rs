//! Gate kinds and the gate descriptor consumed by the kernels.

use ndarray::{Array2, array};
use num_complex::Complex;
use num_traits::Float;
use serde::{Deserialize, Serialize};

/// Pauli axis for the single-qubit flip/phase gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pauli {
    /// Bit flip.
    X,
    /// Bit flip with ±i phases.
    Y,
    /// Sign flip on the |1⟩ component.
    Z,
}

/// The closed set of gate kinds the kernels dispatch on.
///
/// Each variant carries exactly the data its kernel needs: a full matrix for
/// the generic path, a compact parameter set for the structured fast paths.
/// Adding a new fast path means adding a variant here and a match arm in the
/// dispatcher — never runtime type inspection.
#[derive(Debug, Clone, PartialEq)]
pub enum GateKind<F: Float> {
    /// Arbitrary gate given as an explicit `2^k × 2^k` matrix, row/column
    /// indices expanded over the target list (targets[0] most significant).
    Unitary(Array2<Complex<F>>),
    /// Single-qubit Pauli flip or phase.
    Pauli(Pauli),
    /// Diagonal phase gate `diag(1, e^{iθ})` (U1 / ZPow).
    Phase(F),
    /// Exchange of two qubits.
    Swap,
    /// Generalized f-sim interaction: a 2×2 `matrix` acting on the
    /// {|01⟩, |10⟩} subspace and an `e^{iφ}` phase on |11⟩.
    Fsim {
        /// The 2×2 block applied to the single-excitation subspace.
        matrix: Array2<Complex<F>>,
        /// Phase angle φ picked up by |11⟩.
        phase: F,
    },
}

impl<F: Float> GateKind<F> {
    /// Short name of this kind, used in errors and log events.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            GateKind::Unitary(_) => "unitary",
            GateKind::Pauli(Pauli::X) => "x",
            GateKind::Pauli(Pauli::Y) => "y",
            GateKind::Pauli(Pauli::Z) => "z",
            GateKind::Phase(_) => "phase",
            GateKind::Swap => "swap",
            GateKind::Fsim { .. } => "fsim",
        }
    }

    /// Number of targets this kind requires, or `None` for the generic
    /// unitary (any `k ≥ 1`, constrained by the matrix dimension).
    #[inline]
    pub fn expected_targets(&self) -> Option<usize> {
        match self {
            GateKind::Unitary(_) => None,
            GateKind::Pauli(_) | GateKind::Phase(_) => Some(1),
            GateKind::Swap | GateKind::Fsim { .. } => Some(2),
        }
    }

    /// Reify this kind into its explicit matrix.
    pub fn matrix(&self) -> Array2<Complex<F>> {
        let zero = Complex::new(F::zero(), F::zero());
        let one = Complex::new(F::one(), F::zero());
        let i = Complex::new(F::zero(), F::one());
        match self {
            GateKind::Unitary(m) => m.clone(),
            GateKind::Pauli(Pauli::X) => array![[zero, one], [one, zero]],
            GateKind::Pauli(Pauli::Y) => array![[zero, -i], [i, zero]],
            GateKind::Pauli(Pauli::Z) => array![[one, zero], [zero, -one]],
            GateKind::Phase(theta) => {
                let p = Complex::from_polar(F::one(), *theta);
                array![[one, zero], [zero, p]]
            }
            GateKind::Swap => array![
                [one, zero, zero, zero],
                [zero, zero, one, zero],
                [zero, one, zero, zero],
                [zero, zero, zero, one],
            ],
            GateKind::Fsim { matrix: m, phase } => {
                let p = Complex::from_polar(F::one(), *phase);
                array![
                    [one, zero, zero, zero],
                    [zero, m[(0, 0)], m[(0, 1)], zero],
                    [zero, m[(1, 0)], m[(1, 1)], zero],
                    [zero, zero, zero, p],
                ]
            }
        }
    }

    /// Elementwise complex conjugate of this kind.
    ///
    /// Used by the density-matrix adapter for the column-space (ket side)
    /// pass of `ρ' = U ρ U†`. Kinds with real matrices map to themselves;
    /// Pauli-Y conjugates to an explicit matrix since `conj(Y) = -Y` is not
    /// in the structured set.
    pub fn conjugated(&self) -> GateKind<F> {
        let zero = Complex::new(F::zero(), F::zero());
        let i = Complex::new(F::zero(), F::one());
        match self {
            GateKind::Unitary(m) => GateKind::Unitary(m.mapv(|z| z.conj())),
            GateKind::Pauli(Pauli::Y) => GateKind::Unitary(array![[zero, i], [-i, zero]]),
            GateKind::Pauli(p) => GateKind::Pauli(*p),
            GateKind::Phase(theta) => GateKind::Phase(-*theta),
            GateKind::Swap => GateKind::Swap,
            GateKind::Fsim { matrix, phase } => GateKind::Fsim {
                matrix: matrix.mapv(|z| z.conj()),
                phase: -*phase,
            },
        }
    }
}

/// A gate descriptor: kind, ordered targets, and control positions.
///
/// Target order matters — it fixes how matrix row/column indices map to bit
/// combinations. Controls must all read 1 for the gate to act; amplitudes
/// with any control clear are left untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Gate<F: Float> {
    /// The kind of gate.
    pub kind: GateKind<F>,
    /// Ordered target qubit positions (targets[0] most significant in the
    /// matrix index expansion).
    pub targets: Vec<u32>,
    /// Control qubit positions, disjoint from the targets.
    pub controls: Vec<u32>,
}

impl<F: Float> Gate<F> {
    /// Create a gate from a kind and its targets, with no controls.
    pub fn new(kind: GateKind<F>, targets: Vec<u32>) -> Self {
        Self {
            kind,
            targets,
            controls: vec![],
        }
    }

    /// Pauli-X on `target`.
    pub fn x(target: u32) -> Self {
        Self::new(GateKind::Pauli(Pauli::X), vec![target])
    }

    /// Pauli-Y on `target`.
    pub fn y(target: u32) -> Self {
        Self::new(GateKind::Pauli(Pauli::Y), vec![target])
    }

    /// Pauli-Z on `target`.
    pub fn z(target: u32) -> Self {
        Self::new(GateKind::Pauli(Pauli::Z), vec![target])
    }

    /// Phase gate `diag(1, e^{iθ})` on `target`.
    pub fn phase(target: u32, theta: F) -> Self {
        Self::new(GateKind::Phase(theta), vec![target])
    }

    /// SWAP of two qubits.
    pub fn swap(t0: u32, t1: u32) -> Self {
        Self::new(GateKind::Swap, vec![t0, t1])
    }

    /// Generalized f-sim gate on two qubits.
    pub fn fsim(t0: u32, t1: u32, matrix: Array2<Complex<F>>, phase: F) -> Self {
        Self::new(GateKind::Fsim { matrix, phase }, vec![t0, t1])
    }

    /// Arbitrary unitary over an ordered target list.
    pub fn unitary(matrix: Array2<Complex<F>>, targets: Vec<u32>) -> Self {
        Self::new(GateKind::Unitary(matrix), targets)
    }

    /// Add control qubits to this gate.
    #[must_use]
    pub fn controlled_by(mut self, controls: impl IntoIterator<Item = u32>) -> Self {
        self.controls.extend(controls);
        self
    }

    /// Short name of the gate kind.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// Number of target qubits.
    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// The inverse gate: conjugate transpose of this gate's matrix, same
    /// targets and controls.
    pub fn dagger(&self) -> Gate<F> {
        let m = self.kind.matrix();
        let adjoint = m.t().mapv(|z| z.conj());
        Gate {
            kind: GateKind::Unitary(adjoint),
            targets: self.targets.clone(),
            controls: self.controls.clone(),
        }
    }
}
