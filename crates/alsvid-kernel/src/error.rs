//! Error types for the kernel crate.

use thiserror::Error;

/// Errors surfaced by gate application.
///
/// All of these are caller errors detected up front — validation completes
/// before any amplitude is written, so a failed call never leaves the state
/// partially mutated.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum KernelError {
    /// A target or control position is outside `[0, n)`.
    #[error("qubit {qubit} out of range for {n_qubits}-qubit state")]
    QubitOutOfRange {
        /// The offending qubit position.
        qubit: u32,
        /// Number of qubits in the state.
        n_qubits: u32,
    },

    /// A qubit position appears more than once across targets and controls.
    #[error("qubit {qubit} appears more than once across targets and controls")]
    DuplicateQubit {
        /// The repeated qubit position.
        qubit: u32,
    },

    /// The gate has an empty target list.
    #[error("gate must have at least one target")]
    NoTargets,

    /// A structured gate kind was given the wrong number of targets.
    #[error("gate '{kind}' expects {expected} target(s), got {got}")]
    TargetCountMismatch {
        /// Name of the gate kind.
        kind: &'static str,
        /// Number of targets the kind requires.
        expected: usize,
        /// Number of targets provided.
        got: usize,
    },

    /// A gate matrix does not have the shape its kind and target count imply.
    #[error("gate matrix is {rows}x{cols}, expected {expected}x{expected}")]
    MatrixDimension {
        /// Rows of the provided matrix.
        rows: usize,
        /// Columns of the provided matrix.
        cols: usize,
        /// Required square dimension.
        expected: usize,
    },

    /// The state buffer length does not match the declared qubit count.
    #[error("state has {len} amplitudes but {n_qubits} qubit(s) require {expected}")]
    StateDimension {
        /// Length of the provided buffer.
        len: usize,
        /// Required length for the declared mode.
        expected: usize,
        /// Declared qubit count.
        n_qubits: u32,
    },
}

/// Result type for kernel operations.
pub type KernelResult<T> = Result<T, KernelError>;
