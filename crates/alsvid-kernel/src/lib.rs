//! `alsvid-kernel` — gate-application kernels for state vectors and density
//! matrices.
//!
//! The core problem this crate solves: given a state of `2^n` complex
//! amplitudes, a small gate matrix, an ordered target list, and an optional
//! control set, update exactly the affected amplitudes in place, leaving all
//! others untouched, bit-for-bit consistent with an unaccelerated reference
//! within the precision tolerance.
//!
//! # Layout
//!
//! - `index` — bit-index engine: strides, control masks, orbit enumeration
//! - [`single`] / [`two`] / [`multi`] — the kernel tiers, with structured
//!   fast paths (Pauli, phase, swap, f-sim) beside the generic matrix paths
//! - [`apply`] — validated entry point dispatching on the gate kind
//! - [`density`] — two-sided and half application for density matrices
//! - [`precision`] — `f32`/`f64` tolerances and state comparison
//! - [`reference`] — the unaccelerated implementation kernels are tested
//!   against
//!
//! Index convention: qubit position 0 is the most significant bit of a flat
//! index. Matrix row/column indices expand over the target list in order,
//! `targets[0]` most significant.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_gate::Gate;
//! use alsvid_kernel::apply;
//! use num_complex::Complex64;
//!
//! // |111⟩ on three qubits; X on qubit 0, controlled by qubits 1 and 2.
//! let mut state = vec![Complex64::new(0.0, 0.0); 8];
//! state[7] = Complex64::new(1.0, 0.0);
//! apply(&mut state, 3, &Gate::x(0).controlled_by([1, 2])).unwrap();
//! assert!((state[3].re - 1.0).abs() < 1e-12);
//! ```

mod dispatch;
mod index;

pub mod density;
pub mod error;
pub mod multi;
pub mod precision;
pub mod reference;
pub mod single;
pub mod two;

pub use density::{Side, apply_density, apply_density_half};
pub use dispatch::apply;
pub use error::{KernelError, KernelResult};
pub use precision::{Precision, approx_eq, max_deviation};
pub use reference::apply_reference;
