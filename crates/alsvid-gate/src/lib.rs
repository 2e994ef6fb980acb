//! `alsvid-gate` — gate descriptors for the Alsvid application kernels.
//!
//! A [`Gate`] bundles a [`GateKind`] (the tagged variant the kernels dispatch
//! on) with an ordered list of target qubit positions and a set of control
//! positions. Every kind can reify itself into an explicit `2^k × 2^k` matrix
//! via [`GateKind::matrix`], which is what the generic kernel fallback and the
//! reference implementation consume.
//!
//! # Quick start
//!
//! ```rust
//! use alsvid_gate::Gate;
//!
//! // A CNOT: Pauli-X on qubit 2, controlled by qubit 0.
//! let cnot = Gate::<f64>::x(2).controlled_by([0]);
//! assert_eq!(cnot.name(), "x");
//! assert_eq!(cnot.targets, vec![2]);
//! assert_eq!(cnot.controls, vec![0]);
//! ```

pub mod gate;

pub use gate::{Gate, GateKind, Pauli};
