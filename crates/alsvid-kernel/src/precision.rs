//! Precision layer: float widths, tolerances, and state comparison.

use num_complex::Complex;
use num_traits::Float;

/// Floating-point widths the kernels operate over.
///
/// The amplitude element type carries the precision; state and gate matrix
/// share it by construction, so there is no runtime precision mismatch to
/// detect. The trait supplies the absolute tolerance used when judging two
/// states of that width equivalent.
pub trait Precision: Float + Send + Sync + 'static {
    /// Default absolute tolerance for state comparison at this width.
    const ATOL: Self;
}

impl Precision for f32 {
    const ATOL: Self = 1e-5;
}

impl Precision for f64 {
    const ATOL: Self = 1e-10;
}

/// Largest elementwise deviation `|a_i - b_i|` between two amplitude buffers.
///
/// Buffers must have equal length; extra elements on either side are ignored
/// by the zip, so length is checked by [`approx_eq`] instead.
pub fn max_deviation<F: Precision>(a: &[Complex<F>], b: &[Complex<F>]) -> F {
    a.iter()
        .zip(b)
        .map(|(x, y)| (*x - *y).norm())
        .fold(F::zero(), F::max)
}

/// Whether two amplitude buffers agree elementwise within `atol`.
///
/// Buffers of different lengths never compare equal.
pub fn approx_eq<F: Precision>(a: &[Complex<F>], b: &[Complex<F>], atol: F) -> bool {
    a.len() == b.len() && max_deviation(a, b) <= atol
}
