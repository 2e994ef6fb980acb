//! Bit-index engine: strides, control masks, and orbit enumeration.
//!
//! Convention, fixed across the whole engine: qubit position 0 is the most
//! significant bit of a flat index, so position `q` in an `n`-qubit space has
//! stride `1 << (n - 1 - q)`. The density-matrix adapter relies on this when
//! it offsets column-space positions by `n`.

/// Physical stride of qubit `position` in an `n_qubits`-wide index space.
#[inline]
pub(crate) fn stride(n_qubits: u32, position: u32) -> usize {
    1 << (n_qubits - 1 - position)
}

/// OR-mask with every control bit set.
pub(crate) fn control_mask(n_qubits: u32, controls: &[u32]) -> usize {
    controls.iter().fold(0, |m, &q| m | stride(n_qubits, q))
}

/// Offsets of the `2^k` orbit members relative to a base index.
///
/// Entry `r` is the offset of the member whose target bits follow the binary
/// expansion of `r` over the target list, `targets[0]` most significant.
/// Swapping two targets therefore reorders the table, which is exactly how
/// target order steers the matrix row/column mapping.
pub(crate) fn member_offsets(n_qubits: u32, targets: &[u32]) -> Vec<usize> {
    let k = targets.len();
    let strides: Vec<usize> = targets.iter().map(|&t| stride(n_qubits, t)).collect();
    (0..1usize << k)
        .map(|r| {
            strides
                .iter()
                .enumerate()
                .filter(|&(j, _)| (r >> (k - 1 - j)) & 1 == 1)
                .map(|(_, &s)| s)
                .sum()
        })
        .collect()
}

/// Iterator over orbit representatives: flat indices with every target bit
/// clear and every control bit set.
///
/// Yields `2^(n - k - c)` bases. Toggling target bits from a base reaches
/// every amplitude the gate touches exactly once; indices failing the control
/// condition are never produced, so those amplitudes are left untouched.
pub(crate) struct Orbits {
    /// LSB-counted bit positions of all involved qubits, ascending.
    shifts: Vec<u32>,
    controls: usize,
    next: usize,
    count: usize,
}

impl Orbits {
    pub(crate) fn new(n_qubits: u32, targets: &[u32], controls: &[u32]) -> Self {
        let mut shifts: Vec<u32> = targets
            .iter()
            .chain(controls)
            .map(|&q| n_qubits - 1 - q)
            .collect();
        shifts.sort_unstable();
        let free = n_qubits as usize - shifts.len();
        Self {
            controls: control_mask(n_qubits, controls),
            next: 0,
            count: 1 << free,
            shifts,
        }
    }
}

impl Iterator for Orbits {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next == self.count {
            return None;
        }
        let mut index = self.next;
        self.next += 1;
        // Insert a zero bit at each involved position, low to high.
        for &s in &self.shifts {
            let low = index & ((1 << s) - 1);
            index = ((index >> s) << (s + 1)) | low;
        }
        Some(index | self.controls)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for Orbits {}
