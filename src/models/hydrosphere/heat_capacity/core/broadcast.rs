//! NumPy-style shape broadcasting.

/// Returns the shape two arrays broadcast to, or `None` if they are incompatible.
///
/// Shapes are aligned on their trailing axes. Each aligned pair of lengths
/// must be equal, or one of them must be 1. Missing leading axes count as 1.
pub(super) fn broadcast_shape(a: &[usize], b: &[usize]) -> Option<Vec<usize>> {
    let ndim = a.len().max(b.len());
    let len_at = |shape: &[usize], axis: usize| {
        axis.checked_sub(ndim - shape.len()).map_or(1, |i| shape[i])
    };

    (0..ndim)
        .map(|axis| match (len_at(a, axis), len_at(b, axis)) {
            (x, y) if x == y => Some(x),
            (1, y) => Some(y),
            (x, 1) => Some(x),
            _ => None,
        })
        .collect()
}
