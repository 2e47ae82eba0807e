/// Axis-aligned split of a k-d tree node.
///
/// Points with `point[axis] < threshold` lie in the left child, the rest in
/// the right child. Points equal to the threshold may end up on either side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Division {
    pub axis: usize,
    pub threshold: f64,
}

impl Division {
    #[must_use]
    pub fn new(axis: usize, threshold: f64) -> Division {
        Division { axis, threshold }
    }

    #[must_use]
    pub fn goes_left<const D: usize>(&self, point: &[f64; D]) -> bool {
        point[self.axis] < self.threshold
    }
}

impl Default for Division {
    fn default() -> Self {
        Division {
            axis: 0,
            threshold: 0.0,
        }
    }
}

// Children of heap slot `i` live at `2i + 1` and `2i + 2`.
#[inline]
pub(crate) fn left_child(node: usize) -> usize {
    2 * node + 1
}

#[inline]
pub(crate) fn right_child(node: usize) -> usize {
    2 * node + 2
}

#[inline]
pub(crate) fn parent(node: usize) -> usize {
    (node - 1) / 2
}

#[inline]
pub(crate) fn is_right_child(node: usize) -> bool {
    node != 0 && node % 2 == 0
}

/// Smallest `d` with `2^d >= n`. Requires `n >= 1`.
#[must_use]
pub fn log2_ceil(n: usize) -> usize {
    debug_assert!(n >= 1);
    let mut rest = n - 1;
    let mut bits = 0;
    while rest != 0 {
        rest >>= 1;
        bits += 1;
    }
    bits
}

/// Largest `d` with `2^d <= n`. Requires `n >= 1`.
#[must_use]
pub fn log2_floor(n: usize) -> usize {
    debug_assert!(n >= 1);
    let mut rest = n;
    let mut bits = 0;
    while rest > 1 {
        rest >>= 1;
        bits += 1;
    }
    bits
}
