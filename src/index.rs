use crate::error::Result;

/// Common contract of every k nearest neighbor index in this crate.
pub trait Index<const D: usize> {
    /// Indices of up to `k` points nearest to `point`, ordered by
    /// non-decreasing squared distance.
    fn query_neighbors(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>>;

    fn num_points(&self) -> usize;
}
