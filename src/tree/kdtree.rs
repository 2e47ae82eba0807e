use super::{
    division::{left_child, log2_ceil, log2_floor, right_child, Division},
    search::Search,
};
use crate::{
    distance::{check_points, check_query, square},
    error::{KnnError, Result},
    index::Index,
    stats::SearchStats,
};
use conv::ValueFrom;
use ordered_float::OrderedFloat;
use tracing::{debug, trace};

// Squared variance difference under which a later axis takes over the split.
const VARIANCE_TIE_EPSILON: f64 = 0.01;

/// Exact k nearest neighbor index over a borrowed, static point set.
///
/// The tree is complete and implicit: `divisions` is a binary heap of splits
/// and `elems` a permutation of point indices. The node at level `l` and
/// position `j` within that level owns the window of `2^(depth - l)` slots
/// starting at `j * 2^(depth - l)`; slots at or beyond the point count are
/// absent.
pub struct KdTree<'a, const D: usize> {
    points: &'a [[f64; D]],
    depth: usize,
    divisions: Vec<Division>,
    elems: Vec<usize>,
}

impl<'a, const D: usize> KdTree<'a, D> {
    pub fn build(points: &'a [[f64; D]]) -> Result<Self> {
        check_points(points)?;
        let depth = log2_ceil(points.len());
        debug_assert!(points.len() == 1 || log2_floor(points.len() - 1) + 1 == depth);

        let mut tree = KdTree {
            points,
            depth,
            divisions: vec![Division::default(); (1 << depth) - 1],
            elems: (0..points.len()).collect(),
        };
        tree.build_recursive(0, 1 << depth, 0, 0)?;

        debug!(
            points = points.len(),
            depth,
            divisions = tree.divisions.len(),
            "built k-d tree"
        );
        Ok(tree)
    }

    fn build_recursive(&mut self, begin: usize, size: usize, node: usize, level: usize) -> Result<()> {
        if level >= self.depth {
            return Ok(());
        }
        let end = (begin + size).min(self.elems.len());
        if begin >= end {
            return Ok(());
        }

        let axis = self.split_axis(begin, end)?;
        let half = size / 2;
        let mid = (begin + half).min(end - 1);
        let points = self.points;
        self.elems[begin..end]
            .select_nth_unstable_by_key(mid - begin, |&i| OrderedFloat(points[i][axis]));

        let threshold = points[self.elems[mid]][axis];
        trace!(node, level, axis, threshold, "split");
        self.divisions[node] = Division::new(axis, threshold);

        self.build_recursive(begin, half, left_child(node), level + 1)?;
        self.build_recursive(begin + half, half, right_child(node), level + 1)
    }

    // Axis of maximum variance over `elems[begin..end]`.
    fn split_axis(&self, begin: usize, end: usize) -> Result<usize> {
        let window = &self.elems[begin..end];
        let count = f64::value_from(window.len())
            .map_err(|_| KnnError::TooManyPoints(self.points.len()))?;

        let mut best_axis = 0;
        let mut best_variance = 0.0;
        for axis in 0..D {
            let mean = window.iter().map(|&i| self.points[i][axis]).sum::<f64>() / count;
            let variance = window
                .iter()
                .map(|&i| square(self.points[i][axis] - mean))
                .sum::<f64>()
                / count;
            if variance > best_variance {
                best_axis = axis;
                best_variance = variance;
            }
            // A near-equal variance also claims the split but leaves the
            // recorded maximum untouched, so the last close axis wins.
            if square(variance - best_variance) < VARIANCE_TIE_EPSILON {
                best_axis = axis;
            }
        }
        Ok(best_axis)
    }

    pub fn query_with_stats(&self, point: &[f64; D], k: usize) -> Result<(Vec<usize>, SearchStats)> {
        check_query(point, k)?;
        let size = 1 << self.depth;
        let mut search = Search::new(&self.divisions, &self.elems, self.points, point, k);
        search.descend(0, 0, size, size, 0.0, &[0.0; D]);
        let (neighbors, stats) = search.finish();

        debug!(
            k,
            results = neighbors.len(),
            leaves_visited = stats.leaves_visited,
            distance_evaluations = stats.distance_evaluations,
            "k-d tree query"
        );
        Ok((neighbors, stats))
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    #[must_use]
    pub fn divisions(&self) -> &[Division] {
        &self.divisions
    }

    #[must_use]
    pub fn elems(&self) -> &[usize] {
        &self.elems
    }

    #[must_use]
    pub fn points(&self) -> &'a [[f64; D]] {
        self.points
    }

    /// For each level, how many non-empty nodes split along each axis.
    #[must_use]
    pub fn split_histogram(&self) -> Vec<[usize; D]> {
        let mut rows = Vec::with_capacity(self.depth);
        for level in 0..self.depth {
            let mut row = [0; D];
            let first = (1 << level) - 1;
            let window = 1 << (self.depth - level);
            for j in 0..(1 << level) {
                if j * window < self.elems.len() {
                    row[self.divisions[first + j].axis] += 1;
                }
            }
            rows.push(row);
        }
        rows
    }
}

impl<'a, const D: usize> Index<D> for KdTree<'a, D> {
    fn query_neighbors(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>> {
        self.query_with_stats(point, k).map(|(neighbors, _)| neighbors)
    }

    fn num_points(&self) -> usize {
        self.elems.len()
    }
}
