use super::division::{is_right_child, left_child, parent, right_child, Division};
use crate::{distance::squared_euclidean, neighbors::BoundedTopK, stats::SearchStats};

/// State of one k nearest neighbor search over an implicit k-d tree.
///
/// The search descends to the leaf window holding the query, then climbs back
/// up, descending into each sibling subtree whose lower distance bound does
/// not rule it out. Recursion depth is bounded by twice the tree depth.
pub(crate) struct Search<'t, const D: usize> {
    divisions: &'t [Division],
    elems: &'t [usize],
    points: &'t [[f64; D]],
    query: &'t [f64; D],
    // Nodes below this index still split; the rest are scanned as leaves.
    last_branch: usize,
    neighbors: BoundedTopK,
    stats: SearchStats,
}

impl<'t, const D: usize> Search<'t, D> {
    pub(crate) fn new(
        divisions: &'t [Division],
        elems: &'t [usize],
        points: &'t [[f64; D]],
        query: &'t [f64; D],
        k: usize,
    ) -> Self {
        Search {
            divisions,
            elems,
            points,
            query,
            last_branch: divisions.len() / 2,
            neighbors: BoundedTopK::new(k),
            stats: SearchStats::new(),
        }
    }

    pub(crate) fn finish(self) -> (Vec<usize>, SearchStats) {
        (self.neighbors.into_sorted_indices(), self.stats)
    }

    /// Walks from `node` (owning the window `begin..begin + size`) down to a
    /// leaf on the query's side, scans it, then climbs back until the window
    /// reaches `limit` slots.
    ///
    /// `bound` is a lower bound on the squared distance from the query to any
    /// point under `node`; `per_axis` holds its contribution from each axis.
    pub(crate) fn descend(
        &mut self,
        mut node: usize,
        mut begin: usize,
        mut size: usize,
        limit: usize,
        bound: f64,
        per_axis: &[f64; D],
    ) {
        self.stats.leaves_visited += 1;

        while node < self.last_branch {
            let division = self.divisions[node];
            size /= 2;
            if division.goes_left(self.query) {
                node = left_child(node);
            } else {
                node = right_child(node);
                begin += size;
            }
        }

        for &i in self.window(begin, size) {
            let distance = squared_euclidean(&self.points[i], self.query);
            self.stats.distance_evaluations += 1;
            self.neighbors.offer(distance, i);
        }

        self.ascend(node, begin, size, limit, bound, per_axis);
    }

    #[allow(clippy::float_cmp)]
    fn ascend(
        &mut self,
        mut node: usize,
        mut begin: usize,
        mut size: usize,
        limit: usize,
        bound: f64,
        per_axis: &[f64; D],
    ) {
        while size < limit {
            let is_right = is_right_child(node);
            let division = self.divisions[parent(node)];
            let axis = division.axis;
            let offset = self.query[axis] - division.threshold;

            // The sibling lies across this split, so its bound can only grow
            // along `axis`.
            let mut sibling_axes = *per_axis;
            let mut sibling_bound = bound;
            if offset * offset > sibling_axes[axis] {
                sibling_bound += offset * offset - sibling_axes[axis];
                sibling_axes[axis] = offset * offset;
            }

            if !self.neighbors.is_full()
                || sibling_bound < self.neighbors.worst()
                || self.query[axis] == division.threshold
            {
                let (sibling, sibling_begin) = if is_right {
                    (node - 1, begin - size)
                } else {
                    (node + 1, begin + size)
                };
                self.descend(sibling, sibling_begin, size, size, sibling_bound, &sibling_axes);
            }

            if is_right {
                begin -= size;
            }
            size *= 2;
            node = parent(node);
        }
    }

    // Slots past the last point are absent.
    fn window(&self, begin: usize, size: usize) -> &'t [usize] {
        let n = self.elems.len();
        &self.elems[begin.min(n)..(begin + size).min(n)]
    }
}
