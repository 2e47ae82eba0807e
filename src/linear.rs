use crate::{
    distance::{check_points, check_query, squared_euclidean},
    error::Result,
    index::Index,
    neighbors::BoundedTopK,
    stats::SearchStats,
};

/// Exhaustive scan over the point set. Exact, and linear per query.
pub struct LinearIndex<'a, const D: usize> {
    points: &'a [[f64; D]],
}

impl<'a, const D: usize> LinearIndex<'a, D> {
    pub fn build(points: &'a [[f64; D]]) -> Result<Self> {
        check_points(points)?;
        Ok(Self { points })
    }

    pub fn query_with_stats(&self, point: &[f64; D], k: usize) -> Result<(Vec<usize>, SearchStats)> {
        check_query(point, k)?;
        let mut neighbors = BoundedTopK::new(k);
        for (i, other) in self.points.iter().enumerate() {
            neighbors.offer(squared_euclidean(other, point), i);
        }
        let stats = SearchStats {
            distance_evaluations: self.points.len(),
            ..SearchStats::new()
        };
        Ok((neighbors.into_sorted_indices(), stats))
    }
}

impl<'a, const D: usize> Index<D> for LinearIndex<'a, D> {
    fn query_neighbors(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>> {
        self.query_with_stats(point, k).map(|(neighbors, _)| neighbors)
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }
}

#[cfg(test)]
pub mod tests {
    use crate::{error::KnnError, Index};

    #[test]
    pub fn test_linear() {
        let points: Vec<[f64; 2]> = (0..100_i32).map(|i| [0., f64::from(i)]).collect();
        let index = super::LinearIndex::build(&points).expect("non-empty point set");

        for i in 1..99 {
            let neighbors = index.query_neighbors(&points[i], 3).expect("valid query");
            // The point itself, then its two neighbors on the line (tie broken by index).
            assert_eq!(neighbors, vec![i, i - 1, i + 1]);
        }

        let neighbors = index.query_neighbors(&[0., -10.], 500).expect("valid query");
        assert_eq!(neighbors.len(), 100);
        assert_eq!(neighbors[0], 0);
        assert_eq!(neighbors[99], 99);

        assert_eq!(
            index.query_neighbors(&[0., 0.], 0),
            Err(KnnError::ZeroNeighbors)
        );
    }
}
