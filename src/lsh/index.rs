use super::{hash::CompositeHash, params::LshParams};
use crate::{
    distance::{check_coordinates, check_finite_query, check_query, squared_euclidean},
    error::Result,
    index::Index,
    neighbors::BoundedTopK,
    stats::SearchStats,
};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Approximate k nearest neighbor index over a borrowed, static point set.
///
/// Only points sharing a bucket with the query in some table are scored, so
/// the true nearest neighbor can be missing from a result. That is expected
/// behavior, tuned through [`LshParams`], and never reported as an error.
pub struct LshIndex<'a, const D: usize> {
    points: &'a [[f64; D]],
    params: LshParams,
    hashes: Vec<CompositeHash<D>>,
    tables: Vec<HashMap<u64, Vec<usize>>>,
}

impl<'a, const D: usize> LshIndex<'a, D> {
    /// Builds the index with hash functions drawn from a `StdRng` seeded
    /// with `seed`.
    pub fn build(points: &'a [[f64; D]], params: LshParams, seed: u64) -> Result<Self> {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::build_with_rng(points, params, &mut rng)
    }

    /// Builds the index with hash functions drawn from `rng`, table by table.
    pub fn build_with_rng<R: Rng + ?Sized>(
        points: &'a [[f64; D]],
        params: LshParams,
        rng: &mut R,
    ) -> Result<Self> {
        params.validate()?;
        check_coordinates(points)?;

        let hashes: Vec<CompositeHash<D>> = (0..params.tables)
            .map(|_| CompositeHash::sample(rng, params.bucket_width, params.projections))
            .collect();

        let tables: Vec<HashMap<u64, Vec<usize>>> = hashes
            .iter()
            .map(|hash| {
                let mut table: HashMap<u64, Vec<usize>> = HashMap::new();
                for (i, point) in points.iter().enumerate() {
                    table.entry(hash.hash(point)).or_default().push(i);
                }
                table
            })
            .collect();

        debug!(
            points = points.len(),
            tables = params.tables,
            projections = params.projections,
            buckets = tables.iter().map(HashMap::len).sum::<usize>(),
            "built LSH index"
        );
        Ok(LshIndex {
            points,
            params,
            hashes,
            tables,
        })
    }

    pub fn query_with_stats(&self, point: &[f64; D], k: usize) -> Result<(Vec<usize>, SearchStats)> {
        check_query(point, k)?;
        let mut neighbors = BoundedTopK::new(k);
        let mut stats = SearchStats::new();
        self.visit_candidates(point, &mut stats, |i| {
            neighbors.offer(squared_euclidean(&self.points[i], point), i);
        });

        debug!(
            k,
            results = neighbors.len(),
            buckets_probed = stats.buckets_probed,
            distance_evaluations = stats.distance_evaluations,
            "LSH query"
        );
        Ok((neighbors.into_sorted_indices(), stats))
    }

    /// Distinct points sharing a bucket with `point` in any table, ascending.
    pub fn candidates(&self, point: &[f64; D]) -> Result<Vec<usize>> {
        check_finite_query(point)?;
        let mut candidates = Vec::new();
        self.visit_candidates(point, &mut SearchStats::new(), |i| candidates.push(i));
        candidates.sort_unstable();
        Ok(candidates)
    }

    // Calls `visit` once per distinct point in the query's buckets.
    fn visit_candidates<F: FnMut(usize)>(&self, point: &[f64; D], stats: &mut SearchStats, mut visit: F) {
        let mut visited = HashSet::new();
        for (hash, table) in self.hashes.iter().zip(&self.tables) {
            stats.buckets_probed += 1;
            if let Some(bucket) = table.get(&hash.hash(point)) {
                for &i in bucket {
                    if visited.insert(i) {
                        stats.distance_evaluations += 1;
                        visit(i);
                    }
                }
            }
        }
    }

    #[must_use]
    pub fn params(&self) -> &LshParams {
        &self.params
    }

    #[must_use]
    pub fn hash_functions(&self) -> &[CompositeHash<D>] {
        &self.hashes
    }

    #[must_use]
    pub fn num_tables(&self) -> usize {
        self.tables.len()
    }

    /// Number of non-empty buckets in `table`, or `None` past the last table.
    #[must_use]
    pub fn bucket_count(&self, table: usize) -> Option<usize> {
        self.tables.get(table).map(HashMap::len)
    }
}

impl<'a, const D: usize> Index<D> for LshIndex<'a, D> {
    fn query_neighbors(&self, point: &[f64; D], k: usize) -> Result<Vec<usize>> {
        self.query_with_stats(point, k).map(|(neighbors, _)| neighbors)
    }

    fn num_points(&self) -> usize {
        self.points.len()
    }
}
