/// Counters collected while answering a single query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Leaf windows scanned by a k-d tree search.
    pub leaves_visited: usize,
    /// Hash buckets looked up by an LSH search.
    pub buckets_probed: usize,
    /// Points whose distance to the query was computed.
    pub distance_evaluations: usize,
}

impl SearchStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
