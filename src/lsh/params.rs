use crate::error::{KnnError, Result};

/// Parameters of an [`LshIndex`](super::LshIndex).
///
/// Wider buckets, fewer projections per table and more tables all raise
/// recall at the cost of larger candidate sets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LshParams {
    /// Width `r` of a bucket along each random projection.
    pub bucket_width: f64,
    /// Projections `K` folded into each table's key.
    pub projections: usize,
    /// Number of hash tables `L`.
    pub tables: usize,
}

impl LshParams {
    pub fn new(bucket_width: f64, projections: usize, tables: usize) -> Result<Self> {
        let params = LshParams {
            bucket_width,
            projections,
            tables,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.bucket_width.is_finite() && self.bucket_width > 0.0) {
            return Err(KnnError::InvalidParameter {
                name: "bucket_width",
                reason: format!("must be positive and finite, got {}", self.bucket_width),
            });
        }
        if self.projections == 0 {
            return Err(KnnError::InvalidParameter {
                name: "projections",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.tables == 0 {
            return Err(KnnError::InvalidParameter {
                name: "tables",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for LshParams {
    fn default() -> Self {
        LshParams {
            bucket_width: 1.0,
            projections: 2,
            tables: 5,
        }
    }
}
