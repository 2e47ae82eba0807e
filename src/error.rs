use thiserror::Error;

/// Errors returned by index construction and queries.
///
/// Every variant is a caller contract violation; none of them is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum KnnError {
    #[error("point set is empty")]
    EmptyPointSet,

    #[error("number of neighbors must be at least 1")]
    ZeroNeighbors,

    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// `index` is `None` for the query point.
    #[error("coordinate {axis} of {what} is not finite", what = describe(.index))]
    NonFiniteCoordinate { index: Option<usize>, axis: usize },

    #[error("point set of {0} points is too large")]
    TooManyPoints(usize),
}

impl KnnError {
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            KnnError::EmptyPointSet
                | KnnError::ZeroNeighbors
                | KnnError::InvalidParameter { .. }
                | KnnError::NonFiniteCoordinate { .. }
                | KnnError::TooManyPoints(_)
        )
    }
}

fn describe(index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("point {i}"),
        None => "the query point".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, KnnError>;
