//! Exact and approximate k nearest neighbor search over static point sets.
//!
//! [`KdTree`] answers exact queries from a balanced, implicitly stored k-d
//! tree. [`LshIndex`] answers approximate queries from random projection
//! hash tables. Both borrow the caller's points, store only their indices, and
//! rank by squared euclidean distance.
//!
//! ```
//! use fastknn::{Index, KdTree};
//!
//! let points = [[0.0, 0.0], [1.0, 0.0], [5.0, 5.0]];
//! let tree = KdTree::build(&points).unwrap();
//! assert_eq!(tree.query_neighbors(&[0.9, 0.1], 2).unwrap(), vec![1, 0]);
//! ```

mod distance;
mod error;
mod index;
#[allow(clippy::module_name_repetitions)]
mod linear;
pub mod lsh;
mod neighbors;
mod stats;
mod tree;

pub use distance::squared_euclidean;
pub use error::{KnnError, Result};
pub use index::Index;
pub use linear::LinearIndex;
pub use lsh::{LshIndex, LshParams};
pub use neighbors::BoundedTopK;
pub use stats::SearchStats;
pub use tree::{log2_ceil, log2_floor, Division, KdTree};
