//! Approximate k nearest neighbor search with locality sensitive hashing.
//!
//! Each of the `L` tables keys points by `K` random projections
//! `floor((a . x + b) / r)`; nearby points are likely, but not certain, to
//! share a bucket in at least one table.

mod hash;
mod index;
mod params;

pub use hash::{CompositeHash, ProjectionHash};
pub use index::LshIndex;
pub use params::LshParams;
