mod division;
mod kdtree;
mod search;

pub use division::{log2_ceil, log2_floor, Division};
pub use kdtree::KdTree;
