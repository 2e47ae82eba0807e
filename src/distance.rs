use crate::error::{KnnError, Result};

#[inline]
pub fn square(x: f64) -> f64 {
    x * x
}

/// Squared euclidean distance, the only metric the indexes rank by.
pub fn squared_euclidean<const D: usize>(a: &[f64; D], b: &[f64; D]) -> f64 {
    let mut sum = 0.0;
    for (x, y) in a.iter().zip(b.iter()) {
        sum += square(x - y);
    }
    sum
}

pub(crate) fn check_query<const D: usize>(point: &[f64; D], k: usize) -> Result<()> {
    if k == 0 {
        return Err(KnnError::ZeroNeighbors);
    }
    check_finite_query(point)
}

pub(crate) fn check_finite_query<const D: usize>(point: &[f64; D]) -> Result<()> {
    check_finite(point, None)
}

pub(crate) fn check_points<const D: usize>(points: &[[f64; D]]) -> Result<()> {
    if points.is_empty() {
        return Err(KnnError::EmptyPointSet);
    }
    check_coordinates(points)
}

pub(crate) fn check_coordinates<const D: usize>(points: &[[f64; D]]) -> Result<()> {
    if D == 0 {
        return Err(KnnError::InvalidParameter {
            name: "dimension",
            reason: "points need at least one coordinate".to_string(),
        });
    }
    for (i, point) in points.iter().enumerate() {
        check_finite(point, Some(i))?;
    }
    Ok(())
}

fn check_finite<const D: usize>(point: &[f64; D], index: Option<usize>) -> Result<()> {
    match point.iter().position(|x| !x.is_finite()) {
        Some(axis) => Err(KnnError::NonFiniteCoordinate { index, axis }),
        None => Ok(()),
    }
}
