#![allow(dead_code)]

use fastknn::squared_euclidean;

/// All points of a `D`-dimensional grid with `n` integer positions per axis.
/// The last axis varies fastest.
pub fn full_grid<const D: usize>(n: usize) -> Vec<[f64; D]> {
    let mut points = Vec::new();
    let mut point = [0.0; D];
    fill_grid(&mut points, &mut point, 0, n);
    points
}

fn fill_grid<const D: usize>(points: &mut Vec<[f64; D]>, point: &mut [f64; D], axis: usize, n: usize) {
    if axis == D {
        points.push(*point);
        return;
    }
    for i in 0..n {
        point[axis] = i as f64;
        fill_grid(points, point, axis + 1, n);
    }
}

/// A grid point followed by its direct axis-aligned neighbors (up to `2D`).
pub fn grid_neighbors(dims: usize, n: usize, index: usize) -> Vec<usize> {
    let mut result = vec![index];
    let mut stride = 1;
    for _ in 0..dims {
        let coordinate = (index / stride) % n;
        if coordinate > 0 {
            result.push(index - stride);
        }
        if coordinate + 1 < n {
            result.push(index + stride);
        }
        stride *= n;
    }
    result
}

pub fn distances<const D: usize>(points: &[[f64; D]], query: &[f64; D], indices: &[usize]) -> Vec<f64> {
    indices
        .iter()
        .map(|&i| squared_euclidean(&points[i], query))
        .collect()
}

pub fn is_subset(small: &[usize], large: &[usize]) -> bool {
    small.iter().all(|i| large.contains(i))
}
