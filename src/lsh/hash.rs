use rand::Rng;
use rand_distr::StandardNormal;

const HASH_SEED: u64 = 0x4FEE_0B91;
const FOLD_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
const FOLD_ROTATION: u32 = 29;

/// Random projection `h(x) = floor((a . x + b) / r)`.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionHash<const D: usize> {
    /// Direction `a`, one standard normal sample per axis.
    pub direction: [f64; D],
    /// Offset `b`, uniform in `[0, r)`.
    pub offset: f64,
}

impl<const D: usize> ProjectionHash<D> {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R, bucket_width: f64) -> Self {
        let mut direction = [0.0; D];
        for x in &mut direction {
            *x = rng.sample(StandardNormal);
        }
        let offset = rng.gen_range(0.0..bucket_width);
        ProjectionHash { direction, offset }
    }

    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub fn bucket(&self, point: &[f64; D], bucket_width: f64) -> i64 {
        let dot: f64 = self
            .direction
            .iter()
            .zip(point.iter())
            .map(|(a, x)| a * x)
            .sum();
        ((dot + self.offset) / bucket_width).floor() as i64
    }
}

/// `K` projections whose buckets are folded into a single table key.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeHash<const D: usize> {
    projections: Vec<ProjectionHash<D>>,
    bucket_width: f64,
}

impl<const D: usize> CompositeHash<D> {
    #[must_use]
    pub fn new(projections: Vec<ProjectionHash<D>>, bucket_width: f64) -> Self {
        CompositeHash {
            projections,
            bucket_width,
        }
    }

    pub fn sample<R: Rng + ?Sized>(rng: &mut R, bucket_width: f64, count: usize) -> Self {
        let projections = (0..count)
            .map(|_| ProjectionHash::sample(rng, bucket_width))
            .collect();
        Self::new(projections, bucket_width)
    }

    #[must_use]
    pub fn hash(&self, point: &[f64; D]) -> u64 {
        self.projections
            .iter()
            .fold(HASH_SEED, |hash, projection| {
                fold(hash, projection.bucket(point, self.bucket_width))
            })
    }

    #[must_use]
    pub fn projections(&self) -> &[ProjectionHash<D>] {
        &self.projections
    }
}

// Order sensitive: the running hash is multiplied and rotated after each step.
#[allow(clippy::cast_sign_loss)]
fn fold(hash: u64, bucket: i64) -> u64 {
    (hash ^ bucket as u64)
        .wrapping_mul(FOLD_MULTIPLIER)
        .rotate_left(FOLD_ROTATION)
}
