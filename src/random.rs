//! Shaped random sampling over an injected RNG.
//!
//! The operators never own random state: every draw goes through a
//! `&mut R where R: Rng` supplied by the caller, so reproducibility is
//! controlled by whoever seeds the generator. [`create_rng`] is the
//! standard way to build one.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

use crate::matrix::Matrix;

/// Creates a seeded [`StdRng`] for reproducible runs.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draws a `rows`×`cols` matrix of uniform values in `[0, 1)`.
pub fn uniform_matrix<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Matrix {
    let data: Vec<f64> = (0..rows * cols).map(|_| rng.random::<f64>()).collect();
    Matrix::from_flat(rows, cols, data)
}

/// Draws a uniform `[0, 1)` matrix with the same shape as `like`.
pub fn uniform_like<R: Rng>(like: &Matrix, rng: &mut R) -> Matrix {
    let (rows, cols) = like.shape();
    uniform_matrix(rows, cols, rng)
}

/// Draws one standard-normal value.
pub fn standard_normal<R: Rng>(rng: &mut R) -> f64 {
    rng.sample(StandardNormal)
}
