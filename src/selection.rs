//! Tournament-based parent pairing.
//!
//! The cross-over operators do not pick their own parents; this module
//! supplies the pairing step they trigger. Each parent slot is filled by
//! a `tournament_size`-way tournament: draw that many rows uniformly at
//! random and keep the best per the objective's declared sense.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use crate::batch::SolutionBatch;
use crate::matrix::Matrix;

/// Selects `num_pairings` parent pairs from `batch` by tournament.
///
/// Returns two `(num_pairings, L)` matrices; row `i` of the first is
/// paired with row `i` of the second. Selection is with replacement, so
/// a strong solution can appear in many pairings (and both slots of one).
///
/// # Panics
/// Panics if the batch is empty, `tournament_size` is zero,
/// `num_pairings` is zero, or `obj_index` is out of range.
pub fn tournament_pairings<R: Rng>(
    batch: &SolutionBatch,
    obj_index: usize,
    tournament_size: usize,
    num_pairings: usize,
    rng: &mut R,
) -> (Matrix, Matrix) {
    assert!(batch.num_solutions() > 0, "cannot select from an empty batch");
    assert!(tournament_size > 0, "tournament_size must be at least 1");
    assert!(num_pairings > 0, "num_pairings must be at least 1");
    assert!(
        obj_index < batch.num_objectives(),
        "objective index {} out of range ({} objectives)",
        obj_index,
        batch.num_objectives()
    );

    let mut parents1 = Matrix::zeros(num_pairings, batch.solution_length());
    let mut parents2 = Matrix::zeros(num_pairings, batch.solution_length());

    for i in 0..num_pairings {
        let a = tournament(batch, obj_index, tournament_size, rng);
        let b = tournament(batch, obj_index, tournament_size, rng);
        parents1.row_mut(i).copy_from_slice(batch.values().row(a));
        parents2.row_mut(i).copy_from_slice(batch.values().row(b));
    }

    (parents1, parents2)
}

/// One tournament: pick `k` random rows, return the index of the best.
fn tournament<R: Rng>(batch: &SolutionBatch, obj_index: usize, k: usize, rng: &mut R) -> usize {
    let n = batch.num_solutions();
    let higher_is_better = batch.sense(obj_index).higher_is_better();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        let cmp = batch
            .eval(idx, obj_index)
            .partial_cmp(&batch.eval(best_idx, obj_index))
            .unwrap_or(std::cmp::Ordering::Equal);
        let better = if higher_is_better {
            cmp == std::cmp::Ordering::Greater
        } else {
            cmp == std::cmp::Ordering::Less
        };
        if better {
            best_idx = idx;
        }
    }
    best_idx
}
