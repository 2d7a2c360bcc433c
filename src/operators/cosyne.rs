//! Cosyne-style per-column permutation.

use rand::Rng;

use super::CopyingOperator;
use crate::batch::SolutionBatch;
use crate::matrix::Matrix;
use crate::problem::ProblemSpec;
use crate::random::{uniform_like, uniform_matrix};
use crate::ranking::RankingMethod;

/// Permutation operator on a solution batch.
///
/// For each decision-variable column independently, the values of a
/// randomly chosen subset of solutions are shuffled among themselves.
/// The operator never blends, introduces, or removes values: per column,
/// the multiset of values is preserved exactly.
///
/// Two modes:
///
/// - `permute_all = true`: every solution participates in every column's
///   permutation; the operator ignores fitness entirely.
/// - `permute_all = false`: each solution's participation probability is
///   `1 − (r + 0.5)^(1/N)` where `r` is its centered rank on the
///   configured objective and `N` the batch size. Top-ranked solutions
///   (r near +0.5) are almost never disrupted, bottom-ranked ones almost
///   always.
///
/// # References
///
/// - Gomez, Schmidhuber & Miikkulainen (2008), "Accelerated Neural
///   Evolution through Cooperatively Coevolved Synapses", JMLR 9
#[derive(Debug, Clone)]
pub struct CosynePermutation {
    problem: ProblemSpec,
    obj_index: Option<usize>,
    permute_all: bool,
}

impl CosynePermutation {
    /// Creates the operator.
    ///
    /// With `permute_all = true`, `obj_index` must be `None`: the
    /// operator is independent of any objective in that mode. With
    /// `permute_all = false`, the objective index is resolved against
    /// the problem (`None` is accepted only for single-objective
    /// problems).
    pub fn new(
        problem: ProblemSpec,
        obj_index: Option<usize>,
        permute_all: bool,
    ) -> Result<Self, String> {
        let obj_index = if permute_all {
            if obj_index.is_some() {
                return Err(
                    "permute_all ignores fitness entirely, so obj_index must be None".into(),
                );
            }
            None
        } else {
            Some(problem.normalize_obj_index(obj_index)?)
        };
        Ok(Self {
            problem,
            obj_index,
            permute_all,
        })
    }

    /// Shorthand for the fitness-independent mode.
    pub fn permute_all(problem: ProblemSpec) -> Result<Self, String> {
        Self::new(problem, None, true)
    }

    /// The objective the participation probabilities are ranked by.
    ///
    /// `None` when `permute_all` was requested (objectives are
    /// irrelevant in that mode).
    pub fn obj_index(&self) -> Option<usize> {
        self.obj_index
    }
}

/// Builds one column's permutation as `(row, new value)` assignments.
///
/// Rows whose participation draw exceeds their probability are omitted,
/// which is equivalent to forcing their sort key to the sentinel 1.0 so
/// they sort last: uniform keys are strictly below 1.0.
fn column_assignments(
    values: &Matrix,
    prob: &[f64],
    participation: &Matrix,
    keys: &Matrix,
    j: usize,
) -> Vec<(usize, f64)> {
    let n = values.num_rows();
    let mut origins: Vec<usize> = Vec::new();
    let mut targets: Vec<(usize, f64)> = Vec::new();
    for i in 0..n {
        if participation[(i, j)] <= prob[i] {
            origins.push(i);
            targets.push((i, keys[(i, j)]));
        }
    }

    // Participating rows in random key order become the value sources;
    // participating rows in ascending index order receive them.
    targets.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    origins
        .iter()
        .zip(targets.iter())
        .map(|(&origin, &(target, _))| (origin, values[(target, j)]))
        .collect()
}

impl CopyingOperator for CosynePermutation {
    /// # Panics
    /// Panics if the batch's solution length does not match the problem,
    /// or (in rank-weighted mode) if the batch's fitness column for the
    /// configured objective has not been evaluated.
    fn apply<R: Rng>(&self, batch: &SolutionBatch, rng: &mut R) -> SolutionBatch {
        assert_eq!(
            batch.solution_length(),
            self.problem.solution_length(),
            "batch solution length {} does not match problem solution length {}",
            batch.solution_length(),
            self.problem.solution_length()
        );

        let num_solutions = batch.num_solutions();
        let solution_length = batch.solution_length();

        let prob: Vec<f64> = match self.obj_index {
            None => vec![1.0; num_solutions],
            Some(obj_index) => {
                assert!(
                    (0..num_solutions).all(|i| !batch.eval(i, obj_index).is_nan()),
                    "rank-weighted permutation requires an evaluated batch"
                );
                let exponent = 1.0 / num_solutions as f64;
                batch
                    .utility(obj_index, RankingMethod::Centered)
                    .iter()
                    .map(|r| 1.0 - (r + 0.5).powf(exponent))
                    .collect()
            }
        };

        // One participation draw and one sort key per element; columns
        // use independent draws even though the probabilities repeat.
        let participation = uniform_like(batch.values(), rng);
        let keys = uniform_matrix(num_solutions, solution_length, rng);

        #[cfg(feature = "parallel")]
        let assignments: Vec<Vec<(usize, f64)>> = {
            use rayon::prelude::*;
            (0..solution_length)
                .into_par_iter()
                .map(|j| column_assignments(batch.values(), &prob, &participation, &keys, j))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let assignments: Vec<Vec<(usize, f64)>> = (0..solution_length)
            .map(|j| column_assignments(batch.values(), &prob, &participation, &keys, j))
            .collect();

        let mut result = batch.like_empty();
        result
            .values_mut()
            .as_mut_slice()
            .copy_from_slice(batch.values().as_slice());
        for (j, column) in assignments.iter().enumerate() {
            for &(row, value) in column {
                result.values_mut()[(row, j)] = value;
            }
        }
        result
    }
}
