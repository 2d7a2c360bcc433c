//! One-point cross-over.

use rand::Rng;

use super::{check_parent_shapes, ChildCount, CrossOver, CrossOverParams};
use crate::batch::SolutionBatch;
use crate::matrix::Matrix;
use crate::problem::ProblemSpec;

/// One-point cross-over operator.
///
/// Each parent pair is cut at a random gene index in `{1, …, L−1}` and
/// recombined: one child takes the suffix from the first parent and the
/// prefix from the second, the other child the complement. Both children
/// therefore inherit at least one gene from each parent.
///
/// Children are not clipped to bounds: a splice of two in-bounds parents
/// cannot leave the box.
#[derive(Debug, Clone)]
pub struct OnePointCrossOver {
    problem: ProblemSpec,
    params: CrossOverParams,
}

impl OnePointCrossOver {
    /// Creates the operator.
    ///
    /// Returns `Err` on a zero tournament size, an invalid
    /// [`ChildCount`], or an objective index the problem cannot resolve.
    pub fn new(
        problem: ProblemSpec,
        tournament_size: usize,
        obj_index: Option<usize>,
        child_count: ChildCount,
    ) -> Result<Self, String> {
        let params = CrossOverParams::new(&problem, tournament_size, obj_index, child_count)?;
        Ok(Self { problem, params })
    }
}

impl CrossOver for OnePointCrossOver {
    fn problem(&self) -> &ProblemSpec {
        &self.problem
    }

    fn params(&self) -> &CrossOverParams {
        &self.params
    }

    /// # Panics
    /// Panics if the parent shapes differ or the solution length is
    /// below 2 (no interior cut point exists).
    fn cross<R: Rng>(&self, parents1: &Matrix, parents2: &Matrix, rng: &mut R) -> SolutionBatch {
        check_parent_shapes(parents1, parents2);
        let (num_pairings, solution_length) = parents1.shape();
        assert!(
            solution_length >= 2,
            "one-point crossover requires solution length >= 2, got {solution_length}"
        );

        let mut children1 = Matrix::zeros(num_pairings, solution_length);
        let mut children2 = Matrix::zeros(num_pairings, solution_length);

        for i in 0..num_pairings {
            // Never 0 and never L: each child keeps a gene from each parent.
            let cut = rng.random_range(1..solution_length);
            let (p1, p2) = (parents1.row(i), parents2.row(i));
            let (c1, c2) = (children1.row_mut(i), children2.row_mut(i));
            for j in 0..solution_length {
                if j >= cut {
                    c1[j] = p1[j];
                    c2[j] = p2[j];
                } else {
                    c1[j] = p2[j];
                    c2[j] = p1[j];
                }
            }
        }

        let children = Matrix::vstack(&children1, &children2);
        SolutionBatch::from_values(&self.problem, children)
    }
}
