//! Gaussian mutation.

use rand::Rng;

use super::CopyingOperator;
use crate::batch::SolutionBatch;
use crate::problem::ProblemSpec;
use crate::random::standard_normal;

/// Gaussian mutation operator.
///
/// Each element of the batch is independently selected for mutation with
/// probability `mutation_probability`; selected elements get
/// `stdev * g` added, with `g` a standard-normal draw. The result is
/// clipped to the problem's bounds. Unselected elements are bit-identical
/// to the input.
///
/// # References
///
/// - Sean Luke (2013), *Essentials of Metaheuristics*, 2nd ed.
///
/// # Examples
///
/// ```
/// use evo_real::batch::SolutionBatch;
/// use evo_real::operators::{CopyingOperator, GaussianMutation};
/// use evo_real::problem::ProblemSpec;
/// use evo_real::random::create_rng;
///
/// let problem = ProblemSpec::new(4);
/// let op = GaussianMutation::new(problem.clone(), 0.1, 0.5).unwrap();
/// let batch = SolutionBatch::zeros(&problem, 10);
/// let mut rng = create_rng(42);
/// let mutated = op.apply(&batch, &mut rng);
/// assert_eq!(mutated.num_solutions(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct GaussianMutation {
    problem: ProblemSpec,
    stdev: f64,
    mutation_probability: f64,
}

impl GaussianMutation {
    /// Creates the operator.
    ///
    /// Returns `Err` if `stdev` is negative or non-finite, or if
    /// `mutation_probability` is outside `[0, 1]`. A zero stdev is
    /// degenerate (the operator becomes an identity-with-clip) but is
    /// not rejected.
    pub fn new(
        problem: ProblemSpec,
        stdev: f64,
        mutation_probability: f64,
    ) -> Result<Self, String> {
        if !stdev.is_finite() || stdev < 0.0 {
            return Err(format!("stdev must be finite and non-negative, got {stdev}"));
        }
        if !(0.0..=1.0).contains(&mutation_probability) {
            return Err(format!(
                "mutation_probability must be within [0, 1], got {mutation_probability}"
            ));
        }
        Ok(Self {
            problem,
            stdev,
            mutation_probability,
        })
    }

    /// Creates the operator with the default mutation probability of 1.0
    /// (every element is perturbed).
    pub fn with_stdev(problem: ProblemSpec, stdev: f64) -> Result<Self, String> {
        Self::new(problem, stdev, 1.0)
    }

    /// The configured standard deviation.
    pub fn stdev(&self) -> f64 {
        self.stdev
    }

    /// The configured per-element mutation probability.
    pub fn mutation_probability(&self) -> f64 {
        self.mutation_probability
    }
}

impl CopyingOperator for GaussianMutation {
    /// # Panics
    /// Panics if the batch's solution length does not match the problem.
    fn apply<R: Rng>(&self, batch: &SolutionBatch, rng: &mut R) -> SolutionBatch {
        assert_eq!(
            batch.solution_length(),
            self.problem.solution_length(),
            "batch solution length {} does not match problem solution length {}",
            batch.solution_length(),
            self.problem.solution_length()
        );

        let mut result = batch.clone();
        // Gaussian draws happen only for elements the uniform draw
        // selects, keeping unselected elements bit-identical.
        for v in result.values_mut().as_mut_slice() {
            if rng.random::<f64>() <= self.mutation_probability {
                *v += self.stdev * standard_normal(rng);
            }
        }
        self.problem.respect_bounds(result.values_mut());
        result
    }
}
