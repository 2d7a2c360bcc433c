//! Batched storage for candidate solutions and their fitness values.

use crate::matrix::Matrix;
use crate::problem::{ObjectiveSense, ProblemSpec};
use crate::ranking::{rank, RankingMethod};

/// An ordered collection of candidate solutions.
///
/// Values are an N×L matrix (one row per solution) and fitness values an
/// N×M matrix (one column per objective, `NaN` until evaluated). The
/// batch owns its storage exclusively; operators return fresh batches and
/// never alias their input's storage.
///
/// # Examples
///
/// ```
/// use evo_real::batch::SolutionBatch;
/// use evo_real::matrix::Matrix;
/// use evo_real::problem::ProblemSpec;
///
/// let problem = ProblemSpec::new(2);
/// let batch = SolutionBatch::from_values(
///     &problem,
///     Matrix::from_rows(&[vec![0.0, 1.0], vec![2.0, 3.0]]),
/// );
/// assert_eq!(batch.num_solutions(), 2);
/// assert!(batch.eval(0, 0).is_nan());
/// ```
#[derive(Debug, Clone)]
pub struct SolutionBatch {
    values: Matrix,
    evals: Matrix,
    senses: Vec<ObjectiveSense>,
}

impl SolutionBatch {
    /// Creates a batch of `num_solutions` all-zero solutions.
    pub fn zeros(problem: &ProblemSpec, num_solutions: usize) -> Self {
        Self {
            values: Matrix::zeros(num_solutions, problem.solution_length()),
            evals: Matrix::filled(num_solutions, problem.num_objectives(), f64::NAN),
            senses: problem.senses().to_vec(),
        }
    }

    /// Creates a batch adopting the given value matrix, unevaluated.
    ///
    /// # Panics
    /// Panics if the matrix width differs from the problem's solution
    /// length.
    pub fn from_values(problem: &ProblemSpec, values: Matrix) -> Self {
        assert_eq!(
            values.num_cols(),
            problem.solution_length(),
            "value matrix has {} columns but solutions have length {}",
            values.num_cols(),
            problem.solution_length()
        );
        let rows = values.num_rows();
        Self {
            values,
            evals: Matrix::filled(rows, problem.num_objectives(), f64::NAN),
            senses: problem.senses().to_vec(),
        }
    }

    /// Creates an unevaluated batch shaped like `self`.
    ///
    /// Values start at zero and every fitness entry is `NaN`; no fitness
    /// state is carried over.
    pub fn like_empty(&self) -> Self {
        Self {
            values: Matrix::zeros(self.num_solutions(), self.solution_length()),
            evals: Matrix::filled(self.num_solutions(), self.num_objectives(), f64::NAN),
            senses: self.senses.clone(),
        }
    }

    /// Number of solutions in the batch.
    pub fn num_solutions(&self) -> usize {
        self.values.num_rows()
    }

    /// Number of decision variables per solution.
    pub fn solution_length(&self) -> usize {
        self.values.num_cols()
    }

    /// Number of objectives.
    pub fn num_objectives(&self) -> usize {
        self.senses.len()
    }

    /// Sense of objective `obj_index`.
    pub fn sense(&self, obj_index: usize) -> ObjectiveSense {
        self.senses[obj_index]
    }

    /// The decision-variable matrix.
    pub fn values(&self) -> &Matrix {
        &self.values
    }

    /// Mutable access to the decision-variable matrix.
    pub fn values_mut(&mut self) -> &mut Matrix {
        &mut self.values
    }

    /// The fitness matrix (`NaN` where unevaluated).
    pub fn evals(&self) -> &Matrix {
        &self.evals
    }

    /// Fitness of solution `i` on objective `obj_index`.
    pub fn eval(&self, i: usize, obj_index: usize) -> f64 {
        self.evals[(i, obj_index)]
    }

    /// Writes the fitness column for one objective.
    ///
    /// # Panics
    /// Panics if `fitnesses` does not have one entry per solution or the
    /// objective index is out of range.
    pub fn set_evals(&mut self, obj_index: usize, fitnesses: &[f64]) {
        assert!(
            obj_index < self.num_objectives(),
            "objective index {} out of range ({} objectives)",
            obj_index,
            self.num_objectives()
        );
        assert_eq!(
            fitnesses.len(),
            self.num_solutions(),
            "expected {} fitness values, got {}",
            self.num_solutions(),
            fitnesses.len()
        );
        for (i, &f) in fitnesses.iter().enumerate() {
            self.evals[(i, obj_index)] = f;
        }
    }

    /// Rank-transformed utilities for one objective, higher is better.
    ///
    /// # Panics
    /// Panics if the objective index is out of range.
    pub fn utility(&self, obj_index: usize, method: RankingMethod) -> Vec<f64> {
        assert!(
            obj_index < self.num_objectives(),
            "objective index {} out of range ({} objectives)",
            obj_index,
            self.num_objectives()
        );
        let fitnesses = self.evals.column(obj_index);
        rank(&fitnesses, method, self.senses[obj_index].higher_is_better())
    }
}
