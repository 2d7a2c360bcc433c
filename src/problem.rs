//! Problem metadata consumed by the operators.
//!
//! [`ProblemSpec`] carries what an operator needs to know about the search
//! space: solution length, objective senses, and optional box bounds. It
//! holds no population and no fitness state.

use crate::bounds::Bounds;
use crate::matrix::Matrix;

/// Direction of optimization for one objective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectiveSense {
    /// Lower fitness is better.
    Minimize,
    /// Higher fitness is better.
    Maximize,
}

impl ObjectiveSense {
    /// Whether a larger fitness value is the better one.
    pub fn higher_is_better(self) -> bool {
        matches!(self, ObjectiveSense::Maximize)
    }
}

/// Static description of a continuous optimization problem.
///
/// # Builder Pattern
///
/// ```
/// use evo_real::problem::{ObjectiveSense, ProblemSpec};
/// use evo_real::bounds::Bounds;
///
/// let problem = ProblemSpec::new(8)
///     .with_senses(vec![ObjectiveSense::Maximize])
///     .with_bounds(Bounds::uniform(-5.0, 5.0, 8).unwrap());
/// assert_eq!(problem.solution_length(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct ProblemSpec {
    solution_length: usize,
    senses: Vec<ObjectiveSense>,
    bounds: Option<Bounds>,
}

impl ProblemSpec {
    /// Creates a single-objective minimization problem of the given
    /// solution length, unbounded.
    ///
    /// # Panics
    /// Panics if `solution_length` is zero.
    pub fn new(solution_length: usize) -> Self {
        assert!(solution_length > 0, "solution_length must be at least 1");
        Self {
            solution_length,
            senses: vec![ObjectiveSense::Minimize],
            bounds: None,
        }
    }

    /// Sets the objective senses (one per objective).
    ///
    /// # Panics
    /// Panics if `senses` is empty.
    pub fn with_senses(mut self, senses: Vec<ObjectiveSense>) -> Self {
        assert!(!senses.is_empty(), "a problem needs at least one objective");
        self.senses = senses;
        self
    }

    /// Sets per-variable box bounds.
    ///
    /// # Panics
    /// Panics if the bound length differs from the solution length.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        assert_eq!(
            bounds.len(),
            self.solution_length,
            "bounds cover {} variables but solutions have length {}",
            bounds.len(),
            self.solution_length
        );
        self.bounds = Some(bounds);
        self
    }

    /// Number of decision variables per solution.
    pub fn solution_length(&self) -> usize {
        self.solution_length
    }

    /// Number of objectives.
    pub fn num_objectives(&self) -> usize {
        self.senses.len()
    }

    /// Sense of objective `obj_index`.
    ///
    /// # Panics
    /// Panics if the index is out of range.
    pub fn sense(&self, obj_index: usize) -> ObjectiveSense {
        self.senses[obj_index]
    }

    /// All objective senses.
    pub fn senses(&self) -> &[ObjectiveSense] {
        &self.senses
    }

    /// The problem's bounds, if any.
    pub fn bounds(&self) -> Option<&Bounds> {
        self.bounds.as_ref()
    }

    /// Resolves an optional objective index against the objective count.
    ///
    /// `None` is accepted only for single-objective problems (resolving
    /// to 0); otherwise the caller must name the objective explicitly.
    pub fn normalize_obj_index(&self, obj_index: Option<usize>) -> Result<usize, String> {
        match obj_index {
            Some(i) if i < self.num_objectives() => Ok(i),
            Some(i) => Err(format!(
                "obj_index {} out of range for a problem with {} objective(s)",
                i,
                self.num_objectives()
            )),
            None if self.num_objectives() == 1 => Ok(0),
            None => Err(format!(
                "obj_index is required for a problem with {} objectives",
                self.num_objectives()
            )),
        }
    }

    /// Clips `values` to the problem's bounds, in place.
    ///
    /// Identity when the problem is unbounded.
    pub fn respect_bounds(&self, values: &mut Matrix) {
        if let Some(bounds) = &self.bounds {
            bounds.clip(values);
        }
    }
}
