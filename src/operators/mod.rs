//! Population-transformation operators for real-valued search spaces.
//!
//! Every operator is a pure batch-to-batch transform: it reads one (or,
//! for cross-over, two) input matrices, draws from an injected RNG, and
//! returns a freshly allocated [`SolutionBatch`](crate::batch::SolutionBatch).
//! Inputs are never mutated.
//!
//! # Operators
//!
//! - [`GaussianMutation`]: per-element Gaussian perturbation
//! - [`OnePointCrossOver`]: single-cut parent splicing
//! - [`SimulatedBinaryCrossOver`]: SBX with crowding index `eta`
//! - [`CosynePermutation`]: rank-weighted per-column value shuffling
//!
//! # References
//!
//! - Sean Luke (2013), *Essentials of Metaheuristics*, 2nd ed.
//! - Deb & Beyer (2001), "Self-Adaptive Genetic Algorithms with Simulated
//!   Binary Crossover"
//! - Gomez, Schmidhuber & Miikkulainen (2008), "Accelerated Neural
//!   Evolution through Cooperatively Coevolved Synapses"

mod cosyne;
mod gaussian;
mod one_point;
mod sbx;

pub use cosyne::CosynePermutation;
pub use gaussian::GaussianMutation;
pub use one_point::OnePointCrossOver;
pub use sbx::SimulatedBinaryCrossOver;

use rand::Rng;

use crate::batch::SolutionBatch;
use crate::matrix::Matrix;
use crate::problem::ProblemSpec;
use crate::selection::tournament_pairings;

/// How many children a cross-over operator produces from a batch.
///
/// A tagged variant instead of two nullable fields: the invalid state of
/// naming both a count and a rate cannot be expressed.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChildCount {
    /// As many children as the batch has solutions.
    #[default]
    Default,

    /// An explicit number of children.
    Count(usize),

    /// Children as a fraction of the batch size: a rate of `r` performs
    /// `r * N` pairings, producing `2 * r * N` children.
    Rate(f64),
}

impl ChildCount {
    /// Validates the variant's payload.
    pub fn validate(&self) -> Result<(), String> {
        match *self {
            ChildCount::Default => Ok(()),
            ChildCount::Count(0) => Err("num_children must be at least 1".into()),
            ChildCount::Count(_) => Ok(()),
            ChildCount::Rate(r) if (0.0..=1.0).contains(&r) => Ok(()),
            ChildCount::Rate(r) => {
                Err(format!("cross_over_rate must be within [0, 1], got {r}"))
            }
        }
    }

    /// Number of pairings to perform on a batch of `batch_size` solutions.
    ///
    /// Each pairing yields two children.
    pub fn num_pairings(&self, batch_size: usize) -> usize {
        match *self {
            ChildCount::Default => batch_size.div_ceil(2),
            ChildCount::Count(c) => c.div_ceil(2),
            ChildCount::Rate(r) => (r * batch_size as f64).round() as usize,
        }
    }
}

/// Construction-time configuration shared by the cross-over operators.
#[derive(Debug, Clone)]
pub struct CrossOverParams {
    /// Tournament size for the parent-selection step.
    pub tournament_size: usize,

    /// Objective the tournaments rank parents by (already normalized).
    pub obj_index: usize,

    /// How many children to produce.
    pub child_count: ChildCount,
}

impl CrossOverParams {
    /// Validates and resolves the configuration against a problem.
    pub fn new(
        problem: &ProblemSpec,
        tournament_size: usize,
        obj_index: Option<usize>,
        child_count: ChildCount,
    ) -> Result<Self, String> {
        if tournament_size == 0 {
            return Err("tournament_size must be at least 1".into());
        }
        child_count.validate()?;
        let obj_index = problem.normalize_obj_index(obj_index)?;
        Ok(Self {
            tournament_size,
            obj_index,
            child_count,
        })
    }
}

/// A batch-to-batch transform that copies its input before perturbing it.
pub trait CopyingOperator {
    /// Applies the operator, returning a new batch. The input batch is
    /// left untouched.
    fn apply<R: Rng>(&self, batch: &SolutionBatch, rng: &mut R) -> SolutionBatch;
}

/// A cross-over operator: parent pairing plus recombination.
///
/// Implementers provide the recombination core ([`cross`](CrossOver::cross));
/// the pairing pipeline ([`apply`](CrossOver::apply)) is shared.
pub trait CrossOver {
    /// The problem this operator was configured for.
    fn problem(&self) -> &ProblemSpec;

    /// The shared cross-over configuration.
    fn params(&self) -> &CrossOverParams;

    /// Recombines pre-paired parents into a `(2P, L)` child batch.
    ///
    /// Row `i` of `parents1` is paired with row `i` of `parents2`.
    ///
    /// # Panics
    /// Panics if the parent matrices differ in shape.
    fn cross<R: Rng>(&self, parents1: &Matrix, parents2: &Matrix, rng: &mut R) -> SolutionBatch;

    /// Selects parents from `batch` by tournament and recombines them.
    ///
    /// # Panics
    /// Panics if the batch does not match the configured problem, the
    /// batch is empty, or the configured child count resolves to zero
    /// pairings for this batch size.
    fn apply<R: Rng>(&self, batch: &SolutionBatch, rng: &mut R) -> SolutionBatch {
        assert_eq!(
            batch.solution_length(),
            self.problem().solution_length(),
            "batch solution length {} does not match problem solution length {}",
            batch.solution_length(),
            self.problem().solution_length()
        );
        let params = self.params();
        let num_pairings = params.child_count.num_pairings(batch.num_solutions());
        assert!(
            num_pairings > 0,
            "child count {:?} resolves to zero pairings for a batch of {}",
            params.child_count,
            batch.num_solutions()
        );
        let (parents1, parents2) = tournament_pairings(
            batch,
            params.obj_index,
            params.tournament_size,
            num_pairings,
            rng,
        );
        self.cross(&parents1, &parents2, rng)
    }
}

/// Asserts that two parent matrices are pairable.
pub(crate) fn check_parent_shapes(parents1: &Matrix, parents2: &Matrix) {
    assert_eq!(
        parents1.shape(),
        parents2.shape(),
        "parent matrices must have equal shapes ({:?} vs {:?})",
        parents1.shape(),
        parents2.shape()
    );
    assert!(parents1.num_rows() > 0, "at least one pairing is required");
}
