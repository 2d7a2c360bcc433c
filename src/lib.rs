//! Real-coded evolutionary operator library.
//!
//! Building blocks for population-based optimizers over continuous,
//! real-valued search spaces. The crate provides batch-to-batch
//! transformation operators plus the plumbing they consume:
//!
//! - **[`operators`]**: Gaussian mutation, one-point cross-over,
//!   simulated binary cross-over (SBX), and Cosyne-style rank-weighted
//!   permutation. Each operator reads a batch, draws from a
//!   caller-supplied RNG, and returns a freshly allocated batch; inputs
//!   are never mutated.
//! - **[`batch`]**: the solution batch — an N×L value matrix with an
//!   N×M fitness table and per-objective senses.
//! - **[`problem`]** / **[`bounds`]**: search-space metadata (solution
//!   length, objective senses, box bounds) and bound clipping.
//! - **[`selection`]**: tournament-based parent pairing for the
//!   cross-over operators.
//! - **[`ranking`]**: centered rank utilities (best ≈ +0.5,
//!   worst ≈ −0.5).
//! - **[`random`]**: shaped uniform/Gaussian sampling over any
//!   `rand::Rng`; reproducibility is owned by whoever seeds the RNG.
//!
//! # Architecture
//!
//! The operators do not call each other and hold no cross-call state
//! beyond their construction-time hyperparameters; an outer evolutionary
//! loop (not part of this crate) selects parents, invokes operators, and
//! reassembles generations. Computation is data-parallel across rows and
//! columns; enable the `parallel` feature to run the pure-math regions
//! on rayon.
//!
//! # Example
//!
//! ```
//! use evo_real::batch::SolutionBatch;
//! use evo_real::bounds::Bounds;
//! use evo_real::operators::{CopyingOperator, GaussianMutation};
//! use evo_real::problem::ProblemSpec;
//! use evo_real::random::create_rng;
//!
//! let problem = ProblemSpec::new(3)
//!     .with_bounds(Bounds::uniform(0.0, 1.0, 3).unwrap());
//! let mutation = GaussianMutation::new(problem.clone(), 0.1, 1.0).unwrap();
//!
//! let batch = SolutionBatch::zeros(&problem, 4);
//! let mut rng = create_rng(42);
//! let mutated = mutation.apply(&batch, &mut rng);
//!
//! assert_eq!(mutated.num_solutions(), 4);
//! assert!(mutated.values().as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
//! ```

pub mod batch;
pub mod bounds;
pub mod matrix;
pub mod operators;
pub mod problem;
pub mod random;
pub mod ranking;
pub mod selection;
