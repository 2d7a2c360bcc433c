//! Simulated binary cross-over (SBX).

use rand::Rng;

use super::{check_parent_shapes, ChildCount, CrossOver, CrossOverParams};
use crate::batch::SolutionBatch;
use crate::matrix::Matrix;
use crate::problem::ProblemSpec;
use crate::random::uniform_like;

/// Simulated binary cross-over operator.
///
/// Per element, a spread factor `beta` is drawn so that its distribution
/// is symmetric around 1; the children are
/// `0.5 * ((1 ± beta) * p1 + (1 ∓ beta) * p2)`. The crowding index `eta`
/// controls the spread: larger `eta` keeps children closer to their
/// parents. Because `beta > 1` extrapolates outside the parents' interval,
/// the children are clipped to the problem's bounds (unlike one-point
/// cross-over, which cannot leave the box).
///
/// # References
///
/// - Deb & Beyer (2001), "Self-Adaptive Genetic Algorithms with Simulated
///   Binary Crossover"
#[derive(Debug, Clone)]
pub struct SimulatedBinaryCrossOver {
    problem: ProblemSpec,
    params: CrossOverParams,
    eta: f64,
}

impl SimulatedBinaryCrossOver {
    /// Creates the operator.
    ///
    /// Returns `Err` if `eta` is not a positive finite number, or on any
    /// configuration error shared with the other cross-over operators.
    pub fn new(
        problem: ProblemSpec,
        tournament_size: usize,
        eta: f64,
        obj_index: Option<usize>,
        child_count: ChildCount,
    ) -> Result<Self, String> {
        if !eta.is_finite() || eta <= 0.0 {
            return Err(format!("eta must be a positive finite number, got {eta}"));
        }
        let params = CrossOverParams::new(&problem, tournament_size, obj_index, child_count)?;
        Ok(Self {
            problem,
            params,
            eta,
        })
    }

    /// The configured crowding index.
    pub fn eta(&self) -> f64 {
        self.eta
    }
}

/// Computes one pairing's children from pre-drawn uniform values.
fn sbx_row(
    exponent: f64,
    u: &[f64],
    p1: &[f64],
    p2: &[f64],
    child1: &mut [f64],
    child2: &mut [f64],
) {
    for j in 0..u.len() {
        // The two branches agree in the limit u -> 0.5 from either side,
        // keeping beta's distribution symmetric around 1.
        let beta = if u[j] <= 0.5 {
            (2.0 * u[j]).powf(exponent)
        } else {
            (1.0 / (2.0 * (1.0 - u[j]))).powf(exponent)
        };
        child1[j] = 0.5 * ((1.0 + beta) * p1[j] + (1.0 - beta) * p2[j]);
        child2[j] = 0.5 * ((1.0 + beta) * p2[j] + (1.0 - beta) * p1[j]);
    }
}

impl CrossOver for SimulatedBinaryCrossOver {
    fn problem(&self) -> &ProblemSpec {
        &self.problem
    }

    fn params(&self) -> &CrossOverParams {
        &self.params
    }

    /// # Panics
    /// Panics if the parent shapes differ.
    fn cross<R: Rng>(&self, parents1: &Matrix, parents2: &Matrix, rng: &mut R) -> SolutionBatch {
        check_parent_shapes(parents1, parents2);
        let (num_pairings, solution_length) = parents1.shape();
        let exponent = 1.0 / (self.eta + 1.0);

        // All randomness is drawn up front; the remaining math is pure
        // and row-parallel.
        let u = uniform_like(parents1, rng);

        let mut children1 = Matrix::zeros(num_pairings, solution_length);
        let mut children2 = Matrix::zeros(num_pairings, solution_length);

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            children1
                .as_mut_slice()
                .par_chunks_mut(solution_length)
                .zip_eq(children2.as_mut_slice().par_chunks_mut(solution_length))
                .enumerate()
                .for_each(|(i, (c1, c2))| {
                    sbx_row(exponent, u.row(i), parents1.row(i), parents2.row(i), c1, c2);
                });
        }
        #[cfg(not(feature = "parallel"))]
        {
            for i in 0..num_pairings {
                sbx_row(
                    exponent,
                    u.row(i),
                    parents1.row(i),
                    parents2.row(i),
                    children1.row_mut(i),
                    children2.row_mut(i),
                );
            }
        }

        let mut children = Matrix::vstack(&children1, &children2);
        // beta > 1 extrapolates, so SBX children must be clipped.
        self.problem.respect_bounds(&mut children);
        SolutionBatch::from_values(&self.problem, children)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bounds::Bounds;
    use crate::random::create_rng;
    use proptest::prelude::*;

    fn operator(problem: ProblemSpec, eta: f64) -> SimulatedBinaryCrossOver {
        SimulatedBinaryCrossOver::new(problem, 2, eta, None, ChildCount::Default).unwrap()
    }

    #[test]
    fn test_rejects_invalid_eta() {
        let p = ProblemSpec::new(2);
        assert!(SimulatedBinaryCrossOver::new(p.clone(), 2, 0.0, None, ChildCount::Default).is_err());
        assert!(
            SimulatedBinaryCrossOver::new(p.clone(), 2, -1.0, None, ChildCount::Default).is_err()
        );
        assert!(SimulatedBinaryCrossOver::new(
            p.clone(),
            2,
            f64::INFINITY,
            None,
            ChildCount::Default
        )
        .is_err());
        assert!(SimulatedBinaryCrossOver::new(p, 2, 15.0, None, ChildCount::Default).is_ok());
    }

    #[test]
    fn test_output_shape() {
        let op = operator(ProblemSpec::new(4), 10.0);
        let parents1 = Matrix::zeros(3, 4);
        let parents2 = Matrix::zeros(3, 4);
        let mut rng = create_rng(42);
        let children = op.cross(&parents1, &parents2, &mut rng);
        assert_eq!(children.num_solutions(), 6);
        assert_eq!(children.solution_length(), 4);
    }

    #[test]
    fn test_huge_eta_children_converge_to_parents() {
        let op = operator(ProblemSpec::new(3), 1e9);
        let parents1 = Matrix::from_rows(&[vec![1.0, 2.0, 3.0]]);
        let parents2 = Matrix::from_rows(&[vec![-1.0, 0.5, 4.0]]);
        let mut rng = create_rng(42);
        let children = op.cross(&parents1, &parents2, &mut rng);
        for j in 0..3 {
            assert!((children.values()[(0, j)] - parents1[(0, j)]).abs() < 1e-6);
            assert!((children.values()[(1, j)] - parents2[(0, j)]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_mirror_property() {
        let problem = ProblemSpec::new(5);
        let op = operator(problem, 2.0);
        let parents1 = Matrix::from_rows(&[vec![1.0, -2.0, 0.5, 3.0, 0.0]]);
        let parents2 = Matrix::from_rows(&[vec![0.25, 2.0, -0.5, 1.0, 4.0]]);

        // Same seed, swapped parents: child1 and child2 swap places.
        let forward = op.cross(&parents1, &parents2, &mut create_rng(42));
        let swapped = op.cross(&parents2, &parents1, &mut create_rng(42));

        assert_eq!(forward.values().row(0), swapped.values().row(1));
        assert_eq!(forward.values().row(1), swapped.values().row(0));
    }

    #[test]
    fn test_children_respect_bounds() {
        let problem =
            ProblemSpec::new(2).with_bounds(Bounds::uniform(-1.0, 1.0, 2).unwrap());
        // Small eta: wide spread, frequent extrapolation past the parents.
        let op = operator(problem, 0.1);
        let parents1 = Matrix::from_rows(&vec![vec![-1.0, 1.0]; 64]);
        let parents2 = Matrix::from_rows(&vec![vec![1.0, -1.0]; 64]);
        let mut rng = create_rng(42);
        let children = op.cross(&parents1, &parents2, &mut rng);
        assert!(children
            .values()
            .as_slice()
            .iter()
            .all(|&v| (-1.0..=1.0).contains(&v)));
    }

    #[test]
    fn test_identical_parents_give_identical_children() {
        let op = operator(ProblemSpec::new(4), 5.0);
        let parents = Matrix::from_rows(&[vec![0.5, 1.5, -2.5, 3.5]]);
        let mut rng = create_rng(42);
        let children = op.cross(&parents, &parents.clone(), &mut rng);
        // With p1 == p2 the beta terms cancel up to rounding.
        for j in 0..4 {
            assert!((children.values()[(0, j)] - parents[(0, j)]).abs() < 1e-12);
            assert!((children.values()[(1, j)] - parents[(0, j)]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_apply_pipeline() {
        let problem = ProblemSpec::new(3).with_bounds(Bounds::uniform(0.0, 1.0, 3).unwrap());
        let op = SimulatedBinaryCrossOver::new(problem.clone(), 3, 8.0, None, ChildCount::Count(6))
            .unwrap();
        let mut batch = SolutionBatch::zeros(&problem, 5);
        batch.set_evals(0, &[4.0, 3.0, 2.0, 1.0, 0.0]);
        let mut rng = create_rng(42);
        let children = CrossOver::apply(&op, &batch, &mut rng);
        assert_eq!(children.num_solutions(), 6);
    }

    proptest! {
        #[test]
        fn prop_children_in_bounds(
            p1 in proptest::collection::vec(0.0f64..1.0, 6),
            p2 in proptest::collection::vec(0.0f64..1.0, 6),
            eta in 0.05f64..50.0,
            seed in any::<u64>(),
        ) {
            let problem = ProblemSpec::new(6).with_bounds(Bounds::uniform(0.0, 1.0, 6).unwrap());
            let op = operator(problem, eta);
            let parents1 = Matrix::from_rows(&[p1]);
            let parents2 = Matrix::from_rows(&[p2]);
            let mut rng = create_rng(seed);
            let children = op.cross(&parents1, &parents2, &mut rng);
            prop_assert!(children.values().as_slice().iter().all(|&v| (0.0..=1.0).contains(&v)));
        }
    }
}
