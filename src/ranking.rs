//! Fitness-to-utility rank transforms.
//!
//! Rank-based utilities decouple selection pressure from the raw fitness
//! scale. The centered transform maps the worst solution to roughly −0.5
//! and the best to roughly +0.5 regardless of the fitness magnitudes.
//!
//! # References
//!
//! - Wierstra et al. (2014), "Natural Evolution Strategies" — fitness
//!   shaping via rank-based utilities

/// How raw fitness values are turned into utilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RankingMethod {
    /// Rank positions rescaled into `[-0.5, 0.5]`, best at `+0.5`.
    #[default]
    Centered,

    /// Raw fitness, sign-adjusted so that higher utility is always better.
    Raw,
}

/// Computes a utility value per solution from its fitness.
///
/// `higher_is_better` declares the sense of the raw fitness values; the
/// returned utilities are always higher-is-better.
///
/// Ties are broken by input order (stable sort); NaN fitnesses compare as
/// equal to everything and end up wherever the stable sort leaves them.
///
/// # Panics
/// Panics if `fitnesses` is empty.
///
/// # Examples
///
/// ```
/// use evo_real::ranking::{rank, RankingMethod};
///
/// let u = rank(&[3.0, 1.0, 2.0], RankingMethod::Centered, false);
/// // Minimization: fitness 1.0 is best.
/// assert_eq!(u, vec![-0.5, 0.5, 0.0]);
/// ```
pub fn rank(fitnesses: &[f64], method: RankingMethod, higher_is_better: bool) -> Vec<f64> {
    let n = fitnesses.len();
    assert!(n > 0, "cannot rank an empty fitness vector");

    match method {
        RankingMethod::Raw => fitnesses
            .iter()
            .map(|&f| if higher_is_better { f } else { -f })
            .collect(),
        RankingMethod::Centered => {
            if n == 1 {
                return vec![0.0];
            }

            // Order indices from worst to best.
            let mut order: Vec<usize> = (0..n).collect();
            order.sort_by(|&a, &b| {
                let cmp = fitnesses[a]
                    .partial_cmp(&fitnesses[b])
                    .unwrap_or(std::cmp::Ordering::Equal);
                if higher_is_better {
                    cmp
                } else {
                    cmp.reverse()
                }
            });

            let mut utilities = vec![0.0; n];
            for (pos, &idx) in order.iter().enumerate() {
                utilities[idx] = pos as f64 / (n - 1) as f64 - 0.5;
            }
            utilities
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_minimization() {
        let u = rank(&[10.0, 30.0, 20.0], RankingMethod::Centered, false);
        assert_eq!(u, vec![0.5, -0.5, 0.0]);
    }

    #[test]
    fn test_centered_maximization() {
        let u = rank(&[10.0, 30.0, 20.0], RankingMethod::Centered, true);
        assert_eq!(u, vec![-0.5, 0.5, 0.0]);
    }

    #[test]
    fn test_centered_range() {
        let fitnesses: Vec<f64> = (0..17).map(|i| (i * 31 % 17) as f64).collect();
        let u = rank(&fitnesses, RankingMethod::Centered, true);
        let min = u.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = u.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(min, -0.5);
        assert_eq!(max, 0.5);
    }

    #[test]
    fn test_centered_single_solution() {
        assert_eq!(rank(&[42.0], RankingMethod::Centered, false), vec![0.0]);
    }

    #[test]
    fn test_raw_sign_adjustment() {
        assert_eq!(rank(&[1.0, -2.0], RankingMethod::Raw, true), vec![1.0, -2.0]);
        assert_eq!(rank(&[1.0, -2.0], RankingMethod::Raw, false), vec![-1.0, 2.0]);
    }

    #[test]
    #[should_panic(expected = "empty fitness vector")]
    fn test_empty_panics() {
        rank(&[], RankingMethod::Centered, true);
    }
}
