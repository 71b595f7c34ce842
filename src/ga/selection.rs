//! Parent selection strategies.
//!
//! Selection picks which individuals become parents for recombination,
//! biased toward lower fitness. The strategies differ in selection
//! pressure; all assume minimization.

use super::types::{Fitness, Individual};
use rand::Rng;

/// Pluggable parent-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Pick `k` individuals uniformly at random, keep the best.
    ///
    /// Higher `k` means stronger pressure; k=3 is a moderate default,
    /// k=1 degenerates to uniform random selection.
    Tournament(usize),

    /// Fitness-proportionate (roulette-wheel) selection with inverse
    /// transformation for minimization.
    ///
    /// Sensitive to fitness scaling; a single dominant individual can take
    /// over quickly. Infinite (infeasible-sentinel) fitness values receive
    /// near-zero weight.
    Roulette,

    /// Linear rank-based selection: probability proportional to rank, not
    /// raw fitness, which sidesteps scaling problems entirely.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(!population.is_empty(), "cannot select from empty population");

        match self {
            Selection::Tournament(k) => tournament(population, *k, rng),
            Selection::Roulette => roulette(population, rng),
            Selection::Rank => rank(population, rng),
        }
    }
}

fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let n = population.len();
    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k.max(1) {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Weight each individual by `max_finite - fitness + epsilon` so the lowest
/// fitness gets the largest slice of the wheel. Individuals at the
/// infeasible sentinel (infinite fitness) get the epsilon floor.
fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let fitnesses: Vec<f64> = population.iter().map(|ind| ind.fitness().to_f64()).collect();
    let max_finite = fitnesses
        .iter()
        .copied()
        .filter(|f| f.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if !max_finite.is_finite() {
        // Everybody is infeasible; nothing to discriminate on
        return rng.random_range(0..n);
    }

    let epsilon = 1e-10;
    let weights: Vec<f64> = fitnesses
        .iter()
        .map(|&f| {
            if f.is_finite() {
                (max_finite - f + epsilon).max(epsilon)
            } else {
                epsilon
            }
        })
        .collect();

    let total: f64 = weights.iter().sum();
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    n - 1 // floating-point fallback
}

fn rank<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let mut indexed: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(i, ind)| (i, ind.fitness().to_f64()))
        .collect();
    indexed.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    // Linear ranking: best rank gets weight n, worst gets 1
    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (rank, &(original_idx, _)) in indexed.iter().enumerate() {
        cumulative += (n - rank) as f64;
        if cumulative > threshold {
            return original_idx;
        }
    }
    indexed[n - 1].0 // fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    #[derive(Clone)]
    struct Plain {
        fit: f64,
    }

    impl Individual for Plain {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fit
        }
        fn set_fitness(&mut self, f: f64) {
            self.fit = f;
        }
    }

    fn population(fitnesses: &[f64]) -> Vec<Plain> {
        fitnesses.iter().map(|&fit| Plain { fit }).collect()
    }

    fn selection_counts(sel: Selection, pop: &[Plain], trials: usize) -> Vec<u32> {
        let mut rng = create_rng(42);
        let mut counts = vec![0u32; pop.len()];
        for _ in 0..trials {
            counts[sel.select(pop, &mut rng)] += 1;
        }
        counts
    }

    #[test]
    fn test_tournament_favors_best() {
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let counts = selection_counts(Selection::Tournament(4), &pop, 10_000);
        assert!(
            counts[2] > 6000,
            "expected best selected >60% of the time, got {counts:?}"
        );
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let pop = population(&[10.0, 5.0, 1.0, 8.0]);
        let counts = selection_counts(Selection::Tournament(1), &pop, 10_000);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let pop = population(&[100.0, 50.0, 1.0, 80.0]);
        let counts = selection_counts(Selection::Roulette, &pop, 10_000);
        assert!(
            counts[2] > counts[0],
            "best should beat worst: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_with_infeasible_sentinels() {
        // Mixed feasible/infeasible population must still prefer feasible
        let pop = population(&[f64::INFINITY, 5.0, f64::INFINITY, 1.0]);
        let counts = selection_counts(Selection::Roulette, &pop, 10_000);
        assert!(counts[3] > counts[0]);
        assert!(counts[3] > counts[2]);
    }

    #[test]
    fn test_roulette_all_infeasible_is_uniformish() {
        let pop = population(&[f64::INFINITY; 4]);
        let counts = selection_counts(Selection::Roulette, &pop, 10_000);
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_rank_favors_best() {
        let pop = population(&[100.0, 50.0, 1.0, 80.0]);
        let counts = selection_counts(Selection::Rank, &pop, 10_000);
        assert!(counts[2] > counts[0], "best should beat worst: {counts:?}");
    }

    #[test]
    fn test_single_individual() {
        let pop = population(&[5.0]);
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament(3).select(&pop, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&pop, &mut rng), 0);
        assert_eq!(Selection::Rank.select(&pop, &mut rng), 0);
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let pop: Vec<Plain> = vec![];
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&pop, &mut rng);
    }
}
