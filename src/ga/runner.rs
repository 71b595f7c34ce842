//! The evolutionary loop.
//!
//! [`GaRunner`] drives generations of evaluate → select → recombine →
//! mutate → replace over a fixed budget. Generations are strictly
//! sequential; within a generation, fitness evaluation is a pure function
//! of each individual and may fan out across rayon workers.

use super::config::{ConfigError, GaConfig};
use super::types::{Fitness, GaProblem, Individual};
use crate::random::create_rng;
use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Outcome of a GA run.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// Best individual observed over the whole run (a copy, never aliased
    /// into the final population).
    pub best: I,

    /// Fitness of `best`.
    pub best_fitness: I::Fitness,

    /// Generations actually executed.
    pub generations: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Best-so-far fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// ```ignore
/// let result = GaRunner::run(&problem, &GaConfig::default().with_seed(42))?;
/// println!("best: {:?}", result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA, constructing the RNG from `config.seed`.
    pub fn run<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        let mut rng = create_rng(config.seed.unwrap_or_else(rand::random));
        Self::run_with_rng(problem, config, &mut rng)
    }

    /// Runs the GA with an externally supplied RNG.
    ///
    /// All stochastic steps (initialization, selection, crossover,
    /// mutation) draw from `rng`, so a fixed generator yields a fully
    /// deterministic run.
    pub fn run_with_rng<P: GaProblem, R: Rng>(
        problem: &P,
        config: &GaConfig,
        rng: &mut R,
    ) -> Result<GaResult<P::Individual>, ConfigError> {
        config.validate()?;

        let mut population: Vec<P::Individual> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();
        evaluate_slice(problem, &mut population, config.parallel);

        let mut best = find_best(&population).clone();
        let mut fitness_history = Vec::with_capacity(config.max_generations + 1);
        fitness_history.push(best.fitness().to_f64());

        let mut stagnation_counter = 0usize;

        for gen in 0..config.max_generations {
            // Best first, so the elite slice is the head of the sort
            population.sort_by(|a, b| {
                a.fitness()
                    .partial_cmp(&b.fitness())
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

            let elite_count = config.elite_count();
            let mut next_gen: Vec<P::Individual> = population[..elite_count].to_vec();

            while next_gen.len() < config.population_size {
                let p1_idx = config.selection.select(&population, rng);
                let p2_idx = config.selection.select(&population, rng);

                let children = if rng.random_range(0.0..1.0) < config.crossover_rate {
                    problem.crossover(&population[p1_idx], &population[p2_idx], rng)
                } else {
                    vec![population[p1_idx].clone()]
                };

                for mut child in children {
                    if next_gen.len() >= config.population_size {
                        break;
                    }
                    if rng.random_range(0.0..1.0) < config.mutation_rate {
                        problem.mutate(&mut child, rng);
                    }
                    next_gen.push(child);
                }
            }

            // Elites keep their cached fitness; everything else is fresh
            evaluate_slice(problem, &mut next_gen[elite_count..], config.parallel);
            population = next_gen;

            let gen_best = find_best(&population);
            if gen_best.fitness() < best.fitness() {
                best = gen_best.clone();
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }

            fitness_history.push(best.fitness().to_f64());
            debug!(
                generation = gen + 1,
                best_fitness = best.fitness().to_f64(),
                "generation complete"
            );
            problem.on_generation(gen + 1, best.fitness());

            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                info!(
                    generations = gen + 1,
                    best_fitness = best.fitness().to_f64(),
                    "stopped on stagnation limit"
                );
                return Ok(GaResult {
                    best_fitness: best.fitness(),
                    best,
                    generations: gen + 1,
                    stagnated: true,
                    fitness_history,
                });
            }
        }

        info!(
            generations = config.max_generations,
            best_fitness = best.fitness().to_f64(),
            "run complete"
        );
        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: config.max_generations,
            stagnated: false,
            fitness_history,
        })
    }
}

/// Fork–join fitness evaluation over one generation's new individuals.
fn evaluate_slice<P: GaProblem>(problem: &P, individuals: &mut [P::Individual], parallel: bool) {
    if parallel {
        individuals.par_iter_mut().for_each(|ind| {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        });
    } else {
        for ind in individuals.iter_mut() {
            let f = problem.evaluate(ind);
            ind.set_fitness(f);
        }
    }
}

fn find_best<I: Individual>(population: &[I]) -> &I {
    population
        .iter()
        .min_by(|a, b| {
            a.fitness()
                .partial_cmp(&b.fitness())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population must not be empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;

    // OneMax stand-in: minimize the negative count of set bits. Small and
    // fast, exercises the loop without the topology domain.
    #[derive(Clone, Debug)]
    struct BitString {
        bits: Vec<bool>,
        fitness: f64,
    }

    impl Individual for BitString {
        type Fitness = f64;
        fn fitness(&self) -> f64 {
            self.fitness
        }
        fn set_fitness(&mut self, f: f64) {
            self.fitness = f;
        }
    }

    struct OneMax {
        n: usize,
    }

    impl GaProblem for OneMax {
        type Individual = BitString;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> BitString {
            BitString {
                bits: (0..self.n).map(|_| rng.random_bool(0.5)).collect(),
                fitness: f64::INFINITY,
            }
        }

        fn evaluate(&self, ind: &BitString) -> f64 {
            -(ind.bits.iter().filter(|&&b| b).count() as f64)
        }

        fn crossover<R: Rng>(
            &self,
            p1: &BitString,
            p2: &BitString,
            rng: &mut R,
        ) -> Vec<BitString> {
            let point = rng.random_range(0..self.n);
            let mut c1 = p1.clone();
            let mut c2 = p2.clone();
            c1.bits[point..].copy_from_slice(&p2.bits[point..]);
            c2.bits[point..].copy_from_slice(&p1.bits[point..]);
            c1.fitness = f64::INFINITY;
            c2.fitness = f64::INFINITY;
            vec![c1, c2]
        }

        fn mutate<R: Rng>(&self, ind: &mut BitString, rng: &mut R) {
            let idx = rng.random_range(0..self.n);
            ind.bits[idx] = !ind.bits[idx];
        }
    }

    fn base_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(50)
            .with_max_generations(200)
            .with_mutation_rate(0.3)
            .with_seed(42)
            .with_parallel(false)
    }

    #[test]
    fn test_onemax_convergence() {
        let result = GaRunner::run(&OneMax { n: 20 }, &base_config()).unwrap();
        assert!(
            result.best_fitness <= -15.0,
            "expected fitness <= -15.0 for 20-bit OneMax, got {}",
            result.best_fitness
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(&OneMax { n: 5 }, &config).is_err());
    }

    #[test]
    fn test_fixed_budget_runs_to_completion() {
        let config = base_config().with_max_generations(30);
        let result = GaRunner::run(&OneMax { n: 10 }, &config).unwrap();
        assert_eq!(result.generations, 30);
        assert!(!result.stagnated);
        // initial snapshot + one per generation
        assert_eq!(result.fitness_history.len(), 31);
    }

    #[test]
    fn test_stagnation_stop_when_enabled() {
        let config = base_config()
            .with_max_generations(5000)
            .with_stagnation_limit(10);
        let result = GaRunner::run(&OneMax { n: 5 }, &config).unwrap();
        assert!(result.stagnated);
        assert!(result.generations < 5000);
    }

    #[test]
    fn test_best_fitness_monotone_with_elitism() {
        let config = base_config().with_elite_ratio(0.2);
        let result = GaRunner::run(&OneMax { n: 10 }, &config).unwrap();
        for window in result.fitness_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best-so-far must be non-increasing: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_fixed_seed_is_deterministic() {
        let a = GaRunner::run(&OneMax { n: 15 }, &base_config()).unwrap();
        let b = GaRunner::run(&OneMax { n: 15 }, &base_config()).unwrap();
        assert_eq!(a.fitness_history, b.fitness_history);
        assert_eq!(a.best.bits, b.best.bits);
    }

    #[test]
    fn test_all_selection_strategies_make_progress() {
        for selection in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            let config = base_config().with_selection(selection);
            let result = GaRunner::run(&OneMax { n: 10 }, &config).unwrap();
            assert!(
                result.best_fitness < 0.0,
                "selection {selection:?} found nothing, fitness {}",
                result.best_fitness
            );
        }
    }

    #[test]
    fn test_parallel_evaluation_produces_valid_result() {
        let config = base_config().with_parallel(true).with_max_generations(100);
        let result = GaRunner::run(&OneMax { n: 20 }, &config).unwrap();
        assert!(
            result.best_fitness <= -10.0,
            "parallel run should still converge, got {}",
            result.best_fitness
        );
    }
}
