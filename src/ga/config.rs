//! GA engine configuration.

use super::selection::Selection;
use thiserror::Error;

/// Invalid engine parameters, rejected before a run starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    #[error("max_generations must be at least 1")]
    NoGenerations,

    #[error("elite_ratio too high: elites fill the entire population")]
    ElitesFillPopulation,
}

/// Parameters of the evolutionary loop.
///
/// Built with the builder methods; validated once by the runner before the
/// first generation.
///
/// ```
/// use cablenet::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(80)
///     .with_selection(Selection::Rank)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals, fixed for the whole run.
    pub population_size: usize,

    /// Number of generations; the run always terminates after this many
    /// unless stagnation-based stopping is enabled.
    pub max_generations: usize,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Fraction of the population copied unchanged into the next
    /// generation (0.0–1.0). A nonzero ratio makes best fitness
    /// monotonically non-increasing across generations.
    pub elite_ratio: f64,

    /// Probability of recombining a selected pair rather than cloning the
    /// first parent (0.0–1.0).
    pub crossover_rate: f64,

    /// Probability of mutating each offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Generations without improvement before stopping early.
    ///
    /// 0 disables early stopping (the default): the search runs its full
    /// fixed budget.
    pub stagnation_limit: usize,

    /// Evaluate the population in parallel with rayon.
    pub parallel: bool,

    /// Seed for the run's RNG; `None` draws a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 100,
            selection: Selection::default(),
            elite_ratio: 0.1,
            crossover_rate: 0.9,
            mutation_rate: 0.1,
            stagnation_limit: 0,
            parallel: true,
            seed: None,
        }
    }
}

impl GaConfig {
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit (0 disables early stopping).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size < 2 {
            return Err(ConfigError::PopulationTooSmall(self.population_size));
        }
        if self.max_generations == 0 {
            return Err(ConfigError::NoGenerations);
        }
        let elite_count = (self.population_size as f64 * self.elite_ratio) as usize;
        if elite_count >= self.population_size {
            return Err(ConfigError::ElitesFillPopulation);
        }
        Ok(())
    }

    pub(crate) fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elite_ratio) as usize
    }
}
