//! Public entry points for the excluded CLI / data-loading layers.
//!
//! Everything above this module hands in a validated [`Site`] plus search
//! hyperparameters and gets back the best topology found and its cost.
//! Precondition violations (wrong dimensions, out-of-range tiers, bad
//! hyperparameters) abort with a descriptive error before any search work
//! starts; infeasible candidates inside a run are not errors.

use crate::cost;
use crate::ga::{ConfigError, GaConfig, GaProblem, GaRunner, Selection};
use crate::problem::{CablingProblem, Candidate, Crossover, Mutation};
use crate::site::Site;
use crate::topology::Topology;
use rand::Rng;
use thiserror::Error;

/// Precondition violations on externally supplied topologies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("topology has dimension {found}, expected {expected} (turbines + substation)")]
    DimensionMismatch { expected: usize, found: usize },

    #[error("link ({from}, {to}) uses tier {tier}, but the site has only {tier_count} tiers")]
    TierOutOfRange {
        from: usize,
        to: usize,
        tier: u8,
        tier_count: usize,
    },
}

/// Search hyperparameters handed in by the caller.
///
/// Defaults mirror the reference driver: population 50, 100 generations,
/// tournament selection, row-wise crossover, 5% per-link mutation.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchParams {
    pub population_size: usize,
    pub generations: usize,
    pub selection: Selection,
    pub crossover: Crossover,
    pub mutation: Mutation,
    /// Fraction of elites copied unchanged each generation.
    pub elite_ratio: f64,
    /// Evaluate fitness across rayon workers.
    pub parallel: bool,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            elite_ratio: 0.1,
            parallel: true,
        }
    }
}

impl SearchParams {
    fn to_ga_config(&self) -> GaConfig {
        GaConfig::default()
            .with_population_size(self.population_size)
            .with_max_generations(self.generations)
            .with_selection(self.selection)
            .with_elite_ratio(self.elite_ratio)
            .with_parallel(self.parallel)
    }
}

/// Result handed back to the caller: the best topology and its cost.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub best_topology: Topology,
    /// Cost of `best_topology`, or the infeasible sentinel if the search
    /// never found a feasible candidate.
    pub best_fitness: f64,
    pub generations: usize,
    /// Best-so-far fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Creates a batch of random candidate topologies for `site`.
///
/// Candidates are unevaluated; feasibility and cost are discovered by
/// [`evaluate`] or inside [`run_search`]. Bad hyperparameters (such as a
/// population too small to evolve) are rejected up front, the same way
/// [`run_search`] rejects them.
pub fn initialize_population<R: Rng>(
    site: &Site,
    params: &SearchParams,
    rng: &mut R,
) -> Result<Vec<Candidate>, ConfigError> {
    params.to_ga_config().validate()?;
    let problem = CablingProblem::new(site.clone())
        .with_crossover(params.crossover)
        .with_mutation(params.mutation);
    Ok((0..params.population_size)
        .map(|_| problem.create_individual(rng))
        .collect())
}

/// Evaluates an externally supplied topology against a site.
///
/// Checks the structural preconditions first: the relation must be square of
/// dimension turbines + 1 (guaranteed by [`Topology`]'s representation,
/// checked against the site here) and every tier must exist in the cable
/// table. Returns the fitness: total cost if feasible, the infeasible
/// sentinel otherwise.
pub fn evaluate(topology: &Topology, site: &Site) -> Result<f64, EvalError> {
    if topology.dim() != site.node_count() {
        return Err(EvalError::DimensionMismatch {
            expected: site.node_count(),
            found: topology.dim(),
        });
    }
    for (from, to, tier) in topology.directed_edges() {
        if tier as usize > site.tier_count() {
            return Err(EvalError::TierOutOfRange {
                from,
                to,
                tier,
                tier_count: site.tier_count(),
            });
        }
    }
    Ok(cost::fitness(topology, site))
}

/// Runs the full genetic search and returns the best topology found.
///
/// The RNG is threaded through every stochastic step, so a fixed seed via
/// [`crate::random::create_rng`] gives a fully deterministic run.
pub fn run_search<R: Rng>(
    site: &Site,
    params: &SearchParams,
    rng: &mut R,
) -> Result<SearchOutcome, ConfigError> {
    let problem = CablingProblem::new(site.clone())
        .with_crossover(params.crossover)
        .with_mutation(params.mutation);
    let config = params.to_ga_config();
    let result = GaRunner::run_with_rng(&problem, &config, rng)?;

    Ok(SearchOutcome {
        best_topology: result.best.topology,
        best_fitness: result.best_fitness,
        generations: result.generations,
        fitness_history: result.fitness_history,
    })
}
