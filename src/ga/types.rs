//! Core trait definitions for the GA engine.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the generic
//! evolutionary loop and the cable-topology domain (or any other problem
//! plugged into it).

use rand::Rng;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable. Lower fitness
/// is better (minimization); infeasible candidates report
/// [`worst`](Fitness::worst).
pub trait Fitness: PartialOrd + Copy + Send + Sync + std::fmt::Debug + 'static {
    /// Worst possible fitness, used for uninitialized individuals and as
    /// the infeasibility sentinel.
    fn worst() -> Self;

    /// Converts to `f64` for history tracking and logging.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn worst() -> Self {
        f64::INFINITY
    }

    fn to_f64(self) -> f64 {
        self
    }
}

/// A candidate solution in the population.
///
/// Individuals carry their own cached fitness. The engine calls
/// [`GaProblem::evaluate`] whenever the underlying genome has changed and
/// stores the result via [`set_fitness`](Individual::set_fitness); an
/// unchanged individual's cached value is treated as valid.
pub trait Individual: Clone + Send + Sync {
    type Fitness: Fitness;

    /// Current (cached) fitness of this individual.
    fn fitness(&self) -> Self::Fitness;

    /// Stores a freshly computed fitness. Called by the engine after
    /// evaluation.
    fn set_fitness(&mut self, fitness: Self::Fitness);
}

/// Defines an optimization problem for the GA engine.
///
/// Covers initialization, evaluation and the two variation operators.
/// Must be `Send + Sync`: the runner evaluates the population in parallel
/// with rayon when enabled.
pub trait GaProblem: Send + Sync {
    type Individual: Individual;

    /// Creates a random individual.
    ///
    /// No feasibility is guaranteed or expected; generation is cheap and
    /// unconstrained, feasibility is discovered at evaluation time.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Computes the fitness of an individual. Lower is better.
    ///
    /// Must be a pure function of the individual and the fixed problem
    /// instance; the engine may call it concurrently across the population.
    fn evaluate(&self, individual: &Self::Individual) -> <Self::Individual as Individual>::Fitness;

    /// Produces one or two offspring from two parents.
    ///
    /// The default clones `parent1` (no recombination). Offspring may be
    /// infeasible; that is resolved at the next evaluation, not here.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Vec<Self::Individual> {
        vec![parent1.clone()]
    }

    /// Mutates an individual in place. The default is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}

    /// Called at the end of each generation with the best fitness so far.
    ///
    /// Hook for progress reporting or adaptive control; the default is a
    /// no-op.
    fn on_generation(
        &self,
        _generation: usize,
        _best_fitness: <Self::Individual as Individual>::Fitness,
    ) {
    }
}
