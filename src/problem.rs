//! The cable-topology optimization problem, plugged into the GA engine.
//!
//! [`CablingProblem`] implements [`GaProblem`]: random topology
//! initialization, fitness via the constraint validator and cost evaluator,
//! and the variation operators. Crossover and mutation are pluggable
//! strategy enums, mirroring how parent selection is configured on the
//! engine side.

use crate::cost;
use crate::ga::{GaProblem, Individual};
use crate::site::Site;
use crate::topology::Topology;
use rand::Rng;

/// One candidate solution: a topology with its cached fitness.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub topology: Topology,
    fitness: f64,
}

impl Candidate {
    /// Wraps a topology with an unevaluated (worst) fitness.
    pub fn new(topology: Topology) -> Self {
        Self {
            topology,
            fitness: f64::INFINITY,
        }
    }
}

impl Individual for Candidate {
    type Fitness = f64;

    fn fitness(&self) -> f64 {
        self.fitness
    }

    fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}

/// Recombination strategy for two parent topologies.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single-point exchange of whole connectivity rows: the child takes
    /// rows below the cut from one parent and the rest from the other.
    /// Produces two complementary children.
    RowWise,

    /// Per ordered pair, take the entry from either parent with equal
    /// probability. Produces one child.
    UniformEdge,
}

impl Default for Crossover {
    fn default() -> Self {
        Crossover::RowWise
    }
}

/// Mutation strategy for a topology.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// For every ordered pair independently, with probability `rate`,
    /// resample the entry uniformly from `0..=tier_count`. Drawing 0
    /// removes the link, any other value adds or retiers it.
    PerLink { rate: f64 },
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::PerLink { rate: 0.05 }
    }
}

/// Generates an unconstrained random topology.
///
/// For each turbine a fair-ish coin (`hub_link_prob`) decides between a
/// direct substation link with a uniform random tier, or independent
/// `peer_link_prob` coins for a link to every other turbine. No feasibility
/// check happens here; infeasible results are rejected by fitness instead.
pub fn random_topology<R: Rng>(
    turbine_count: usize,
    tier_count: usize,
    hub_link_prob: f64,
    peer_link_prob: f64,
    rng: &mut R,
) -> Topology {
    let mut topology = Topology::for_turbines(turbine_count);
    let hub = topology.hub();
    let max_tier = tier_count as u8;

    for i in 0..turbine_count {
        if rng.random_bool(hub_link_prob) {
            topology.set(i, hub, rng.random_range(1..=max_tier));
        } else {
            for j in 0..turbine_count {
                if i != j && rng.random_bool(peer_link_prob) {
                    topology.set(i, j, rng.random_range(1..=max_tier));
                }
            }
        }
    }
    topology
}

/// The wind-farm cabling problem instance handed to the GA engine.
#[derive(Debug, Clone)]
pub struct CablingProblem {
    site: Site,
    hub_link_prob: f64,
    peer_link_prob: f64,
    crossover: Crossover,
    mutation: Mutation,
}

impl CablingProblem {
    pub fn new(site: Site) -> Self {
        Self {
            site,
            hub_link_prob: 0.5,
            peer_link_prob: 0.5,
            crossover: Crossover::default(),
            mutation: Mutation::default(),
        }
    }

    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Tunes the initializer's link probabilities.
    pub fn with_link_probabilities(mut self, hub: f64, peer: f64) -> Self {
        self.hub_link_prob = hub.clamp(0.0, 1.0);
        self.peer_link_prob = peer.clamp(0.0, 1.0);
        self
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    fn row_wise_children<R: Rng>(
        &self,
        a: &Topology,
        b: &Topology,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let dim = a.dim();
        let cut = rng.random_range(1..dim);
        let mut c1 = Topology::for_turbines(dim - 1);
        let mut c2 = Topology::for_turbines(dim - 1);
        for i in 0..dim {
            let (src1, src2) = if i < cut { (a, b) } else { (b, a) };
            for j in 0..dim {
                if i == j {
                    continue;
                }
                c1.set(i, j, src1.get(i, j));
                c2.set(i, j, src2.get(i, j));
            }
        }
        vec![Candidate::new(c1), Candidate::new(c2)]
    }

    fn uniform_edge_child<R: Rng>(
        &self,
        a: &Topology,
        b: &Topology,
        rng: &mut R,
    ) -> Vec<Candidate> {
        let dim = a.dim();
        let mut child = Topology::for_turbines(dim - 1);
        for i in 0..dim {
            for j in 0..dim {
                if i == j {
                    continue;
                }
                let src = if rng.random_bool(0.5) { a } else { b };
                child.set(i, j, src.get(i, j));
            }
        }
        vec![Candidate::new(child)]
    }
}

impl GaProblem for CablingProblem {
    type Individual = Candidate;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Candidate {
        Candidate::new(random_topology(
            self.site.turbine_count(),
            self.site.tier_count(),
            self.hub_link_prob,
            self.peer_link_prob,
            rng,
        ))
    }

    fn evaluate(&self, candidate: &Candidate) -> f64 {
        cost::fitness(&candidate.topology, &self.site)
    }

    fn crossover<R: Rng>(&self, p1: &Candidate, p2: &Candidate, rng: &mut R) -> Vec<Candidate> {
        match self.crossover {
            Crossover::RowWise => self.row_wise_children(&p1.topology, &p2.topology, rng),
            Crossover::UniformEdge => self.uniform_edge_child(&p1.topology, &p2.topology, rng),
        }
    }

    fn mutate<R: Rng>(&self, candidate: &mut Candidate, rng: &mut R) {
        match self.mutation {
            Mutation::PerLink { rate } => {
                let rate = rate.clamp(0.0, 1.0);
                let dim = candidate.topology.dim();
                let max_tier = self.site.tier_count() as u8;
                for i in 0..dim {
                    for j in 0..dim {
                        if i != j && rng.random_bool(rate) {
                            candidate.topology.set(i, j, rng.random_range(0..=max_tier));
                        }
                    }
                }
                candidate.set_fitness(f64::INFINITY);
            }
        }
    }
}
