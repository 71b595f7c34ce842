//! Cable cost and fitness evaluation.
//!
//! Cost is the sum over all links of segment length times the tier's cost
//! per unit length. Fitness is cost for feasible topologies and a hard
//! [`INFEASIBLE`] sentinel otherwise, so infeasible candidates are never
//! preferred over feasible ones and no partial credit exists for "almost
//! feasible".

use crate::constraints;
use crate::site::Site;
use crate::topology::Topology;

/// Fitness sentinel for topologies that violate any constraint.
///
/// Compares as worse than every feasible cost (lower fitness is better).
pub const INFEASIBLE: f64 = f64::INFINITY;

/// Total cable cost: `distance(i, j) * cost_per_unit[tier]` summed over
/// every linked unordered pair.
///
/// Each pair is costed at most once, so the degenerate topology with both
/// (i, j) and (j, i) set is not double-counted (it is rejected by the
/// acyclicity check anyway). The substation is addressed as the last node;
/// turbine-to-turbine and turbine-to-substation links are costed
/// identically.
///
/// # Panics
/// Panics if a link's tier exceeds the site's tier table; callers that
/// accept external topologies validate through [`crate::solver::evaluate`].
pub fn total_cost(topology: &Topology, site: &Site) -> f64 {
    let dim = topology.dim();
    let mut cost = 0.0;
    for i in 0..dim {
        for j in (i + 1)..dim {
            let tier = match (topology.get(i, j), topology.get(j, i)) {
                (0, 0) => continue,
                (0, t) | (t, _) => t,
            };
            let dist = site.position(i).distance(&site.position(j));
            cost += dist * site.tiers()[tier as usize - 1].cost_per_unit;
        }
    }
    cost
}

/// Fitness of a candidate: [`INFEASIBLE`] if any constraint fails,
/// otherwise [`total_cost`]. Lower is better.
pub fn fitness(topology: &Topology, site: &Site) -> f64 {
    if constraints::is_feasible(topology, site) {
        total_cost(topology, site)
    } else {
        INFEASIBLE
    }
}
