//! Feasibility checks for candidate topologies.
//!
//! Four independent boolean predicates: capacity, non-crossing, hub
//! connectivity and acyclicity. A topology is feasible iff all four hold.
//! An infeasible topology is a normal outcome of random generation and
//! variation, not an error, so the predicates return plain booleans and
//! [`check`] reports *which* constraint failed for diagnostics.

use crate::site::Site;
use crate::topology::Topology;
use crate::geometry::segments_intersect;

/// The first constraint a topology was found to violate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintViolation {
    /// Turbine carries more links than the largest tier allows.
    Capacity { turbine: usize },
    /// Two cable segments cross. Links are reported as unordered endpoint
    /// pairs.
    Crossing {
        first: (usize, usize),
        second: (usize, usize),
    },
    /// Turbine has no undirected path to the substation.
    Unreachable { turbine: usize },
    /// The directed relation contains a cycle.
    Cycle,
}

/// Capacity check: every turbine's incident link count (either direction)
/// must not exceed the capacity of the *largest* cable tier.
///
/// This reproduces the reference behavior, which compares against the last
/// tier's capacity only rather than the capacity of the tier assigned to
/// each link. The stricter per-link-tier rule was deliberately not adopted.
pub fn capacity_ok(topology: &Topology, site: &Site) -> bool {
    find_capacity_violation(topology, site).is_none()
}

fn find_capacity_violation(topology: &Topology, site: &Site) -> Option<usize> {
    let largest = site
        .tiers()
        .last()
        .map(|tier| tier.capacity)
        .unwrap_or(0);
    (0..topology.turbine_count()).find(|&i| topology.incident_links(i) > largest)
}

/// Non-crossing check: no two links with disjoint endpoint sets may have
/// intersecting segments.
///
/// Links sharing a node necessarily touch at that node and are allowed;
/// only pairs over four distinct nodes are tested geometrically. Pairwise
/// over all links, so quadratic in the link count.
pub fn non_crossing_ok(topology: &Topology, site: &Site) -> bool {
    find_crossing(topology, site).is_none()
}

fn find_crossing(
    topology: &Topology,
    site: &Site,
) -> Option<((usize, usize), (usize, usize))> {
    let links: Vec<(usize, usize)> = topology
        .directed_edges()
        .map(|(i, j, _)| (i.min(j), i.max(j)))
        .collect();

    for (a, &(i, j)) in links.iter().enumerate() {
        for &(k, l) in &links[a + 1..] {
            if i == k || i == l || j == k || j == l {
                continue;
            }
            if segments_intersect(
                site.position(i),
                site.position(j),
                site.position(k),
                site.position(l),
            ) {
                return Some(((i, j), (k, l)));
            }
        }
    }
    None
}

/// Hub-connectivity check: every turbine must reach the substation through
/// the undirected link relation.
pub fn hub_connected_ok(topology: &Topology) -> bool {
    find_unreachable(topology).is_none()
}

fn find_unreachable(topology: &Topology) -> Option<usize> {
    (0..topology.turbine_count()).find(|&i| !topology.reaches_hub(i))
}

/// Acyclicity check on the directed relation.
///
/// Together with hub connectivity this certifies a tree rooted at the
/// substation; the checks are kept separate so failures stay attributable.
pub fn acyclic_ok(topology: &Topology) -> bool {
    !topology.has_cycle()
}

/// Runs all four checks and reports the first violation, or `None` if the
/// topology is feasible.
pub fn check(topology: &Topology, site: &Site) -> Option<ConstraintViolation> {
    if let Some(turbine) = find_capacity_violation(topology, site) {
        return Some(ConstraintViolation::Capacity { turbine });
    }
    if let Some((first, second)) = find_crossing(topology, site) {
        return Some(ConstraintViolation::Crossing { first, second });
    }
    if let Some(turbine) = find_unreachable(topology) {
        return Some(ConstraintViolation::Unreachable { turbine });
    }
    if topology.has_cycle() {
        return Some(ConstraintViolation::Cycle);
    }
    None
}

/// True iff all four constraints hold.
pub fn is_feasible(topology: &Topology, site: &Site) -> bool {
    check(topology, site).is_none()
}
