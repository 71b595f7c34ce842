//! Cable topology: the connectivity relation and its structural queries.
//!
//! A [`Topology`] is a dense square relation over all nodes (turbines plus
//! substation). Entry `(i, j)` is a 1-based cable tier for a directed link
//! from `i` to `j`, or 0 for no link. Dense storage is deliberate: sites
//! have tens of nodes, so the O(n²) footprint is irrelevant and iteration
//! stays branch-light.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Connectivity relation over `dim` nodes, the last of which is the hub
/// (substation).
///
/// Invariants maintained by construction: the relation is square and the
/// diagonal is always 0. Feasibility (capacity, crossing, reachability,
/// acyclicity) is *not* an invariant — random and recombined topologies
/// routinely violate it and are rejected at evaluation time instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Topology {
    dim: usize,
    entries: Vec<u8>,
}

impl Topology {
    /// Empty relation over `turbine_count` turbines plus the hub.
    pub fn for_turbines(turbine_count: usize) -> Self {
        let dim = turbine_count + 1;
        Self {
            dim,
            entries: vec![0; dim * dim],
        }
    }

    /// Number of nodes, including the hub.
    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn turbine_count(&self) -> usize {
        self.dim - 1
    }

    /// Index of the hub node (always the last).
    pub fn hub(&self) -> usize {
        self.dim - 1
    }

    /// Tier of the directed link `i -> j`, 0 if absent.
    pub fn get(&self, i: usize, j: usize) -> u8 {
        self.entries[i * self.dim + j]
    }

    /// Sets the tier of the directed link `i -> j`.
    ///
    /// # Panics
    /// Panics on an attempt to create a self-link (`i == j` with a nonzero
    /// tier).
    pub fn set(&mut self, i: usize, j: usize, tier: u8) {
        assert!(i != j || tier == 0, "self-link on node {i}");
        self.entries[i * self.dim + j] = tier;
    }

    /// All directed links as `(from, to, tier)` with tier > 0, row-major.
    pub fn directed_edges(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let dim = self.dim;
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, &t)| t > 0)
            .map(move |(idx, &t)| (idx / dim, idx % dim, t))
    }

    /// Number of links touching `node`, outgoing plus incoming.
    pub fn incident_links(&self, node: usize) -> usize {
        (0..self.dim)
            .filter(|&other| other != node)
            .map(|other| {
                usize::from(self.get(node, other) > 0) + usize::from(self.get(other, node) > 0)
            })
            .sum()
    }

    /// True iff the directed graph induced by nonzero entries contains a
    /// cycle.
    ///
    /// Iterative DFS with recursion-stack tracking: hitting a node that is
    /// still on the stack is a cycle; hitting a fully finished node is not.
    pub fn has_cycle(&self) -> bool {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Unvisited,
            OnStack,
            Done,
        }

        let mut marks = vec![Mark::Unvisited; self.dim];

        for start in 0..self.dim {
            if marks[start] != Mark::Unvisited {
                continue;
            }
            // (node, next successor to try)
            let mut stack = vec![(start, 0usize)];
            marks[start] = Mark::OnStack;

            while let Some(top) = stack.last_mut() {
                let node = top.0;
                let mut descend_to = None;
                while top.1 < self.dim {
                    let succ = top.1;
                    top.1 += 1;
                    if self.get(node, succ) == 0 {
                        continue;
                    }
                    match marks[succ] {
                        Mark::OnStack => return true,
                        Mark::Done => {}
                        Mark::Unvisited => {
                            descend_to = Some(succ);
                            break;
                        }
                    }
                }
                match descend_to {
                    Some(succ) => {
                        marks[succ] = Mark::OnStack;
                        stack.push((succ, 0));
                    }
                    None => {
                        marks[node] = Mark::Done;
                        stack.pop();
                    }
                }
            }
        }
        false
    }

    /// True iff the hub is reachable from `node` when links are treated as
    /// undirected.
    ///
    /// Cable direction does not constrain power flow, so either direction of
    /// a link counts as connectivity.
    pub fn reaches_hub(&self, node: usize) -> bool {
        let hub = self.hub();
        if node == hub {
            return true;
        }
        let mut seen = vec![false; self.dim];
        let mut queue = VecDeque::new();
        seen[node] = true;
        queue.push_back(node);

        while let Some(current) = queue.pop_front() {
            for other in 0..self.dim {
                if seen[other] || (self.get(current, other) == 0 && self.get(other, current) == 0)
                {
                    continue;
                }
                if other == hub {
                    return true;
                }
                seen[other] = true;
                queue.push_back(other);
            }
        }
        false
    }
}
