//! Site layout and cable catalogue.
//!
//! A [`Site`] is the immutable problem instance: fixed turbine positions,
//! one substation, and the ordered cable tier table. All search state is
//! built on top of it; nothing here changes during a run.

use crate::geometry::Point;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One cable class: cost per unit length and the maximum number of
/// turbines it may carry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CableTier {
    pub cost_per_unit: f64,
    pub capacity: usize,
}

/// Precondition violations detected when assembling a [`Site`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SiteError {
    #[error("coordinate arrays have mismatched lengths: {x} x-values, {y} y-values")]
    CoordinateLengthMismatch { x: usize, y: usize },

    #[error("site has no turbines")]
    NoTurbines,

    #[error("cable tables have mismatched lengths: {costs} costs, {capacities} capacities")]
    TierTableMismatch { costs: usize, capacities: usize },

    #[error("cable table is empty")]
    NoTiers,
}

/// Immutable problem instance: turbine positions, substation position and
/// the ordered cable tier table.
///
/// Node indexing convention: turbines are `0..turbine_count()`, the
/// substation is `turbine_count()` (the last node). Tiers are referenced
/// 1-based from topologies; tier 0 means "no cable".
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Site {
    turbines: Vec<Point>,
    substation: Point,
    tiers: Vec<CableTier>,
}

impl Site {
    /// Builds a site from parallel coordinate arrays and cable tables.
    ///
    /// Capacities are conventionally non-decreasing by tier index; this is
    /// not enforced, only the structural preconditions are.
    pub fn new(
        xs: &[f64],
        ys: &[f64],
        substation: Point,
        tier_costs: &[f64],
        tier_capacities: &[usize],
    ) -> Result<Self, SiteError> {
        if xs.len() != ys.len() {
            return Err(SiteError::CoordinateLengthMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(SiteError::NoTurbines);
        }
        if tier_costs.len() != tier_capacities.len() {
            return Err(SiteError::TierTableMismatch {
                costs: tier_costs.len(),
                capacities: tier_capacities.len(),
            });
        }
        if tier_costs.is_empty() {
            return Err(SiteError::NoTiers);
        }

        let turbines = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| Point::new(x, y))
            .collect();
        let tiers = tier_costs
            .iter()
            .zip(tier_capacities.iter())
            .map(|(&cost_per_unit, &capacity)| CableTier {
                cost_per_unit,
                capacity,
            })
            .collect();

        Ok(Self {
            turbines,
            substation,
            tiers,
        })
    }

    pub fn turbine_count(&self) -> usize {
        self.turbines.len()
    }

    /// Turbines plus the substation.
    pub fn node_count(&self) -> usize {
        self.turbines.len() + 1
    }

    /// Index of the substation node (always the last node).
    pub fn substation_index(&self) -> usize {
        self.turbines.len()
    }

    pub fn tier_count(&self) -> usize {
        self.tiers.len()
    }

    pub fn turbines(&self) -> &[Point] {
        &self.turbines
    }

    pub fn substation(&self) -> Point {
        self.substation
    }

    pub fn tiers(&self) -> &[CableTier] {
        &self.tiers
    }

    /// Position of any node, turbine or substation.
    ///
    /// # Panics
    /// Panics if `node >= node_count()`.
    pub fn position(&self, node: usize) -> Point {
        if node == self.substation_index() {
            self.substation
        } else {
            self.turbines[node]
        }
    }
}
