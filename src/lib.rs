//! Wind-farm collection-network cable optimization.
//!
//! Searches for a low-cost cable topology connecting fixed turbine
//! positions to one substation, subject to per-link capacity, non-crossing
//! cables, hub connectivity and acyclicity. Offline, once per site layout.
//!
//! # Architecture
//!
//! Pure leaves, one stateful loop on top:
//!
//! - [`geometry`]: exact orientation/intersection predicates and distance
//! - [`site`]: the immutable problem instance (positions, cable tiers)
//! - [`topology`]: the connectivity relation and its structural queries
//! - [`constraints`]: the four feasibility checks with failure attribution
//! - [`cost`]: cable cost and the hard-penalty fitness
//! - [`problem`]: the domain plugged into the engine as a [`ga::GaProblem`]
//! - [`ga`]: generic evolutionary loop (selection, elitism, parallel
//!   evaluation), independent of the cable domain
//! - [`solver`]: the external entry points (`initialize_population`,
//!   `evaluate`, `run_search`)
//!
//! # Example
//!
//! ```
//! use cablenet::geometry::Point;
//! use cablenet::random::create_rng;
//! use cablenet::site::Site;
//! use cablenet::solver::{run_search, SearchParams};
//!
//! let site = Site::new(
//!     &[0.0, 10.0, 0.0],
//!     &[0.0, 0.0, 10.0],
//!     Point::new(5.0, 5.0),
//!     &[206.0, 287.0, 406.0], // cost per unit length, by tier
//!     &[3, 5, 7],             // turbines per cable, by tier
//! )?;
//!
//! let mut rng = create_rng(42);
//! let outcome = run_search(&site, &SearchParams::default(), &mut rng)?;
//! println!("best cost: {}", outcome.best_fitness);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod constraints;
pub mod cost;
pub mod ga;
pub mod geometry;
pub mod problem;
pub mod random;
pub mod site;
pub mod solver;
pub mod topology;

pub use constraints::ConstraintViolation;
pub use geometry::Point;
pub use problem::{CablingProblem, Candidate, Crossover, Mutation};
pub use site::{CableTier, Site, SiteError};
pub use solver::{
    evaluate, initialize_population, run_search, EvalError, SearchOutcome, SearchParams,
};
pub use topology::Topology;
