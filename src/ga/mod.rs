//! Generic genetic-algorithm engine.
//!
//! A trait-based evolutionary loop, independent of the cable domain: the
//! problem plugs in through [`GaProblem`], which defines initialization,
//! evaluation, crossover and mutation for its [`Individual`] type. The
//! cable-topology problem lives in [`crate::problem`]; the engine itself
//! knows nothing about turbines or cables.
//!
//! - [`GaConfig`]: loop parameters (population, selection, elitism, seed)
//! - [`Selection`]: pluggable parent-selection strategies
//! - [`GaRunner`] / [`GaResult`]: the loop and its outcome

mod config;
mod runner;
mod selection;
mod types;

pub use config::{ConfigError, GaConfig};
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{Fitness, GaProblem, Individual};
