//! Randomised multi-start hill climbing for the hub position.
//!
//! The search is a sign-of-gradient descent with an adaptive step, not a true
//! gradient method: a step can overshoot, and nothing guarantees a climber
//! reaches a local minimum within its budget. Running many climbers from
//! scattered starts and keeping the cheapest is what makes the result usable.

mod climber;
mod optimizer;
mod seeds;

pub use climber::{ClimbParams, Climber, ClimberState, StartRegion};
pub use optimizer::{select_best, ClimberSummary, Optimizer, OptimizerReport};
pub use seeds::{climber_rng, climber_seeds, master_rng};
