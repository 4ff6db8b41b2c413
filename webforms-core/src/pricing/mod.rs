//! Quote pricing: lenient cost parsing and the full-recompute engine.

pub mod cost;
mod engine;

pub use cost::{MAX_COST, parse_cost};
pub use engine::PricingEngine;
