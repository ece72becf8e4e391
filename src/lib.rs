//! Genetic-algorithm optimizer for fuel blending.
//!
//! Searches for the lowest-cost mixture of fuel components that satisfies
//! octane, vapor pressure, benzene and sulfur specifications. Constraint
//! violations are folded into the fitness as weighted penalties, so the
//! search prefers feasibility first and cost second.

pub mod config;
pub mod engines;
pub mod error;
pub mod report;
pub mod types;

pub use error::{BlendoptError, Result};
