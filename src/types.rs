use serde::{Deserialize, Serialize};

use crate::engines::generation::Blend;

/// Blended quality properties of a candidate mixture
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlendProperties {
    pub octane: f64,         // RON
    pub vapor_pressure: f64, // kPa
    pub benzene: f64,        // % v/v
    pub sulfur: f64,         // ppm
}

/// Outcome of a completed optimization run
///
/// Values are exposed verbatim, without rounding, so callers control
/// presentation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    /// The best blend found across all generations
    pub best_blend: Blend,
    /// Its fitness (cost + penalty)
    pub best_fitness: f64,
    /// Its raw blend cost
    pub best_cost: f64,
    /// Its constraint penalty; zero means the blend is feasible
    pub best_penalty: f64,
    /// Best fitness seen in each generation, in order
    pub trajectory: Vec<f64>,
}
