use super::traits::ConfigSection;
use crate::error::BlendoptError;
use serde::{Deserialize, Serialize};

/// Per-constraint penalty weights
///
/// Each weight multiplies the magnitude of its constraint's violation. The
/// defaults are large relative to blend costs, so any violation dominates
/// cost differences and the search settles on feasible blends first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyWeights {
    pub octane_deficit: f64,
    pub vapor_pressure_excess: f64,
    pub benzene_excess: f64,
    pub sulfur_excess: f64,
}

impl Default for PenaltyWeights {
    fn default() -> Self {
        Self {
            octane_deficit: 100.0,
            vapor_pressure_excess: 50.0,
            benzene_excess: 200.0,
            sulfur_excess: 150.0,
        }
    }
}

impl ConfigSection for PenaltyWeights {
    fn section_name() -> &'static str {
        "penalties"
    }

    fn validate(&self) -> Result<(), BlendoptError> {
        let weights = [
            ("octane_deficit", self.octane_deficit),
            ("vapor_pressure_excess", self.vapor_pressure_excess),
            ("benzene_excess", self.benzene_excess),
            ("sulfur_excess", self.sulfur_excess),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(BlendoptError::Configuration(format!(
                    "Penalty weight '{}' must be finite and non-negative",
                    name
                )));
            }
        }
        Ok(())
    }
}
