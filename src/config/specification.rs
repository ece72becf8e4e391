use super::traits::ConfigSection;
use crate::error::BlendoptError;
use serde::{Deserialize, Serialize};

/// Quality thresholds the finished blend must meet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Specification {
    pub octane_min: f64,         // RON
    pub vapor_pressure_max: f64, // kPa
    pub benzene_max: f64,        // % v/v
    pub sulfur_max: f64,         // ppm
}

impl Default for Specification {
    fn default() -> Self {
        Self {
            octane_min: 91.0,
            vapor_pressure_max: 62.0,
            benzene_max: 2.0,
            sulfur_max: 50.0,
        }
    }
}

impl ConfigSection for Specification {
    fn section_name() -> &'static str {
        "specification"
    }

    fn validate(&self) -> Result<(), BlendoptError> {
        let thresholds = [
            ("octane_min", self.octane_min),
            ("vapor_pressure_max", self.vapor_pressure_max),
            ("benzene_max", self.benzene_max),
            ("sulfur_max", self.sulfur_max),
        ];
        for (name, value) in thresholds {
            if !value.is_finite() {
                return Err(BlendoptError::Configuration(format!(
                    "Threshold '{}' must be finite",
                    name
                )));
            }
        }
        Ok(())
    }
}
