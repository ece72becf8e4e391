use super::traits::ConfigSection;
use crate::error::BlendoptError;
use serde::{Deserialize, Serialize};

/// Per-component cost and quality data
///
/// Parallel columns, one entry per fuel component. Blend proportion vectors
/// are indexed consistently with these columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComponentTable {
    pub costs: Vec<f64>,          // currency per liter
    pub octane: Vec<f64>,         // RON
    pub vapor_pressure: Vec<f64>, // kPa
    pub benzene: Vec<f64>,        // % v/v
    pub sulfur: Vec<f64>,         // ppm
}

impl ComponentTable {
    /// Number of components in the table
    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }
}

impl Default for ComponentTable {
    fn default() -> Self {
        Self {
            costs: vec![2.50, 3.00, 1.80, 2.80],
            octane: vec![95.0, 88.0, 85.0, 92.0],
            vapor_pressure: vec![65.0, 55.0, 58.0, 64.0],
            benzene: vec![2.5, 1.5, 1.2, 2.0],
            sulfur: vec![60.0, 40.0, 35.0, 55.0],
        }
    }
}

impl ConfigSection for ComponentTable {
    fn section_name() -> &'static str {
        "components"
    }

    fn validate(&self) -> Result<(), BlendoptError> {
        if self.costs.is_empty() {
            return Err(BlendoptError::Configuration(
                "At least one component is required".to_string(),
            ));
        }
        let n = self.costs.len();
        let columns = [
            ("costs", &self.costs),
            ("octane", &self.octane),
            ("vapor_pressure", &self.vapor_pressure),
            ("benzene", &self.benzene),
            ("sulfur", &self.sulfur),
        ];
        for (name, column) in columns {
            if column.len() != n {
                return Err(BlendoptError::Configuration(format!(
                    "Column '{}' has {} entries, expected {}",
                    name,
                    column.len(),
                    n
                )));
            }
            if column.iter().any(|v| !v.is_finite() || *v < 0.0) {
                return Err(BlendoptError::Configuration(format!(
                    "Column '{}' must contain finite, non-negative values",
                    name
                )));
            }
        }
        Ok(())
    }
}
