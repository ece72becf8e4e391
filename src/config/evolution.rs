use super::traits::ConfigSection;
use crate::error::BlendoptError;
use serde::{Deserialize, Serialize};

/// Hyperparameters of the genetic search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    /// Standard deviation of the Gaussian noise applied by mutation
    pub mutation_sigma: f64,
    pub tournament_size: usize,
    /// Fixed RNG seed; None draws one from the OS
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            mutation_sigma: 0.1,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), BlendoptError> {
        if self.population_size == 0 {
            return Err(BlendoptError::Configuration(
                "Population size must be positive".to_string(),
            ));
        }
        if self.generations == 0 {
            return Err(BlendoptError::Configuration(
                "Generation count must be positive".to_string(),
            ));
        }
        if self.crossover_rate < 0.0 || self.crossover_rate > 1.0 {
            return Err(BlendoptError::Configuration(
                "Crossover rate must be between 0 and 1".to_string(),
            ));
        }
        if self.mutation_rate < 0.0 || self.mutation_rate > 1.0 {
            return Err(BlendoptError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !self.mutation_sigma.is_finite() || self.mutation_sigma <= 0.0 {
            return Err(BlendoptError::Configuration(
                "Mutation sigma must be positive".to_string(),
            ));
        }
        if self.tournament_size == 0 || self.tournament_size > self.population_size {
            return Err(BlendoptError::Configuration(
                "Tournament size must be between 1 and the population size".to_string(),
            ));
        }
        Ok(())
    }
}
