use super::{
    components::ComponentTable, evolution::EvolutionConfig, penalties::PenaltyWeights,
    specification::Specification, traits::ConfigSection,
};
use crate::error::BlendoptError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub components: ComponentTable,
    pub specification: Specification,
    pub penalties: PenaltyWeights,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), BlendoptError> {
        self.evolution.validate()?;
        self.components.validate()?;
        self.specification.validate()?;
        self.penalties.validate()?;
        Ok(())
    }
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlendoptError> {
        let contents = std::fs::read_to_string(path)?;

        let config: AppConfig = toml::from_str(&contents)
            .map_err(|e| BlendoptError::Configuration(format!("Failed to parse config: {}", e)))?;

        config.validate()?;

        *self.config.write().unwrap() = config;
        Ok(())
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BlendoptError> {
        let config = self.config.read().unwrap();
        let toml_str = toml::to_string_pretty(&*config)
            .map_err(|e| BlendoptError::Configuration(format!("Failed to serialize: {}", e)))?;

        std::fs::write(path, toml_str)?;

        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.config.read().unwrap().clone()
    }

    /// Apply a change, keeping the stored config untouched if the result
    /// fails validation
    pub fn update<F>(&self, f: F) -> Result<(), BlendoptError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().unwrap();
        let mut updated = config.clone();
        f(&mut updated);
        updated.validate()?;
        *config = updated;
        Ok(())
    }
}
