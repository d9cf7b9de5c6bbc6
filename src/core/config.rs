use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::core::health::{
    ComponentIdentity, Direction, HealthRegistry, MemoryHealthCheck, MetricSource, Quantity,
    Tolerance, UnitRequest, UnitTolerance,
};
use crate::error::{HealthError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub checks: Vec<CheckConfig>,
}

/// One memory check as written in the config file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckConfig {
    pub component: ComponentIdentity,
    pub quantities: Vec<Quantity>,
    pub tolerances: Vec<ToleranceConfig>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToleranceConfig {
    pub unit: UnitRequest,
    pub pass: f64,
    pub warn: f64,
    pub fail: f64,
    #[serde(default)]
    pub direction: Direction,
}

impl Default for Config {
    fn default() -> Self {
        let component =
            ComponentIdentity::new("6fd416e0-8920-410f-9c7b-c479000f7227", "memory", "system")
                .expect("default component name is valid");

        Self {
            checks: vec![CheckConfig {
                component,
                quantities: vec![Quantity::Utilized],
                tolerances: vec![ToleranceConfig {
                    unit: UnitRequest::Percentage,
                    pass: 80.0,
                    warn: 90.0,
                    fail: 100.0,
                    direction: Direction::LessThan,
                }],
            }],
        }
    }
}

impl ToleranceConfig {
    pub fn to_unit_tolerances(&self) -> Result<Vec<UnitTolerance>> {
        let tolerance = Tolerance::new(self.pass, self.warn, self.fail, self.direction)?;
        UnitTolerance::expand(self.unit, tolerance)
    }
}

impl CheckConfig {
    pub fn build<S: MetricSource>(&self, source: S) -> Result<MemoryHealthCheck<S>> {
        let identity = self.component.clone().validated()?;

        let mut tolerances = Vec::new();
        for tolerance in &self.tolerances {
            tolerances.extend(tolerance.to_unit_tolerances()?);
        }

        MemoryHealthCheck::new(identity, self.quantities.clone(), tolerances, source)
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when absent
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Config::default());
        }

        let data = fs::read_to_string(path)?;
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data).map_err(|e| {
            HealthError::config(format!("Failed to parse config file {:?}: {}", path, e))
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let data = serde_json::to_string_pretty(self)?;
        fs::write(path, data)?;
        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| HealthError::config("Could not determine config directory"))?;

        Ok(config_dir.join("memvitals").join("config.json"))
    }

    /// Build every configured check over one shared source
    pub fn build_registry<S>(&self, source: Arc<S>) -> Result<HealthRegistry>
    where
        S: MetricSource + 'static,
    {
        let mut registry = HealthRegistry::new();
        for check in &self.checks {
            registry.register(Box::new(check.build(source.clone())?))?;
        }
        Ok(registry)
    }
}
