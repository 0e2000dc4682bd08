use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::Panel;
use crate::network::Homogeneity;
use crate::optimizer::{ArrayOptimizer, Limits, MethodSearch};
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "PVAP__";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub panel: PanelConfig,
    pub limits: LimitsConfig,
    pub search: SearchConfig,
    pub output: OutputConfig,
}

/// One panel spec, replicated `count` times.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub voltage: f64,
    pub current: f64,
    pub count: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            voltage: 18.0,
            current: 8.0,
            count: 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LimitsConfig {
    pub max_voltage: f64,
    pub max_current: f64,
    pub max_power: f64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_voltage: 50.0,
            max_current: 30.0,
            max_power: 500.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub methods: MethodSearch,
    pub enforce_homogeneity: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    /// Defaults, then `config/default.toml`, then `PVAP__*` environment variables.
    pub fn load() -> Result<Self> {
        Self::load_from(DEFAULT_CONFIG_PATH)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let figment = Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(figment)
            .with_context(|| format!("loading configuration from {}", path.display()))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract()?;
        cfg.validate().map_err(anyhow::Error::msg)?;
        Ok(cfg)
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> Result<(), String> {
        Panel::checked(self.panel.voltage, self.panel.current)
            .map_err(|e| format!("panel {e}"))?;
        for (name, value) in [
            ("panel voltage", self.panel.voltage),
            ("panel current", self.panel.current),
        ] {
            if value <= 0.0 {
                return Err(format!("{name} must be positive, got {value}"));
            }
        }
        if self.panel.count == 0 {
            return Err("panel count must be at least 1".to_string());
        }
        self.limits().validate()
    }

    pub fn panels(&self) -> Vec<Panel> {
        Panel::new(self.panel.voltage, self.panel.current).uniform_array(self.panel.count)
    }

    pub fn limits(&self) -> Limits {
        Limits::new(
            self.limits.max_voltage,
            self.limits.max_current,
            self.limits.max_power,
        )
    }

    pub fn optimizer(&self) -> ArrayOptimizer {
        let homogeneity = if self.search.enforce_homogeneity {
            Homogeneity::Enforced
        } else {
            Homogeneity::Assumed
        };
        ArrayOptimizer::new(self.search.methods, homogeneity)
    }
}
