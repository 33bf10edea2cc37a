use crate::error::{PatternzError, Result};
use crate::vehicles::VehicleKind;
use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_GROUP: &str = "Chicago";

/// Keys accepted by [`DemoConfig::get`] and [`DemoConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["group", "pause", "vehicles"];

/// Configuration for the demos, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Customer group label shown by the browser's show-all block
    #[serde(default = "default_group")]
    pub group: String,

    /// Wait for a keypress before exiting
    #[serde(default = "default_pause")]
    pub pause: bool,

    /// Vehicles assembled by the builder demo, in order
    #[serde(default = "default_vehicles")]
    pub vehicles: Vec<VehicleKind>,
}

fn default_group() -> String {
    DEFAULT_GROUP.to_string()
}

fn default_pause() -> bool {
    true
}

fn default_vehicles() -> Vec<VehicleKind> {
    VehicleKind::demo_order().to_vec()
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            group: default_group(),
            pause: default_pause(),
            vehicles: default_vehicles(),
        }
    }
}

impl DemoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let mut config: DemoConfig = serde_json::from_str(&content)?;
        if config.vehicles.is_empty() {
            warn!("config has an empty vehicles list, using defaults");
            config.vehicles = default_vehicles();
        }
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "group" => Some(self.group.clone()),
            "pause" => Some(self.pause.to_string()),
            "vehicles" => Some(
                self.vehicles
                    .iter()
                    .map(|k| k.name())
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            _ => None,
        }
    }

    /// Set a key from its string form. `vehicles` takes a comma separated list.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "group" => {
                if value.trim().is_empty() {
                    return Err(PatternzError::Config("group cannot be empty".into()));
                }
                self.group = value.to_string();
            }
            "pause" => {
                self.pause = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => {
                        return Err(PatternzError::Config(format!(
                            "Invalid value for pause: {}",
                            other
                        )))
                    }
                };
            }
            "vehicles" => {
                let kinds = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(|s| s.parse::<VehicleKind>())
                    .collect::<Result<Vec<_>>>()?;
                if kinds.is_empty() {
                    return Err(PatternzError::Config("vehicles cannot be empty".into()));
                }
                self.vehicles = kinds;
            }
            other => {
                return Err(PatternzError::Config(format!(
                    "Unknown config key: {}",
                    other
                )))
            }
        }
        Ok(())
    }
}
