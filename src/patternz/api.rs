//! # API Facade
//!
//! The single entry point for both demos, whatever UI drives them. It owns
//! the loaded [`DemoConfig`] and the directory it came from, fills in
//! configured defaults for arguments the caller leaves out, and dispatches to
//! the command layer.
//!
//! Like the layers below it, the facade never prints. It returns
//! [`CmdResult`]s for the client to render.

use crate::commands;
use crate::config::DemoConfig;
use crate::customers::Customers;
use crate::error::Result;
use crate::store::memory::CustomersData;
use crate::vehicles::VehicleKind;
use std::path::{Path, PathBuf};

pub struct PatternzApi {
    config_dir: PathBuf,
    config: DemoConfig,
}

impl PatternzApi {
    /// Loads the config in `config_dir`, falling back to defaults.
    pub fn new(config_dir: impl Into<PathBuf>) -> Result<Self> {
        let config_dir = config_dir.into();
        let config = DemoConfig::load(&config_dir)?;
        Ok(Self { config_dir, config })
    }

    pub fn with_config(config_dir: impl Into<PathBuf>, config: DemoConfig) -> Self {
        Self {
            config_dir: config_dir.into(),
            config,
        }
    }

    /// Bridge demo over the seeded in-memory store.
    pub fn browse_customers(&self, group: Option<&str>) -> Result<CmdResult> {
        let group = group.unwrap_or(&self.config.group);
        let mut customers = Customers::new(group, CustomersData::new());
        commands::customers::run(&mut customers)
    }

    /// Builder demo. An empty selection assembles the configured vehicles.
    pub fn assemble_vehicles(&self, kinds: &[VehicleKind]) -> Result<CmdResult> {
        if kinds.is_empty() {
            commands::vehicles::run(&self.config.vehicles)
        } else {
            commands::vehicles::run(kinds)
        }
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.config_dir, action)
    }

    pub fn settings(&self) -> &DemoConfig {
        &self.config
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
