//! # Vehicle Assembly
//!
//! The Builder demo. A [`Shop`] (the director) runs the same four build steps
//! against any [`VehicleBuilder`]; each builder fills its own [`Vehicle`] with a
//! fixed table of parts.
//!
//! - [`Vehicle`]: the product, a type tag plus parts keyed by name
//! - [`builders`]: one builder per [`VehicleKind`]
//! - [`Shop`]: fixed step sequence

use crate::error::{PatternzError, Result};
use crate::output::Output;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

pub mod builders;
pub mod shop;

pub use builders::VehicleBuilder;
pub use shop::Shop;

pub const FRAME: &str = "frame";
pub const ENGINE: &str = "engine";
pub const WHEELS: &str = "wheels";
pub const DOORS: &str = "doors";

/// Part keys in display order.
pub const PART_KEYS: [&str; 4] = [FRAME, ENGINE, WHEELS, DOORS];

const RULE_WIDTH: usize = 27;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    vehicle_type: String,
    parts: HashMap<String, String>,
}

impl Vehicle {
    pub fn new(vehicle_type: impl Into<String>) -> Self {
        Self {
            vehicle_type: vehicle_type.into(),
            parts: HashMap::new(),
        }
    }

    pub fn vehicle_type(&self) -> &str {
        &self.vehicle_type
    }

    pub fn set_part(&mut self, key: &str, value: impl Into<String>) {
        self.parts.insert(key.to_string(), value.into());
    }

    pub fn get_part(&self, key: &str) -> Result<&str> {
        self.parts
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| PatternzError::MissingPart(key.to_string()))
    }

    /// True once every key in [`PART_KEYS`] is set.
    pub fn is_complete(&self) -> bool {
        PART_KEYS.iter().all(|k| self.parts.contains_key(*k))
    }

    /// Writes the vehicle block. Nothing is written if a part is missing.
    pub fn show(&self, out: &mut Output) -> Result<()> {
        let frame = self.get_part(FRAME)?;
        let engine = self.get_part(ENGINE)?;
        let wheels = self.get_part(WHEELS)?;
        let doors = self.get_part(DOORS)?;

        out.blank();
        out.rule(RULE_WIDTH);
        out.heading(format!("Vehicle Type: {}", self.vehicle_type));
        out.plain(format!(" Frame : {}", frame));
        out.plain(format!(" Engine : {}", engine));
        out.plain(format!(" #Wheels: {}", wheels));
        out.plain(format!(" #Doors : {}", doors));
        Ok(())
    }
}

/// The builders the shop knows how to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleKind {
    Scooter,
    Motorcycle,
    Car,
    Bus,
}

impl VehicleKind {
    pub fn all() -> &'static [VehicleKind] {
        &[
            VehicleKind::Scooter,
            VehicleKind::Motorcycle,
            VehicleKind::Car,
            VehicleKind::Bus,
        ]
    }

    /// Order the assembly demo runs in.
    pub fn demo_order() -> &'static [VehicleKind] {
        &[
            VehicleKind::Scooter,
            VehicleKind::Car,
            VehicleKind::Motorcycle,
            VehicleKind::Bus,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            VehicleKind::Scooter => "scooter",
            VehicleKind::Motorcycle => "motorcycle",
            VehicleKind::Car => "car",
            VehicleKind::Bus => "bus",
        }
    }

    pub fn builder(&self) -> Box<dyn VehicleBuilder> {
        match self {
            VehicleKind::Scooter => Box::new(builders::ScooterBuilder::new()),
            VehicleKind::Motorcycle => Box::new(builders::MotorcycleBuilder::new()),
            VehicleKind::Car => Box::new(builders::CarBuilder::new()),
            VehicleKind::Bus => Box::new(builders::BusBuilder::new()),
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for VehicleKind {
    type Err = PatternzError;

    fn from_str(s: &str) -> Result<Self> {
        VehicleKind::all()
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PatternzError::Config(format!("Unknown vehicle kind: {}", s)))
    }
}
