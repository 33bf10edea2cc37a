use crate::config::DemoConfig;
use crate::output::Output;
use crate::vehicles::Vehicle;

pub mod config;
pub mod customers;
pub mod vehicles;

#[derive(Debug, Clone)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// What a command produced: the demo transcript plus structured results.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub output: Output,
    pub customers: Vec<String>,
    pub vehicles: Vec<Vehicle>,
    pub config: Option<DemoConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_output(mut self, output: Output) -> Self {
        self.output = output;
        self
    }

    pub fn with_customers(mut self, customers: Vec<String>) -> Self {
        self.customers = customers;
        self
    }

    pub fn with_vehicles(mut self, vehicles: Vec<Vehicle>) -> Self {
        self.vehicles = vehicles;
        self
    }

    pub fn with_config(mut self, config: DemoConfig) -> Self {
        self.config = Some(config);
        self
    }
}
