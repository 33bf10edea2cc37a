use thiserror::Error;

#[derive(Error, Debug)]
pub enum PatternzError {
    #[error("Vehicle part not set: {0}")]
    MissingPart(String),

    #[error("No current record: the customer list is empty")]
    NoCurrentRecord,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PatternzError>;
