//! Error types for the project builder

use crate::builder::step::Step;
use thiserror::Error;

/// Result type alias for project builder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the project builder
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// A region the wizard needs is absent from the presentation surface
    #[error("Presentation surface has no region '{region}'")]
    MissingRegion { region: &'static str },

    /// A control the wizard attaches a handler to is absent
    #[error("Presentation surface has no control '{control}'")]
    MissingControl { control: &'static str },

    /// An operation was invoked at a step it does not apply to
    #[error("Operation '{operation}' is not valid at step {step:?}")]
    InvalidState { operation: &'static str, step: Step },

    #[error("Unknown {kind} token '{token}'")]
    UnknownToken { kind: &'static str, token: String },

    #[error("Replay script error: {0}")]
    Replay(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),
}
