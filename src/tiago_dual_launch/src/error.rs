//! Error types for the tiago_dual_launch resolver

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LaunchError {
    #[error("Argument '{name}' got value '{value}', expected one of [{}]", .choices.join(", "))]
    SchemaViolation {
        name: String,
        value: String,
        choices: Vec<String>,
    },

    #[error("Required argument '{0}' was not provided and has no default")]
    MissingArgument(String),

    #[error("Argument '{0}' is not part of the resolved option set")]
    UndeclaredOption(String),

    #[error("Unknown launch file '{0}'")]
    UnknownLaunch(String),

    #[error("Invalid launch argument format: {0}")]
    InvalidArgument(String),

    #[error("Parameter file {path} is not a YAML mapping")]
    NotAMapping { path: String },

    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LaunchError>;
