//! Error types for configuration, resolution and materialization

use std::path::PathBuf;
use thiserror::Error;

/// Invalid or unparseable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown {axis} '{value}'")]
    UnknownValue { axis: &'static str, value: String },

    #[error("{axis} '{value}' is not available for {framework}")]
    NotOfferedFor {
        axis: &'static str,
        value: &'static str,
        framework: &'static str,
    },

    #[error("missing {0}")]
    Missing(&'static str),

    #[error("unknown preset '{id}'. Available presets: {available}")]
    UnknownPreset { id: String, available: String },

    #[error("duplicate preset id '{0}'")]
    DuplicatePreset(String),

    #[error("failed to read presets file {}", .path.display())]
    ReadPresets {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse presets file {}", .path.display())]
    ParsePresets {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Errors raised while scaffolding a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user aborted a prompt or declined the confirmation
    #[error("Setup cancelled.")]
    Cancelled,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to render template {name}")]
    Template {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("failed to serialize {path}")]
    Serialize {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("target exists and is not a directory: {}", .0.display())]
    TargetNotDirectory(PathBuf),

    #[error("I/O error at {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("prompt failed")]
    Prompt(#[source] std::io::Error),
}

impl ScaffoldError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
