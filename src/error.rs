use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse scene snapshot: {path}")]
    SceneParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write report: {path}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneGuardError {
    /// Short category name used as the heading of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileAccess { .. } | Self::Io(_) => "IO",
            Self::SceneParse { .. } => "Scene",
            Self::ReportWrite { .. } => "Report",
            Self::TomlSerialize(_) | Self::Json(_) => "Serialization",
        }
    }

    /// The underlying cause, if the error wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileAccess { source, .. } | Self::ReportWrite { source, .. } => {
                Some(source.to_string())
            }
            Self::SceneParse { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Suggested fix shown below the error, when there is an obvious one.
    #[must_use]
    pub const fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) | Self::TomlParse(_) => {
                Some("run `scene-guard config validate --config <PATH>` to check the configuration file")
            }
            Self::ReportWrite { .. } => {
                Some("check that the report destination is writable")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, SceneGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
