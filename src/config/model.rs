use std::path::Path;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SceneGuardError};

/// Thresholds for one validation run.
///
/// Every field falls back to its default when missing from the TOML file, so a
/// partial config only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ValidationConfig {
    /// Maximum polygon count per mesh (inclusive).
    #[serde(default = "default_max_faces")]
    pub max_faces: usize,

    /// Minimum world-space distance between any two vertices of a mesh.
    #[serde(default = "default_min_vertex_distance")]
    pub min_vertex_distance: f64,

    /// Object names must end with one of these. Empty means every name fails.
    #[serde(default = "default_allowed_name_suffixes")]
    pub allowed_name_suffixes: IndexSet<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_faces: default_max_faces(),
            min_vertex_distance: default_min_vertex_distance(),
            allowed_name_suffixes: default_allowed_name_suffixes(),
        }
    }
}

const fn default_max_faces() -> usize {
    50_000
}

const fn default_min_vertex_distance() -> f64 {
    0.001
}

fn default_allowed_name_suffixes() -> IndexSet<String> {
    ["_geo", "_jnt", "_grp"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl ValidationConfig {
    /// Replaces the allowed suffixes, keeping first-occurrence order.
    #[must_use]
    pub fn with_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_name_suffixes = suffixes.into_iter().map(Into::into).collect();
        self
    }

    /// Checks value ranges.
    ///
    /// An empty suffix set is valid (it makes every object fail the name check);
    /// an empty suffix string is not.
    ///
    /// # Errors
    /// Returns `SceneGuardError::Config` for a zero `max_faces`, a non-positive or
    /// non-finite `min_vertex_distance`, or an empty suffix entry.
    pub fn validate(&self) -> Result<()> {
        if self.max_faces == 0 {
            return Err(SceneGuardError::Config(
                "max_faces must be a positive integer, got 0".to_string(),
            ));
        }

        if !self.min_vertex_distance.is_finite() || self.min_vertex_distance <= 0.0 {
            return Err(SceneGuardError::Config(format!(
                "min_vertex_distance must be a positive number, got {}",
                self.min_vertex_distance
            )));
        }

        if let Some(position) = self
            .allowed_name_suffixes
            .iter()
            .position(String::is_empty)
        {
            return Err(SceneGuardError::Config(format!(
                "allowed_name_suffixes[{position}] must not be empty"
            )));
        }

        Ok(())
    }

    /// Writes the config as TOML, replacing any existing file.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
