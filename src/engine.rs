//! Validation aggregator: runs every applicable check per object and collects
//! the failures into ordered records.

use std::path::Path;

use serde::Serialize;

use crate::checker::{
    CheckFault, Checker, CloseVerticesChecker, FaceCountChecker, NameSuffixChecker,
};
use crate::config::ValidationConfig;
use crate::error::Result;
use crate::output::{TextFormatter, ValidationProgress, write_report};
use crate::scene::{Scene, SceneObject};

/// Failure reasons for one object, in check evaluation order.
///
/// Only objects with at least one reason produce a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvalidObjectRecord {
    pub object_name: String,
    pub reasons: Vec<String>,
}

/// Outcome of [`ValidationEngine::run`]: the records plus the rendered text report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRun {
    pub records: Vec<InvalidObjectRecord>,
    pub report: String,
}

impl ValidationRun {
    #[must_use]
    pub fn has_invalid_objects(&self) -> bool {
        !self.records.is_empty()
    }

    /// Writes the text report to `path`; see [`write_report`].
    ///
    /// # Errors
    /// Returns `SceneGuardError::ReportWrite` if the report cannot be written.
    pub fn export(&self, path: &Path) -> Result<()> {
        write_report(path, &self.report)
    }
}

pub struct ValidationEngine {
    config: ValidationConfig,
    face_count: FaceCountChecker,
    name_suffix: NameSuffixChecker,
    close_vertices: CloseVerticesChecker,
}

impl ValidationEngine {
    /// Builds an engine for one configuration.
    ///
    /// # Errors
    /// Returns `SceneGuardError::Config` if the configuration is out of range.
    pub fn new(config: ValidationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            face_count: FaceCountChecker::new(config.max_faces),
            name_suffix: NameSuffixChecker::new(config.allowed_name_suffixes.clone()),
            close_vertices: CloseVerticesChecker::new(config.min_vertex_distance),
            config,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a scene and renders the text report.
    #[must_use]
    pub fn run(&self, scene: &Scene) -> ValidationRun {
        let records = self.validate(&scene.objects);
        Self::finish_run(records)
    }

    /// Same as [`Self::run`], advancing `progress` once per object.
    #[must_use]
    pub fn run_with_progress(
        &self,
        scene: &Scene,
        progress: &ValidationProgress,
    ) -> ValidationRun {
        let records = self.validate_with_progress(&scene.objects, progress);
        Self::finish_run(records)
    }

    fn finish_run(records: Vec<InvalidObjectRecord>) -> ValidationRun {
        let report = TextFormatter.render(&records);
        ValidationRun { records, report }
    }

    /// Returns one record per invalid object, in input order.
    #[must_use]
    pub fn validate(&self, objects: &[SceneObject]) -> Vec<InvalidObjectRecord> {
        objects
            .iter()
            .filter_map(|object| self.check_object(object))
            .collect()
    }

    /// Same as [`Self::validate`], advancing `progress` once per object.
    #[must_use]
    pub fn validate_with_progress(
        &self,
        objects: &[SceneObject],
        progress: &ValidationProgress,
    ) -> Vec<InvalidObjectRecord> {
        let records = objects
            .iter()
            .filter_map(|object| {
                let record = self.check_object(object);
                progress.inc();
                record
            })
            .collect();
        progress.finish();
        records
    }

    /// Runs face count, name suffix, then close vertices (mesh objects only).
    ///
    /// A check that cannot evaluate the object contributes a fault reason and the
    /// remaining checks still run.
    #[must_use]
    pub fn check_object(&self, object: &SceneObject) -> Option<InvalidObjectRecord> {
        let mut checks: Vec<&dyn Checker> = vec![&self.face_count, &self.name_suffix];
        if object.is_mesh() {
            checks.push(&self.close_vertices);
        }

        let reasons: Vec<String> = checks
            .into_iter()
            .filter_map(|checker| match checker.check(object) {
                Ok(verdict) if verdict.is_passed() => None,
                Ok(verdict) => Some(verdict.message),
                Err(fault) => Some(fault_reason(checker, object, &fault)),
            })
            .collect();

        if reasons.is_empty() {
            None
        } else {
            Some(InvalidObjectRecord {
                object_name: object.name.clone(),
                reasons,
            })
        }
    }
}

fn fault_reason(checker: &dyn Checker, object: &SceneObject, fault: &CheckFault) -> String {
    format!(
        "Error checking {} for '{}': {fault}",
        checker.label(),
        object.name
    )
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
