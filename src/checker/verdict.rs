use nalgebra::Point3;
use thiserror::Error;

/// A pair of distinct vertices that sit closer than the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosePair {
    pub vertex_1: usize,
    pub vertex_2: usize,
    pub distance: f64,
    pub pos_1: Point3<f64>,
    pub pos_2: Point3<f64>,
}

/// Structured diagnostics attached to a verdict beyond its message.
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    /// Every offending vertex pair, in `(i, j)` evaluation order.
    ClosePairs(Vec<ClosePair>),
}

/// Outcome of one rule check on one object.
///
/// The message is populated for both outcomes so passing checks stay traceable.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckVerdict {
    pub passed: bool,
    pub message: String,
    pub evidence: Option<Evidence>,
}

impl CheckVerdict {
    #[must_use]
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
            evidence: None,
        }
    }

    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
            evidence: None,
        }
    }

    #[must_use]
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = Some(evidence);
        self
    }

    #[must_use]
    pub const fn is_passed(&self) -> bool {
        self.passed
    }

    #[must_use]
    pub const fn is_failed(&self) -> bool {
        !self.passed
    }

    /// Close vertex pairs carried as evidence; empty when there is none.
    #[must_use]
    pub fn close_pairs(&self) -> &[ClosePair] {
        match &self.evidence {
            Some(Evidence::ClosePairs(pairs)) => pairs,
            None => &[],
        }
    }
}

/// A check could not evaluate an object at all (distinct from the object failing it).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckFault {
    #[error("mesh data is missing")]
    MissingMeshData,

    #[error("vertex {index} has a non-finite world position")]
    NonFiniteVertex { index: usize },
}
