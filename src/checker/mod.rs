mod close_vertices;
mod face_count;
mod name_suffix;
mod verdict;

pub use close_vertices::{CloseVerticesChecker, MAX_LISTED_PAIRS, check_close_vertices};
pub use face_count::{FaceCountChecker, check_mesh_faces};
pub use name_suffix::{NameSuffixChecker, check_object_name};
pub use verdict::{CheckFault, CheckVerdict, ClosePair, Evidence};

use crate::scene::SceneObject;

pub trait Checker {
    /// Short name used when a fault is reported, e.g. `face count`.
    fn label(&self) -> &'static str;

    /// Evaluate one object.
    ///
    /// # Errors
    /// Returns a `CheckFault` when the object's data cannot be evaluated.
    fn check(&self, object: &SceneObject) -> Result<CheckVerdict, CheckFault>;
}
