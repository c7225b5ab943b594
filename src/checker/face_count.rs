use crate::scene::SceneObject;

use super::{CheckFault, CheckVerdict, Checker};

/// Polygon budget per mesh. The threshold is inclusive.
#[derive(Debug, Clone, Copy)]
pub struct FaceCountChecker {
    max_faces: usize,
}

impl FaceCountChecker {
    #[must_use]
    pub const fn new(max_faces: usize) -> Self {
        Self { max_faces }
    }
}

impl Checker for FaceCountChecker {
    fn label(&self) -> &'static str {
        "face count"
    }

    fn check(&self, object: &SceneObject) -> Result<CheckVerdict, CheckFault> {
        check_mesh_faces(object, self.max_faces)
    }
}

/// Non-mesh objects pass with a "skipped" message.
///
/// # Errors
/// Returns `CheckFault::MissingMeshData` for a mesh object without geometry.
pub fn check_mesh_faces(object: &SceneObject, max_faces: usize) -> Result<CheckVerdict, CheckFault> {
    if !object.is_mesh() {
        return Ok(CheckVerdict::pass(format!(
            "Object '{}' is not a mesh, skipped face check.",
            object.name
        )));
    }

    let mesh = object.mesh.as_ref().ok_or(CheckFault::MissingMeshData)?;
    let face_count = mesh.polygon_count;

    if face_count > max_faces {
        Ok(CheckVerdict::fail(format!(
            "Mesh '{}' exceeds max face count: {face_count} > {max_faces}",
            object.name
        )))
    } else {
        Ok(CheckVerdict::pass(format!(
            "Mesh '{}' face count OK: {face_count} <= {max_faces}",
            object.name
        )))
    }
}

#[cfg(test)]
#[path = "face_count_tests.rs"]
mod tests;
