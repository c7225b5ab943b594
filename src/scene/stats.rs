use serde::Serialize;

use super::model::SceneObject;

/// Aggregate counts over a scene snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SceneStats {
    pub total_objects: usize,
    pub mesh_objects: usize,
    pub total_faces: usize,
    pub total_vertices: usize,
}

impl SceneStats {
    /// Counts objects and geometry. Faces and vertices only come from mesh objects
    /// that carry mesh data. Totals saturate at `usize::MAX`.
    #[must_use]
    pub fn from_objects(objects: &[SceneObject]) -> Self {
        objects.iter().fold(Self::default(), |mut stats, object| {
            stats.total_objects += 1;
            if object.is_mesh() {
                stats.mesh_objects += 1;
                if let Some(mesh) = &object.mesh {
                    stats.total_faces = stats.total_faces.saturating_add(mesh.polygon_count);
                    stats.total_vertices =
                        stats.total_vertices.saturating_add(mesh.vertices.len());
                }
            }
            stats
        })
    }

    /// One-line summary, e.g. `Scene: 3 mesh objects, 120 total faces`.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Scene: {} mesh objects, {} total faces",
            self.mesh_objects, self.total_faces
        )
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
