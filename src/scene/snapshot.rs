use std::fs;
use std::path::Path;

use nalgebra::{Matrix4, Point3};
use serde::Deserialize;

use crate::error::{Result, SceneGuardError};

use super::model::{MeshData, ObjectKind, SceneObject, Vertex};

/// An immutable snapshot of the objects in a scene, in host order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotFile {
    #[serde(default)]
    objects: Vec<SnapshotObject>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotObject {
    name: String,
    kind: ObjectKind,
    /// Row-major 4x4 world matrix.
    #[serde(default)]
    transform: Option<[[f64; 4]; 4]>,
    #[serde(default)]
    mesh: Option<SnapshotMesh>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotMesh {
    polygon_count: usize,
    #[serde(default)]
    vertices: Vec<SnapshotVertex>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct SnapshotVertex {
    #[serde(default)]
    index: Option<usize>,
    position: [f64; 3],
}

impl From<SnapshotObject> for SceneObject {
    fn from(object: SnapshotObject) -> Self {
        let world_transform = object.transform.map_or_else(Matrix4::identity, |rows| {
            Matrix4::from_fn(|row, col| rows[row][col])
        });
        let mesh = object.mesh.map(|mesh| MeshData {
            polygon_count: mesh.polygon_count,
            vertices: mesh
                .vertices
                .into_iter()
                .enumerate()
                .map(|(position_in_list, vertex)| {
                    let [x, y, z] = vertex.position;
                    Vertex::new(
                        vertex.index.unwrap_or(position_in_list),
                        Point3::new(x, y, z),
                    )
                })
                .collect(),
        });

        Self {
            name: object.name,
            kind: object.kind,
            world_transform,
            mesh,
        }
    }
}

impl Scene {
    #[must_use]
    pub const fn new(objects: Vec<SceneObject>) -> Self {
        Self { objects }
    }

    /// Parses a JSON scene snapshot.
    ///
    /// # Errors
    /// Returns an error if the content is not a valid snapshot document.
    pub fn from_json(content: &str) -> Result<Self> {
        let file: SnapshotFile = serde_json::from_str(content)?;
        Ok(Self::from_snapshot(file))
    }

    /// Reads and parses a JSON scene snapshot from disk.
    ///
    /// # Errors
    /// Returns `FileAccess` if the file cannot be read and `SceneParse` if it is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SceneGuardError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;
        let file: SnapshotFile =
            serde_json::from_str(&content).map_err(|source| SceneGuardError::SceneParse {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::from_snapshot(file))
    }

    fn from_snapshot(file: SnapshotFile) -> Self {
        Self {
            objects: file.objects.into_iter().map(SceneObject::from).collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
