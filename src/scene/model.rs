use nalgebra::{Matrix4, Point3};
use serde::{Deserialize, Serialize};

/// Object type as reported by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    Mesh,
    Other,
}

/// A local-space vertex with the stable index used when reporting it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub index: usize,
    pub position: Point3<f64>,
}

impl Vertex {
    #[must_use]
    pub const fn new(index: usize, position: Point3<f64>) -> Self {
        Self { index, position }
    }
}

/// Geometry payload carried by mesh objects.
#[derive(Debug, Clone, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub polygon_count: usize,
}

/// Read-only view of one scene entity for the duration of a validation run.
///
/// A `Mesh` object without `mesh` data is considered corrupt: checks that need
/// the geometry report a fault instead of a verdict.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub kind: ObjectKind,
    pub world_transform: Matrix4<f64>,
    pub mesh: Option<MeshData>,
}

impl SceneObject {
    /// Creates a mesh object with an identity transform.
    ///
    /// Vertex indices follow the order of `positions`.
    #[must_use]
    pub fn mesh(name: impl Into<String>, positions: &[Point3<f64>], polygon_count: usize) -> Self {
        let vertices = positions
            .iter()
            .enumerate()
            .map(|(index, position)| Vertex::new(index, *position))
            .collect();
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            world_transform: Matrix4::identity(),
            mesh: Some(MeshData {
                vertices,
                polygon_count,
            }),
        }
    }

    /// Creates a non-mesh object (camera, light, empty, ...).
    #[must_use]
    pub fn other(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Other,
            world_transform: Matrix4::identity(),
            mesh: None,
        }
    }

    #[must_use]
    pub const fn with_transform(mut self, world_transform: Matrix4<f64>) -> Self {
        self.world_transform = world_transform;
        self
    }

    #[must_use]
    pub fn with_mesh(mut self, mesh: Option<MeshData>) -> Self {
        self.mesh = mesh;
        self
    }

    #[must_use]
    pub const fn is_mesh(&self) -> bool {
        matches!(self.kind, ObjectKind::Mesh)
    }

    /// Maps a local-space position into world space.
    #[must_use]
    pub fn to_world(&self, local: &Point3<f64>) -> Point3<f64> {
        self.world_transform.transform_point(local)
    }
}
