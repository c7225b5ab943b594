//! Scene snapshot supplied by the host: objects, transforms and mesh geometry.

mod model;
mod snapshot;
mod stats;

pub use model::{MeshData, ObjectKind, SceneObject, Vertex};
pub use snapshot::Scene;
pub use stats::SceneStats;
