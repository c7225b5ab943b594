use std::fmt::Write;

use nalgebra::Point3;

use crate::scene::SceneObject;

use super::{CheckFault, CheckVerdict, Checker, ClosePair, Evidence};

/// Pairs listed in the message before the remainder is summarized as a count.
pub const MAX_LISTED_PAIRS: usize = 5;

/// Minimum world-space spacing between any two vertices of a mesh.
///
/// Brute force over all `(i, j)` pairs with `i < j`; the reported order is that
/// evaluation order.
#[derive(Debug, Clone, Copy)]
pub struct CloseVerticesChecker {
    min_distance: f64,
}

impl CloseVerticesChecker {
    #[must_use]
    pub const fn new(min_distance: f64) -> Self {
        Self { min_distance }
    }
}

impl Checker for CloseVerticesChecker {
    fn label(&self) -> &'static str {
        "close vertices"
    }

    fn check(&self, object: &SceneObject) -> Result<CheckVerdict, CheckFault> {
        check_close_vertices(object, self.min_distance)
    }
}

/// Reports every vertex pair strictly closer than `min_distance`.
///
/// The full pair list is returned as evidence even when the message is summarized.
///
/// # Errors
/// Returns a fault when a mesh object has no geometry or a vertex maps to a
/// non-finite world position.
pub fn check_close_vertices(
    object: &SceneObject,
    min_distance: f64,
) -> Result<CheckVerdict, CheckFault> {
    let name = &object.name;
    if !object.is_mesh() {
        return Ok(CheckVerdict::pass(format!(
            "Object '{name}' is not a mesh, skipped close vertices check."
        ))
        .with_evidence(Evidence::ClosePairs(Vec::new())));
    }

    let mesh = object.mesh.as_ref().ok_or(CheckFault::MissingMeshData)?;
    if mesh.vertices.len() < 2 {
        return Ok(CheckVerdict::pass(format!(
            "Mesh '{name}' has less than 2 vertices, skipped close vertices check."
        ))
        .with_evidence(Evidence::ClosePairs(Vec::new())));
    }

    let world: Vec<Point3<f64>> = mesh
        .vertices
        .iter()
        .map(|vertex| {
            let position = object.to_world(&vertex.position);
            if position.coords.iter().all(|c| c.is_finite()) {
                Ok(position)
            } else {
                Err(CheckFault::NonFiniteVertex {
                    index: vertex.index,
                })
            }
        })
        .collect::<Result<_, _>>()?;

    let mut close_pairs = Vec::new();
    for i in 0..world.len() {
        for j in (i + 1)..world.len() {
            let distance = nalgebra::distance(&world[i], &world[j]);
            if distance < min_distance {
                close_pairs.push(ClosePair {
                    vertex_1: mesh.vertices[i].index,
                    vertex_2: mesh.vertices[j].index,
                    distance,
                    pos_1: world[i],
                    pos_2: world[j],
                });
            }
        }
    }

    if close_pairs.is_empty() {
        return Ok(CheckVerdict::pass(format!(
            "Mesh '{name}' has no vertices closer than {min_distance}"
        ))
        .with_evidence(Evidence::ClosePairs(close_pairs)));
    }

    let message = format!(
        "Mesh '{name}' has {} vertex pairs closer than {min_distance}: {}",
        close_pairs.len(),
        summarize_pairs(&close_pairs)
    );
    Ok(CheckVerdict::fail(message).with_evidence(Evidence::ClosePairs(close_pairs)))
}

fn summarize_pairs(pairs: &[ClosePair]) -> String {
    let mut summary = pairs
        .iter()
        .take(MAX_LISTED_PAIRS)
        .map(|pair| {
            format!(
                "vertices {}-{}: {:.6}",
                pair.vertex_1, pair.vertex_2, pair.distance
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    if pairs.len() > MAX_LISTED_PAIRS {
        let _ = write!(summary, " (and {} more)", pairs.len() - MAX_LISTED_PAIRS);
    }
    summary
}

#[cfg(test)]
#[path = "close_vertices_tests.rs"]
mod tests;
