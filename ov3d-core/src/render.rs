/// Painter's-algorithm renderer: project every face and sort back to front
use log::debug;
use nalgebra::Point2;

use crate::error::RenderError;
use crate::geometry::{Face, Scene};
use crate::material::{MaterialMap, Rgb};
use crate::projection::Camera;

/// One filled polygon, ready for a drawing surface
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub points: Vec<Point2<f64>>,
    pub color: Rgb,
    /// Mean projected depth of the face's vertices
    pub depth: f64,
    /// Position of the source face in the scene
    pub face: usize,
}

/// Project `scene` through `camera` and order the faces farthest first.
///
/// Faces are sorted by the mean depth of their vertices, which is only a
/// heuristic: interpenetrating or overlapping coplanar faces can come out in
/// the wrong order. Equal depths keep file order.
pub fn render(scene: &Scene, camera: &Camera) -> Result<Vec<DrawItem>, RenderError> {
    let mut items = scene
        .faces
        .iter()
        .enumerate()
        .map(|(index, face)| render_face(index, face, scene, camera))
        .collect::<Result<Vec<_>, _>>()?;

    // `sort_by` is stable
    items.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    debug!("rendered {} polygons", items.len());
    Ok(items)
}

fn render_face(
    index: usize,
    face: &Face,
    scene: &Scene,
    camera: &Camera,
) -> Result<DrawItem, RenderError> {
    if face.indices.len() < 3 {
        return Err(RenderError::TooFewVertices {
            face: index,
            count: face.indices.len(),
        });
    }

    let mut points = Vec::with_capacity(face.indices.len());
    let mut depth_sum = 0.0;
    for &vertex_index in &face.indices {
        let vertex = usize::try_from(vertex_index)
            .ok()
            .and_then(|i| scene.vertices.get(i))
            .ok_or(RenderError::VertexIndexOutOfRange {
                face: index,
                index: vertex_index,
                vertex_count: scene.vertices.len(),
            })?;

        let projected = camera.project(vertex);
        points.push(projected.screen);
        depth_sum += projected.depth;
    }

    // Adding 0.0 turns -0.0 into 0.0 so the two tie under `total_cmp`
    let depth = depth_sum / face.indices.len() as f64 + 0.0;

    Ok(DrawItem {
        points,
        color: resolve_color(face.material.as_deref(), &scene.materials),
        depth,
        face: index,
    })
}

/// Color for a face's material, or [`Rgb::UNRESOLVED`] if it has none or it is unknown
pub fn resolve_color(material: Option<&str>, materials: &MaterialMap) -> Rgb {
    material
        .and_then(|name| materials.get(name))
        .copied()
        .unwrap_or(Rgb::UNRESOLVED)
}
