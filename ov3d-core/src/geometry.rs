/// Scene primitives: vertices, polygonal faces and the loaded scene
use nalgebra::{Point3, Vector3};

use crate::material::MaterialMap;

/// A world-space vertex position.
pub type Vertex = Point3<f64>;

/// A polygon referencing scene vertices by 0-based index.
///
/// Indices are kept exactly as read from the file (minus one), so a
/// malformed reference such as `0` or `-1` survives parsing and is
/// reported when the face is rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Face {
    pub indices: Vec<i64>,
    /// Material active when the face was read, if any.
    pub material: Option<String>,
}

impl Face {
    pub fn new(indices: Vec<i64>, material: Option<String>) -> Self {
        Self { indices, material }
    }
}

/// Axis-aligned bounding box of a vertex set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl Bounds {
    /// Bounding box of `vertices`, or `None` when there are none
    pub fn of(vertices: &[Vertex]) -> Option<Self> {
        let (first, rest) = vertices.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), v| (min.inf(v), max.sup(v)));
        Some(Self { min, max })
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Largest of the box's width, height and depth.
    pub fn max_extent(&self) -> f64 {
        self.size().max()
    }
}

/// Everything produced by one geometry-file load.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
    pub materials: MaterialMap,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.vertices)
    }

    /// Create an axis-aligned cube of 8 vertices and 6 quads, centered at the origin
    pub fn cube(size: f64) -> Self {
        let half = size / 2.0;
        let mut scene = Self::new();

        for &x in &[-half, half] {
            for &y in &[-half, half] {
                for &z in &[-half, half] {
                    scene.vertices.push(Point3::new(x, y, z));
                }
            }
        }

        // Vertex i has x = bit 2, y = bit 1, z = bit 0
        let quads: [[i64; 4]; 6] = [
            [1, 5, 7, 3], // front (+z)
            [4, 0, 2, 6], // back (-z)
            [2, 3, 7, 6], // top (+y)
            [0, 4, 5, 1], // bottom (-y)
            [4, 6, 7, 5], // right (+x)
            [0, 1, 3, 2], // left (-x)
        ];
        for quad in quads {
            scene.faces.push(Face::new(quad.to_vec(), None));
        }

        scene
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_shape() {
        let cube = Scene::cube(2.0);
        assert_eq!(cube.vertices.len(), 8);
        assert_eq!(cube.faces.len(), 6);
        assert!(cube.faces.iter().all(|f| f.indices.len() == 4));
        assert!(cube.materials.is_empty());
    }

    #[test]
    fn test_cube_bounds() {
        let bounds = Scene::cube(2.0).bounds().unwrap();
        assert_eq!(bounds.min, Point3::new(-1.0, -1.0, -1.0));
        assert_eq!(bounds.max, Point3::new(1.0, 1.0, 1.0));
        assert_eq!(bounds.center(), Point3::origin());
        assert_eq!(bounds.max_extent(), 2.0);
    }

    #[test]
    fn test_empty_scene_has_no_bounds() {
        assert!(Scene::new().bounds().is_none());
    }

    #[test]
    fn test_max_extent_picks_largest_axis() {
        let mut scene = Scene::new();
        scene.vertices.push(Point3::new(0.0, 0.0, 0.0));
        scene.vertices.push(Point3::new(1.0, 5.0, -2.0));
        let bounds = scene.bounds().unwrap();
        assert_eq!(bounds.size(), Vector3::new(1.0, 5.0, 2.0));
        assert_eq!(bounds.max_extent(), 5.0);
    }
}
