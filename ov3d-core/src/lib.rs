/// OV3D Core Library - OBJ/MTL loading, projection and depth-sorted rendering
///
/// This library turns a Wavefront-style geometry file into an ordered list of
/// flat-colored 2D polygons. It knows nothing about windows or pixels: callers
/// load a [`Scene`], fit a [`Camera`] to it and hand the result of [`render`]
/// to whatever surface draws polygons.

mod directive;

pub mod error;
pub mod fit;
pub mod geometry;
pub mod material;
pub mod obj;
pub mod projection;
pub mod render;
pub mod transform;

// Re-export commonly used types
pub use error::{FitError, GeometryError, MaterialWarning, RenderError};
pub use fit::{fit_vertices, Fit};
pub use geometry::{Bounds, Face, Scene, Vertex};
pub use material::{load_materials, MaterialLoad, MaterialMap, Rgb};
pub use obj::{load_scene, SceneLoad};
pub use projection::{Camera, CameraConfig, Projected};
pub use render::{render, DrawItem};
pub use transform::TiltRotation;
