/// The camera's fixed tilt: two sequential partial rotations
use nalgebra::{Point3, Vector3};

/// Tilt angles in radians, with their sines and cosines cached.
///
/// This is not a rotation matrix. The X-axis rotation is applied to (y, z),
/// then the result's z is mixed into x. The second step does not produce a
/// new z, so the output is not an orthonormal transform of the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltRotation {
    rx: f64,
    ry: f64,
    sin_x: f64,
    cos_x: f64,
    sin_y: f64,
    cos_y: f64,
}

impl TiltRotation {
    pub fn new(rx: f64, ry: f64) -> Self {
        Self {
            rx,
            ry,
            sin_x: rx.sin(),
            cos_x: rx.cos(),
            sin_y: ry.sin(),
            cos_y: ry.cos(),
        }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn rx(&self) -> f64 {
        self.rx
    }

    pub fn ry(&self) -> f64 {
        self.ry
    }

    /// Rotate a camera-relative offset.
    ///
    /// Returns `(x2, y1, z1)`: the screen-plane coordinates and the depth.
    pub fn apply(&self, v: &Vector3<f64>) -> Point3<f64> {
        let y1 = v.y * self.cos_x - v.z * self.sin_x;
        let z1 = v.y * self.sin_x + v.z * self.cos_x;
        let x2 = v.x * self.cos_y + z1 * self.sin_y;

        Point3::new(x2, y1, z1)
    }
}

impl Default for TiltRotation {
    fn default() -> Self {
        Self::zero()
    }
}
