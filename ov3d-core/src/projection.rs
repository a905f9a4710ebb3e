/// Camera state and the fixed-angle orthographic projection
use nalgebra::{Point2, Point3, Vector3};

use crate::transform::TiltRotation;

/// Session-level camera settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    pub width: u32,
    pub height: u32,
    /// Rotation about the X axis, radians
    pub rx: f64,
    /// Rotation in the (x, z) plane, radians
    pub ry: f64,
    /// Pixels per world unit until the first fit
    pub scale: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            rx: 0.6,
            ry: 0.6,
            scale: 100.0,
        }
    }
}

/// A point after projection: screen position plus the depth used for sorting
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub screen: Point2<f64>,
    pub depth: f64,
}

/// Orthographic camera with a fixed tilt.
///
/// Only `shift` and `scale` change after construction, and only through
/// [`Camera::apply_fit`].
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub width: u32,
    pub height: u32,
    pub center: Point2<f64>,
    pub scale: f64,
    pub rotation: TiltRotation,
    pub shift: Vector3<f64>,
}

impl Camera {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            center: Point2::new((config.width / 2) as f64, (config.height / 2) as f64),
            scale: config.scale,
            rotation: TiltRotation::new(config.rx, config.ry),
            shift: Vector3::zeros(),
        }
    }

    /// Project a world-space point to screen space.
    ///
    /// Screen `y` grows downwards. `depth` is the z coordinate after the X-axis
    /// rotation; larger means farther away.
    pub fn project(&self, point: &Point3<f64>) -> Projected {
        let local = point.coords - self.shift;
        let rotated = self.rotation.apply(&local);

        Projected {
            screen: Point2::new(
                rotated.x * self.scale + self.center.x,
                -rotated.y * self.scale + self.center.y,
            ),
            depth: rotated.z,
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(CameraConfig {
            width: 801,
            height: 601,
            ..CameraConfig::default()
        });
        assert_eq!(camera.center, Point2::new(400.0, 300.0));
        assert_eq!(camera.scale, 100.0);
        assert_eq!(camera.shift, Vector3::zeros());
    }

    #[test]
    fn test_origin_projects_to_center() {
        let camera = Camera::default();
        let p = camera.project(&Point3::origin());
        assert_eq!(p.screen, Point2::new(400.0, 300.0));
        assert_eq!(p.depth, 0.0);
    }

    #[test]
    fn test_projection_formula() {
        let camera = Camera::default();
        let (x, y, z) = (1.0_f64, 2.0_f64, 3.0_f64);
        let (rx, ry) = (0.6_f64, 0.6_f64);

        let y1 = y * rx.cos() - z * rx.sin();
        let z1 = y * rx.sin() + z * rx.cos();
        let x2 = x * ry.cos() + z1 * ry.sin();

        let p = camera.project(&Point3::new(x, y, z));
        assert_eq!(p.screen.x, x2 * 100.0 + 400.0);
        assert_eq!(p.screen.y, -y1 * 100.0 + 300.0);
        assert_eq!(p.depth, z1);
    }

    #[test]
    fn test_shift_is_subtracted_first() {
        let mut camera = Camera::default();
        camera.shift = Vector3::new(1.0, 2.0, 3.0);
        let shifted = camera.project(&Point3::new(1.0, 2.0, 3.0));
        assert_eq!(shifted.screen, camera.center);
        assert_eq!(shifted.depth, 0.0);
    }

    #[test]
    fn test_projection_is_deterministic() {
        let camera = Camera::default();
        let point = Point3::new(-0.125, 7.5, 1e-3);
        let a = camera.project(&point);
        let b = camera.project(&point);
        assert_eq!(a.screen.x.to_bits(), b.screen.x.to_bits());
        assert_eq!(a.screen.y.to_bits(), b.screen.y.to_bits());
        assert_eq!(a.depth.to_bits(), b.depth.to_bits());
    }

    #[test]
    fn test_projection_is_finite_for_finite_input() {
        let camera = Camera::default();
        for &v in &[-1e6, -1.0, 0.0, 0.5, 1e6] {
            let p = camera.project(&Point3::new(v, -v, v * 0.5));
            assert!(p.screen.x.is_finite());
            assert!(p.screen.y.is_finite());
            assert!(p.depth.is_finite());
        }
    }
}
