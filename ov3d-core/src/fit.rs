/// Auto-fit: center a model's bounding box and scale it into the viewport
use log::info;
use nalgebra::Vector3;

use crate::error::FitError;
use crate::geometry::{Bounds, Vertex};
use crate::projection::Camera;

/// Camera translation and scale that make a vertex set fit the viewport
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    pub shift: Vector3<f64>,
    pub scale: f64,
}

/// Compute a uniform fit for `vertices` in a `width` x `height` viewport.
///
/// The largest box extent is mapped onto half the smaller viewport side,
/// which keeps the model inside the viewport for any camera tilt.
pub fn fit_vertices(vertices: &[Vertex], width: u32, height: u32) -> Result<Fit, FitError> {
    let bounds = Bounds::of(vertices).ok_or(FitError::EmptyScene)?;

    let max_extent = bounds.max_extent();
    if !(max_extent.is_finite() && max_extent > 0.0) {
        return Err(FitError::ZeroExtent);
    }

    let scale = f64::from(width.min(height)) / (max_extent * 2.0);
    if !scale.is_finite() {
        return Err(FitError::ZeroExtent);
    }

    Ok(Fit {
        shift: bounds.center().coords,
        scale,
    })
}

impl Camera {
    pub fn apply_fit(&mut self, fit: Fit) {
        self.shift = fit.shift;
        self.scale = fit.scale;
    }

    /// Fit `vertices` into this camera's viewport and adopt the result.
    ///
    /// On error the camera is left untouched.
    pub fn fit_to(&mut self, vertices: &[Vertex]) -> Result<Fit, FitError> {
        let fit = fit_vertices(vertices, self.width, self.height)?;
        self.apply_fit(fit);
        info!(
            "fitted {} vertices: shift {:?}, scale {:.4}",
            vertices.len(),
            fit.shift,
            fit.scale
        );
        Ok(fit)
    }
}
