/// Viewer session: owns the camera and the currently displayed model
use std::path::{Path, PathBuf};

use log::info;
use ov3d_core::{
    load_scene, render, Camera, CameraConfig, DrawItem, FitError, GeometryError, MaterialWarning,
    RenderError, Scene, SceneLoad,
};
use thiserror::Error;

/// Why a model could not replace the one on screen
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("cannot fit model: {0}")]
    Fit(#[from] FitError),

    #[error("cannot render model: {0}")]
    Render(#[from] RenderError),
}

/// A successfully loaded, fitted and rendered model
#[derive(Debug)]
pub struct LoadedModel {
    /// File the scene came from, `None` for built-in scenes
    pub source: Option<PathBuf>,
    pub scene: Scene,
    pub draw_list: Vec<DrawItem>,
    pub warnings: Vec<MaterialWarning>,
}

/// One viewing session.
///
/// A load either fully replaces the model and the camera fit, or leaves both
/// exactly as they were.
#[derive(Debug)]
pub struct Viewer {
    camera: Camera,
    model: Option<LoadedModel>,
}

impl Viewer {
    pub fn new(config: CameraConfig) -> Self {
        Self {
            camera: Camera::new(config),
            model: None,
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn model(&self) -> Option<&LoadedModel> {
        self.model.as_ref()
    }

    /// Polygons of the current model, farthest first
    pub fn draw_list(&self) -> &[DrawItem] {
        self.model
            .as_ref()
            .map(|model| model.draw_list.as_slice())
            .unwrap_or(&[])
    }

    /// Load a geometry file and make it the current model
    pub fn load<P: AsRef<Path>>(&mut self, path: P) -> Result<&LoadedModel, LoadError> {
        let path = path.as_ref();
        let SceneLoad { scene, warnings } = load_scene(path)?;
        self.show(Some(path.to_path_buf()), scene, warnings)
    }

    /// Load the current model's file again
    ///
    /// Returns `Ok(None)` when the current model did not come from a file.
    pub fn reload(&mut self) -> Result<Option<&LoadedModel>, LoadError> {
        let Some(path) = self.model.as_ref().and_then(|m| m.source.clone()) else {
            return Ok(None);
        };
        self.load(path).map(Some)
    }

    /// Fit and render `scene`, then make it the current model
    pub fn show(
        &mut self,
        source: Option<PathBuf>,
        scene: Scene,
        warnings: Vec<MaterialWarning>,
    ) -> Result<&LoadedModel, LoadError> {
        let mut camera = self.camera.clone();
        camera.fit_to(&scene.vertices)?;
        let draw_list = render(&scene, &camera)?;

        info!(
            "showing {} polygons from {}",
            draw_list.len(),
            source
                .as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "built-in scene".to_string())
        );

        self.camera = camera;
        Ok(&*self.model.insert(LoadedModel {
            source,
            scene,
            draw_list,
            warnings,
        }))
    }
}

impl Default for Viewer {
    fn default() -> Self {
        Self::new(CameraConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;
    use ov3d_core::Face;

    #[test]
    fn test_show_fits_and_renders() {
        let mut viewer = Viewer::default();
        let model = viewer.show(None, Scene::cube(4.0), Vec::new()).unwrap();
        assert_eq!(model.draw_list.len(), 6);
        assert_eq!(viewer.camera().scale, 600.0 / 8.0);
        assert_eq!(viewer.draw_list().len(), 6);
    }

    #[test]
    fn test_failed_fit_keeps_previous_model() {
        let mut viewer = Viewer::default();
        viewer.show(None, Scene::cube(2.0), Vec::new()).unwrap();
        let camera = viewer.camera().clone();

        let mut point = Scene::new();
        point.vertices.push(Point3::new(1.0, 1.0, 1.0));
        let err = viewer.show(None, point, Vec::new()).unwrap_err();

        assert!(matches!(err, LoadError::Fit(FitError::ZeroExtent)));
        assert_eq!(viewer.camera(), &camera);
        assert_eq!(viewer.model().unwrap().scene.vertices.len(), 8);
    }

    #[test]
    fn test_failed_render_keeps_previous_model() {
        let mut viewer = Viewer::default();
        viewer.show(None, Scene::cube(2.0), Vec::new()).unwrap();
        let camera = viewer.camera().clone();

        let mut broken = Scene::cube(10.0);
        broken.faces.push(Face::new(vec![0, 1, 42], None));
        let err = viewer.show(None, broken, Vec::new()).unwrap_err();

        assert!(matches!(err, LoadError::Render(_)));
        assert_eq!(viewer.camera(), &camera);
        assert_eq!(viewer.draw_list().len(), 6);
    }

    #[test]
    fn test_missing_file_is_a_geometry_error() {
        let mut viewer = Viewer::default();
        let err = viewer.load("/nonexistent/model.obj").unwrap_err();
        assert!(matches!(err, LoadError::Geometry(GeometryError::Io { .. })));
        assert!(viewer.model().is_none());
        assert!(viewer.draw_list().is_empty());
    }

    #[test]
    fn test_reload_without_source_does_nothing() {
        let mut viewer = Viewer::default();
        assert!(viewer.reload().unwrap().is_none());
        viewer.show(None, Scene::cube(2.0), Vec::new()).unwrap();
        assert!(viewer.reload().unwrap().is_none());
    }
}
