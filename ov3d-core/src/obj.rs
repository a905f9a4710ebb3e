/// OBJ reader: vertices, polygonal faces and `mtllib` / `usemtl` material binding
///
/// Directives take effect strictly in file order: a `usemtl` only affects the
/// faces after it, and every `mtllib` replaces the whole material map.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};
use nalgebra::Point3;

use crate::directive::{parse_face_refs, parse_name, parse_triple, split_directive, Directive};
use crate::error::{GeometryError, MaterialWarning};
use crate::geometry::{Face, Scene};
use crate::material::{load_materials, MaterialMap};

/// A freshly loaded scene plus every material problem met on the way
#[derive(Debug, Default)]
pub struct SceneLoad {
    pub scene: Scene,
    pub warnings: Vec<MaterialWarning>,
}

/// Load an OBJ file; `mtllib` paths resolve against its directory
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<SceneLoad, GeometryError> {
    let path = path.as_ref();
    info!("loading geometry from {}", path.display());

    let file = File::open(path).map_err(|source| GeometryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_scene(BufReader::new(file), path)
}

/// Parse OBJ lines read from `reader` as if they came from the file at `path`
pub fn parse_scene<R: BufRead>(reader: R, path: &Path) -> Result<SceneLoad, GeometryError> {
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
    let mut builder = SceneBuilder::default();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| GeometryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        if let Some(directive) = split_directive(index, &line) {
            builder.apply(directive, base_dir)?;
        }
    }

    let load = builder.build();
    info!(
        "loaded {} vertices, {} faces, {} material(s) from {}",
        load.scene.vertices.len(),
        load.scene.faces.len(),
        load.scene.materials.len(),
        path.display()
    );
    Ok(load)
}

#[derive(Default)]
struct SceneBuilder {
    vertices: Vec<Point3<f64>>,
    faces: Vec<Face>,
    materials: MaterialMap,
    current_material: Option<String>,
    warnings: Vec<MaterialWarning>,
}

impl SceneBuilder {
    fn apply(&mut self, directive: Directive<'_>, base_dir: &Path) -> Result<(), GeometryError> {
        let malformed = |reason: &str| GeometryError::Malformed {
            line: directive.line,
            directive: directive.keyword.to_string(),
            reason: reason.to_string(),
        };

        match directive.keyword {
            "mtllib" => {
                let (_, file_name) =
                    parse_name(directive.args).map_err(|_| malformed("missing file name"))?;
                self.load_library(&base_dir.join(file_name));
            }
            "v" => {
                let (_, (x, y, z)) = parse_triple(directive.args)
                    .map_err(|_| malformed("expected three numeric coordinates"))?;
                self.vertices.push(Point3::new(x, y, z));
            }
            "usemtl" => {
                let (_, name) =
                    parse_name(directive.args).map_err(|_| malformed("missing material name"))?;
                self.current_material = Some(name.to_string());
            }
            "f" => {
                let (_, refs) = parse_face_refs(directive.args)
                    .map_err(|_| malformed("expected integer vertex references"))?;
                if refs.len() < 3 {
                    return Err(malformed("a face needs at least 3 vertices"));
                }
                let indices = refs.into_iter().map(|i| i.saturating_sub(1)).collect();
                self.faces
                    .push(Face::new(indices, self.current_material.clone()));
            }
            other => debug!("line {}: ignoring `{other}`", directive.line),
        }

        Ok(())
    }

    fn load_library(&mut self, mtl_path: &Path) {
        if !mtl_path.exists() {
            let warning = MaterialWarning::Unreadable {
                path: mtl_path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "material library not found"),
            };
            warn!("{warning}; keeping current materials");
            self.warnings.push(warning);
            return;
        }

        debug!("replacing materials with {}", mtl_path.display());
        let load = load_materials(mtl_path);
        self.materials = load.materials;
        self.warnings.extend(load.warning);
    }

    fn build(self) -> SceneLoad {
        SceneLoad {
            scene: Scene {
                vertices: self.vertices,
                faces: self.faces,
                materials: self.materials,
            },
            warnings: self.warnings,
        }
    }
}
