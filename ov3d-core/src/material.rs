/// MTL reader: named flat colors
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info, warn};

use crate::directive::{parse_exact_triple, parse_name, split_directive};
use crate::error::MaterialWarning;

/// An 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Color of a material declared with `newmtl` but never given a `Kd`.
    pub const DECLARED: Rgb = Rgb::new(200, 200, 200);

    /// Color of a face whose material cannot be found at render time.
    pub const UNRESOLVED: Rgb = Rgb::new(180, 180, 180);

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert `[0, 1]` channels by truncation, so 0.999 maps to 254.
    ///
    /// Values outside the unit range saturate to 0 or 255.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_channel(r), unit_to_channel(g), unit_to_channel(b))
    }

    /// `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

fn unit_to_channel(value: f64) -> u8 {
    // float-to-int `as` truncates toward zero and saturates
    (value * 255.0) as u8
}

/// Material name to color, last declaration wins
pub type MaterialMap = HashMap<String, Rgb>;

/// Result of reading one material file.
///
/// Reading never fails outright: on any problem the materials parsed so far
/// are kept and the reason is reported in `warning`.
#[derive(Debug, Default)]
pub struct MaterialLoad {
    pub materials: MaterialMap,
    pub warning: Option<MaterialWarning>,
}

impl MaterialLoad {
    fn complete(materials: MaterialMap) -> Self {
        Self {
            materials,
            warning: None,
        }
    }

    fn degraded(materials: MaterialMap, warning: MaterialWarning) -> Self {
        warn!(
            "{warning}; keeping {} material(s) read before the failure",
            materials.len()
        );
        Self {
            materials,
            warning: Some(warning),
        }
    }
}

/// Read a material file from disk
pub fn load_materials<P: AsRef<Path>>(path: P) -> MaterialLoad {
    let path = path.as_ref();
    debug!("loading materials from {}", path.display());

    match File::open(path) {
        Ok(file) => parse_materials(BufReader::new(file), path),
        Err(source) => MaterialLoad::degraded(
            MaterialMap::new(),
            MaterialWarning::Unreadable {
                path: path.to_path_buf(),
                source,
            },
        ),
    }
}

/// Read materials from any line source; `source` is only used for reporting
pub fn parse_materials<R: BufRead>(reader: R, source: &Path) -> MaterialLoad {
    let mut materials = MaterialMap::new();
    let mut current: Option<String> = None;

    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                return MaterialLoad::degraded(
                    materials,
                    MaterialWarning::Unreadable {
                        path: source.to_path_buf(),
                        source: err,
                    },
                );
            }
        };
        let Some(directive) = split_directive(index, &line) else {
            continue;
        };

        let malformed = |reason: &str| MaterialWarning::Malformed {
            path: source.to_path_buf(),
            line: directive.line,
            reason: reason.to_string(),
        };

        match directive.keyword {
            "newmtl" => match parse_name(directive.args) {
                Ok((_, name)) => {
                    materials.insert(name.to_string(), Rgb::DECLARED);
                    current = Some(name.to_string());
                }
                Err(_) => {
                    return MaterialLoad::degraded(
                        materials,
                        malformed("`newmtl` without a material name"),
                    );
                }
            },
            "Kd" => {
                let Some(name) = current.as_ref() else {
                    debug!("line {}: `Kd` before any `newmtl`, ignored", directive.line);
                    continue;
                };
                match parse_exact_triple(directive.args) {
                    Ok((_, (r, g, b))) => {
                        materials.insert(name.clone(), Rgb::from_unit(r, g, b));
                    }
                    Err(_) => {
                        return MaterialLoad::degraded(
                            materials,
                            malformed("`Kd` expects three numeric channels"),
                        );
                    }
                }
            }
            _ => {}
        }
    }

    info!(
        "loaded {} material(s) from {}",
        materials.len(),
        source.display()
    );
    MaterialLoad::complete(materials)
}
