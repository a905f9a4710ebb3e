/// Error and warning types for the load / fit / render pipeline
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to read or parse a geometry file.
///
/// Material problems never surface here; they are collected as
/// [`MaterialWarning`]s on the load result instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("failed to read geometry file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line}: malformed `{directive}` directive: {reason}")]
    Malformed {
        line: usize,
        directive: String,
        reason: String,
    },
}

/// The vertex set cannot be fitted into a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("scene has no vertices")]
    EmptyScene,

    /// Every vertex sits on the same point, or the bounding box is not finite.
    #[error("scene bounding box has no usable extent")]
    ZeroExtent,
}

/// A face cannot be turned into a drawable polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("face {face} references vertex index {index}, but the scene has {vertex_count} vertices")]
    VertexIndexOutOfRange {
        face: usize,
        index: i64,
        vertex_count: usize,
    },

    #[error("face {face} has {count} vertices, at least 3 are required")]
    TooFewVertices { face: usize, count: usize },
}

/// Non-fatal problem hit while reading a material file.
#[derive(Debug, Error)]
pub enum MaterialWarning {
    #[error("could not read material file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },
}
