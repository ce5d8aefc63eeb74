//! Error types for dump export.

use crate::mesh::MeshError;
use crate::scene::SceneError;

use super::sink::SinkError;

/// Errors that abort an export.
///
/// Nothing is written when any of these occur.
#[derive(Debug)]
pub enum DumpError {
    /// A host scene query failed.
    Scene(SceneError),
    /// An object's mesh could not be indexed.
    Mesh {
        /// Name of the object being exported.
        object: String,
        /// Underlying mesh error.
        source: MeshError,
    },
    /// Writing the finished file failed.
    Sink(SinkError),
}

impl std::fmt::Display for DumpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Scene(e) => write!(f, "scene query error: {e}"),
            Self::Mesh { object, source } => write!(f, "object {object:?}: {source}"),
            Self::Sink(e) => write!(f, "output error: {e}"),
        }
    }
}

impl std::error::Error for DumpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Scene(e) => Some(e),
            Self::Mesh { source, .. } => Some(source),
            Self::Sink(e) => Some(e),
        }
    }
}

impl From<SceneError> for DumpError {
    fn from(e: SceneError) -> Self {
        Self::Scene(e)
    }
}

impl From<SinkError> for DumpError {
    fn from(e: SinkError) -> Self {
        Self::Sink(e)
    }
}
