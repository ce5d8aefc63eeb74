//! Error types for mesh resolution and indexing.

/// Errors that can occur while turning a host mesh into an indexed mesh.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeshError {
    /// The mesh has no faces, so there is no corner count to report.
    NoFaces,
    /// A face references a vertex that does not exist.
    VertexOutOfRange {
        /// Face index within the mesh.
        face: usize,
        /// Referenced vertex index.
        vertex: usize,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },
    /// A mesh with UV data has a face whose UV count differs from its corner count.
    UvCountMismatch {
        /// Face index within the mesh.
        face: usize,
        /// Number of corners in the face.
        corners: usize,
        /// Number of UVs supplied for the face.
        uvs: usize,
    },
}

impl std::fmt::Display for MeshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoFaces => write!(f, "mesh has no faces"),
            Self::VertexOutOfRange {
                face,
                vertex,
                vertex_count,
            } => write!(
                f,
                "face {face} references vertex {vertex} but the mesh has {vertex_count} vertices"
            ),
            Self::UvCountMismatch { face, corners, uvs } => {
                write!(f, "face {face} has {corners} corners but {uvs} UVs")
            }
        }
    }
}

impl std::error::Error for MeshError {}
