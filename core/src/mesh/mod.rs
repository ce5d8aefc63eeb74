//! Mesh snapshots and vertex welding.
//!
//! - [`SourceMesh`] - Host mesh snapshot (shared vertices, polygon faces)
//! - [`Face`] / [`FaceCorner`] - Per-corner attribute stream fed to the indexer
//! - [`VertexWelder`] - Builder owning the welded vertex arrays
//! - [`IndexedMesh`] - Deduplicated arrays plus a flat index list
//! - [`index_faces`] - Weld a face list in one call

mod error;
mod indexer;
mod source;

pub use error::MeshError;
pub use indexer::{AttributeAlignment, IndexedMesh, VertexWelder, index_faces};
pub use source::{Face, FaceCorner, MeshFace, MeshVertex, SourceMesh};
