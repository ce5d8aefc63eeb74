//! Read-only view of the host scene graph.
//!
//! The exporter never talks to an authoring tool directly. It reads objects,
//! transforms, materials and meshes through the [`SceneQuery`] capability
//! trait:
//!
//! - [`SceneQuery`] - Injected query surface
//! - [`SceneObject`] / [`ObjectKind`] / [`ObjectId`] - Enumeration entries
//! - [`MemoryScene`] / [`MemoryObject`] - In-memory implementation for tests
//!   and tools that build scenes programmatically

mod memory;
mod types;

pub use memory::{MemoryObject, MemoryScene};
pub use types::{ObjectId, ObjectKind, SceneError, SceneObject, SceneQuery};
