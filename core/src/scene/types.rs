//! Scene query types and the host capability trait.

use crate::material::SceneMaterial;
use crate::math::Mat4;
use crate::mesh::SourceMesh;

/// Opaque handle for an object in the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(pub usize);

/// Object type discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectKind {
    Mesh,
    Camera,
    Lamp,
    Empty,
    Other,
}

/// Enumeration entry for one scene object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneObject {
    /// Handle used for further queries.
    pub id: ObjectId,
    /// Object name. Also names the dump file when the object is exported first.
    pub name: String,
    /// Object type.
    pub kind: ObjectKind,
    /// Whether the object is currently selected in the host.
    pub selected: bool,
}

impl SceneObject {
    /// Whether the object is a mesh.
    pub fn is_mesh(&self) -> bool {
        self.kind == ObjectKind::Mesh
    }
}

/// Errors reported by a [`SceneQuery`] implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The handle does not name an object in the scene.
    UnknownObject(ObjectId),
    /// Mesh data was requested for an object without a mesh.
    NotAMesh(String),
    /// The host failed to answer the query.
    Host(String),
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownObject(id) => write!(f, "unknown object {}", id.0),
            Self::NotAMesh(name) => write!(f, "object {name:?} has no mesh"),
            Self::Host(msg) => write!(f, "host query failed: {msg}"),
        }
    }
}

impl std::error::Error for SceneError {}

/// Read-only access to the host scene graph.
///
/// The dump writer only ever reads through this trait, so it can run against
/// a live authoring tool or against [`MemoryScene`](super::MemoryScene).
/// Every query may fail; failures abort the export.
pub trait SceneQuery {
    /// All objects in enumeration order, with their selection state.
    fn objects(&self) -> Result<Vec<SceneObject>, SceneError>;

    /// World transform of an object.
    fn world_transform(&self, object: ObjectId) -> Result<Mat4, SceneError>;

    /// Material slots of an object, in slot order. Empty slots are `None`.
    fn material_slots(&self, object: ObjectId) -> Result<Vec<Option<SceneMaterial>>, SceneError>;

    /// Mesh snapshot of an object.
    ///
    /// Implementations return current normals; stale host normals must be
    /// recomputed before they are handed out (or the export must be run with
    /// `recompute_normals` enabled).
    fn mesh(&self, object: ObjectId) -> Result<SourceMesh, SceneError>;
}
