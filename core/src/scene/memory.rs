use crate::material::SceneMaterial;
use crate::math::Mat4;
use crate::mesh::SourceMesh;

use super::types::{ObjectId, ObjectKind, SceneError, SceneObject, SceneQuery};

/// An object stored in a [`MemoryScene`].
#[derive(Debug, Clone)]
pub struct MemoryObject {
    /// Object name.
    pub name: String,
    /// Object type.
    pub kind: ObjectKind,
    /// Selection state.
    pub selected: bool,
    /// World transform.
    pub transform: Mat4,
    /// Material slots.
    pub materials: Vec<Option<SceneMaterial>>,
    /// Mesh data, for mesh objects.
    pub mesh: Option<SourceMesh>,
}

impl MemoryObject {
    /// A mesh object with identity transform and no materials.
    pub fn mesh(name: impl Into<String>, mesh: SourceMesh) -> Self {
        Self {
            name: name.into(),
            kind: ObjectKind::Mesh,
            selected: false,
            transform: Mat4::identity(),
            materials: Vec::new(),
            mesh: Some(mesh),
        }
    }

    /// A non-mesh object of the given kind.
    pub fn other(name: impl Into<String>, kind: ObjectKind) -> Self {
        Self {
            name: name.into(),
            kind,
            selected: false,
            transform: Mat4::identity(),
            materials: Vec::new(),
            mesh: None,
        }
    }

    /// Set the selection state.
    #[must_use]
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// Append a material slot.
    #[must_use]
    pub fn with_material(mut self, material: Option<SceneMaterial>) -> Self {
        self.materials.push(material);
        self
    }
}

/// In-memory scene for tests and demos.
///
/// Implements [`SceneQuery`] over a plain list of [`MemoryObject`]s. Queries
/// for objects registered with [`with_failure`](Self::with_failure) fail with
/// [`SceneError::Host`], which lets callers exercise error propagation.
///
/// # Example
///
/// ```ignore
/// let scene = MemoryScene::new()
///     .with_object(MemoryObject::mesh("Cube", cube).with_selected(true))
///     .with_object(MemoryObject::other("Camera", ObjectKind::Camera));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryScene {
    objects: Vec<MemoryObject>,
    failing: Vec<ObjectId>,
}

impl MemoryScene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object. Its [`ObjectId`] is its insertion index.
    #[must_use]
    pub fn with_object(mut self, object: MemoryObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Make every per-object query for `object` fail.
    #[must_use]
    pub fn with_failure(mut self, object: ObjectId) -> Self {
        self.failing.push(object);
        self
    }

    /// Append an object and return its handle.
    pub fn insert(&mut self, object: MemoryObject) -> ObjectId {
        self.objects.push(object);
        ObjectId(self.objects.len() - 1)
    }

    fn get(&self, id: ObjectId) -> Result<&MemoryObject, SceneError> {
        if self.failing.contains(&id) {
            return Err(SceneError::Host(format!("injected failure for object {}", id.0)));
        }
        self.objects.get(id.0).ok_or(SceneError::UnknownObject(id))
    }
}

impl SceneQuery for MemoryScene {
    fn objects(&self) -> Result<Vec<SceneObject>, SceneError> {
        Ok(self
            .objects
            .iter()
            .enumerate()
            .map(|(i, object)| SceneObject {
                id: ObjectId(i),
                name: object.name.clone(),
                kind: object.kind,
                selected: object.selected,
            })
            .collect())
    }

    fn world_transform(&self, object: ObjectId) -> Result<Mat4, SceneError> {
        Ok(self.get(object)?.transform)
    }

    fn material_slots(&self, object: ObjectId) -> Result<Vec<Option<SceneMaterial>>, SceneError> {
        Ok(self.get(object)?.materials.clone())
    }

    fn mesh(&self, object: ObjectId) -> Result<SourceMesh, SceneError> {
        let entry = self.get(object)?;
        entry
            .mesh
            .clone()
            .ok_or_else(|| SceneError::NotAMesh(entry.name.clone()))
    }
}
