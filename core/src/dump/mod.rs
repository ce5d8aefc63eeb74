//! Scene-to-text asset dump.
//!
//! Exports the mesh objects of a host scene into one deterministic text file.
//! For each object, in selection order, the dump holds its world transform,
//! up to four image texture slots, its material parameters and its welded
//! mesh (see [`crate::mesh`]).
//!
//! # Selection
//!
//! The selected mesh objects are exported. When nothing is selected every
//! mesh object in the scene is exported instead. An empty selection is a
//! silent no-op: nothing is written and no error is returned.
//!
//! # Atomicity
//!
//! The whole file is built in memory before it reaches the [`DumpSink`]. Any
//! query, mesh or output failure aborts the export without writing.
//!
//! # Example
//!
//! ```ignore
//! use assetdump_core::dump::{export_selection, ExportSettings, FileSystemSink};
//!
//! let sink = FileSystemSink::new("./export");
//! if let Some(file) = export_selection(&scene, &sink, &ExportSettings::default())? {
//!     println!("wrote {}", file.name);
//! }
//! ```

mod error;
mod settings;
mod sink;
#[cfg(test)]
mod tests;
mod writer;

pub use error::DumpError;
pub use settings::{ExportSettings, SettingsError};
pub use sink::{DumpSink, FileSystemSink, MemorySink, SinkError, validate_file_name};
pub use writer::DumpWriter;

use crate::material::{MaterialInfo, resolve_material, valid_texture_slots};
use crate::mesh::{MeshError, index_faces};
use crate::scene::{SceneError, SceneObject, SceneQuery};

/// A finished dump file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DumpFile {
    /// File name, derived from the first exported object.
    pub name: String,
    /// Full newline-terminated text.
    pub contents: String,
}

/// Objects an export operates on, in enumeration order.
///
/// Selected mesh objects if any are selected, otherwise all mesh objects.
pub fn select_targets(scene: &dyn SceneQuery) -> Result<Vec<SceneObject>, SceneError> {
    let meshes: Vec<SceneObject> = scene
        .objects()?
        .into_iter()
        .filter(SceneObject::is_mesh)
        .collect();

    if meshes.iter().any(|object| object.selected) {
        Ok(meshes.into_iter().filter(|object| object.selected).collect())
    } else {
        Ok(meshes)
    }
}

/// Dump `objects` into a single file without writing it anywhere.
///
/// Returns `Ok(None)` when `objects` is empty.
pub fn dump_objects(
    scene: &dyn SceneQuery,
    objects: &[SceneObject],
    settings: &ExportSettings,
) -> Result<Option<DumpFile>, DumpError> {
    crate::profile_function!();

    let Some(first) = objects.first() else {
        return Ok(None);
    };

    let mut writer = DumpWriter::new();
    for object in objects {
        dump_object(&mut writer, scene, object, settings)?;
    }

    Ok(Some(DumpFile {
        name: settings.file_name(&first.name),
        contents: writer.finish(),
    }))
}

fn dump_object(
    writer: &mut DumpWriter,
    scene: &dyn SceneQuery,
    object: &SceneObject,
    settings: &ExportSettings,
) -> Result<(), DumpError> {
    crate::profile_scope!("dump_object");

    let mesh_error = |source: MeshError| DumpError::Mesh {
        object: object.name.clone(),
        source,
    };

    let transform = scene.world_transform(object.id)?;
    let material_slots = scene.material_slots(object.id)?;
    let material = resolve_material(&material_slots);
    let mut mesh = scene.mesh(object.id)?;

    if settings.recompute_normals {
        mesh.recompute_normals().map_err(mesh_error)?;
    }
    let faces = mesh.faces().map_err(mesh_error)?;
    let indexed = index_faces(&faces, settings.attribute_alignment).map_err(mesh_error)?;

    log::debug!(
        "object {:?}: {} faces, {} indices, {} unique vertices, material {:?}",
        object.name,
        faces.len(),
        indexed.index_count(),
        indexed.vertex_count(),
        material.and_then(|m| m.name.as_deref())
    );

    writer.transform(&transform);
    writer.textures(&material.map(valid_texture_slots).unwrap_or_default());
    writer.material(material.map(MaterialInfo::from_material).as_ref());
    writer.mesh(&indexed);
    Ok(())
}

/// Export the current selection to `sink`.
///
/// Returns the written file, or `Ok(None)` when there was nothing to export.
/// An existing file with the same name is overwritten.
pub fn export_selection(
    scene: &dyn SceneQuery,
    sink: &dyn DumpSink,
    settings: &ExportSettings,
) -> Result<Option<DumpFile>, DumpError> {
    crate::profile_function!();

    let targets = select_targets(scene)?;
    let Some(file) = dump_objects(scene, &targets, settings)? else {
        log::warn!("no mesh objects to export");
        return Ok(None);
    };

    sink.write(&file.name, file.contents.as_bytes())?;
    log::info!(
        "exported {} object(s) to {} ({} bytes)",
        targets.len(),
        file.name,
        file.contents.len()
    );
    Ok(Some(file))
}
