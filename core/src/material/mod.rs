//! Host materials, texture slots and their dump-side resolution.
//!
//! An object carries an ordered list of material slots, each optionally
//! empty. Only one material per object is exported: slot 0 when present,
//! otherwise the first non-empty slot. Of that material's texture slots,
//! only valid image slots are kept, at most [`MAX_TEXTURE_SLOTS`].

mod types;

pub use types::{
    BlendMode, CoordSource, EdgeMode, ImageRef, MapTo, MaterialInfo, SceneMaterial, SceneTexture,
    TextureKind, TextureSlot,
};

/// Maximum number of texture slots written per object.
pub const MAX_TEXTURE_SLOTS: usize = 4;

/// Pick the material exported for an object.
///
/// Returns slot 0 if it is set, otherwise the first non-empty slot, or
/// `None` when every slot is empty.
pub fn resolve_material(slots: &[Option<SceneMaterial>]) -> Option<&SceneMaterial> {
    slots.iter().flatten().next()
}

/// Valid texture slots of a material, in slot order, capped at [`MAX_TEXTURE_SLOTS`].
pub fn valid_texture_slots(material: &SceneMaterial) -> Vec<&TextureSlot> {
    let valid: Vec<&TextureSlot> = material
        .texture_slots
        .iter()
        .flatten()
        .filter(|slot| slot.image_path().is_some())
        .collect();

    if valid.len() > MAX_TEXTURE_SLOTS {
        log::warn!(
            "material {:?} has {} image texture slots, only the first {MAX_TEXTURE_SLOTS} are exported",
            material.name.as_deref().unwrap_or("<unnamed>"),
            valid.len()
        );
    }

    valid.into_iter().take(MAX_TEXTURE_SLOTS).collect()
}
