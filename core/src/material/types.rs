//! Material and texture slot data types.
//!
//! The integer codes of [`EdgeMode`], [`CoordSource`], [`BlendMode`] and the
//! bits of [`MapTo`] are part of the dump format and must not change.

use bitflags::bitflags;

/// Texture edge handling outside the [0, 1] range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum EdgeMode {
    /// Extend the edge pixels.
    Extend = 1,
    /// Clip to transparent.
    Clip = 2,
    /// Repeat the image.
    #[default]
    Repeat = 3,
    /// Clip in all three dimensions.
    ClipCube = 4,
    /// Checkerboard of repeated tiles.
    Checker = 5,
}

/// Source of the texture coordinates used by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum CoordSource {
    /// Original (undeformed) object coordinates.
    Orco = 1,
    /// Reflection vector.
    Reflection = 2,
    /// Surface normal.
    Normal = 4,
    /// Global (world) coordinates.
    Global = 8,
    /// Mesh UV coordinates.
    #[default]
    Uv = 16,
    /// Coordinates of another object.
    Object = 32,
    /// View coordinates.
    View = 128,
    /// Sticky coordinates.
    Sticky = 256,
    /// Screen (window) coordinates.
    Window = 1024,
    /// Tangent vector.
    Tangent = 4096,
    /// Strand coordinates.
    Strand = 8192,
}

/// How a texture slot blends with the layers below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(i32)]
pub enum BlendMode {
    #[default]
    Mix = 0,
    Multiply = 1,
    Add = 2,
    Subtract = 3,
    Divide = 4,
    Darken = 5,
    Difference = 6,
    Lighten = 7,
    Screen = 8,
    Overlay = 9,
    Hue = 10,
    Saturation = 11,
    Value = 12,
    Color = 13,
}

macro_rules! impl_code {
    ($($ty:ty),*) => {
        $(
            impl $ty {
                /// Integer code written to the dump.
                pub fn code(self) -> i32 {
                    self as i32
                }
            }
        )*
    };
}

impl_code!(EdgeMode, CoordSource, BlendMode);

bitflags! {
    /// Material channels a texture slot affects.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct MapTo: u32 {
        const COLOR = 0x1;
        const NORMAL = 0x2;
        const SPECULAR_COLOR = 0x4;
        const MIRROR_COLOR = 0x8;
        const REFLECTION = 0x10;
        const SPECULAR = 0x20;
        const EMIT = 0x40;
        const ALPHA = 0x80;
        const HARDNESS = 0x100;
        const RAY_MIRROR = 0x200;
        const TRANSLUCENCY = 0x400;
        const AMBIENT = 0x800;
        const DISPLACE = 0x1000;
        const WARP = 0x2000;
    }
}

/// Kind of texture referenced by a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureKind {
    /// Image-backed texture.
    #[default]
    Image,
    /// Procedural texture (noise, wood, marble, ...).
    Procedural,
    /// Environment map.
    EnvironmentMap,
}

/// Reference to an image file. The file itself is never read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageRef {
    /// Image file path as recorded by the host.
    pub filename: String,
}

/// A texture as seen through a material slot.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneTexture {
    /// Texture name.
    pub name: Option<String>,
    /// Texture kind.
    pub kind: TextureKind,
    /// Referenced image, if any.
    pub image: Option<ImageRef>,
    /// Whether mipmaps are generated.
    pub mipmap: bool,
    /// Whether the image is a normal map.
    pub normal_map: bool,
    /// Edge handling.
    pub edge_mode: EdgeMode,
    /// Whether pixels are interpolated.
    pub interpolate: bool,
}

impl SceneTexture {
    /// An image texture with default sampling flags (mipmapped, interpolated, repeat).
    pub fn image(filename: impl Into<String>) -> Self {
        Self {
            name: None,
            kind: TextureKind::Image,
            image: Some(ImageRef {
                filename: filename.into(),
            }),
            mipmap: true,
            normal_map: false,
            edge_mode: EdgeMode::Repeat,
            interpolate: true,
        }
    }

    /// A procedural texture without an image.
    pub fn procedural(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: TextureKind::Procedural,
            image: None,
            mipmap: false,
            normal_map: false,
            edge_mode: EdgeMode::Repeat,
            interpolate: false,
        }
    }

    /// Mark the texture as a normal map.
    #[must_use]
    pub fn with_normal_map(mut self, normal_map: bool) -> Self {
        self.normal_map = normal_map;
        self
    }

    /// Set the edge mode.
    #[must_use]
    pub fn with_edge_mode(mut self, edge_mode: EdgeMode) -> Self {
        self.edge_mode = edge_mode;
        self
    }

    /// Set mipmap generation.
    #[must_use]
    pub fn with_mipmap(mut self, mipmap: bool) -> Self {
        self.mipmap = mipmap;
        self
    }

    /// Set interpolation.
    #[must_use]
    pub fn with_interpolate(mut self, interpolate: bool) -> Self {
        self.interpolate = interpolate;
        self
    }
}

/// One texture slot of a material.
#[derive(Debug, Clone, PartialEq)]
pub struct TextureSlot {
    /// Texture in this slot, if any.
    pub texture: Option<SceneTexture>,
    /// Tint color (RGB).
    pub color: [f32; 3],
    /// Texture coordinate source.
    pub coord_source: CoordSource,
    /// Blend mode.
    pub blend_mode: BlendMode,
    /// Affected material channels.
    pub map_to: MapTo,
}

impl TextureSlot {
    /// A slot holding `texture` with a white tint, UV coordinates, mix
    /// blending and color mapping.
    pub fn new(texture: SceneTexture) -> Self {
        Self {
            texture: Some(texture),
            color: [1.0, 1.0, 1.0],
            coord_source: CoordSource::Uv,
            blend_mode: BlendMode::Mix,
            map_to: MapTo::COLOR,
        }
    }

    /// A slot with no texture attached.
    pub fn empty() -> Self {
        Self {
            texture: None,
            color: [1.0, 1.0, 1.0],
            coord_source: CoordSource::Uv,
            blend_mode: BlendMode::Mix,
            map_to: MapTo::COLOR,
        }
    }

    /// Set the tint color.
    #[must_use]
    pub fn with_color(mut self, color: [f32; 3]) -> Self {
        self.color = color;
        self
    }

    /// Set the coordinate source.
    #[must_use]
    pub fn with_coord_source(mut self, coord_source: CoordSource) -> Self {
        self.coord_source = coord_source;
        self
    }

    /// Set the blend mode.
    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Set the affected channels.
    #[must_use]
    pub fn with_map_to(mut self, map_to: MapTo) -> Self {
        self.map_to = map_to;
        self
    }

    /// Image path of a valid slot.
    ///
    /// A slot is valid when it holds an image texture whose image reference
    /// has a non-empty file path. Returns `None` for every other slot.
    pub fn image_path(&self) -> Option<&str> {
        let texture = self.texture.as_ref()?;
        if texture.kind != TextureKind::Image {
            return None;
        }
        let image = texture.image.as_ref()?;
        (!image.filename.is_empty()).then_some(image.filename.as_str())
    }
}

/// A host material.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneMaterial {
    /// Material name.
    pub name: Option<String>,
    /// Diffuse color (RGB).
    pub diffuse: [f32; 3],
    /// Diffuse alpha.
    pub alpha: f32,
    /// Specular color (RGB).
    pub specular: [f32; 3],
    /// Specular hardness.
    pub hardness: f32,
    /// Ordered texture slots. `None` entries are empty slots.
    pub texture_slots: Vec<Option<TextureSlot>>,
}

impl SceneMaterial {
    /// A white, opaque material with no texture slots.
    pub fn new() -> Self {
        Self {
            name: None,
            diffuse: [0.8, 0.8, 0.8],
            alpha: 1.0,
            specular: [1.0, 1.0, 1.0],
            hardness: 50.0,
            texture_slots: Vec::new(),
        }
    }

    /// Set the material name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the diffuse color and alpha.
    #[must_use]
    pub fn with_diffuse(mut self, diffuse: [f32; 3], alpha: f32) -> Self {
        self.diffuse = diffuse;
        self.alpha = alpha;
        self
    }

    /// Set the specular color.
    #[must_use]
    pub fn with_specular(mut self, specular: [f32; 3]) -> Self {
        self.specular = specular;
        self
    }

    /// Set the specular hardness.
    #[must_use]
    pub fn with_hardness(mut self, hardness: f32) -> Self {
        self.hardness = hardness;
        self
    }

    /// Append a texture slot.
    #[must_use]
    pub fn with_texture_slot(mut self, slot: Option<TextureSlot>) -> Self {
        self.texture_slots.push(slot);
        self
    }
}

impl Default for SceneMaterial {
    fn default() -> Self {
        Self::new()
    }
}

/// Material parameters as written to the dump.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialInfo {
    /// Diffuse color (RGBA).
    pub diffuse: [f32; 4],
    /// Specular color (RGB). Alpha is always 1 in the dump.
    pub specular: [f32; 3],
    /// Shininess, half of the host hardness.
    pub shininess: f32,
}

impl MaterialInfo {
    /// Extract dump parameters from a host material.
    pub fn from_material(material: &SceneMaterial) -> Self {
        let [r, g, b] = material.diffuse;
        Self {
            diffuse: [r, g, b, material.alpha],
            specular: material.specular,
            shininess: material.hardness / 2.0,
        }
    }
}
