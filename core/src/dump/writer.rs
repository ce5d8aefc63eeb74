//! Text record writer for the dump format.
//!
//! Records are written one token group per line, every line newline
//! terminated. Floats use six fractional digits; the fixed alpha of tint and
//! specular colors is the literal `1`.

use std::fmt;
use std::fmt::Write as _;

use crate::material::{MAX_TEXTURE_SLOTS, MapTo, MaterialInfo, TextureSlot};
use crate::math::{Mat4, mat4_to_rows};
use crate::mesh::IndexedMesh;

/// Accumulates dump records for one export.
#[derive(Debug, Default)]
pub struct DumpWriter {
    out: String,
}

impl DumpWriter {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    fn line(&mut self, args: fmt::Arguments<'_>) {
        // Formatting into a String is infallible.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    /// `Transform:` followed by four row-major rows.
    pub fn transform(&mut self, transform: &Mat4) {
        self.line(format_args!("Transform:"));
        for row in mat4_to_rows(transform) {
            self.line(format_args!(
                "{:.6} {:.6} {:.6} {:.6}",
                row[0], row[1], row[2], row[3]
            ));
        }
    }

    /// `Textures: N` followed by one record per valid slot.
    ///
    /// Slots without a valid image are skipped and not counted. At most
    /// [`MAX_TEXTURE_SLOTS`] records are written.
    pub fn textures(&mut self, slots: &[&TextureSlot]) {
        let records: Vec<_> = slots
            .iter()
            .filter_map(|&slot| {
                let path = slot.image_path()?;
                let texture = slot.texture.as_ref()?;
                Some((slot, texture, path))
            })
            .take(MAX_TEXTURE_SLOTS)
            .collect();

        self.line(format_args!("Textures: {}", records.len()));
        for (slot, texture, path) in records {
            let [r, g, b] = slot.color;
            self.line(format_args!("Image: {path}"));
            self.line(format_args!("Mipmap: {}", flag(texture.mipmap)));
            self.line(format_args!("NormalMap: {}", flag(texture.normal_map)));
            self.line(format_args!("EdgeMode: {}", texture.edge_mode.code()));
            self.line(format_args!("Interpolate: {}", flag(texture.interpolate)));
            self.line(format_args!("Color: {r:.6} {g:.6} {b:.6} 1"));
            self.line(format_args!("CoordSource: {}", slot.coord_source.code()));
            self.line(format_args!("BlendMode: {}", slot.blend_mode.code()));
            self.line(format_args!(
                "AffectsColor: {}",
                flag(slot.map_to.contains(MapTo::COLOR))
            ));
            self.line(format_args!(
                "AffectsNormals: {}",
                flag(slot.map_to.contains(MapTo::NORMAL))
            ));
            self.line(format_args!(
                "AffectsReflection: {}",
                flag(slot.map_to.contains(MapTo::REFLECTION))
            ));
        }
    }

    /// `Materials: 0|1` followed by the material parameters, if any.
    pub fn material(&mut self, material: Option<&MaterialInfo>) {
        let Some(material) = material else {
            self.line(format_args!("Materials: 0"));
            return;
        };

        let [dr, dg, db, da] = material.diffuse;
        let [sr, sg, sb] = material.specular;
        self.line(format_args!("Materials: 1"));
        self.line(format_args!("Diffuse: {dr:.6} {dg:.6} {db:.6} {da:.6}"));
        self.line(format_args!("Specular: {sr:.6} {sg:.6} {sb:.6} 1"));
        self.line(format_args!("Shininess: {:.6}", material.shininess));
    }

    /// Index list followed by vertex, normal and texcoord arrays.
    pub fn mesh(&mut self, mesh: &IndexedMesh) {
        self.line(format_args!(
            "Indices: {} {}",
            mesh.index_count(),
            mesh.corners_per_face()
        ));
        for index in mesh.indices() {
            self.line(format_args!("{index}"));
        }

        self.line(format_args!("Vertices: {}", mesh.positions().len()));
        for p in mesh.positions() {
            self.line(format_args!("{:.6} {:.6} {:.6}", p.x, p.y, p.z));
        }

        self.line(format_args!("Normals: {}", mesh.normals().len()));
        for n in mesh.normals() {
            self.line(format_args!("{:.6} {:.6} {:.6}", n.x, n.y, n.z));
        }

        self.line(format_args!("TexCoords: {}", mesh.texcoords().len()));
        for t in mesh.texcoords() {
            self.line(format_args!("{:.6} {:.6}", t.x, t.y));
        }
    }

    /// Text written so far.
    pub fn as_str(&self) -> &str {
        &self.out
    }

    /// Finish and return the full text.
    pub fn finish(self) -> String {
        self.out
    }
}

fn flag(value: bool) -> u8 {
    u8::from(value)
}
