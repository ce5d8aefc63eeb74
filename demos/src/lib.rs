//! # assetdump Demos
//!
//! Demo scenes exported with the assetdump core.
//!
//! ## Available Demos
//!
//! - `dump_demo` - Exports a textured cube and a smooth quad to a `.dump` file

use assetdump_core::material::{
    BlendMode, CoordSource, EdgeMode, MapTo, SceneMaterial, SceneTexture, TextureSlot,
};
use assetdump_core::math::{Mat4, Vec2, Vec3, mat4_from_translation};
use assetdump_core::mesh::{MeshFace, SourceMesh};
use assetdump_core::scene::{MemoryObject, MemoryScene, ObjectKind};

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Flat-shaded unit cube centred on the origin, one UV square per face.
pub fn cube_mesh() -> SourceMesh {
    let corners = [
        [-0.5, -0.5, -0.5],
        [0.5, -0.5, -0.5],
        [0.5, 0.5, -0.5],
        [-0.5, 0.5, -0.5],
        [-0.5, -0.5, 0.5],
        [0.5, -0.5, 0.5],
        [0.5, 0.5, 0.5],
        [-0.5, 0.5, 0.5],
    ];
    // Counter-clockwise seen from outside.
    let faces: [([usize; 4], [f32; 3]); 6] = [
        ([0, 3, 2, 1], [0.0, 0.0, -1.0]),
        ([4, 5, 6, 7], [0.0, 0.0, 1.0]),
        ([0, 1, 5, 4], [0.0, -1.0, 0.0]),
        ([2, 3, 7, 6], [0.0, 1.0, 0.0]),
        ([0, 4, 7, 3], [-1.0, 0.0, 0.0]),
        ([1, 2, 6, 5], [1.0, 0.0, 0.0]),
    ];
    let square = vec![
        Vec2::new(0.0, 0.0),
        Vec2::new(1.0, 0.0),
        Vec2::new(1.0, 1.0),
        Vec2::new(0.0, 1.0),
    ];

    let mesh = corners.iter().fold(SourceMesh::new().with_uvs(), |mesh, &p| {
        let position = Vec3::from(p);
        mesh.with_vertex(position, position.normalize())
    });
    faces.iter().fold(mesh, |mesh, &(vertices, normal)| {
        mesh.with_face(
            MeshFace::flat(vertices.to_vec(), Vec3::from(normal)).with_uvs(square.clone()),
        )
    })
}

/// Smooth-shaded quad whose vertex normals lean outwards like a dome.
pub fn dome_quad_mesh() -> SourceMesh {
    let vertex = |x: f32, y: f32| (Vec3::new(x, y, 0.0), Vec3::new(x, y, 1.0).normalize());
    [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
        .into_iter()
        .fold(SourceMesh::new(), |mesh, (x, y)| {
            let (position, normal) = vertex(x, y);
            mesh.with_vertex(position, normal)
        })
        .with_face(MeshFace::smooth(vec![0, 1, 2, 3]))
}

/// Brick material with a color map and a normal map.
pub fn brick_material() -> SceneMaterial {
    SceneMaterial::new()
        .with_name("Brick")
        .with_diffuse([0.7, 0.3, 0.2], 1.0)
        .with_specular([0.2, 0.2, 0.2])
        .with_hardness(24.0)
        .with_texture_slot(Some(TextureSlot::new(SceneTexture::image(
            "//textures/brick_albedo.png",
        ))))
        .with_texture_slot(None)
        .with_texture_slot(Some(
            TextureSlot::new(
                SceneTexture::image("//textures/brick_normal.png")
                    .with_normal_map(true)
                    .with_edge_mode(EdgeMode::Extend),
            )
            .with_blend_mode(BlendMode::Multiply)
            .with_map_to(MapTo::NORMAL),
        ))
        .with_texture_slot(Some(
            TextureSlot::new(SceneTexture::procedural("Clouds"))
                .with_coord_source(CoordSource::Orco),
        ))
}

/// Demo scene: a textured cube, a dome quad, a camera and a lamp.
///
/// Objects named in `selected` start out selected.
pub fn demo_scene(selected: &[String]) -> MemoryScene {
    let is_selected = |name: &str| selected.iter().any(|s| s == name);
    let placed = |object: MemoryObject, offset: Vec3| -> MemoryObject {
        let transform: Mat4 = mat4_from_translation(offset);
        let select = is_selected(&object.name);
        object.with_transform(transform).with_selected(select)
    };

    MemoryScene::new()
        .with_object(placed(
            MemoryObject::mesh("Cube", cube_mesh()).with_material(Some(brick_material())),
            Vec3::new(0.0, 0.0, 0.5),
        ))
        .with_object(placed(
            MemoryObject::mesh("Dome", dome_quad_mesh())
                .with_material(None)
                .with_material(Some(SceneMaterial::new().with_name("Plain"))),
            Vec3::new(3.0, 0.0, 0.0),
        ))
        .with_object(placed(
            MemoryObject::other("Camera", ObjectKind::Camera),
            Vec3::new(0.0, -8.0, 3.0),
        ))
        .with_object(placed(
            MemoryObject::other("Lamp", ObjectKind::Lamp),
            Vec3::new(4.0, 1.0, 6.0),
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assetdump_core::dump::{ExportSettings, MemorySink, export_selection, select_targets};
    use assetdump_core::mesh::{AttributeAlignment, index_faces};

    #[test]
    fn test_cube_welds_per_face() {
        let faces = cube_mesh().faces().unwrap();
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();
        // Flat normals split every corner into one vertex per adjacent face.
        assert_eq!(mesh.vertex_count(), 24);
        assert_eq!(mesh.index_count(), 24);
        assert_eq!(mesh.corners_per_face(), 4);
    }

    #[test]
    fn test_dome_quad_shares_nothing() {
        let faces = dome_quad_mesh().faces().unwrap();
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();
        assert_eq!(mesh.indices(), [0, 1, 2, 3]);
        assert_eq!(mesh.texcoords().len(), 0);
    }

    #[test]
    fn test_selection() {
        let all = select_targets(&demo_scene(&[])).unwrap();
        assert_eq!(all.len(), 2);

        let dome = select_targets(&demo_scene(&["Dome".to_string()])).unwrap();
        assert_eq!(dome.len(), 1);
        assert_eq!(dome[0].name, "Dome");
    }

    #[test]
    fn test_export_demo_scene() {
        let sink = MemorySink::new();
        let file = export_selection(&demo_scene(&[]), &sink, &ExportSettings::default())
            .unwrap()
            .unwrap();
        assert_eq!(file.name, "Cube.dump");
        // Procedural and empty slots are skipped.
        assert!(file.contents.contains("Textures: 2\n"));
        assert_eq!(file.contents.matches("Materials: 1\n").count(), 2);
    }
}
