use crate::material::{SceneMaterial, SceneTexture, TextureSlot};
use crate::math::{Vec2, Vec3};
use crate::mesh::{MeshFace, SourceMesh};


fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const UP: [f32; 3] = [0.0, 0.0, 1.0];

/// A single flat triangle in the XY plane, no UVs.
fn triangle_mesh() -> SourceMesh {
    SourceMesh::new()
        .with_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::from(UP))
        .with_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::from(UP))
        .with_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::from(UP))
        .with_face(MeshFace::flat(vec![0, 1, 2], Vec3::from(UP)))
}

/// Two flat triangles sharing the 0-2 edge, with per-corner UVs.
fn quad_mesh() -> SourceMesh {
    let uv = |u: f32, v: f32| Vec2::new(u, v);
    SourceMesh::new()
        .with_uvs()
        .with_vertex(Vec3::new(0.0, 0.0, 0.0), Vec3::from(UP))
        .with_vertex(Vec3::new(1.0, 0.0, 0.0), Vec3::from(UP))
        .with_vertex(Vec3::new(1.0, 1.0, 0.0), Vec3::from(UP))
        .with_vertex(Vec3::new(0.0, 1.0, 0.0), Vec3::from(UP))
        .with_face(
            MeshFace::flat(vec![0, 1, 2], Vec3::from(UP))
                .with_uvs(vec![uv(0.0, 0.0), uv(1.0, 0.0), uv(1.0, 1.0)]),
        )
        .with_face(
            MeshFace::flat(vec![0, 2, 3], Vec3::from(UP))
                .with_uvs(vec![uv(0.0, 0.0), uv(1.0, 1.0), uv(0.0, 1.0)]),
        )
}

fn image_slot(path: &str) -> TextureSlot {
    TextureSlot::new(SceneTexture::image(path))
}

/// A material with `count` valid image slots named `tex0.png`, `tex1.png`, ...
fn textured_material(count: usize) -> SceneMaterial {
    (0..count).fold(SceneMaterial::new().with_name("Textured"), |material, i| {
        material.with_texture_slot(Some(image_slot(&format!("tex{i}.png"))))
    })
}
