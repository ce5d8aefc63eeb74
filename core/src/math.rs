//! Math type aliases and comparison helpers.
//!
//! All mesh and transform data is `f32`, matching what authoring hosts hand
//! out. Vectors are compared with a fixed absolute tolerance so that float
//! drift from upstream normal or transform recomputation does not split
//! otherwise identical vertices.

pub use nalgebra;

/// 2D vector (f32).
pub type Vec2 = nalgebra::Vector2<f32>;

/// 3D vector (f32).
pub type Vec3 = nalgebra::Vector3<f32>;

/// 4x4 matrix (f32).
pub type Mat4 = nalgebra::Matrix4<f32>;

/// Absolute per-axis tolerance used when welding vertex attributes (2^-23).
pub const WELD_EPSILON: f32 = f32::EPSILON;

/// Component-wise tolerance comparison.
///
/// Two vectors match when every component differs by strictly less than
/// [`WELD_EPSILON`]. A difference of exactly `WELD_EPSILON` does not match.
pub fn approx_eq<const D: usize>(
    a: &nalgebra::SVector<f32, D>,
    b: &nalgebra::SVector<f32, D>,
) -> bool {
    a.iter()
        .zip(b.iter())
        .all(|(x, y)| (x - y).abs() < WELD_EPSILON)
}

/// Build a matrix from row-major rows.
pub fn mat4_from_rows(rows: [[f32; 4]; 4]) -> Mat4 {
    #[rustfmt::skip]
    let result = Mat4::new(
        rows[0][0], rows[0][1], rows[0][2], rows[0][3],
        rows[1][0], rows[1][1], rows[1][2], rows[1][3],
        rows[2][0], rows[2][1], rows[2][2], rows[2][3],
        rows[3][0], rows[3][1], rows[3][2], rows[3][3],
    );
    result
}

/// Split a matrix into row-major rows.
pub fn mat4_to_rows(m: &Mat4) -> [[f32; 4]; 4] {
    let mut rows = [[0.0; 4]; 4];
    for (r, row) in rows.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            *value = m[(r, c)];
        }
    }
    rows
}

/// Build a translation-only 4x4 matrix.
pub fn mat4_from_translation(t: Vec3) -> Mat4 {
    Mat4::new_translation(&t)
}
