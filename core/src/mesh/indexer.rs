//! Tolerance-based vertex welding.
//!
//! Converts per-face-corner attribute streams into deduplicated position,
//! normal and texture coordinate arrays plus a flat index list.
//!
//! # Match rule
//!
//! Corners are processed in face order, then corner order. A corner reuses an
//! existing vertex when its position matches within [`WELD_EPSILON`] on every
//! axis and each attribute the corner *has* matches the attribute recorded for
//! that vertex. Absent attributes are not discriminators. The first vertex in
//! insertion order that satisfies the rule wins; otherwise a new vertex is
//! appended. Index values are always position offsets.
//!
//! Lookup is a linear scan, so indexing is O(corners x unique vertices).
//!
//! [`WELD_EPSILON`]: crate::math::WELD_EPSILON

use serde::Deserialize;

use crate::math::{Vec2, Vec3, approx_eq};

use super::error::MeshError;
use super::source::Face;

/// How normal and texture coordinate arrays are laid out when some corners
/// omit those attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeAlignment {
    /// Absent attributes are skipped, so `normals`/`texcoords` may be shorter
    /// than `positions`. This is the legacy dump layout; indices still address
    /// positions, so a mesh that mixes present and absent attributes produces
    /// normal/texcoord arrays that no longer line up with their positions.
    #[default]
    Compact,
    /// Absent attributes are written as zero vectors, keeping every array the
    /// same length as `positions`.
    Padded,
}

/// Builder that owns the welded vertex arrays.
///
/// Attributes are stored per vertex (present or not) so matching never
/// depends on the emission layout chosen in [`into_indexed`](Self::into_indexed).
#[derive(Debug, Clone, Default)]
pub struct VertexWelder {
    positions: Vec<Vec3>,
    normals: Vec<Option<Vec3>>,
    texcoords: Vec<Option<Vec2>>,
}

impl VertexWelder {
    /// Create an empty welder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty welder with room for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(capacity),
            normals: Vec::with_capacity(capacity),
            texcoords: Vec::with_capacity(capacity),
        }
    }

    /// Number of unique vertices accumulated so far.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Find the first existing vertex matching the given attributes.
    pub fn find(
        &self,
        position: &Vec3,
        normal: Option<&Vec3>,
        texcoord: Option<&Vec2>,
    ) -> Option<u32> {
        (0..self.positions.len())
            .find(|&slot| self.matches(slot, position, normal, texcoord))
            .map(|slot| slot as u32)
    }

    /// Return the index of a matching vertex, appending a new one if none matches.
    pub fn lookup_or_insert(
        &mut self,
        position: Vec3,
        normal: Option<Vec3>,
        texcoord: Option<Vec2>,
    ) -> u32 {
        if let Some(index) = self.find(&position, normal.as_ref(), texcoord.as_ref()) {
            return index;
        }

        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.texcoords.push(texcoord);
        index
    }

    fn matches(
        &self,
        slot: usize,
        position: &Vec3,
        normal: Option<&Vec3>,
        texcoord: Option<&Vec2>,
    ) -> bool {
        if !approx_eq(&self.positions[slot], position) {
            return false;
        }
        let normal_ok = match normal {
            None => true,
            Some(n) => self.normals[slot].is_some_and(|existing| approx_eq(&existing, n)),
        };
        let texcoord_ok = match texcoord {
            None => true,
            Some(t) => self.texcoords[slot].is_some_and(|existing| approx_eq(&existing, t)),
        };
        normal_ok && texcoord_ok
    }

    /// Finish welding and lay the arrays out according to `alignment`.
    pub fn into_indexed(
        self,
        indices: Vec<u32>,
        corners_per_face: u32,
        alignment: AttributeAlignment,
    ) -> IndexedMesh {
        let (normals, texcoords) = match alignment {
            AttributeAlignment::Compact => (
                self.normals.into_iter().flatten().collect(),
                self.texcoords.into_iter().flatten().collect(),
            ),
            AttributeAlignment::Padded => (
                self.normals
                    .into_iter()
                    .map(|n| n.unwrap_or_else(Vec3::zeros))
                    .collect(),
                self.texcoords
                    .into_iter()
                    .map(|t| t.unwrap_or_else(Vec2::zeros))
                    .collect(),
            ),
        };

        IndexedMesh {
            positions: self.positions,
            normals,
            texcoords,
            indices,
            corners_per_face,
        }
    }
}

/// A welded, indexed mesh ready for serialization.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedMesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    texcoords: Vec<Vec2>,
    indices: Vec<u32>,
    corners_per_face: u32,
}

impl IndexedMesh {
    /// Unique vertex positions, in first-occurrence order.
    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    /// Vertex normals.
    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    /// Vertex texture coordinates.
    pub fn texcoords(&self) -> &[Vec2] {
        &self.texcoords
    }

    /// Flat index list, one entry per face corner.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Corner count of the first face.
    pub fn corners_per_face(&self) -> u32 {
        self.corners_per_face
    }

    /// Number of unique vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }
}

/// Weld a face list into an [`IndexedMesh`].
///
/// Returns [`MeshError::NoFaces`] for an empty face list.
pub fn index_faces(
    faces: &[Face],
    alignment: AttributeAlignment,
) -> Result<IndexedMesh, MeshError> {
    crate::profile_function!();

    let first = faces.first().ok_or(MeshError::NoFaces)?;
    let corners_per_face = first.corners.len() as u32;
    let corner_count: usize = faces.iter().map(|f| f.corners.len()).sum();

    let mut welder = VertexWelder::with_capacity(corner_count);
    let mut indices = Vec::with_capacity(corner_count);
    for face in faces {
        for corner in &face.corners {
            indices.push(welder.lookup_or_insert(corner.position, corner.normal, corner.texcoord));
        }
    }

    log::trace!(
        "welded {corner_count} corners into {} vertices",
        welder.vertex_count()
    );
    Ok(welder.into_indexed(indices, corners_per_face, alignment))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::math::WELD_EPSILON;
    use crate::mesh::FaceCorner;

    fn corner(p: [f32; 3], n: Option<[f32; 3]>, uv: Option<[f32; 2]>) -> FaceCorner {
        let mut corner = FaceCorner::new(Vec3::from(p));
        if let Some(n) = n {
            corner = corner.with_normal(Vec3::from(n));
        }
        if let Some(uv) = uv {
            corner = corner.with_texcoord(Vec2::from(uv));
        }
        corner
    }

    fn flat_face(points: &[[f32; 3]], normal: [f32; 3]) -> Face {
        Face::new(points.iter().map(|&p| corner(p, Some(normal), None)).collect())
    }

    const UP: [f32; 3] = [0.0, 0.0, 1.0];

    #[test]
    fn test_single_triangle() {
        let faces = vec![flat_face(
            &[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            UP,
        )];
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();

        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.corners_per_face(), 3);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.normals().len(), 3);
        assert!(mesh.texcoords().is_empty());
    }

    #[test]
    fn test_shared_edge_welds() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [1.0, 1.0, 0.0];
        let d = [0.0, 1.0, 0.0];
        let faces = vec![flat_face(&[a, b, c], UP), flat_face(&[a, c, d], UP)];
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();

        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.index_count(), 6);
        assert_eq!(mesh.indices(), &[0, 1, 2, 0, 2, 3]);
    }

    #[rstest]
    #[case::exactly_epsilon(WELD_EPSILON, 2)]
    #[case::half_epsilon(WELD_EPSILON / 2.0, 1)]
    #[case::zero(0.0, 1)]
    #[case::negative_exactly_epsilon(-WELD_EPSILON, 2)]
    fn test_tolerance_boundary(#[case] offset: f32, #[case] expected_vertices: usize) {
        for axis in 0..3 {
            let mut shifted = [0.0f32; 3];
            shifted[axis] = offset;
            let mut welder = VertexWelder::new();
            welder.lookup_or_insert(Vec3::zeros(), None, None);
            welder.lookup_or_insert(Vec3::from(shifted), None, None);
            assert_eq!(welder.vertex_count(), expected_vertices, "axis {axis}");
        }
    }

    #[test]
    fn test_normal_mismatch_splits_vertex() {
        let p = [1.0, 2.0, 3.0];
        let faces = vec![Face::new(vec![
            corner(p, Some([0.0, 0.0, 1.0]), None),
            corner(p, Some([0.0, 1.0, 0.0]), None),
            corner(p, Some([0.0, 0.0, 1.0]), None),
        ])];
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();

        assert_eq!(mesh.indices(), &[0, 1, 0]);
        assert_eq!(mesh.vertex_count(), 2);
    }

    #[test]
    fn test_scan_continues_past_position_only_hit() {
        // Same position recorded three times with different normals; a fourth
        // corner matching the second normal must find the second vertex.
        let p = [0.5, 0.5, 0.5];
        let mut welder = VertexWelder::new();
        let x = welder.lookup_or_insert(Vec3::from(p), Some(Vec3::x()), None);
        let y = welder.lookup_or_insert(Vec3::from(p), Some(Vec3::y()), None);
        let z = welder.lookup_or_insert(Vec3::from(p), Some(Vec3::z()), None);
        assert_eq!((x, y, z), (0, 1, 2));
        assert_eq!(welder.lookup_or_insert(Vec3::from(p), Some(Vec3::y()), None), 1);
        assert_eq!(welder.vertex_count(), 3);
    }

    #[test]
    fn test_uv_rules() {
        let p = Vec3::new(1.0, 1.0, 1.0);
        let n = Vec3::z();
        let uv = Vec2::new(0.25, 0.75);
        let mut welder = VertexWelder::new();
        let first = welder.lookup_or_insert(p, Some(n), Some(uv));

        // Normal and UV match.
        assert_eq!(welder.lookup_or_insert(p, Some(n), Some(uv)), first);
        // Normal matches, UV absent: UV is not a discriminator.
        assert_eq!(welder.lookup_or_insert(p, Some(n), None), first);
        // Normal absent, UV matches.
        assert_eq!(welder.lookup_or_insert(p, None, Some(uv)), first);
        // Neither attribute: position-only match.
        assert_eq!(welder.lookup_or_insert(p, None, None), first);
        // UV diverges.
        assert_eq!(welder.lookup_or_insert(p, Some(n), Some(Vec2::new(0.5, 0.5))), 1);
        assert_eq!(welder.vertex_count(), 2);
    }

    #[test]
    fn test_present_attribute_needs_recorded_attribute() {
        let p = Vec3::new(3.0, 2.0, 1.0);
        let mut welder = VertexWelder::new();
        welder.lookup_or_insert(p, None, None);
        // The recorded vertex has no normal, so a corner with one cannot be confirmed.
        assert_eq!(welder.lookup_or_insert(p, Some(Vec3::z()), None), 1);
        assert_eq!(welder.lookup_or_insert(p, None, Some(Vec2::zeros())), 2);
    }

    #[test]
    fn test_compact_and_padded_layouts() {
        let faces = vec![Face::new(vec![
            corner([0.0, 0.0, 0.0], Some(UP), Some([0.0, 0.0])),
            corner([1.0, 0.0, 0.0], None, None),
            corner([0.0, 1.0, 0.0], Some(UP), Some([0.0, 1.0])),
        ])];

        let compact = index_faces(&faces, AttributeAlignment::Compact).unwrap();
        assert_eq!(compact.vertex_count(), 3);
        assert_eq!(compact.normals().len(), 2);
        assert_eq!(compact.texcoords(), &[Vec2::new(0.0, 0.0), Vec2::new(0.0, 1.0)]);

        let padded = index_faces(&faces, AttributeAlignment::Padded).unwrap();
        assert_eq!(padded.normals().len(), 3);
        assert_eq!(padded.normals()[1], Vec3::zeros());
        assert_eq!(
            padded.texcoords(),
            &[Vec2::new(0.0, 0.0), Vec2::zeros(), Vec2::new(0.0, 1.0)]
        );
        assert_eq!(compact.indices(), padded.indices());
    }

    #[test]
    fn test_determinism() {
        let faces = vec![
            flat_face(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0]], UP),
            flat_face(&[[0.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]], UP),
            flat_face(&[[0.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]], [1.0, 0.0, 0.0]),
        ];
        let first = index_faces(&faces, AttributeAlignment::Compact).unwrap();
        let second = index_faces(&faces, AttributeAlignment::Compact).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_first_occurrence_sets_order() {
        let a = [0.0, 0.0, 0.0];
        let b = [1.0, 0.0, 0.0];
        let c = [0.0, 1.0, 0.0];
        let d = [1.0, 1.0, 0.0];
        let original = vec![flat_face(&[a, b, c], UP), flat_face(&[c, b, d], UP)];
        // Rotated corners within faces but same first-visit order of a, b, c, d.
        let rotated = vec![flat_face(&[a, b, c], UP), flat_face(&[b, d, c], UP)];

        let m1 = index_faces(&original, AttributeAlignment::Compact).unwrap();
        let m2 = index_faces(&rotated, AttributeAlignment::Compact).unwrap();
        assert_eq!(m1.positions(), m2.positions());
        assert_eq!(m1.indices(), &[0, 1, 2, 2, 1, 3]);
        assert_eq!(m2.indices(), &[0, 1, 2, 1, 3, 2]);
    }

    #[test]
    fn test_indices_in_range_and_counts() {
        let mut faces = Vec::new();
        for i in 0..8 {
            let x = i as f32;
            faces.push(flat_face(
                &[[x, 0.0, 0.0], [x + 1.0, 0.0, 0.0], [x + 1.0, 1.0, 0.0], [x, 1.0, 0.0]],
                UP,
            ));
        }
        let mesh = index_faces(&faces, AttributeAlignment::Compact).unwrap();

        assert_eq!(mesh.index_count(), 32);
        assert_eq!(mesh.corners_per_face(), 4);
        assert_eq!(mesh.vertex_count(), 18);
        assert!(mesh
            .indices()
            .iter()
            .all(|&i| (i as usize) < mesh.vertex_count()));
    }

    #[test]
    fn test_no_faces() {
        assert_eq!(
            index_faces(&[], AttributeAlignment::Compact),
            Err(MeshError::NoFaces)
        );
    }
}
