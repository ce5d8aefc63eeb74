//! Host-side mesh snapshot and face-corner resolution.
//!
//! Authoring hosts store one attribute set per polygon corner. A
//! [`SourceMesh`] mirrors that layout: shared vertices with smooth normals,
//! and faces that reference them by index together with a flat normal, a
//! smooth-shading flag and optional per-corner UVs. [`SourceMesh::faces`]
//! flattens it into the [`Face`]/[`FaceCorner`] stream the indexer consumes.

use crate::math::{Vec2, Vec3};

use super::error::MeshError;

/// A single attribute tuple at one corner of a face.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceCorner {
    /// Corner position.
    pub position: Vec3,
    /// Corner normal, if the host provides one.
    pub normal: Option<Vec3>,
    /// Corner texture coordinate, present only for meshes with UV data.
    pub texcoord: Option<Vec2>,
}

impl FaceCorner {
    /// Corner with a position only.
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            normal: None,
            texcoord: None,
        }
    }

    /// Set the corner normal.
    #[must_use]
    pub fn with_normal(mut self, normal: Vec3) -> Self {
        self.normal = Some(normal);
        self
    }

    /// Set the corner texture coordinate.
    #[must_use]
    pub fn with_texcoord(mut self, texcoord: Vec2) -> Self {
        self.texcoord = Some(texcoord);
        self
    }
}

/// An ordered list of face corners.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Face {
    /// Corners in winding order.
    pub corners: Vec<FaceCorner>,
}

impl Face {
    /// Create a face from its corners.
    pub fn new(corners: Vec<FaceCorner>) -> Self {
        Self { corners }
    }
}

/// A shared mesh vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeshVertex {
    /// Vertex position.
    pub position: Vec3,
    /// Smooth (per-vertex) normal.
    pub normal: Vec3,
}

/// A polygon of a [`SourceMesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct MeshFace {
    /// Indices into [`SourceMesh::vertices`], in winding order.
    pub vertices: Vec<usize>,
    /// Flat face normal.
    pub normal: Vec3,
    /// Whether the face is smooth shaded (uses per-vertex normals).
    pub smooth: bool,
    /// One UV per corner. Ignored unless the mesh has UV data.
    pub uvs: Vec<Vec2>,
}

impl MeshFace {
    /// A flat-shaded face with the given face normal.
    pub fn flat(vertices: Vec<usize>, normal: Vec3) -> Self {
        Self {
            vertices,
            normal,
            smooth: false,
            uvs: Vec::new(),
        }
    }

    /// A smooth-shaded face. The flat normal stays zero until recomputed.
    pub fn smooth(vertices: Vec<usize>) -> Self {
        Self {
            vertices,
            normal: Vec3::zeros(),
            smooth: true,
            uvs: Vec::new(),
        }
    }

    /// Set per-corner UVs.
    #[must_use]
    pub fn with_uvs(mut self, uvs: Vec<Vec2>) -> Self {
        self.uvs = uvs;
        self
    }
}

/// Read-only snapshot of a host mesh.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SourceMesh {
    /// Shared vertices.
    pub vertices: Vec<MeshVertex>,
    /// Faces referencing [`vertices`](Self::vertices).
    pub faces: Vec<MeshFace>,
    /// Whether the mesh carries per-face-corner UV data.
    pub has_uvs: bool,
}

impl SourceMesh {
    /// Create an empty mesh without UV data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex.
    #[must_use]
    pub fn with_vertex(mut self, position: Vec3, normal: Vec3) -> Self {
        self.vertices.push(MeshVertex { position, normal });
        self
    }

    /// Append a face.
    #[must_use]
    pub fn with_face(mut self, face: MeshFace) -> Self {
        self.faces.push(face);
        self
    }

    /// Mark the mesh as carrying per-corner UV data.
    #[must_use]
    pub fn with_uvs(mut self) -> Self {
        self.has_uvs = true;
        self
    }

    /// Resolve every face into its corner attribute tuples.
    ///
    /// Flat faces use their face normal, smooth faces the per-vertex normal.
    /// UVs are attached only when [`has_uvs`](Self::has_uvs) is set.
    pub fn faces(&self) -> Result<Vec<Face>, MeshError> {
        self.faces
            .iter()
            .enumerate()
            .map(|(face_index, face)| self.resolve_face(face_index, face))
            .collect()
    }

    fn resolve_face(&self, face_index: usize, face: &MeshFace) -> Result<Face, MeshError> {
        if self.has_uvs && face.uvs.len() != face.vertices.len() {
            return Err(MeshError::UvCountMismatch {
                face: face_index,
                corners: face.vertices.len(),
                uvs: face.uvs.len(),
            });
        }

        let mut corners = Vec::with_capacity(face.vertices.len());
        for (corner, &vertex_index) in face.vertices.iter().enumerate() {
            let vertex = self.vertex(face_index, vertex_index)?;
            let normal = if face.smooth {
                vertex.normal
            } else {
                face.normal
            };
            corners.push(FaceCorner {
                position: vertex.position,
                normal: Some(normal),
                texcoord: self.has_uvs.then(|| face.uvs[corner]),
            });
        }
        Ok(Face::new(corners))
    }

    fn vertex(&self, face: usize, vertex: usize) -> Result<&MeshVertex, MeshError> {
        self.vertices
            .get(vertex)
            .ok_or(MeshError::VertexOutOfRange {
                face,
                vertex,
                vertex_count: self.vertices.len(),
            })
    }

    /// Recompute flat face normals and smooth vertex normals from positions.
    ///
    /// Face normals use Newell's method, so non-planar polygons get a
    /// best-fit normal. Vertex normals are the normalized, area-weighted sum
    /// of adjacent face normals. Degenerate faces and unreferenced vertices
    /// end up with a zero normal.
    pub fn recompute_normals(&mut self) -> Result<(), MeshError> {
        let mut sums = vec![Vec3::zeros(); self.vertices.len()];

        for face_index in 0..self.faces.len() {
            let mut area_normal = Vec3::zeros();
            let corners = &self.faces[face_index].vertices;
            for (i, &current) in corners.iter().enumerate() {
                let next = corners[(i + 1) % corners.len()];
                let a = self.vertex(face_index, current)?.position;
                let b = self.vertex(face_index, next)?.position;
                area_normal.x += (a.y - b.y) * (a.z + b.z);
                area_normal.y += (a.z - b.z) * (a.x + b.x);
                area_normal.z += (a.x - b.x) * (a.y + b.y);
            }
            for &vertex in corners {
                sums[vertex] += area_normal;
            }
            self.faces[face_index].normal = normalize_or_zero(area_normal);
        }

        for (vertex, sum) in self.vertices.iter_mut().zip(sums) {
            vertex.normal = normalize_or_zero(sum);
        }
        Ok(())
    }
}

fn normalize_or_zero(v: Vec3) -> Vec3 {
    v.try_normalize(f32::MIN_POSITIVE).unwrap_or_else(Vec3::zeros)
}
