//! # Mesh Data Structures
//!
//! [`RawMesh`] is the lathe grid before shading; [`FinalMesh`] is the
//! deduplicated, shaded output ready for GPU upload.

use crate::error::LatheError;
use config::constants::U16_INDEX_LIMIT;
use glam::{DVec2, DVec3};

// =============================================================================
// RAW MESH
// =============================================================================

/// Positions, texture coordinates and an optional triangle index list.
///
/// Without indices the positions are read as a triangle soup: every three
/// consecutive vertices form one triangle.
///
/// All geometry uses f64; export to f32 happens on [`FinalMesh`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawMesh {
    positions: Vec<DVec3>,
    texcoords: Vec<DVec2>,
    indices: Option<Vec<u32>>,
}

impl RawMesh {
    /// Creates an indexed mesh.
    pub fn indexed(positions: Vec<DVec3>, texcoords: Vec<DVec2>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            texcoords,
            indices: Some(indices),
        }
    }

    /// Creates a triangle soup.
    pub fn unindexed(positions: Vec<DVec3>, texcoords: Vec<DVec2>) -> Self {
        Self {
            positions,
            texcoords,
            indices: None,
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        match &self.indices {
            Some(indices) => indices.len() / 3,
            None => self.positions.len() / 3,
        }
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Texture coordinates, one per position.
    #[inline]
    pub fn texcoords(&self) -> &[DVec2] {
        &self.texcoords
    }

    /// Triangle indices, if the mesh is indexed.
    #[inline]
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Checks the structural invariants the normal generator relies on.
    ///
    /// - one texture coordinate per position
    /// - a whole number of triangles
    /// - every index references an existing vertex
    pub fn validate(&self) -> Result<(), LatheError> {
        if self.texcoords.len() != self.positions.len() {
            return Err(LatheError::invariant(format!(
                "{} texcoords for {} positions",
                self.texcoords.len(),
                self.positions.len()
            )));
        }

        let corners = self.indices.as_ref().map_or(self.positions.len(), Vec::len);
        if corners % 3 != 0 {
            return Err(LatheError::invariant(format!(
                "{corners} triangle corners is not a multiple of 3"
            )));
        }

        if let Some(indices) = &self.indices {
            let count = self.positions.len();
            if let Some(bad) = indices.iter().find(|&&i| i as usize >= count) {
                return Err(LatheError::invariant(format!(
                    "index {bad} out of range for {count} vertices"
                )));
            }
        }

        Ok(())
    }
}

// =============================================================================
// FINAL MESH
// =============================================================================

/// A shaded triangle mesh with one normal and texture coordinate per vertex.
///
/// Vertices are unique by their full (position, normal, texcoord) value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FinalMesh {
    positions: Vec<DVec3>,
    normals: Vec<DVec3>,
    texcoords: Vec<DVec2>,
    triangles: Vec<[u32; 3]>,
}

impl FinalMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_count),
            normals: Vec::with_capacity(vertex_count),
            texcoords: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3, normal: DVec3, texcoord: DVec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.texcoords.push(texcoord);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Vertex positions.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.positions
    }

    /// Unit vertex normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Texture coordinates.
    #[inline]
    pub fn texcoords(&self) -> &[DVec2] {
        &self.texcoords
    }

    /// Triangles as vertex index triples.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Checks index range and that no triangle repeats a vertex.
    pub fn validate(&self) -> bool {
        let vertex_count = self.positions.len() as u32;
        self.triangles.iter().all(|tri| {
            tri.iter().all(|&i| i < vertex_count)
                && tri[0] != tri[1]
                && tri[1] != tri[2]
                && tri[0] != tri[2]
        })
    }

    /// Exports positions as a flat f32 array `[x, y, z, ...]`.
    pub fn positions_f32(&self) -> Vec<f32> {
        flatten3(&self.positions)
    }

    /// Exports normals as a flat f32 array `[nx, ny, nz, ...]`.
    pub fn normals_f32(&self) -> Vec<f32> {
        flatten3(&self.normals)
    }

    /// Exports texture coordinates as a flat f32 array `[u, v, ...]`.
    pub fn texcoords_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.texcoords.len() * 2);
        for t in &self.texcoords {
            result.push(t.x as f32);
            result.push(t.y as f32);
        }
        result
    }

    /// Exports triangle indices as a flat u32 array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports triangle indices as u16 for renderers limited to 16-bit
    /// element buffers.
    ///
    /// Returns `None` if the mesh has more vertices than u16 can address.
    pub fn indices_u16(&self) -> Option<Vec<u16>> {
        if self.positions.len() > U16_INDEX_LIMIT {
            return None;
        }
        Some(self.triangles.iter().flatten().map(|&i| i as u16).collect())
    }
}

fn flatten3(values: &[DVec3]) -> Vec<f32> {
    let mut result = Vec::with_capacity(values.len() * 3);
    for v in values {
        result.push(v.x as f32);
        result.push(v.y as f32);
        result.push(v.z as f32);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn triangle_raw(indices: Vec<u32>) -> RawMesh {
        RawMesh::indexed(
            vec![DVec3::ZERO, DVec3::X, DVec3::Y],
            vec![DVec2::ZERO, DVec2::X, DVec2::Y],
            indices,
        )
    }

    #[test]
    fn test_raw_mesh_counts() {
        let raw = triangle_raw(vec![0, 1, 2]);
        assert_eq!(raw.vertex_count(), 3);
        assert_eq!(raw.triangle_count(), 1);
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_raw_mesh_unindexed_counts() {
        let raw = RawMesh::unindexed(vec![DVec3::ZERO; 6], vec![DVec2::ZERO; 6]);
        assert_eq!(raw.triangle_count(), 2);
        assert!(raw.indices().is_none());
        assert!(raw.validate().is_ok());
    }

    #[test]
    fn test_raw_mesh_rejects_out_of_range() {
        let err = triangle_raw(vec![0, 1, 3]).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalInvariant);
    }

    #[test]
    fn test_raw_mesh_rejects_partial_triangle() {
        let err = triangle_raw(vec![0, 1]).validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InternalInvariant);
    }

    #[test]
    fn test_raw_mesh_rejects_texcoord_mismatch() {
        let raw = RawMesh::indexed(vec![DVec3::ZERO; 3], vec![DVec2::ZERO; 2], vec![0, 1, 2]);
        assert_eq!(raw.validate().unwrap_err().kind(), ErrorKind::InternalInvariant);
    }

    #[test]
    fn test_final_mesh_add_and_export() {
        let mut mesh = FinalMesh::new();
        let a = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0), DVec3::Z, DVec2::new(0.5, 0.25));
        let b = mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::X);
        let c = mesh.add_vertex(DVec3::Y, DVec3::Z, DVec2::Y);
        mesh.add_triangle(a, b, c);

        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert!(mesh.validate());
        assert_eq!(&mesh.positions_f32()[..3], &[1.0f32, 2.0, 3.0]);
        assert_eq!(&mesh.texcoords_f32()[..2], &[0.5f32, 0.25]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert_eq!(mesh.indices_u16(), Some(vec![0u16, 1, 2]));
    }

    #[test]
    fn test_final_mesh_validate_repeated_vertex() {
        let mut mesh = FinalMesh::new();
        mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        mesh.add_vertex(DVec3::X, DVec3::Z, DVec2::ZERO);
        mesh.add_triangle(0, 1, 1);
        assert!(!mesh.validate());
    }

    #[test]
    fn test_indices_u16_overflow() {
        let mut mesh = FinalMesh::with_capacity(U16_INDEX_LIMIT + 1, 0);
        for _ in 0..=U16_INDEX_LIMIT {
            mesh.add_vertex(DVec3::ZERO, DVec3::Z, DVec2::ZERO);
        }
        assert!(mesh.indices_u16().is_none());
    }
}
