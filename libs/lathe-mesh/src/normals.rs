//! # Normal Generator
//!
//! Angle-threshold smoothing with vertex splitting.
//!
//! ## Algorithm
//!
//! 1. Compute one unit normal per face, dropping zero-area faces
//! 2. Merge raw vertices with bit-identical positions into spatial vertices
//! 3. Record which faces touch each spatial vertex
//! 4. For each face corner, sum the normals of the touching faces within
//!    the smoothing angle of the face (always including the face itself)
//! 5. Emit one output vertex per distinct (position, normal, texcoord)
//!
//! Step 5 splits vertices along the revolution seam, where positions
//! coincide but `u` jumps from 1 back to 0.

use crate::cursor::TriangleCursor;
use crate::error::LatheError;
use crate::mesh::{FinalMesh, RawMesh};
use crate::params::validate_smoothing_angle;
use glam::{DVec2, DVec3};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy)]
struct Face {
    corners: [u32; 3],
    normal: DVec3,
}

/// Shades `raw`, smoothing across edges whose dihedral angle is at most
/// `smoothing_max_angle` radians.
///
/// An angle of 0 gives faceted shading, PI gives fully smooth shading.
///
/// # Errors
///
/// - parameter error if the angle lies outside `[0, PI]`
/// - internal invariant error if `raw` fails [`RawMesh::validate`]
pub fn generate_normals(raw: &RawMesh, smoothing_max_angle: f64) -> Result<FinalMesh, LatheError> {
    validate_smoothing_angle(smoothing_max_angle)?;
    raw.validate()?;

    let positions = raw.positions();
    let texcoords = raw.texcoords();

    let mut cursor = TriangleCursor::for_mesh(raw);
    let faces = face_normals(positions, &mut cursor);
    let dropped = cursor.triangle_count() - faces.len();
    if dropped > 0 {
        log::debug!("Dropped {dropped} zero-area face(s)");
    }

    let (spatial, spatial_count) = spatial_vertices(positions);

    let mut vertex_faces: Vec<Vec<u32>> = vec![Vec::new(); spatial_count];
    for (face_index, face) in faces.iter().enumerate() {
        for &corner in &face.corners {
            vertex_faces[spatial[corner as usize] as usize].push(face_index as u32);
        }
    }

    let max_cos = smoothing_max_angle.cos();
    let mut mesh = FinalMesh::with_capacity(positions.len(), faces.len());
    let mut lookup: HashMap<[u64; 8], u32> = HashMap::with_capacity(positions.len());

    for (face_index, face) in faces.iter().enumerate() {
        let mut triangle = [0u32; 3];
        for (slot, &corner) in triangle.iter_mut().zip(&face.corners) {
            let shared = &vertex_faces[spatial[corner as usize] as usize];
            let sum: DVec3 = shared
                .iter()
                .filter(|&&other| {
                    other as usize == face_index
                        || faces[other as usize].normal.dot(face.normal) > max_cos
                })
                .map(|&other| faces[other as usize].normal)
                .sum();
            let normal = sum.try_normalize().unwrap_or(face.normal);

            let position = positions[corner as usize];
            let texcoord = texcoords[corner as usize];
            *slot = *lookup
                .entry(vertex_key(position, normal, texcoord))
                .or_insert_with(|| mesh.add_vertex(position, normal, texcoord));
        }
        mesh.add_triangle(triangle[0], triangle[1], triangle[2]);
    }

    log::debug!(
        "Generated normals: {} raw vertices -> {} shaded vertices, {} triangles",
        positions.len(),
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

fn face_normals(positions: &[DVec3], cursor: &mut TriangleCursor<'_>) -> Vec<Face> {
    cursor.reset();
    let mut faces = Vec::with_capacity(cursor.triangle_count());
    for corners in cursor {
        let [v1, v2, v3] = corners.map(|i| positions[i as usize]);
        if let Some(normal) = (v1 - v2).cross(v3 - v2).try_normalize() {
            faces.push(Face { corners, normal });
        }
    }
    faces
}

/// Maps each raw vertex to a spatial vertex id by exact position.
fn spatial_vertices(positions: &[DVec3]) -> (Vec<u32>, usize) {
    let mut ids: HashMap<[u64; 3], u32> = HashMap::with_capacity(positions.len());
    let spatial = positions
        .iter()
        .map(|&p| {
            let next = ids.len() as u32;
            *ids.entry(position_key(p)).or_insert(next)
        })
        .collect();
    (spatial, ids.len())
}

/// Bit pattern of `value` with `-0.0` folded into `0.0`.
#[inline]
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

fn position_key(p: DVec3) -> [u64; 3] {
    [canonical_bits(p.x), canonical_bits(p.y), canonical_bits(p.z)]
}

fn vertex_key(position: DVec3, normal: DVec3, texcoord: DVec2) -> [u64; 8] {
    [
        canonical_bits(position.x),
        canonical_bits(position.y),
        canonical_bits(position.z),
        canonical_bits(normal.x),
        canonical_bits(normal.y),
        canonical_bits(normal.z),
        canonical_bits(texcoord.x),
        canonical_bits(texcoord.y),
    ]
}
