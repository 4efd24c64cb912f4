//! # Lathe Handle
//!
//! Flat GPU buffers and extents from one pipeline run, ready for transfer
//! to JavaScript.

use lathe_mesh::LatheOutput;
use wasm_bindgen::prelude::*;

/// Mesh buffers for the renderer.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const handle = lathe(path, default_params_json());
///
/// gl.bufferData(gl.ARRAY_BUFFER, handle.positions(), gl.STATIC_DRAW);
/// gl.bufferData(gl.ARRAY_BUFFER, handle.normals(), gl.STATIC_DRAW);
/// gl.bufferData(gl.ARRAY_BUFFER, handle.texcoords(), gl.STATIC_DRAW);
/// gl.bufferData(gl.ELEMENT_ARRAY_BUFFER, handle.indices(), gl.STATIC_DRAW);
///
/// const [minX, minY, minZ] = handle.extents_min();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct LatheHandle {
    /// Vertex positions as [x, y, z, ...]
    positions: Vec<f32>,
    /// Unit normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Texture coordinates as [u, v, ...]
    texcoords: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
    /// 16-bit indices, when every vertex is addressable
    indices_u16: Option<Vec<u16>>,
    extents_min: [f64; 3],
    extents_max: [f64; 3],
}

#[wasm_bindgen]
impl LatheHandle {
    /// Returns the number of vertices.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        (self.positions.len() / 3) as u32
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        (self.indices.len() / 3) as u32
    }

    /// Returns the vertex positions as a Float32Array.
    pub fn positions(&self) -> Vec<f32> {
        self.positions.clone()
    }

    /// Returns the vertex normals as a Float32Array.
    pub fn normals(&self) -> Vec<f32> {
        self.normals.clone()
    }

    /// Returns the texture coordinates as a Float32Array.
    pub fn texcoords(&self) -> Vec<f32> {
        self.texcoords.clone()
    }

    /// Returns the triangle indices as a Uint32Array.
    pub fn indices(&self) -> Vec<u32> {
        self.indices.clone()
    }

    /// Returns the triangle indices as a Uint16Array, or `undefined` if
    /// the mesh has too many vertices for 16-bit indices.
    pub fn indices_u16(&self) -> Option<Vec<u16>> {
        self.indices_u16.clone()
    }

    /// Returns the minimum corner of the unshaded lathe bounds.
    pub fn extents_min(&self) -> Vec<f64> {
        self.extents_min.to_vec()
    }

    /// Returns the maximum corner of the unshaded lathe bounds.
    pub fn extents_max(&self) -> Vec<f64> {
        self.extents_max.to_vec()
    }
}

impl From<LatheOutput> for LatheHandle {
    fn from(output: LatheOutput) -> Self {
        let mesh = &output.mesh;
        Self {
            positions: mesh.positions_f32(),
            normals: mesh.normals_f32(),
            texcoords: mesh.texcoords_f32(),
            indices: mesh.indices_u32(),
            indices_u16: mesh.indices_u16(),
            extents_min: output.extents.min.to_array(),
            extents_max: output.extents.max.to_array(),
        }
    }
}
