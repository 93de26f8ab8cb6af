//! # Mesh Handle
//!
//! WASM-friendly wrapper for mesh data that can be transferred to JavaScript.

use growth_mesh::{Mesh, MeshBuffers};
use wasm_bindgen::prelude::*;

/// A handle to a grown mesh that can be accessed from JavaScript.
///
/// Every triangle owns its three corners; indices are `0, 1, 2, ...` and
/// every corner carries its face normal.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = generate_mesh(42n, 50);
///
/// const geometry = new THREE.BufferGeometry();
/// geometry.setAttribute('position', new THREE.BufferAttribute(mesh.positions(), 3));
/// geometry.setAttribute('normal', new THREE.BufferAttribute(mesh.normals(), 3));
/// geometry.setIndex(new THREE.BufferAttribute(mesh.indices(), 1));
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Corner positions as [x, y, z, x, y, z, ...]
    positions: Vec<f32>,
    /// Corner normals as [nx, ny, nz, ...]
    normals: Vec<f32>,
    /// Triangle indices as [i0, i1, i2, ...]
    indices: Vec<u32>,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Returns the number of corners.
    #[wasm_bindgen(getter)]
    pub fn vertex_count(&self) -> u32 {
        u32::try_from(self.positions.len() / 3).unwrap_or(u32::MAX)
    }

    /// Returns the number of triangles.
    #[wasm_bindgen(getter)]
    pub fn triangle_count(&self) -> u32 {
        u32::try_from(self.indices.len() / 3).unwrap_or(u32::MAX)
    }

    /// Returns the corner positions as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn positions(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.positions[..])
    }

    /// Returns the corner normals as a Float32Array.
    ///
    /// Length: vertex_count * 3
    #[wasm_bindgen]
    pub fn normals(&self) -> js_sys::Float32Array {
        js_sys::Float32Array::from(&self.normals[..])
    }

    /// Returns the triangle indices as a Uint32Array.
    ///
    /// Length: triangle_count * 3
    #[wasm_bindgen]
    pub fn indices(&self) -> js_sys::Uint32Array {
        js_sys::Uint32Array::from(&self.indices[..])
    }

    /// Returns true if the mesh is empty.
    #[wasm_bindgen]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl MeshHandle {
    /// Creates a handle from a grown mesh.
    pub fn from_mesh(mesh: &Mesh) -> Self {
        Self::from(mesh.to_mesh_buffers())
    }

    /// Corner positions, for native callers.
    pub fn position_data(&self) -> &[f32] {
        &self.positions
    }

    /// Corner normals, for native callers.
    pub fn normal_data(&self) -> &[f32] {
        &self.normals
    }

    /// Triangle indices, for native callers.
    pub fn index_data(&self) -> &[u32] {
        &self.indices
    }
}

impl From<MeshBuffers> for MeshHandle {
    fn from(buffers: MeshBuffers) -> Self {
        Self {
            positions: buffers.positions,
            normals: buffers.normals,
            indices: buffers.indices,
        }
    }
}
