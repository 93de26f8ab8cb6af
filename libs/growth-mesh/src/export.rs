//! Mesh export for rendering and interchange.
//!
//! Faces are emitted as independent triangles: every face owns its three
//! corners, and every corner carries its face's normal.

use std::io::{self, Write};

use glam::DVec3;

use crate::mesh::Mesh;

/// Flat buffers suitable for GPU rendering.
///
/// # Examples
/// ```
/// use growth_mesh::tetrahedron::tetrahedron;
/// use glam::DVec3;
///
/// let mesh = tetrahedron([DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]).unwrap();
/// let buffers = mesh.to_mesh_buffers();
///
/// assert_eq!(buffers.positions.len(), 4 * 3 * 3); // 4 faces * 3 corners * xyz
/// assert_eq!(buffers.indices.len(), 4 * 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshBuffers {
    /// Corner positions as `[x, y, z, x, y, z, ...]`.
    pub positions: Vec<f32>,

    /// Corner normals, parallel to `positions`.
    pub normals: Vec<f32>,

    /// Triangle indices as `[i0, i1, i2, ...]`.
    pub indices: Vec<u32>,
}

impl MeshBuffers {
    /// Creates empty buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of corners.
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }

    /// Returns the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

impl Mesh {
    /// Exports the mesh to GPU-friendly buffers.
    ///
    /// Converts `f64` to `f32`.
    pub fn to_mesh_buffers(&self) -> MeshBuffers {
        let mut buffers = MeshBuffers {
            positions: Vec::with_capacity(self.vertex_count() * 3),
            normals: Vec::with_capacity(self.vertex_count() * 3),
            indices: self.indices(),
        };

        for tri in self {
            let n = tri.normal().as_vec3();
            for v in tri.vertices() {
                buffers.positions.extend_from_slice(&v.as_vec3().to_array());
                buffers.normals.extend_from_slice(&n.to_array());
            }
        }

        buffers
    }

    /// Writes the mesh as Wavefront OBJ.
    ///
    /// Each corner becomes one `v` line and one `vn` line; faces reference
    /// both with 1-based `f a//a b//b c//c` triples.
    ///
    /// # Errors
    ///
    /// Propagates any error from `out`.
    ///
    /// # Examples
    /// ```
    /// use growth_mesh::tetrahedron::tetrahedron;
    /// use glam::DVec3;
    ///
    /// let mesh = tetrahedron([DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]).unwrap();
    /// let mut out = Vec::new();
    /// mesh.write_obj(&mut out).unwrap();
    ///
    /// let text = String::from_utf8(out).unwrap();
    /// assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 4);
    /// ```
    pub fn write_obj<W: Write>(&self, mut out: W) -> io::Result<()> {
        writeln!(out, "# growth mesh: {} triangles", self.triangle_count())?;

        for tri in self {
            for v in tri.vertices() {
                let v = without_negative_zero(*v);
                writeln!(out, "v {:?} {:?} {:?}", v.x, v.y, v.z)?;
            }
        }

        for tri in self {
            let n = without_negative_zero(tri.normal());
            for _ in 0..3 {
                writeln!(out, "vn {:?} {:?} {:?}", n.x, n.y, n.z)?;
            }
        }

        // OBJ is 1-based
        for face in 0..self.triangle_count() {
            let base = face * 3 + 1;
            writeln!(
                out,
                "f {a}//{a} {b}//{b} {c}//{c}",
                a = base,
                b = base + 1,
                c = base + 2
            )?;
        }

        out.flush()
    }
}

/// Adding `+0.0` turns `-0.0` into `0.0` and leaves every other value as is.
fn without_negative_zero(v: DVec3) -> DVec3 {
    v + DVec3::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::Triangle;

    fn two_faces() -> Mesh {
        Mesh::from_triangles(vec![
            Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y),
            Triangle::new(DVec3::ZERO, DVec3::Z, DVec3::X),
        ])
    }

    #[test]
    fn test_mesh_buffers_creation() {
        let buffers = MeshBuffers::new();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
    }

    #[test]
    fn test_buffers_are_parallel() {
        let buffers = two_faces().to_mesh_buffers();
        assert_eq!(buffers.vertex_count(), 6);
        assert_eq!(buffers.triangle_count(), 2);
        assert_eq!(buffers.normals.len(), buffers.positions.len());
        assert_eq!(buffers.indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_buffers_repeat_face_normal_per_corner() {
        let buffers = two_faces().to_mesh_buffers();
        assert_eq!(&buffers.normals[0..9], &[0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
        assert_eq!(&buffers.normals[9..12], &[0.0, 1.0, 0.0]);
        assert_eq!(&buffers.positions[3..6], &[1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_indices_in_range() {
        let buffers = two_faces().to_mesh_buffers();
        let vertex_count = buffers.vertex_count() as u32;
        for &idx in &buffers.indices {
            assert!(idx < vertex_count, "Index {} out of range", idx);
        }
    }

    #[test]
    fn test_obj_output() {
        let mut out = Vec::new();
        two_faces().write_obj(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 6);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 6);
        assert!(text.contains("v 1.0 0.0 0.0\n"));
        assert!(text.contains("vn 0.0 1.0 0.0\n"));
        assert!(text.contains("f 1//1 2//2 3//3\n"));
        assert!(text.contains("f 4//4 5//5 6//6\n"));
    }

    #[test]
    fn test_obj_output_has_no_negative_zero() {
        // Z x (X - Z) has a -0.0 x component
        let tri = Triangle::new(DVec3::ZERO, DVec3::Z, DVec3::X);
        assert!(tri.normal().x.is_sign_negative());

        let mut out = Vec::new();
        Mesh::from_triangles(vec![tri]).write_obj(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!text.contains("-0.0"));
        for line in text.lines().filter(|l| l.starts_with("vn ")) {
            let n: Vec<f64> = line[3..]
                .split_whitespace()
                .map(|x| x.parse().unwrap())
                .collect();
            assert_eq!(n, vec![0.0, 1.0, 0.0]);
        }
    }

    #[test]
    fn test_empty_mesh_exports_nothing() {
        let mesh = Mesh::new();
        assert_eq!(mesh.to_mesh_buffers(), MeshBuffers::new());

        let mut out = Vec::new();
        mesh.write_obj(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
    }
}
