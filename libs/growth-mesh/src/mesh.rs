//! # Mesh Data Structure
//!
//! Triangle soup accumulated by the growth process. Triangles are stored
//! independently: two triangles sharing an edge each keep their own copy
//! of its endpoints.

use config::constants::{approx_equal, approx_zero};
use glam::DVec3;

/// A triangle with an outward normal.
///
/// The winding `v0 → v1 → v2` (right-hand rule) and the stored normal
/// always agree; [`Triangle::new`] derives the normal from the winding and
/// stores it normalized.
///
/// # Example
///
/// ```rust
/// use growth_mesh::Triangle;
/// use glam::DVec3;
///
/// let tri = Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y);
/// assert_eq!(tri.normal(), DVec3::Z);
/// assert!(tri.is_winding_consistent());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    vertices: [DVec3; 3],
    normal: DVec3,
}

impl Triangle {
    /// Creates a triangle whose normal follows its winding.
    pub fn new(v0: DVec3, v1: DVec3, v2: DVec3) -> Self {
        let normal = winding_normal(v0, v1, v2).normalize_or_zero();
        Self {
            vertices: [v0, v1, v2],
            normal,
        }
    }

    /// Creates a triangle with an explicitly supplied normal.
    ///
    /// The caller is responsible for the normal matching the winding.
    pub fn with_normal(v0: DVec3, v1: DVec3, v2: DVec3, normal: DVec3) -> Self {
        Self {
            vertices: [v0, v1, v2],
            normal,
        }
    }

    /// Returns the three corners in winding order.
    #[inline]
    pub fn vertices(&self) -> &[DVec3; 3] {
        &self.vertices
    }

    /// Returns corner `index` (0, 1 or 2).
    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        self.vertices[index]
    }

    /// Returns the stored normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns `cross(v1 - v0, v2 - v1)`, the unnormalized winding normal.
    #[inline]
    pub fn winding_normal(&self) -> DVec3 {
        let [v0, v1, v2] = self.vertices;
        winding_normal(v0, v1, v2)
    }

    /// Returns true if the stored normal points the way the winding does.
    pub fn is_winding_consistent(&self) -> bool {
        self.normal.dot(self.winding_normal()) > 0.0
    }

    /// Returns the triangle with reversed winding and negated normal.
    pub fn flipped(&self) -> Self {
        let [v0, v1, v2] = self.vertices;
        Self::with_normal(v0, v2, v1, -self.normal)
    }

    /// Returns the edges `(v_i, v_{i+1})` in winding order.
    pub fn edges(&self) -> [(DVec3, DVec3); 3] {
        let [v0, v1, v2] = self.vertices;
        [(v0, v1), (v1, v2), (v2, v0)]
    }

    /// Returns the triangle's area.
    pub fn area(&self) -> f64 {
        self.winding_normal().length() * 0.5
    }

    /// Returns true if the corners are collinear or coincide.
    pub fn is_degenerate(&self) -> bool {
        approx_zero(self.area())
    }

    /// Returns true if the stored normal has unit length.
    pub fn has_unit_normal(&self) -> bool {
        approx_equal(self.normal.length(), 1.0)
    }
}

/// `cross(v1 - v0, v2 - v1)`
#[inline]
pub(crate) fn winding_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v1)
}

/// A triangle soup mesh.
///
/// After `g` successful growth steps a mesh grown from a tetrahedron holds
/// exactly `4 + 2g` triangles.
///
/// # Example
///
/// ```rust
/// use growth_mesh::{Mesh, Triangle};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.push(Triangle::new(DVec3::ZERO, DVec3::X, DVec3::Y));
/// assert_eq!(mesh.triangle_count(), 1);
/// assert_eq!(mesh.positions().len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    triangles: Vec<Triangle>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self {
            triangles: Vec::new(),
        }
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(triangle_count: usize) -> Self {
        Self {
            triangles: Vec::with_capacity(triangle_count),
        }
    }

    /// Creates a mesh from a list of triangles.
    pub fn from_triangles(triangles: Vec<Triangle>) -> Self {
        Self { triangles }
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns the number of (non-shared) corners, three per triangle.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.triangles.len() * 3
    }

    /// Returns true if the mesh has no triangles.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    /// Returns the triangle at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.triangle_count()`. Use
    /// `triangles().get(index)` for a checked lookup.
    #[inline]
    pub fn triangle(&self, index: usize) -> &Triangle {
        &self.triangles[index]
    }

    /// Appends a triangle.
    pub fn push(&mut self, triangle: Triangle) {
        self.triangles.push(triangle);
    }

    /// Removes the triangle at `index`, keeping the order of the rest.
    pub(crate) fn remove(&mut self, index: usize) -> Triangle {
        self.triangles.remove(index)
    }

    /// Returns an iterator over the triangles.
    pub fn iter(&self) -> std::slice::Iter<'_, Triangle> {
        self.triangles.iter()
    }

    /// Returns every corner position, three per triangle, no deduplication.
    pub fn positions(&self) -> Vec<DVec3> {
        self.triangles
            .iter()
            .flat_map(|tri| tri.vertices().iter().copied())
            .collect()
    }

    /// Returns the face normal once per corner, parallel to [`Mesh::positions`].
    pub fn normals(&self) -> Vec<DVec3> {
        self.triangles
            .iter()
            .flat_map(|tri| [tri.normal(); 3])
            .collect()
    }

    /// Returns the implicit index list `0..3n`.
    pub fn indices(&self) -> Vec<u32> {
        (0..self.vertex_count() as u32).collect()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let mut corners = self.triangles.iter().flat_map(|tri| tri.vertices().iter());
        let Some(&first) = corners.next() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };

        corners.fold((first, first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Returns true if every triangle's normal agrees with its winding.
    pub fn validate_winding(&self) -> bool {
        self.triangles.iter().all(Triangle::is_winding_consistent)
    }

    /// Returns true if every stored normal has unit length.
    pub fn validate_normals(&self) -> bool {
        self.triangles.iter().all(Triangle::has_unit_normal)
    }
}

impl<'a> IntoIterator for &'a Mesh {
    type Item = &'a Triangle;
    type IntoIter = std::slice::Iter<'a, Triangle>;

    fn into_iter(self) -> Self::IntoIter {
        self.triangles.iter()
    }
}
