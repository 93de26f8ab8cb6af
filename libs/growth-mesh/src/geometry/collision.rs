//! # Segment / Triangle Collision
//!
//! Decides whether a line segment passes through a triangle.
//!
//! ## Algorithm
//!
//! 1. A segment parallel to the triangle's plane never crosses it
//! 2. The signed distances of the endpoints to the plane must have opposite
//!    signs; an endpoint lying on the plane does not count as crossing
//! 3. The crossing point is interpolated from those distances
//! 4. The crossing point must be on the inner side of all three edges,
//!    measured against the triangle's normal
//!
//! Points on an edge count as inside. Endpoints on the plane do not cross,
//! which keeps a new edge that ends at a neighbor's vertex from colliding
//! with that neighbor.

use config::constants::INTERSECTION_EPSILON;
use glam::DVec3;

use crate::error::{GrowthError, GrowthResult};
use crate::mesh::{winding_normal, Triangle};

/// Returns true if the segment `start → end` passes through `triangle`.
///
/// Uses [`INTERSECTION_EPSILON`] as tolerance.
///
/// # Example
///
/// ```rust
/// use growth_mesh::{geometry::collision::segment_crosses_triangle, Triangle};
/// use glam::DVec3;
///
/// let tri = Triangle::with_normal(
///     DVec3::new(1.0, 0.0, -1.0),
///     DVec3::new(-1.0, 0.0, -1.0),
///     DVec3::new(-1.0, 0.0, 1.0),
///     DVec3::Y,
/// );
/// assert!(segment_crosses_triangle(&tri, DVec3::new(0.0, 2.0, 0.0), DVec3::new(0.0, -2.0, 0.0)));
/// assert!(!segment_crosses_triangle(&tri, DVec3::new(-1.0, 1.0, -1.0), DVec3::new(1.0, 1.0, -1.0)));
/// ```
pub fn segment_crosses_triangle(triangle: &Triangle, start: DVec3, end: DVec3) -> bool {
    segment_crosses_triangle_with_tolerance(triangle, start, end, INTERSECTION_EPSILON)
}

/// [`segment_crosses_triangle`] with an explicit tolerance.
pub fn segment_crosses_triangle_with_tolerance(
    triangle: &Triangle,
    start: DVec3,
    end: DVec3,
    tolerance: f64,
) -> bool {
    segment_plane_crossing(triangle, start, end, tolerance)
        .is_some_and(|point| contains_point(triangle, point, tolerance))
}

/// Returns the point where `start → end` crosses the triangle's plane.
///
/// `None` if the segment is parallel to the plane, stays on one side of it,
/// or has an endpoint on it (within `tolerance`).
pub fn segment_plane_crossing(
    triangle: &Triangle,
    start: DVec3,
    end: DVec3,
    tolerance: f64,
) -> Option<DVec3> {
    let normal = triangle.normal().try_normalize()?;
    let direction = end - start;
    if normal.dot(direction).abs() <= tolerance * direction.length() {
        return None;
    }

    let origin = triangle.vertex(0);
    let d0 = normal.dot(start - origin);
    let d1 = normal.dot(end - origin);
    if d0.abs() <= tolerance || d1.abs() <= tolerance || d0 * d1 >= 0.0 {
        return None;
    }

    let a = d0.abs() / (d0.abs() + d1.abs());
    Some(origin + (start - origin) * (1.0 - a) + (end - origin) * a)
}

/// Returns true if `point`, assumed to lie in the triangle's plane, is
/// inside the triangle or on its boundary.
pub fn contains_point(triangle: &Triangle, point: DVec3, tolerance: f64) -> bool {
    let normal = triangle.normal();
    let vertices = triangle.vertices();
    (0..3).all(|i| {
        let a = vertices[i];
        let b = vertices[(i + 1) % 3];
        let side = (b - a).cross(point - b).normalize_or_zero();
        normal.dot(side) >= -tolerance
    })
}

/// Returns true if the line through `line_points` is not parallel to the
/// plane through `plane_points`.
///
/// The plane normal is taken from the winding of the three plane points.
///
/// # Errors
///
/// Returns [`GrowthError::ContractViolation`] unless exactly three plane
/// points and two line points are given.
///
/// # Example
///
/// ```rust
/// use growth_mesh::geometry::collision::is_not_parallel;
/// use glam::DVec3;
///
/// let plane = [DVec3::new(1.0, 0.0, -1.0), DVec3::new(-1.0, 0.0, -1.0), DVec3::new(-1.0, 0.0, 1.0)];
/// let vertical = [DVec3::new(-0.5, 1.0, -0.5), DVec3::new(-0.5, -1.0, -0.5)];
/// assert!(is_not_parallel(&plane, &vertical).unwrap());
/// ```
pub fn is_not_parallel(plane_points: &[DVec3], line_points: &[DVec3]) -> GrowthResult<bool> {
    let [p0, p1, p2]: [DVec3; 3] = plane_points.try_into().map_err(|_| {
        GrowthError::contract(format!(
            "plane needs exactly 3 points, got {}",
            plane_points.len()
        ))
    })?;
    let [start, end]: [DVec3; 2] = line_points.try_into().map_err(|_| {
        GrowthError::contract(format!(
            "line needs exactly 2 points, got {}",
            line_points.len()
        ))
    })?;

    let normal = winding_normal(p0, p1, p2);
    let direction = end - start;
    Ok(normal.dot(direction).abs() > INTERSECTION_EPSILON * normal.length() * direction.length())
}
