//! # Circumcenter
//!
//! The point in a triangle's plane that is equidistant from its three
//! corners, found with two 3x3 linear solves:
//!
//! 1. Fit the plane as `X·p = 1` from `pᵢ·X = 1` for the three points.
//! 2. Solve `[X; e1; e2]·C = [1, e1·m1, e2·m2]`, where `e1 = p1 - p0`,
//!    `e2 = p2 - p0` and `m1`, `m2` are the edge midpoints. The last two rows
//!    are the perpendicular-bisector planes of the two edges.
//!
//! A plane through the origin has no `X·p = 1` form. In that case (and when
//! the fit is ill-conditioned) the plane is written `n·p = n·p0` with
//! `n = e1 × e2`, which describes the same plane.

use config::constants::{PLANE_FIT_EPSILON, SINGULAR_MATRIX_EPSILON};
use glam::DVec3;

use super::linear::solve_rows;
use crate::error::{GrowthError, GrowthResult};

/// Plane `coefficients · p = constant`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneEquation {
    /// Plane coefficients, parallel to the plane normal
    pub coefficients: DVec3,
    /// Right-hand side of the plane equation
    pub constant: f64,
}

impl PlaneEquation {
    /// Fits the plane through three points.
    ///
    /// Prefers the `X·p = 1` form. Falls back to `n·p = n·p0` when the points'
    /// plane passes through (or near) the origin. Collinear points yield a
    /// zero coefficient vector, which the circumcenter solve rejects.
    pub fn through(points: &[DVec3; 3]) -> Self {
        let [p0, p1, p2] = *points;
        if let Some(coefficients) = solve_rows(*points, DVec3::ONE, PLANE_FIT_EPSILON) {
            return Self {
                coefficients,
                constant: 1.0,
            };
        }

        let normal = (p1 - p0).cross(p2 - p0);
        Self {
            coefficients: normal,
            constant: normal.dot(p0),
        }
    }

    /// Evaluates `coefficients · p - constant`.
    pub fn residual(&self, point: DVec3) -> f64 {
        self.coefficients.dot(point) - self.constant
    }
}

/// Computes the circumcenter of three points.
///
/// # Errors
///
/// Returns [`GrowthError::DegenerateGeometry`] when the points are collinear
/// (or coincide), making the bisector system singular.
///
/// # Example
///
/// ```rust
/// use growth_mesh::geometry::circumcenter::circumcenter;
/// use glam::DVec3;
///
/// let c = circumcenter(&[
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(2.0, 0.0, 0.0),
///     DVec3::new(0.0, 2.0, 0.0),
/// ]).unwrap();
/// assert!((c - DVec3::new(1.0, 1.0, 0.0)).length() < 1e-12);
/// ```
pub fn circumcenter(points: &[DVec3; 3]) -> GrowthResult<DVec3> {
    let [p0, p1, p2] = *points;
    let plane = PlaneEquation::through(points);

    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let m1 = (p0 + p1) * 0.5;
    let m2 = (p0 + p2) * 0.5;

    solve_rows(
        [plane.coefficients, e1, e2],
        DVec3::new(plane.constant, e1.dot(m1), e2.dot(m2)),
        SINGULAR_MATRIX_EPSILON,
    )
    .ok_or_else(|| {
        GrowthError::degenerate(format!(
            "circumcenter system is singular for {p0:?}, {p1:?}, {p2:?}"
        ))
    })
}

/// Computes the circumcenter of a slice that must hold exactly three points.
///
/// # Errors
///
/// Returns [`GrowthError::ContractViolation`] for any other length, and
/// [`GrowthError::DegenerateGeometry`] as [`circumcenter`] does.
pub fn circumcenter_of(points: &[DVec3]) -> GrowthResult<DVec3> {
    let points: &[DVec3; 3] = points.try_into().map_err(|_| {
        GrowthError::contract(format!(
            "circumcenter needs exactly 3 points, got {}",
            points.len()
        ))
    })?;
    circumcenter(points)
}
