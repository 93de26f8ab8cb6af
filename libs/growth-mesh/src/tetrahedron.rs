//! # Seed Tetrahedron
//!
//! Builds the four outward-facing triangles every grown mesh starts from.
//!
//! The first face `(p0, p1, p2)` is oriented so its normal points away from
//! `p3`; the other three faces fan from `p3` over that face's edges walked
//! backwards, which gives them the same outward orientation.

use config::constants::SINGULAR_MATRIX_EPSILON;
use glam::DVec3;
use rand::Rng;
use tracing::debug;

use crate::error::{GrowthError, GrowthResult};
use crate::mesh::{winding_normal, Mesh, Triangle};

/// Builds an outward-oriented tetrahedron from four points.
///
/// # Errors
///
/// Returns [`GrowthError::ContractViolation`] if the points are coplanar.
///
/// # Example
///
/// ```rust
/// use growth_mesh::tetrahedron::tetrahedron;
/// use glam::DVec3;
///
/// let mesh = tetrahedron([DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]).unwrap();
/// assert_eq!(mesh.triangle_count(), 4);
/// assert!(mesh.validate_winding());
/// ```
pub fn tetrahedron(points: [DVec3; 4]) -> GrowthResult<Mesh> {
    let [p0, p1, p2, p3] = points;
    ensure_not_coplanar(&points)?;

    let normal = winding_normal(p0, p1, p2).normalize();
    let toward_apex = (p3 - p0).normalize();

    // A base normal leaning toward the apex faces inward
    let base = if normal.dot(toward_apex) >= 0.0 {
        Triangle::with_normal(p0, p2, p1, -normal)
    } else {
        Triangle::with_normal(p0, p1, p2, normal)
    };

    let mut mesh = Mesh::with_capacity(4);
    mesh.push(base);

    let corners = base.vertices();
    for i in 0..3 {
        let a = corners[i];
        let b = corners[(i + 2) % 3];
        mesh.push(Triangle::new(p3, a, b));
    }

    debug!(
        "Seeded tetrahedron: base normal {:?}, apex {:?}",
        base.normal(),
        p3
    );
    Ok(mesh)
}

/// Builds a tetrahedron from a slice that must hold exactly four points.
///
/// # Errors
///
/// Returns [`GrowthError::ContractViolation`] for any other length or for
/// coplanar points.
pub fn tetrahedron_from_slice(points: &[DVec3]) -> GrowthResult<Mesh> {
    let points: [DVec3; 4] = points.try_into().map_err(|_| {
        GrowthError::contract(format!(
            "tetrahedron needs exactly 4 points, got {}",
            points.len()
        ))
    })?;
    tetrahedron(points)
}

/// Draws four seed points with every coordinate uniform in `[-range, range)`.
pub fn random_seed_points<R: Rng + ?Sized>(rng: &mut R, range: f64) -> [DVec3; 4] {
    std::array::from_fn(|_| {
        DVec3::new(
            rng.gen_range(-range..range),
            rng.gen_range(-range..range),
            rng.gen_range(-range..range),
        )
    })
}

/// Rejects four points whose spanned volume is negligible relative to
/// their edge lengths.
fn ensure_not_coplanar(points: &[DVec3; 4]) -> GrowthResult<()> {
    let [p0, p1, p2, p3] = *points;
    let e1 = p1 - p0;
    let e2 = p2 - p0;
    let e3 = p3 - p0;

    let volume = e1.cross(e2).dot(e3);
    let bound = e1.length() * e2.length() * e3.length();
    if !volume.is_finite() || volume.abs() <= SINGULAR_MATRIX_EPSILON * bound {
        return Err(GrowthError::contract(format!(
            "tetrahedron points are coplanar: {p0:?}, {p1:?}, {p2:?}, {p3:?}"
        )));
    }
    Ok(())
}
