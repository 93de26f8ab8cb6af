//! Dense 3x3 linear solves.

use glam::{DMat3, DVec3};

/// Solves `M·x = rhs` where `M` has the given rows.
///
/// Returns `None` when the system is singular relative to its scale:
/// `|det(M)| <= tolerance · |r0|·|r1|·|r2|`. The right side of that test is
/// Hadamard's bound on the determinant, so `tolerance` is dimensionless.
///
/// # Example
///
/// ```rust
/// use growth_mesh::geometry::linear::solve_rows;
/// use glam::DVec3;
///
/// let x = solve_rows([DVec3::X * 2.0, DVec3::Y, DVec3::Z], DVec3::new(4.0, 1.0, 1.0), 1e-12);
/// assert_eq!(x, Some(DVec3::new(2.0, 1.0, 1.0)));
///
/// let singular = solve_rows([DVec3::X, DVec3::X, DVec3::Z], DVec3::ONE, 1e-12);
/// assert!(singular.is_none());
/// ```
pub fn solve_rows(rows: [DVec3; 3], rhs: DVec3, tolerance: f64) -> Option<DVec3> {
    let [r0, r1, r2] = rows;
    let bound = r0.length() * r1.length() * r2.length();

    // glam builds from columns
    let matrix = DMat3::from_cols(r0, r1, r2).transpose();
    let det = matrix.determinant();
    if !det.is_finite() || det.abs() <= tolerance * bound {
        return None;
    }

    let solution = matrix.inverse() * rhs;
    solution.is_finite().then_some(solution)
}
