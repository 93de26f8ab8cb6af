//! # Hemisphere Sampling
//!
//! Random points in a half-ball, uniform by volume.
//!
//! The sample is drawn in a local frame whose pole is `+Y`:
//! `cosθ ~ U(-1, 1)`, `φ ~ U(0, π)` and `ρ = r·∛U(0, 1)`. Keeping the
//! azimuth in `[0, π]` keeps `y = ρ·sinθ·sinφ` non-negative, and the cube
//! root makes the radial density uniform by volume rather than by shell.
//! The local point is then carried onto the requested direction by the
//! shortest-arc rotation from the pole.

use std::f64::consts::PI;

use config::constants::HEMISPHERE_POLE;
use glam::{DQuat, DVec3};
use rand::Rng;

/// Draws a point in the half-ball of `radius` around the origin, on the side
/// `direction` points to.
///
/// A zero `direction` leaves the sample in the local `+Y` hemisphere.
///
/// # Example
///
/// ```rust
/// use growth_mesh::geometry::hemisphere::sample_hemisphere;
/// use glam::DVec3;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let p = sample_hemisphere(&mut rng, 2.0, DVec3::Z);
/// assert!(p.length() <= 2.0);
/// assert!(p.z >= -1e-12);
/// ```
pub fn sample_hemisphere<R: Rng + ?Sized>(rng: &mut R, radius: f64, direction: DVec3) -> DVec3 {
    let local = sample_local(rng, radius);
    hemisphere_rotation(direction) * local
}

/// Draws a point in the `+Y` half-ball of `radius`.
fn sample_local<R: Rng + ?Sized>(rng: &mut R, radius: f64) -> DVec3 {
    let cos_theta: f64 = rng.gen_range(-1.0..=1.0);
    let sin_theta = (1.0 - cos_theta * cos_theta).max(0.0).sqrt();
    let phi: f64 = rng.gen_range(0.0..=PI);
    let rho = radius * rng.gen_range(0.0..=1.0_f64).cbrt();

    DVec3::new(
        rho * sin_theta * phi.cos(),
        rho * sin_theta * phi.sin(),
        rho * cos_theta,
    )
}

/// Shortest-arc rotation taking the hemisphere pole onto `direction`.
pub fn hemisphere_rotation(direction: DVec3) -> DQuat {
    let pole = DVec3::from_array(HEMISPHERE_POLE);
    direction
        .try_normalize()
        .map_or(DQuat::IDENTITY, |to| DQuat::from_rotation_arc(pole, to))
}
