//! # Mesh Growth
//!
//! Grows a closed mesh outward, one face at a time.
//!
//! ## Growth Step
//!
//! 1. Pick a face `F` uniformly at random
//! 2. Compute its circumcenter `C` and circumradius `r`
//! 3. Draw an offset in the half-ball of radius `r` on the side of `F`'s
//!    normal; the growth point is `g = C + offset`
//! 4. Reject the candidate if any of the edges `(g, vᵢ)` passes through a
//!    face other than `F`, and start over from 1
//! 5. Replace `F` by the fan `(g, vᵢ, vᵢ₊₁)`
//!
//! Every accepted step removes one face and adds three, so a mesh grown
//! `n` times from a tetrahedron holds `4 + 2n` faces.
//!
//! ## Example
//!
//! ```rust
//! use growth_mesh::growth::{build_random_mesh_with_config, GrowthConfig};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut rng = StdRng::seed_from_u64(11);
//! let mesh = build_random_mesh_with_config(5, &mut rng, &GrowthConfig::default()).unwrap();
//! assert_eq!(mesh.triangle_count(), 14);
//! ```

mod config;

#[cfg(test)]
mod tests;

pub use config::GrowthConfig;

use ::config::constants::{MAX_TRIANGLES, SEED_TRIANGLE_COUNT};
use glam::DVec3;
use rand::Rng;
#[cfg(feature = "parallel")]
use rand::{rngs::StdRng, SeedableRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{GrowthError, GrowthResult};
use crate::geometry::circumcenter::circumcenter;
use crate::geometry::collision::segment_crosses_triangle_with_tolerance;
use crate::geometry::hemisphere::sample_hemisphere;
use crate::mesh::{Mesh, Triangle};
use crate::tetrahedron::{random_seed_points, tetrahedron};

// =============================================================================
// GROWTH CANDIDATE
// =============================================================================

/// A proposed growth point for one face, not yet checked for collisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthCandidate {
    /// Index of the face that would be replaced
    pub face_index: usize,
    /// The face that would be replaced
    pub face: Triangle,
    /// Circumcenter of `face`
    pub circumcenter: DVec3,
    /// Offset from the circumcenter, inside the half-ball above `face`
    pub offset: DVec3,
    /// `circumcenter + offset`
    pub growth_point: DVec3,
}

impl GrowthCandidate {
    /// Proposes a candidate for a uniformly chosen face of `mesh`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::ContractViolation`] for an empty mesh and
    /// [`GrowthError::DegenerateGeometry`] if the chosen face is collinear.
    pub fn propose<R: Rng + ?Sized>(mesh: &Mesh, rng: &mut R) -> GrowthResult<Self> {
        if mesh.is_empty() {
            return Err(GrowthError::contract("cannot grow an empty mesh"));
        }
        let face_index = rng.gen_range(0..mesh.triangle_count());
        Self::for_face(mesh, face_index, rng)
    }

    /// Proposes a candidate for the face at `face_index`.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::ContractViolation`] if the index is out of
    /// range and [`GrowthError::DegenerateGeometry`] if the face is collinear.
    pub fn for_face<R: Rng + ?Sized>(
        mesh: &Mesh,
        face_index: usize,
        rng: &mut R,
    ) -> GrowthResult<Self> {
        let face = *mesh.triangles().get(face_index).ok_or_else(|| {
            GrowthError::contract(format!(
                "face index {face_index} out of range for {} faces",
                mesh.triangle_count()
            ))
        })?;

        let center = circumcenter(face.vertices())?;
        let radius = center.distance(face.vertex(0));
        let offset = sample_hemisphere(rng, radius, face.normal());

        Ok(Self {
            face_index,
            face,
            circumcenter: center,
            offset,
            growth_point: center + offset,
        })
    }

    /// The three edges joining the growth point to the face's corners.
    pub fn new_edges(&self) -> [(DVec3, DVec3); 3] {
        let [v0, v1, v2] = *self.face.vertices();
        [
            (self.growth_point, v0),
            (self.growth_point, v1),
            (self.growth_point, v2),
        ]
    }

    /// Returns true if a new edge passes through any face except the one
    /// being replaced.
    pub fn collides_with(&self, mesh: &Mesh, tolerance: f64) -> bool {
        let edges = self.new_edges();
        mesh.iter()
            .enumerate()
            .filter(|(index, _)| *index != self.face_index)
            .any(|(_, other)| {
                edges.iter().any(|&(start, end)| {
                    segment_crosses_triangle_with_tolerance(other, start, end, tolerance)
                })
            })
    }

    /// The faces that replace the chosen one.
    ///
    /// Each normal is `normalize((vᵢ - g) × (vᵢ₊₁ - g))`.
    pub fn fan(&self) -> [Triangle; 3] {
        let g = self.growth_point;
        let vertices = self.face.vertices();
        std::array::from_fn(|i| {
            let a = vertices[i];
            let b = vertices[(i + 1) % 3];
            Triangle::with_normal(g, a, b, (a - g).cross(b - g).normalize_or_zero())
        })
    }
}

// =============================================================================
// GROWTH STEP
// =============================================================================

/// Report of one accepted growth step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthStep {
    /// Zero-based step index
    pub step: usize,
    /// The accepted candidate
    pub candidate: GrowthCandidate,
    /// Candidates tried, including the accepted one
    pub attempts: usize,
}

impl GrowthStep {
    /// The face that was removed.
    pub fn removed_face(&self) -> &Triangle {
        &self.candidate.face
    }

    /// The point the new faces meet at.
    pub fn growth_point(&self) -> DVec3 {
        self.candidate.growth_point
    }
}

/// Performs one growth step on `mesh`.
///
/// The step index reported in errors and in the returned [`GrowthStep`] is
/// derived from the face count, assuming the mesh was grown from a
/// tetrahedron. Use [`GrowthEngine`] to track steps explicitly.
///
/// # Errors
///
/// - [`GrowthError::ContractViolation`] if `mesh` is empty
/// - [`GrowthError::DegenerateGeometry`] if a chosen face is collinear
/// - [`GrowthError::GrowthStalled`] if the retry cap is reached; `mesh` is
///   left unchanged
pub fn grow_step<R: Rng + ?Sized>(
    mesh: &mut Mesh,
    rng: &mut R,
    config: &GrowthConfig,
) -> GrowthResult<GrowthStep> {
    let step = mesh.triangle_count().saturating_sub(4) / 2;
    grow_step_at(mesh, rng, config, step)
}

fn grow_step_at<R: Rng + ?Sized>(
    mesh: &mut Mesh,
    rng: &mut R,
    config: &GrowthConfig,
    step: usize,
) -> GrowthResult<GrowthStep> {
    if mesh.is_empty() {
        return Err(GrowthError::contract("cannot grow an empty mesh"));
    }

    let mut attempts = 0;
    loop {
        if config
            .max_attempts_per_step
            .is_some_and(|cap| attempts >= cap)
        {
            warn!(
                "Growth step {} stalled after {} attempts on {} faces",
                step,
                attempts,
                mesh.triangle_count()
            );
            return Err(GrowthError::GrowthStalled { step, attempts });
        }
        attempts += 1;

        let candidate = GrowthCandidate::propose(mesh, rng)?;
        if candidate.collides_with(mesh, config.intersection_tolerance) {
            trace!(
                "Step {}: rejected face {} (attempt {})",
                step,
                candidate.face_index,
                attempts
            );
            continue;
        }

        mesh.remove(candidate.face_index);
        for triangle in candidate.fan() {
            mesh.push(triangle);
        }

        debug!(
            "Step {}: grew face {} at {:?} after {} attempts",
            step, candidate.face_index, candidate.growth_point, attempts
        );
        return Ok(GrowthStep {
            step,
            candidate,
            attempts,
        });
    }
}

// =============================================================================
// GROWTH ENGINE
// =============================================================================

/// Owns a mesh while it grows, tracking steps and attempts.
///
/// # Example
///
/// ```rust
/// use growth_mesh::growth::{GrowthConfig, GrowthEngine};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(2);
/// let mut engine = GrowthEngine::seeded(&mut rng, GrowthConfig::default()).unwrap();
/// let step = engine.grow(&mut rng).unwrap();
/// assert_eq!(step.step, 0);
/// assert_eq!(engine.mesh().triangle_count(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct GrowthEngine {
    mesh: Mesh,
    config: GrowthConfig,
    steps: usize,
    total_attempts: usize,
}

impl GrowthEngine {
    /// Starts from a random seed tetrahedron.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidConfig`] for a bad configuration and
    /// [`GrowthError::ContractViolation`] if the seed points are coplanar.
    pub fn seeded<R: Rng + ?Sized>(rng: &mut R, config: GrowthConfig) -> GrowthResult<Self> {
        config.validate()?;
        let points = random_seed_points(rng, config.seed_range);
        let mesh = tetrahedron(points)?;
        debug!("Seed built: {} faces", mesh.triangle_count());
        Ok(Self {
            mesh,
            config,
            steps: 0,
            total_attempts: 0,
        })
    }

    /// Starts from an existing mesh.
    ///
    /// # Errors
    ///
    /// Returns [`GrowthError::InvalidConfig`] for a bad configuration and
    /// [`GrowthError::ContractViolation`] for an empty mesh.
    pub fn from_mesh(mesh: Mesh, config: GrowthConfig) -> GrowthResult<Self> {
        config.validate()?;
        if mesh.is_empty() {
            return Err(GrowthError::contract("cannot grow an empty mesh"));
        }
        Ok(Self {
            mesh,
            config,
            steps: 0,
            total_attempts: 0,
        })
    }

    /// Performs one growth step.
    ///
    /// # Errors
    ///
    /// See [`grow_step`]. A stalled step leaves the mesh unchanged.
    pub fn grow<R: Rng + ?Sized>(&mut self, rng: &mut R) -> GrowthResult<GrowthStep> {
        let result = grow_step_at(&mut self.mesh, rng, &self.config, self.steps);
        match &result {
            Ok(step) => {
                self.steps += 1;
                self.total_attempts += step.attempts;
            }
            Err(GrowthError::GrowthStalled { attempts, .. }) => {
                self.total_attempts += attempts;
            }
            Err(_) => {}
        }
        result
    }

    /// Performs `count` growth steps, stopping at the first error.
    ///
    /// # Errors
    ///
    /// See [`grow_step`].
    pub fn grow_n<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> GrowthResult<()> {
        for _ in 0..count {
            self.grow(rng)?;
        }
        Ok(())
    }

    /// The mesh grown so far.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// The configuration in use.
    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Number of accepted steps.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Candidates tried across all steps, rejected ones included.
    pub fn total_attempts(&self) -> usize {
        self.total_attempts
    }

    /// Consumes the engine, returning the mesh.
    pub fn into_mesh(self) -> Mesh {
        self.mesh
    }
}

// =============================================================================
// BUILDERS
// =============================================================================

/// Builds a random mesh with the default configuration.
///
/// # Errors
///
/// See [`build_random_mesh_with_config`].
pub fn build_random_mesh<R: Rng + ?Sized>(growth_count: usize, rng: &mut R) -> GrowthResult<Mesh> {
    build_random_mesh_with_config(growth_count, rng, &GrowthConfig::default())
}

/// Seeds a random tetrahedron and grows it `growth_count` times.
///
/// No partial mesh is returned on failure.
///
/// # Errors
///
/// - [`GrowthError::TooManyTriangles`] if the result would exceed the limit
/// - [`GrowthError::InvalidConfig`] for a bad configuration
/// - [`GrowthError::DegenerateGeometry`] if a chosen face is collinear
/// - [`GrowthError::GrowthStalled`] if a step reaches the retry cap
pub fn build_random_mesh_with_config<R: Rng + ?Sized>(
    growth_count: usize,
    rng: &mut R,
    config: &GrowthConfig,
) -> GrowthResult<Mesh> {
    ensure_within_limit(growth_count)?;

    let mut engine = GrowthEngine::seeded(rng, config.clone())?;
    engine.grow_n(growth_count, rng)?;

    debug!(
        "Build complete: {} faces after {} steps, {} total attempts",
        engine.mesh().triangle_count(),
        engine.steps(),
        engine.total_attempts()
    );
    Ok(engine.into_mesh())
}

/// Builds one mesh per seed in parallel.
///
/// Each build owns a [`StdRng`] seeded from its entry in `seeds`, so the
/// output matches sequential builds with the same seeds.
#[cfg(feature = "parallel")]
pub fn build_random_meshes(
    seeds: &[u64],
    growth_count: usize,
    config: &GrowthConfig,
) -> Vec<GrowthResult<Mesh>> {
    seeds
        .par_iter()
        .map(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            build_random_mesh_with_config(growth_count, &mut rng, config)
        })
        .collect()
}

fn ensure_within_limit(growth_count: usize) -> GrowthResult<()> {
    let count = growth_count
        .checked_mul(2)
        .and_then(|n| n.checked_add(SEED_TRIANGLE_COUNT))
        .unwrap_or(usize::MAX);
    if count > MAX_TRIANGLES {
        return Err(GrowthError::TooManyTriangles {
            count,
            max: MAX_TRIANGLES,
        });
    }
    Ok(())
}
