//! # Configuration Constants
//!
//! Centralized constants for the growth mesh generator. Every tolerance,
//! sampling range and safety limit used by the geometry kernels lives here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison and singularity tolerances
//! - **Sampling**: Seed coordinate range and hemisphere orientation
//! - **Growth**: Default step counts and retry caps
//! - **Limits**: Maximum values for safety bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative determinant threshold below which a 3x3 system is singular.
///
/// The determinant is compared against the product of the row lengths
/// (Hadamard's bound), so the test is independent of the mesh scale. For
/// the circumcenter system this is the sine of the triangle's angle at its
/// first vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::SINGULAR_MATRIX_EPSILON;
///
/// let det: f64 = 1e-15;
/// let bound: f64 = 1.0;
/// assert!(det.abs() <= SINGULAR_MATRIX_EPSILON * bound);
/// ```
pub const SINGULAR_MATRIX_EPSILON: f64 = 1e-12;

/// Relative determinant threshold for the `X·p = 1` plane fit.
///
/// When the plane through three points passes close to the origin the fit
/// is ill-conditioned, and the plane is expressed as `n·p = n·p0` instead.
/// Both forms describe the same plane, so a generous threshold costs nothing.
pub const PLANE_FIT_EPSILON: f64 = 1e-6;

/// Tolerance of the segment/triangle collision test.
///
/// A segment whose direction makes `|cos| <= INTERSECTION_EPSILON` with the
/// plane normal is treated as parallel, and an endpoint closer than this to
/// the plane does not count as crossing it.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, INTERSECTION_EPSILON};
///
/// assert!(INTERSECTION_EPSILON >= EPSILON);
/// ```
pub const INTERSECTION_EPSILON: f64 = 1e-9;

// =============================================================================
// SAMPLING CONSTANTS
// =============================================================================

/// Half-width of the cube seed points are drawn from.
///
/// Each coordinate of the four seed points is uniform in
/// `[-SEED_COORDINATE_RANGE, SEED_COORDINATE_RANGE)`.
pub const SEED_COORDINATE_RANGE: f64 = 1.0;

/// Pole of the local hemisphere frame before it is rotated onto a face normal.
pub const HEMISPHERE_POLE: [f64; 3] = [0.0, 1.0, 0.0];

// =============================================================================
// GROWTH CONSTANTS
// =============================================================================

/// Default number of growth steps for a generated mesh.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_GROWTH_COUNT, triangle_count_after};
///
/// assert_eq!(triangle_count_after(DEFAULT_GROWTH_COUNT), 4 + 2 * DEFAULT_GROWTH_COUNT);
/// ```
pub const DEFAULT_GROWTH_COUNT: usize = 50;

/// Default number of candidates tried for a single growth step before the
/// step is reported as stalled.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MAX_GROWTH_ATTEMPTS;
///
/// let attempts = 12;
/// assert!(attempts < DEFAULT_MAX_GROWTH_ATTEMPTS);
/// ```
pub const DEFAULT_MAX_GROWTH_ATTEMPTS: usize = 100_000;

/// Number of triangles in the seed tetrahedron.
pub const SEED_TRIANGLE_COUNT: usize = 4;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of triangles in a single generated mesh.
///
/// Safety limit to prevent memory exhaustion from extreme growth counts.
/// Collision checks are quadratic in the triangle count, so this bound is
/// far beyond anything that finishes in reasonable time anyway.
pub const MAX_TRIANGLES: usize = 10_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of triangles after `growth_count` successful growth steps.
///
/// Every step removes one face and adds three, so the count grows by two.
///
/// # Example
///
/// ```rust
/// use config::constants::triangle_count_after;
///
/// assert_eq!(triangle_count_after(0), 4);
/// assert_eq!(triangle_count_after(3), 10);
/// ```
#[inline]
pub const fn triangle_count_after(growth_count: usize) -> usize {
    SEED_TRIANGLE_COUNT + 2 * growth_count
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
