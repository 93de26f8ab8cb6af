//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_intersection_epsilon_larger_than_epsilon() {
    assert!(
        INTERSECTION_EPSILON >= EPSILON,
        "INTERSECTION_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_singular_threshold_tighter_than_plane_fit() {
    // The plane fit has an exact fallback, the circumcenter solve does not
    assert!(SINGULAR_MATRIX_EPSILON < PLANE_FIT_EPSILON);
    assert!(SINGULAR_MATRIX_EPSILON > 0.0);
}

// =============================================================================
// SAMPLING TESTS
// =============================================================================

#[test]
fn test_seed_range_is_unit() {
    assert_eq!(SEED_COORDINATE_RANGE, 1.0);
}

#[test]
fn test_hemisphere_pole_is_unit_y() {
    let [x, y, z] = HEMISPHERE_POLE;
    assert_eq!((x, y, z), (0.0, 1.0, 0.0));
}

// =============================================================================
// GROWTH TESTS
// =============================================================================

#[test]
fn test_triangle_count_after_zero_steps_is_tetrahedron() {
    assert_eq!(triangle_count_after(0), SEED_TRIANGLE_COUNT);
    assert_eq!(SEED_TRIANGLE_COUNT, 4);
}

#[test]
fn test_triangle_count_grows_by_two() {
    for g in 0..20 {
        assert_eq!(triangle_count_after(g + 1) - triangle_count_after(g), 2);
    }
}

#[test]
fn test_default_growth_fits_limits() {
    assert!(triangle_count_after(DEFAULT_GROWTH_COUNT) < MAX_TRIANGLES);
}

#[test]
fn test_retry_cap_is_generous() {
    assert!(DEFAULT_MAX_GROWTH_ATTEMPTS >= 1_000);
}

// =============================================================================
// APPROX_EQUAL TESTS
// =============================================================================

#[test]
fn test_approx_equal_same_values() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(0.0, 0.0));
    assert!(approx_equal(-5.5, -5.5));
}

#[test]
fn test_approx_equal_within_epsilon() {
    let small_diff = EPSILON / 2.0;
    assert!(approx_equal(1.0, 1.0 + small_diff));
    assert!(approx_equal(1.0, 1.0 - small_diff));
}

#[test]
fn test_approx_equal_outside_epsilon() {
    let large_diff = EPSILON * 2.0;
    assert!(!approx_equal(1.0, 1.0 + large_diff));
    assert!(!approx_equal(1.0, 1.0 - large_diff));
}

// =============================================================================
// APPROX_ZERO TESTS
// =============================================================================

#[test]
fn test_approx_zero_exact_zero() {
    assert!(approx_zero(0.0));
}

#[test]
fn test_approx_zero_within_epsilon() {
    let small = EPSILON / 2.0;
    assert!(approx_zero(small));
    assert!(approx_zero(-small));
}

#[test]
fn test_approx_zero_non_zero_values() {
    assert!(!approx_zero(1.0));
    assert!(!approx_zero(-1.0));
    assert!(!approx_zero(0.1));
}
