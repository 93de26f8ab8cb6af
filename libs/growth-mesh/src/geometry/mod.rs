//! # Geometric Primitives
//!
//! The three primitives growth is built from, plus the linear solve they
//! share:
//!
//! - [`circumcenter`]: equidistant point in a triangle's plane
//! - [`hemisphere`]: volumetric half-ball sampling
//! - [`collision`]: segment/triangle crossing test

pub mod circumcenter;
pub mod collision;
pub mod hemisphere;
pub mod linear;

pub use circumcenter::{circumcenter, circumcenter_of, PlaneEquation};
pub use collision::{is_not_parallel, segment_crosses_triangle, segment_crosses_triangle_with_tolerance};
pub use hemisphere::sample_hemisphere;
