//! Axisymmetric finite elements and boundary integral kernel
//!
//! The meridian plane (r,z) of a body of revolution is discretized by quadrilateral
//! elements whose integration factor includes the revolution `2πr`. Boundary edges
//! are coupled through the axisymmetric Green's function, written in terms of the
//! complete elliptic integrals of the first and second kinds.

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Defines a point (r,z) in the meridian plane
pub type Point = [f64; 2];

pub mod base;
pub mod fem;
pub mod prelude;
