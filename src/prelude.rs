//! Makes available common structures needed to integrate axisymmetric problems
//!
//! You may write `use axisym::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{Config, Error, Idealization};
pub use crate::fem::{AxisymmetricElement, AxisymmetricKernel, BoundaryEdge, BoundaryKernel, BoundaryPairing};
pub use crate::fem::{ElementQuadrature, GreenState, QuadElement};
pub use crate::fem::{calc_mass_matrix, calc_volume, integ_scalar};
pub use crate::{Point, StrError};
