//! Implements the axisymmetric elements and the boundary integral kernel

mod boundary_edge;
mod boundary_kernel;
mod boundary_pairing;
mod element_axisym;
mod element_quad;
mod kernel_axisym;
mod volume_integrals;
pub use crate::fem::boundary_edge::*;
pub use crate::fem::boundary_kernel::*;
pub use crate::fem::boundary_pairing::*;
pub use crate::fem::element_axisym::*;
pub use crate::fem::element_quad::*;
pub use crate::fem::kernel_axisym::*;
pub use crate::fem::volume_integrals::*;
