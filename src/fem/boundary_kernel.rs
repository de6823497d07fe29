use super::{BoundaryEdge, EdgePoint};
use crate::base::Error;
use crate::Point;
use russell_lab::{Matrix, Vector};

/// Holds the Green's function and its scaled gradient at a (source, field) point pair
///
/// The gradient is `∇G = r'·∇'(G/r')`, taken with respect to the field point coordinates
/// (radial, axial). Thus, the axial entry equals ∂G/∂z' but the radial entry equals
/// `∂G/∂r' - G/r'`, not ∂G/∂r'.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GreenState {
    /// Value of the Green's function G
    pub g: f64,

    /// Scaled gradient ∇G = (∂G/∂r' - G/r', ∂G/∂z')
    pub grad_g: [f64; 2],
}

impl GreenState {
    /// Returns the normal derivative n·∇G
    #[inline]
    pub fn normal_derivative(&self, normal: &Point) -> f64 {
        normal[0] * self.grad_g[0] + normal[1] * self.grad_g[1]
    }
}

/// Defines the operations of a boundary kernel coupling a source and a field edge
///
/// The driver calls [BoundaryKernel::calculate_green] once per (source, field) point
/// pair and then passes the returned state to the assembly operations for every
/// combination of shape function indices.
pub trait BoundaryKernel {
    /// Calculates the Green's function and its gradient
    ///
    /// * `x` -- the source point (r,z)
    /// * `xp` -- the field point (r',z')
    ///
    /// Returns [Error::SingularPoint] if the pair cannot be evaluated; the caller
    /// decides whether to skip the pair or to handle it as a self-term.
    fn calculate_green(&self, x: &Point, xp: &Point) -> Result<GreenState, Error>;

    /// Accumulates the residual contribution of a point pair into `res`
    ///
    /// `res` is **not** cleared.
    fn post_calculate_f(&self, green: &GreenState, source: &EdgePoint, field: &EdgePoint, factor: f64, res: &mut f64);

    /// Writes the linearized stiffness contribution of the shape functions (i, j) into the 2×2 block `kk`
    ///
    /// * `i` -- shape function index of the source edge
    /// * `j` -- shape function index of the field edge
    fn sub_calculate_k_linear(
        &self,
        kk: &mut Matrix,
        green: &GreenState,
        source: &BoundaryEdge,
        field: &BoundaryEdge,
        i: usize,
        j: usize,
    );

    /// Accumulates the residual contribution of the source shape function i into the 2-vector `rr`
    fn sub_calculate_r(
        &self,
        rr: &mut Vector,
        green: &GreenState,
        source: &BoundaryEdge,
        field: &BoundaryEdge,
        i: usize,
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
