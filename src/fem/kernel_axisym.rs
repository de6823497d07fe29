use super::{BoundaryEdge, BoundaryKernel, EdgePoint, GreenState};
use crate::base::{complete_elliptic_ke, Config, Error};
use crate::Point;
use russell_lab::math::PI;
use russell_lab::{Matrix, Vector};

/// Implements the boundary kernel based on the axisymmetric Green's function
///
/// With source point x = (r,z) and field point x' = (r',z'), the parameter of the
/// complete elliptic integrals K(m) and E(m) is
///
/// ```text
///          4 r r'
/// m = ───────────────────
///     (z - z')² + (r + r')²
/// ```
///
/// and the Green's function is
///
/// ```text
///          r' ((2 - m) K(m) - 2 E(m))
/// G = ─────────────────────────────────────
///      m π √((z - z')² + (r + r')²)
/// ```
///
/// The pair is singular if x ≈ x' (m = 1) or if the field point lies on the axis (r' = 0).
#[derive(Clone, Copy, Debug)]
pub struct AxisymmetricKernel {
    /// Relative tolerance to detect coincident points
    rtol: f64,

    /// Absolute tolerance to detect coincident points
    atol: f64,

    /// Tolerance to detect field points on the axis
    tol_axis: f64,
}

impl AxisymmetricKernel {
    /// Allocates a new instance
    pub fn new(config: &Config) -> Self {
        AxisymmetricKernel {
            rtol: config.tol_coincident_rtol,
            atol: config.tol_coincident_atol,
            tol_axis: config.tol_axis,
        }
    }

    /// Tells whether the points coincide, component-wise, i.e., `|x - x'| ≤ atol + rtol |x'|`
    fn coincident(&self, x: &Point, xp: &Point) -> bool {
        (0..2).all(|k| f64::abs(x[k] - xp[k]) <= self.atol + self.rtol * f64::abs(xp[k]))
    }
}

impl BoundaryKernel for AxisymmetricKernel {
    fn calculate_green(&self, x: &Point, xp: &Point) -> Result<GreenState, Error> {
        if self.coincident(x, xp) || f64::abs(xp[0]) < self.tol_axis {
            return Err(Error::SingularPoint);
        }
        let (r, z) = (x[0], x[1]);
        let (rp, zp) = (xp[0], xp[1]);
        let dz = z - zp;

        // elliptic integrals
        let mut mt = dz * dz + (r + rp) * (r + rp);
        let m = 4.0 * r * rp / mt;
        let (kint, eint) = complete_elliptic_ke(m)?;
        mt = f64::sqrt(mt) * PI;

        // Green's function
        let g = rp * ((2.0 - m) * kint - 2.0 * eint) / (m * mt);

        // gradient
        let den = f64::powi(f64::sqrt(r * rp), 3);
        let one_m = 1.0 - m;
        let mut g0 = r * (2.0 * m - 4.0) * kint;
        g0 += r * (m * m - 8.0 * m + 8.0) / (2.0 * one_m) * eint;
        g0 += rp * m * kint;
        g0 -= rp * m * (2.0 - m) / (2.0 * one_m) * eint;
        g0 /= f64::sqrt(m) * den;
        g0 *= rp / (4.0 * PI);
        let mut g1 = (2.0 - m) / one_m * eint - 2.0 * kint;
        g1 *= f64::sqrt(m) * dz / (2.0 * den);
        g1 *= rp / (4.0 * PI);

        // m rounded to 1 or a source point on the axis (m = 0) lead to inf or NaN
        if !(g.is_finite() && g0.is_finite() && g1.is_finite()) {
            return Err(Error::NumericDomain(m));
        }
        Ok(GreenState { g, grad_g: [g0, g1] })
    }

    fn post_calculate_f(&self, green: &GreenState, source: &EdgePoint, field: &EdgePoint, factor: f64, res: &mut f64) {
        let r = source.x[0];
        let normal = &field.normal;
        let mut k1 = field.u[0] * green.normal_derivative(normal) * factor;
        k1 += field.u[0] * green.g * normal[0] * factor / r;
        let k2 = field.u[1] * green.g * factor;
        *res += k1 + k2;
    }

    fn sub_calculate_k_linear(
        &self,
        kk: &mut Matrix,
        green: &GreenState,
        source: &BoundaryEdge,
        field: &BoundaryEdge,
        i: usize,
        j: usize,
    ) {
        let wfac = source.factor_x();
        let wfact = field.factor_x();
        let wfacx = field.factor_xr();
        let (fp, normal) = (&field.point, &field.point.normal);
        let nn = source.point.nn[i] * fp.nn[j];
        // ∇G already carries r'; hence wfacx (without r') multiplies n·∇G
        let mut k10 = nn * green.normal_derivative(normal) * wfac * wfacx;
        k10 += nn * green.g * normal[0] * wfac * wfact / fp.x[0];
        let k11 = nn * green.g * wfac * wfact;
        kk.set(1, 0, k10);
        kk.set(1, 1, k11);
    }

    fn sub_calculate_r(
        &self,
        rr: &mut Vector,
        green: &GreenState,
        source: &BoundaryEdge,
        field: &BoundaryEdge,
        i: usize,
    ) {
        let wfac = source.factor_x();
        let wfact = field.factor_x();
        let wfacx = field.factor_xr();
        let (fp, normal) = (&field.point, &field.point.normal);
        let ni = source.point.nn[i];
        let mut r0 = ni * fp.u[0] * green.normal_derivative(normal) * wfac * wfacx;
        r0 += ni * fp.u[0] * green.g * normal[0] * wfac * wfact / fp.x[0];
        let r1 = ni * fp.u[1] * green.g * wfac * wfact;
        rr[1] += r0 + r1;
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
