use super::{ElementQuadrature, IntegPoint};
use crate::base::Error;
use russell_lab::Matrix;

/// Integrates a scalar function over the element
///
/// ```text
///     ⌠               ────
/// s = │ f(x) dV   ≈   \    f(xᵖ) · factorᵖ
///     ⌡               /
///     Ωₑ              ──── p
/// ```
///
/// where `factorᵖ` is given by [ElementQuadrature::get_factor]; i.e., the
/// result is a revolved (3D) quantity for axisymmetric elements.
pub fn integ_scalar<E, F>(element: &mut E, mut f: F) -> Result<f64, Error>
where
    E: ElementQuadrature,
    F: FnMut(&IntegPoint) -> f64,
{
    let mut sum = 0.0;
    for p in 0..element.n_integ_point() {
        element.set_integ_point(p)?;
        sum += f(element.integ_point()) * element.get_factor();
    }
    Ok(sum)
}

/// Calculates the volume of the element (area times thickness if planar)
pub fn calc_volume<E: ElementQuadrature>(element: &mut E) -> Result<f64, Error> {
    integ_scalar(element, |_| 1.0)
}

/// Calculates the consistent mass matrix
///
/// ```text
///       ⌠
/// Mᵐⁿ = │ ρ Nᵐ Nⁿ dV
///       ⌡
///       Ωₑ
/// ```
pub fn calc_mass_matrix<E: ElementQuadrature>(element: &mut E, rho: f64) -> Result<Matrix, Error> {
    let nnode = element.integ_point().nn.dim();
    let mut mm = Matrix::new(nnode, nnode);
    for p in 0..element.n_integ_point() {
        element.set_integ_point(p)?;
        let coef = rho * element.get_factor();
        let nn = &element.integ_point().nn;
        for m in 0..nnode {
            for n in 0..nnode {
                mm.set(m, n, mm.get(m, n) + coef * nn[m] * nn[n]);
            }
        }
    }
    Ok(mm)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
