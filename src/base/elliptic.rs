use super::Error;
use russell_lab::math::{elliptic_e, elliptic_f, PI};

/// Computes the complete elliptic integrals of the first and second kinds
///
/// Uses the parameter convention `m = k²`, i.e.,
///
/// ```text
///        π/2                             π/2
///         ⌠         dθ                    ⌠
/// K(m) =  │ ─────────────────    E(m) =   │ √(1 - m sin²θ) dθ
///         ⌡ √(1 - m sin²θ)                ⌡
///        0                               0
/// ```
///
/// # Output
///
/// Returns `(K(m), E(m))`
///
/// # Errors
///
/// Returns [Error::NumericDomain] if the integrals cannot be evaluated for `m`
/// (e.g., `m > 1`) or if any of them is NaN.
pub fn complete_elliptic_ke(m: f64) -> Result<(f64, f64), Error> {
    if m.is_nan() || m > 1.0 {
        return Err(Error::NumericDomain(m));
    }
    let kint = elliptic_f(PI / 2.0, m).map_err(|_| Error::NumericDomain(m))?;
    let eint = elliptic_e(PI / 2.0, m).map_err(|_| Error::NumericDomain(m))?;
    if kint.is_nan() || eint.is_nan() {
        return Err(Error::NumericDomain(m));
    }
    Ok((kint, eint))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::complete_elliptic_ke;
    use crate::base::Error;
    use russell_lab::{approx_eq, math::PI};

    #[test]
    fn complete_elliptic_ke_captures_errors() {
        match complete_elliptic_ke(f64::NAN) {
            Err(Error::NumericDomain(m)) => assert!(m.is_nan()),
            _ => panic!("NaN must fail"),
        }
        match complete_elliptic_ke(1.5) {
            Err(Error::NumericDomain(m)) => assert_eq!(m, 1.5),
            _ => panic!("m > 1 must fail"),
        }
    }

    #[test]
    fn complete_elliptic_ke_works() {
        // K(0) = E(0) = π/2
        let (kint, eint) = complete_elliptic_ke(0.0).unwrap();
        approx_eq(kint, PI / 2.0, 1e-15);
        approx_eq(eint, PI / 2.0, 1e-15);

        // tabulated values (parameter convention)
        let (kint, eint) = complete_elliptic_ke(0.5).unwrap();
        approx_eq(kint, 1.8540746773013719, 1e-14);
        approx_eq(eint, 1.3506438810476755, 1e-14);

        let (kint, eint) = complete_elliptic_ke(0.8).unwrap();
        approx_eq(kint, 2.257205326820854, 1e-14);
        approx_eq(eint, 1.1784899243278384, 1e-14);

        // close to one: K grows logarithmically and E approaches 1
        let (kint, eint) = complete_elliptic_ke(1.0 - 1e-12).unwrap();
        assert!(kint.is_finite() && kint > 14.0);
        approx_eq(eint, 1.0, 1e-10);
    }
}
