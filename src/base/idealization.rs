use russell_lab::math::PI;
use serde::{Deserialize, Serialize};

/// Defines the geometry idealization of the meridian (r,z) plane
///
/// # Default values
///
/// * The default thickness value is **1.0** for all cases
/// * The thickness is ignored by the axisymmetric idealization
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Idealization {
    /// Indicates an axisymmetry idealization (revolution about the z axis)
    pub axisymmetric: bool,

    /// Holds the out-of-plane thickness of a planar idealization (default = 1.0)
    pub thickness: f64,
}

impl Idealization {
    /// Allocates a new axisymmetric instance
    pub fn new_axisymmetric() -> Self {
        Idealization {
            axisymmetric: true,
            thickness: 1.0,
        }
    }

    /// Allocates a new planar instance with thickness = 1.0
    pub fn new_planar() -> Self {
        Idealization {
            axisymmetric: false,
            thickness: 1.0,
        }
    }

    /// Converts a planar quadrature weight into the weight of the idealized body
    ///
    /// * `radius` -- the radial coordinate r of the integration point
    /// * `weight` -- the planar weight `w·|det(J)|`
    ///
    /// Returns `2·π·r·weight` if axisymmetric or `thickness·weight` otherwise
    #[inline]
    pub fn factor(&self, radius: f64, weight: f64) -> f64 {
        if self.axisymmetric {
            2.0 * PI * radius * weight
        } else {
            self.thickness * weight
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
