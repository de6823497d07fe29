use super::{ElementQuadrature, IntegPoint, QuadElement};
use crate::base::{Config, Error};
use gemlab::mesh::{Cell, Mesh};
use gemlab::shapes::GeoKind;
use russell_lab::math::PI;

/// Implements an axisymmetric quadrilateral element
///
/// The element lives in the meridian (r,z) plane and represents the solid of
/// revolution about the z axis. Thus, the integration factor is
///
/// ```text
/// dV = 2·π·r·w·|det(J)|
/// ```
///
/// where r is the radial coordinate of the integration point.
pub struct AxisymmetricElement {
    /// The generic quadrilateral element
    pub base: QuadElement,
}

impl AxisymmetricElement {
    /// Allocates a new instance
    ///
    /// # Errors
    ///
    /// Returns [Error::DimensionMismatch] if any node does not have exactly 2 coordinates,
    /// even if all other nodes are 2D.
    pub fn new<T: AsRef<[f64]>>(config: &Config, kind: GeoKind, coords: &[T]) -> Result<Self, Error> {
        Ok(AxisymmetricElement {
            base: QuadElement::new(config, kind, coords)?,
        })
    }

    /// Allocates a new instance from a cell of a gemlab mesh
    pub fn from_cell(config: &Config, mesh: &Mesh, cell: &Cell) -> Result<Self, Error> {
        let coords: Vec<&[f64]> = cell.points.iter().map(|p| mesh.points[*p].coords.as_slice()).collect();
        AxisymmetricElement::new(config, cell.kind, &coords)
    }
}

impl ElementQuadrature for AxisymmetricElement {
    #[inline]
    fn n_integ_point(&self) -> usize {
        self.base.n_integ_point()
    }

    #[inline]
    fn set_integ_point(&mut self, index: usize) -> Result<(), Error> {
        self.base.set_integ_point(index)
    }

    #[inline]
    fn integ_point(&self) -> &IntegPoint {
        self.base.integ_point()
    }

    /// Returns `2·π·r·w·|det(J)|` at the current integration point
    #[inline]
    fn get_factor(&self) -> f64 {
        let ip = self.base.integ_point();
        2.0 * PI * ip.x[0] * ip.weight
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::AxisymmetricElement;
    use crate::base::{Config, Error};
    use crate::fem::{ElementQuadrature, QuadElement};
    use gemlab::mesh::Samples;
    use gemlab::shapes::GeoKind;
    use russell_lab::{approx_eq, math::PI};

    #[test]
    fn new_captures_errors() {
        let config = Config::new();
        let coords = vec![vec![1.0, 0.0], vec![2.0, 0.0], vec![2.0, 1.0], vec![1.0, 1.0, 0.0]];
        assert_eq!(
            AxisymmetricElement::new(&config, GeoKind::Qua4, &coords).err(),
            Some(Error::DimensionMismatch { node: 3, ndim: 3 })
        );
        let coords = vec![vec![1.0], vec![2.0, 0.0], vec![2.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(
            AxisymmetricElement::new(&config, GeoKind::Qua4, &coords).err(),
            Some(Error::DimensionMismatch { node: 0, ndim: 1 })
        );

        let mesh = Samples::one_hex8();
        assert_eq!(
            AxisymmetricElement::from_cell(&config, &mesh, &mesh.cells[0]).err(),
            Some(Error::DimensionMismatch { node: 0, ndim: 3 })
        );
    }

    #[test]
    fn get_factor_works() {
        // single integration point at the centre: r = 2.0 and w·|det(J)| = 4 · 0.125 = 0.5
        let mut config = Config::new();
        config.set_n_integ_point(Some(1)).unwrap();
        let coords = [[1.5, 0.0], [2.5, 0.0], [2.5, 0.5], [1.5, 0.5]];
        let element = AxisymmetricElement::new(&config, GeoKind::Qua4, &coords).unwrap();
        approx_eq(element.integ_point().x[0], 2.0, 1e-15);
        approx_eq(element.integ_point().weight, 0.5, 1e-15);
        approx_eq(element.get_factor(), 2.0 * PI, 1e-14);
        approx_eq(element.get_factor(), 6.283185307179586, 1e-14);
    }

    #[test]
    fn get_factor_is_the_planar_factor_times_two_pi_r() {
        let config = Config::new();
        let coords = [
            [1.0, 0.0],
            [3.0, 0.0],
            [3.0, 2.0],
            [1.0, 2.0],
            [2.0, 0.0],
            [3.0, 1.0],
            [2.0, 2.0],
            [1.0, 1.0],
        ];
        let mut axis = AxisymmetricElement::new(&config, GeoKind::Qua8, &coords).unwrap();
        let mut plane = QuadElement::new(&config, GeoKind::Qua8, &coords).unwrap();
        assert_eq!(axis.n_integ_point(), plane.n_integ_point());
        for p in 0..axis.n_integ_point() {
            axis.set_integ_point(p).unwrap();
            plane.set_integ_point(p).unwrap();
            let r = axis.integ_point().x[0];
            approx_eq(axis.get_factor(), 2.0 * PI * r * plane.get_factor(), 1e-14);
        }
    }

    #[test]
    fn from_cell_works() {
        let config = Config::new();
        let mesh = Samples::one_qua4();
        let cell = &mesh.cells[0];
        let element = AxisymmetricElement::from_cell(&config, &mesh, cell).unwrap();
        assert_eq!(element.base.nnode(), 4);
        assert_eq!(element.n_integ_point(), 4);
    }
}
