use crate::base::{Config, Error};
use gemlab::integ::{self, IntegPointData};
use gemlab::mesh::{Cell, Mesh};
use gemlab::shapes::{GeoClass, GeoKind, Scratchpad};
use russell_lab::{Matrix, Vector};

/// Holds the element state at the current integration point
pub struct IntegPoint {
    /// Index of the current integration point
    pub index: usize,

    /// Coordinates (r,z) of the integration point
    pub x: Vector,

    /// Shape functions Nᵐ(ξ) (nnode)
    pub nn: Vector,

    /// Gradients of shape functions Gᵐⱼ = dNᵐ/dxⱼ (nnode × 2)
    pub gg: Matrix,

    /// Determinant of the Jacobian matrix
    pub det_jac: f64,

    /// Planar integration weight `w·|det(J)|`
    pub weight: f64,
}

/// Defines the quadrature capabilities of volume elements in the meridian plane
pub trait ElementQuadrature {
    /// Returns the number of integration points
    fn n_integ_point(&self) -> usize;

    /// Moves the element state to the integration point `index`
    fn set_integ_point(&mut self, index: usize) -> Result<(), Error>;

    /// Returns the state at the current integration point
    fn integ_point(&self) -> &IntegPoint;

    /// Returns the integration factor at the current integration point
    fn get_factor(&self) -> f64;
}

/// Implements a generic quadrilateral element in the (r,z) plane
///
/// The integration factor is the planar one, i.e., `thickness·w·|det(J)|`
pub struct QuadElement {
    /// Out-of-plane thickness
    pub thickness: f64,

    /// Scratchpad to compute shape functions and Jacobians
    pad: Scratchpad,

    /// Integration points (coordinates and weights)
    ips: IntegPointData,

    /// State at the current integration point
    ip: IntegPoint,
}

/// Checks that every node has exactly two coordinates (r,z)
pub(crate) fn check_meridian_coords<T: AsRef<[f64]>>(coords: &[T]) -> Result<(), Error> {
    for (node, x) in coords.iter().enumerate() {
        let ndim = x.as_ref().len();
        if ndim != 2 {
            return Err(Error::DimensionMismatch { node, ndim });
        }
    }
    Ok(())
}

/// Selects the integration points of a shape (`None` means the gemlab default for the kind)
pub(crate) fn select_integ_points(kind: GeoKind, n_integ_point: Option<usize>) -> Result<IntegPointData, Error> {
    match n_integ_point {
        Some(n) => Ok(integ::points(kind.class(), n)?),
        None => Ok(integ::default_points(kind)),
    }
}

impl QuadElement {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `config` -- the configuration (thickness and number of integration points)
    /// * `kind` -- a quadrilateral kind (Qua4, Qua8, Qua9, ...)
    /// * `coords` -- the (r,z) coordinates of the nodes, ordered as in gemlab
    ///
    /// # Errors
    ///
    /// Returns [Error::DimensionMismatch] if any node does not have 2 coordinates.
    pub fn new<T: AsRef<[f64]>>(config: &Config, kind: GeoKind, coords: &[T]) -> Result<Self, Error> {
        check_meridian_coords(coords)?;
        if kind.class() != GeoClass::Qua {
            return Err(Error::Other("geometry kind must be a quadrilateral"));
        }
        let nnode = kind.nnode();
        if coords.len() != nnode {
            return Err(Error::Other("number of nodes does not match the geometry kind"));
        }

        // pad and integration points
        let mut pad = Scratchpad::new(2, kind)?;
        for m in 0..nnode {
            let x = coords[m].as_ref();
            pad.set_xx(m, 0, x[0]);
            pad.set_xx(m, 1, x[1]);
        }
        let ips = select_integ_points(kind, config.n_integ_point)?;

        // new instance positioned at the first integration point
        let mut element = QuadElement {
            thickness: config.ideal.thickness,
            pad,
            ips,
            ip: IntegPoint {
                index: 0,
                x: Vector::new(2),
                nn: Vector::new(nnode),
                gg: Matrix::new(nnode, 2),
                det_jac: 0.0,
                weight: 0.0,
            },
        };
        element.set_integ_point(0)?;
        Ok(element)
    }

    /// Allocates a new instance from a cell of a gemlab mesh
    pub fn from_cell(config: &Config, mesh: &Mesh, cell: &Cell) -> Result<Self, Error> {
        let coords: Vec<&[f64]> = cell.points.iter().map(|p| mesh.points[*p].coords.as_slice()).collect();
        QuadElement::new(config, cell.kind, &coords)
    }

    /// Returns the number of nodes
    pub fn nnode(&self) -> usize {
        self.pad.kind.nnode()
    }
}

impl ElementQuadrature for QuadElement {
    fn n_integ_point(&self) -> usize {
        self.ips.len()
    }

    fn set_integ_point(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.ips.len() {
            return Err(Error::Other("index of integration point is out of bounds"));
        }
        let ips = self.ips;
        let ksi = &ips[index][..];
        (self.pad.fn_interp)(&mut self.pad.interp, ksi);
        let det_jac = self.pad.calc_gradient(ksi)?;
        if det_jac <= 0.0 {
            return Err(Error::Other("det(J) must be positive; check the node ordering"));
        }
        let ip = &mut self.ip;
        ip.index = index;
        ip.x.fill(0.0);
        for m in 0..self.pad.kind.nnode() {
            let nm = self.pad.interp[m];
            ip.nn[m] = nm;
            for j in 0..2 {
                ip.x[j] += nm * self.pad.xxt.get(j, m);
                ip.gg.set(m, j, self.pad.gradient.get(m, j));
            }
        }
        ip.det_jac = det_jac;
        ip.weight = ips[index][3] * det_jac;
        Ok(())
    }

    #[inline]
    fn integ_point(&self) -> &IntegPoint {
        &self.ip
    }

    #[inline]
    fn get_factor(&self) -> f64 {
        self.thickness * self.ip.weight
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
