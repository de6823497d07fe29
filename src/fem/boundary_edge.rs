use super::{check_meridian_coords, select_integ_points};
use crate::base::{Config, Error, Idealization};
use crate::Point;
use gemlab::integ::IntegPointData;
use gemlab::shapes::{GeoClass, GeoKind, Scratchpad};
use russell_lab::{Matrix, Vector};

/// Holds the boundary edge state at the current integration point
pub struct EdgePoint {
    /// Index of the current integration point
    pub index: usize,

    /// Coordinates (r,z) of the integration point
    pub x: Point,

    /// Shape functions Nᵐ(ξ) (nnode)
    pub nn: Vector,

    /// Unit outward normal vector (r,z)
    pub normal: Point,

    /// Norm of the Jacobian vector ‖dx/dξ‖
    pub det_jac: f64,

    /// Planar integration weight `w·‖dx/dξ‖`
    pub weight: f64,

    /// Solution values (u₀,u₁) interpolated from the nodes
    pub u: [f64; 2],
}

/// Implements a boundary edge (Lin2, Lin3, ...) in the (r,z) plane
///
/// The outward normal is `n = (dz/dξ, -dr/dξ) / ‖dx/dξ‖`; hence, the boundary
/// must be traversed counterclockwise (domain on the left).
pub struct BoundaryEdge {
    /// Geometry idealization
    pub ideal: Idealization,

    /// Scratchpad to compute shape functions and Jacobians
    pad: Scratchpad,

    /// Integration points (coordinates and weights)
    ips: IntegPointData,

    /// Nodal solution values (nnode × 2)
    uu: Matrix,

    /// State at the current integration point
    pub point: EdgePoint,
}

impl BoundaryEdge {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `config` -- the configuration (idealization and number of integration points along edges)
    /// * `kind` -- a line kind (Lin2, Lin3, ...)
    /// * `coords` -- the (r,z) coordinates of the nodes, ordered as in gemlab
    pub fn new<T: AsRef<[f64]>>(config: &Config, kind: GeoKind, coords: &[T]) -> Result<Self, Error> {
        check_meridian_coords(coords)?;
        if kind.class() != GeoClass::Lin {
            return Err(Error::Other("geometry kind must be a line"));
        }
        let nnode = kind.nnode();
        if coords.len() != nnode {
            return Err(Error::Other("number of nodes does not match the geometry kind"));
        }
        let mut pad = Scratchpad::new(2, kind)?;
        for m in 0..nnode {
            let x = coords[m].as_ref();
            pad.set_xx(m, 0, x[0]);
            pad.set_xx(m, 1, x[1]);
        }
        let ips = select_integ_points(kind, config.n_integ_point_edge)?;
        let mut edge = BoundaryEdge {
            ideal: config.ideal,
            pad,
            ips,
            uu: Matrix::new(nnode, 2),
            point: EdgePoint {
                index: 0,
                x: [0.0, 0.0],
                nn: Vector::new(nnode),
                normal: [0.0, 0.0],
                det_jac: 0.0,
                weight: 0.0,
                u: [0.0, 0.0],
            },
        };
        edge.set_integ_point(0)?;
        Ok(edge)
    }

    /// Returns the number of nodes
    pub fn nnode(&self) -> usize {
        self.pad.kind.nnode()
    }

    /// Returns the number of integration points
    pub fn n_integ_point(&self) -> usize {
        self.ips.len()
    }

    /// Sets the nodal solution values (u₀,u₁) of every node
    ///
    /// **Note:** The values at the current integration point are updated as well.
    pub fn set_nodal_values(&mut self, values: &[[f64; 2]]) -> Result<(), Error> {
        if values.len() != self.nnode() {
            return Err(Error::Other("number of nodal values must equal the number of nodes"));
        }
        for m in 0..values.len() {
            self.uu.set(m, 0, values[m][0]);
            self.uu.set(m, 1, values[m][1]);
        }
        self.interpolate_u();
        Ok(())
    }

    /// Moves the edge state to the integration point `index`
    pub fn set_integ_point(&mut self, index: usize) -> Result<(), Error> {
        if index >= self.ips.len() {
            return Err(Error::Other("index of integration point is out of bounds"));
        }
        let ips = self.ips;
        let ksi = &ips[index][..];
        (self.pad.fn_interp)(&mut self.pad.interp, ksi);
        let norm = self.pad.calc_jacobian(ksi)?;
        if norm <= f64::EPSILON {
            return Err(Error::Other("boundary edge has zero length"));
        }
        let (dr_dksi, dz_dksi) = (self.pad.jacobian.get(0, 0), self.pad.jacobian.get(1, 0));
        let pt = &mut self.point;
        pt.index = index;
        pt.x = [0.0, 0.0];
        for m in 0..self.pad.kind.nnode() {
            let nm = self.pad.interp[m];
            pt.nn[m] = nm;
            pt.x[0] += nm * self.pad.xxt.get(0, m);
            pt.x[1] += nm * self.pad.xxt.get(1, m);
        }
        pt.normal = [dz_dksi / norm, -dr_dksi / norm];
        pt.det_jac = norm;
        pt.weight = ips[index][3] * norm;
        self.interpolate_u();
        Ok(())
    }

    /// Returns the integration factor of the idealized body at the current point
    ///
    /// Axisymmetric: `2·π·r·w·‖dx/dξ‖`; planar: `thickness·w·‖dx/dξ‖`
    #[inline]
    pub fn factor_x(&self) -> f64 {
        self.ideal.factor(self.point.x[0], self.point.weight)
    }

    /// Returns the integration factor without the radius
    ///
    /// Axisymmetric: `2·π·w·‖dx/dξ‖`; planar: `thickness·w·‖dx/dξ‖`
    ///
    /// This factor is used with terms already carrying the radius (e.g., the Green's function gradient).
    #[inline]
    pub fn factor_xr(&self) -> f64 {
        self.ideal.factor(1.0, self.point.weight)
    }

    /// Interpolates the nodal solution values to the current integration point
    fn interpolate_u(&mut self) {
        let pt = &mut self.point;
        pt.u = [0.0, 0.0];
        for m in 0..pt.nn.dim() {
            pt.u[0] += pt.nn[m] * self.uu.get(m, 0);
            pt.u[1] += pt.nn[m] * self.uu.get(m, 1);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
