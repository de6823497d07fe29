use super::{BoundaryEdge, BoundaryKernel, GreenState};
use crate::base::Error;
use log::debug;
use russell_lab::{Matrix, Vector};

/// Couples a source edge and a field edge through a boundary kernel
///
/// The local degrees of freedom are interleaved as `[u₀, u₁]` per node; thus the
/// coupling matrix has shape `(2·nnode_source) × (2·nnode_field)` and the residual
/// vector has length `2·nnode_source`.
///
/// **Note:** A self-coupling (same geometry for source and field) requires two
/// separate [BoundaryEdge] instances; the coincident pairs are skipped.
pub struct BoundaryPairing<'a, K: BoundaryKernel> {
    /// The boundary kernel
    kernel: &'a K,

    /// Holds the 2×2 block of a shape function pair
    block: Matrix,

    /// Holds the 2-vector contribution of a source shape function
    rr: Vector,

    /// Local coupling matrix (derivative of ϕ w.r.t the field values)
    pub kke: Matrix,

    /// Local residual vector
    pub phi: Vector,

    /// Number of singular point pairs skipped during the last calculation
    pub n_skipped: usize,
}

impl<'a, K: BoundaryKernel> BoundaryPairing<'a, K> {
    /// Allocates a new instance
    pub fn new(kernel: &'a K, source: &BoundaryEdge, field: &BoundaryEdge) -> Self {
        let (ns, nf) = (source.nnode(), field.nnode());
        BoundaryPairing {
            kernel,
            block: Matrix::new(2, 2),
            rr: Vector::new(2),
            kke: Matrix::new(2 * ns, 2 * nf),
            phi: Vector::new(2 * ns),
            n_skipped: 0,
        }
    }

    /// Calculates the local coupling matrix
    ///
    /// Only the rows corresponding to u₁ of the source nodes receive contributions.
    pub fn calc_kke(&mut self, source: &mut BoundaryEdge, field: &mut BoundaryEdge) -> Result<(), Error> {
        self.check_dims(source, field)?;
        let (ns, nf) = (source.nnode(), field.nnode());
        self.kke.fill(0.0);
        self.n_skipped = 0;
        for p in 0..source.n_integ_point() {
            source.set_integ_point(p)?;
            for q in 0..field.n_integ_point() {
                field.set_integ_point(q)?;
                let green = match self.green(source, field)? {
                    Some(green) => green,
                    None => continue,
                };
                for i in 0..ns {
                    for j in 0..nf {
                        self.block.fill(0.0);
                        self.kernel
                            .sub_calculate_k_linear(&mut self.block, &green, source, field, i, j);
                        for a in 0..2 {
                            for b in 0..2 {
                                let (row, col) = (2 * i + a, 2 * j + b);
                                self.kke.set(row, col, self.kke.get(row, col) + self.block.get(a, b));
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }

    /// Calculates the local residual vector using the solution values of the field edge
    pub fn calc_phi(&mut self, source: &mut BoundaryEdge, field: &mut BoundaryEdge) -> Result<(), Error> {
        self.check_dims(source, field)?;
        self.phi.fill(0.0);
        self.n_skipped = 0;
        for p in 0..source.n_integ_point() {
            source.set_integ_point(p)?;
            for q in 0..field.n_integ_point() {
                field.set_integ_point(q)?;
                let green = match self.green(source, field)? {
                    Some(green) => green,
                    None => continue,
                };
                for i in 0..source.nnode() {
                    self.rr.fill(0.0);
                    self.kernel.sub_calculate_r(&mut self.rr, &green, source, field, i);
                    self.phi[2 * i] += self.rr[0];
                    self.phi[2 * i + 1] += self.rr[1];
                }
            }
        }
        Ok(())
    }

    /// Calculates the boundary integral over the field edge at each source integration point
    ///
    /// ```text
    ///          ⌠
    /// f(xᵖ) =  │ [u₀ (n·∇G + G n₀/r) + u₁ G] dΓ'
    ///          ⌡
    ///          Γ'
    /// ```
    ///
    /// with `dΓ' = 2·π·w·‖dx/dξ‖` (the factor without the field radius, see [BoundaryEdge::factor_xr]).
    pub fn calc_boundary_integral(
        &mut self,
        source: &mut BoundaryEdge,
        field: &mut BoundaryEdge,
    ) -> Result<Vector, Error> {
        let mut values = Vector::new(source.n_integ_point());
        self.n_skipped = 0;
        for p in 0..source.n_integ_point() {
            source.set_integ_point(p)?;
            for q in 0..field.n_integ_point() {
                field.set_integ_point(q)?;
                let green = match self.green(source, field)? {
                    Some(green) => green,
                    None => continue,
                };
                let factor = field.factor_xr();
                self.kernel
                    .post_calculate_f(&green, &source.point, &field.point, factor, &mut values[p]);
            }
        }
        Ok(values)
    }

    /// Evaluates the kernel at the current pair and skips the singular ones
    fn green(&mut self, source: &BoundaryEdge, field: &BoundaryEdge) -> Result<Option<GreenState>, Error> {
        match self.kernel.calculate_green(&source.point.x, &field.point.x) {
            Ok(green) => Ok(Some(green)),
            Err(Error::SingularPoint) => {
                debug!(
                    "skipping singular pair: source point {} at {:?} and field point {} at {:?}",
                    source.point.index, source.point.x, field.point.index, field.point.x
                );
                self.n_skipped += 1;
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Checks that the edges match the allocated arrays
    fn check_dims(&self, source: &BoundaryEdge, field: &BoundaryEdge) -> Result<(), Error> {
        if self.kke.dims() != (2 * source.nnode(), 2 * field.nnode()) {
            return Err(Error::Other("edges do not match the allocated pairing"));
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::BoundaryPairing;
    use crate::base::{Config, Error};
    use crate::fem::{AxisymmetricKernel, BoundaryEdge, BoundaryKernel};
    use gemlab::shapes::GeoKind;
    use russell_lab::{approx_eq, Matrix, Vector};

    fn config() -> Config {
        let mut config = Config::new();
        config.set_n_integ_point_edge(Some(3)).unwrap();
        config
    }

    #[test]
    fn calc_kke_captures_errors() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &[[2.0, 0.0], [2.0, 1.0]]).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin2, &[[1.0, 1.0], [1.0, 0.0]]).unwrap();
        let mut other = BoundaryEdge::new(&config, GeoKind::Lin3, &[[1.0, 1.0], [1.0, 0.0], [1.0, 0.5]]).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        assert_eq!(
            pairing.calc_kke(&mut source, &mut other).err(),
            Some(Error::Other("edges do not match the allocated pairing"))
        );
        assert_eq!(
            pairing.calc_phi(&mut source, &mut other).err(),
            Some(Error::Other("edges do not match the allocated pairing"))
        );
        pairing.calc_kke(&mut source, &mut field).unwrap();
        assert_eq!(pairing.n_skipped, 0);
    }

    #[test]
    fn calc_kke_works() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &[[2.0, 0.0], [2.0, 1.0]]).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin3, &[[1.0, 1.0], [1.0, 0.0], [1.0, 0.5]]).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        pairing.calc_kke(&mut source, &mut field).unwrap();
        assert_eq!(pairing.kke.dims(), (4, 6));
        assert_eq!(pairing.n_skipped, 0);

        // manual double loop
        let mut correct = Matrix::new(4, 6);
        let mut block = Matrix::new(2, 2);
        for p in 0..source.n_integ_point() {
            source.set_integ_point(p).unwrap();
            for q in 0..field.n_integ_point() {
                field.set_integ_point(q).unwrap();
                let green = kernel.calculate_green(&source.point.x, &field.point.x).unwrap();
                for i in 0..2 {
                    for j in 0..3 {
                        kernel.sub_calculate_k_linear(&mut block, &green, &source, &field, i, j);
                        correct.set(2 * i + 1, 2 * j, correct.get(2 * i + 1, 2 * j) + block.get(1, 0));
                        correct.set(2 * i + 1, 2 * j + 1, correct.get(2 * i + 1, 2 * j + 1) + block.get(1, 1));
                    }
                }
            }
        }
        for row in 0..4 {
            for col in 0..6 {
                approx_eq(pairing.kke.get(row, col), correct.get(row, col), 1e-14);
                if row % 2 == 0 {
                    assert_eq!(pairing.kke.get(row, col), 0.0);
                }
            }
        }
    }

    #[test]
    fn calc_phi_equals_kke_times_field_values() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &[[2.0, 0.0], [2.0, 1.0]]).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin2, &[[1.5, 1.5], [0.5, 1.5]]).unwrap();
        let uu = [[0.3, -2.0], [1.2, 0.7]];
        field.set_nodal_values(&uu).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        pairing.calc_kke(&mut source, &mut field).unwrap();
        pairing.calc_phi(&mut source, &mut field).unwrap();
        let u_field = Vector::from(&[uu[0][0], uu[0][1], uu[1][0], uu[1][1]]);
        for row in 0..4 {
            let mut sum = 0.0;
            for col in 0..4 {
                sum += pairing.kke.get(row, col) * u_field[col];
            }
            approx_eq(pairing.phi[row], sum, 1e-13);
        }
    }

    #[test]
    fn self_coupling_skips_coincident_pairs() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        let coords = [[1.0, 0.0], [1.0, 1.0]];
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &coords).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin2, &coords).unwrap();
        field.set_nodal_values(&[[1.0, 1.0], [1.0, 1.0]]).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        pairing.calc_kke(&mut source, &mut field).unwrap();
        assert_eq!(pairing.n_skipped, source.n_integ_point());
        pairing.calc_phi(&mut source, &mut field).unwrap();
        assert_eq!(pairing.n_skipped, source.n_integ_point());
        for row in 0..4 {
            assert!(pairing.phi[row].is_finite());
            for col in 0..4 {
                assert!(pairing.kke.get(row, col).is_finite());
            }
        }
        let values = pairing.calc_boundary_integral(&mut source, &mut field).unwrap();
        assert_eq!(pairing.n_skipped, source.n_integ_point());
        assert_eq!(values.dim(), source.n_integ_point());
    }

    #[test]
    fn numeric_domain_errors_propagate() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        // source edge on the axis (m = 0)
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &[[0.0, 0.0], [0.0, 1.0]]).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin2, &[[1.0, 1.0], [1.0, 0.0]]).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        assert_eq!(
            pairing.calc_kke(&mut source, &mut field).err(),
            Some(Error::NumericDomain(0.0))
        );
    }

    #[test]
    fn calc_boundary_integral_works() {
        let config = config();
        let kernel = AxisymmetricKernel::new(&config);
        let mut source = BoundaryEdge::new(&config, GeoKind::Lin2, &[[2.0, 0.0], [2.0, 1.0]]).unwrap();
        let mut field = BoundaryEdge::new(&config, GeoKind::Lin2, &[[1.0, 1.0], [1.0, 0.0]]).unwrap();
        field.set_nodal_values(&[[2.0, 1.0], [2.0, 1.0]]).unwrap();
        let mut pairing = BoundaryPairing::new(&kernel, &source, &field);
        let values = pairing.calc_boundary_integral(&mut source, &mut field).unwrap();
        for p in 0..source.n_integ_point() {
            source.set_integ_point(p).unwrap();
            let mut correct = 0.0;
            for q in 0..field.n_integ_point() {
                field.set_integ_point(q).unwrap();
                let green = kernel.calculate_green(&source.point.x, &field.point.x).unwrap();
                let n_grad = green.normal_derivative(&field.point.normal);
                let r = source.point.x[0];
                correct += field.factor_xr()
                    * (2.0 * n_grad + 2.0 * green.g * field.point.normal[0] / r + 1.0 * green.g);
            }
            approx_eq(values[p], correct, 1e-14);
        }
    }
}
