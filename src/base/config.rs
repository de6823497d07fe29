use super::Idealization;
use crate::StrError;
use serde::{Deserialize, Serialize};
use std::ffi::OsStr;
use std::fmt;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Holds the configuration of elements and boundary kernels
#[derive(Clone, Copy, Debug, Deserialize, Serialize)]
pub struct Config {
    /// Geometry idealization (axisymmetric or planar with thickness)
    pub ideal: Idealization,

    /// Number of integration points (None means the gemlab default for the kind)
    pub n_integ_point: Option<usize>,

    /// Number of integration points along boundary edges (None means the gemlab default)
    pub n_integ_point_edge: Option<usize>,

    /// Relative tolerance to detect coincident source and field points
    pub tol_coincident_rtol: f64,

    /// Absolute tolerance to detect coincident source and field points
    pub tol_coincident_atol: f64,

    /// Tolerance on the radial coordinate to detect field points on the axis of symmetry
    pub tol_axis: f64,
}

impl Config {
    /// Allocates a new instance
    ///
    /// # Default values
    ///
    /// * axisymmetric idealization
    /// * default number of integration points
    /// * `tol_coincident_rtol = 1e-13`, `tol_coincident_atol = 1e-8`, `tol_axis = 1e-14`
    pub fn new() -> Self {
        Config {
            ideal: Idealization::new_axisymmetric(),
            n_integ_point: None,
            n_integ_point_edge: None,
            tol_coincident_rtol: 1e-13,
            tol_coincident_atol: 1e-8,
            tol_axis: 1e-14,
        }
    }

    /// Sets the axisymmetric idealization (otherwise planar)
    pub fn set_axisymmetric(&mut self, flag: bool) -> Result<&mut Self, StrError> {
        self.ideal.axisymmetric = flag;
        if flag {
            self.ideal.thickness = 1.0;
        }
        Ok(self)
    }

    /// Sets the out-of-plane thickness of a planar idealization
    pub fn set_thickness(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if self.ideal.axisymmetric {
            return Err("cannot set thickness with the axisymmetric idealization");
        }
        if value <= 0.0 {
            return Err("thickness must be > 0.0");
        }
        self.ideal.thickness = value;
        Ok(self)
    }

    /// Sets the number of integration points (None means the default)
    pub fn set_n_integ_point(&mut self, value: Option<usize>) -> Result<&mut Self, StrError> {
        if let Some(n) = value {
            if n == 0 {
                return Err("number of integration points must be > 0");
            }
        }
        self.n_integ_point = value;
        Ok(self)
    }

    /// Sets the number of integration points along boundary edges (None means the default)
    pub fn set_n_integ_point_edge(&mut self, value: Option<usize>) -> Result<&mut Self, StrError> {
        if let Some(n) = value {
            if n == 0 {
                return Err("number of integration points along edges must be > 0");
            }
        }
        self.n_integ_point_edge = value;
        Ok(self)
    }

    /// Sets the tolerances used to detect coincident source and field points
    pub fn set_tol_coincident(&mut self, rtol: f64, atol: f64) -> Result<&mut Self, StrError> {
        if rtol < 0.0 || atol < 0.0 {
            return Err("coincident point tolerances must be ≥ 0.0");
        }
        self.tol_coincident_rtol = rtol;
        self.tol_coincident_atol = atol;
        Ok(self)
    }

    /// Sets the tolerance used to detect field points on the axis of symmetry
    pub fn set_tol_axis(&mut self, value: f64) -> Result<&mut Self, StrError> {
        if value <= 0.0 {
            return Err("axis tolerance must be > 0.0");
        }
        self.tol_axis = value;
        Ok(self)
    }

    /// Reads a JSON file containing the configuration
    pub fn read_json<P>(full_path: &P) -> Result<Self, StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        let input = File::open(path).map_err(|_| "cannot open file")?;
        let buffered = BufReader::new(input);
        let config = serde_json::from_reader(buffered).map_err(|_| "cannot parse JSON file")?;
        Ok(config)
    }

    /// Writes a JSON file with the configuration
    pub fn write_json<P>(&self, full_path: &P) -> Result<(), StrError>
    where
        P: AsRef<OsStr> + ?Sized,
    {
        let path = Path::new(full_path).to_path_buf();
        if let Some(p) = path.parent() {
            fs::create_dir_all(p).map_err(|_| "cannot create directory")?;
        }
        let mut file = File::create(&path).map_err(|_| "cannot create file")?;
        serde_json::to_writer_pretty(&mut file, &self).map_err(|_| "cannot write file")?;
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Configuration data\n")?;
        write!(f, "==================\n")?;
        write!(f, "axisymmetric = {:?}\n", self.ideal.axisymmetric)?;
        write!(f, "thickness = {:?}\n", self.ideal.thickness)?;
        write!(f, "n_integ_point = {:?}\n", self.n_integ_point)?;
        write!(f, "n_integ_point_edge = {:?}\n", self.n_integ_point_edge)?;
        write!(f, "tol_coincident_rtol = {:?}\n", self.tol_coincident_rtol)?;
        write!(f, "tol_coincident_atol = {:?}\n", self.tol_coincident_atol)?;
        write!(f, "tol_axis = {:?}\n", self.tol_axis)?;
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
