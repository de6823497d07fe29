use crate::StrError;
use thiserror::Error;

/// Defines the errors raised by the axisymmetric elements and the boundary kernel
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum Error {
    /// A node does not have exactly two coordinates (r,z)
    #[error("node {node} has {ndim} coordinates but axisymmetric elements require 2")]
    DimensionMismatch { node: usize, ndim: usize },

    /// The source and field points coincide or the field point lies on the axis
    #[error("singular point pair: coincident points or field point on the axis")]
    SingularPoint,

    /// The elliptic integrals could not be evaluated for the given parameter m
    #[error("false elliptic integral m = {0}")]
    NumericDomain(f64),

    /// An invalid input or an error reported by gemlab or russell_lab
    #[error("{0}")]
    Other(StrError),
}

impl From<StrError> for Error {
    fn from(message: StrError) -> Self {
        Error::Other(message)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
