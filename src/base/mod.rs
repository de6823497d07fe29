//! Implements the base structures: configuration, errors, and special functions

mod config;
mod elliptic;
mod errors;
mod idealization;
pub use crate::base::config::*;
pub use crate::base::elliptic::*;
pub use crate::base::errors::*;
pub use crate::base::idealization::*;
