//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - `.xlsx` submission to the conversion endpoint

pub mod upload;

pub use upload::*;
