//! Error module

mod error_definition;

pub use error_definition::{ApiError, Result};
