//! Request extractors and error responses shared by the handlers

pub mod error;
pub mod json;
pub mod params;

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
pub use params::{Path, Query};
