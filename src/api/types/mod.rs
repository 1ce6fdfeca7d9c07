//! API request and response types

mod error;
mod json;

pub use error::{ApiError, ApiErrorBody};
pub use json::Json;
