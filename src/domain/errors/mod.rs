//! Domain error types.

mod request_error;
mod validation_error;

pub use request_error::RequestError;
pub use validation_error::{FieldError, PostField, ValidationErrors};
