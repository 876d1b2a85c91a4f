//! Output views for the various functions within Lens.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

mod profile;
pub use profile::*;

/// An error response for an API endpoint. This is used to return errors to the
/// client in a consistent format.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// The HTTP status code of the response, repeated in the body.
    pub status: u16,

    /// A human-readable message describing the error that occurred. This is a
    /// fixed string per kind of error and never carries internal detail.
    pub message: String,
}

impl ApiErrorResponse {
    pub fn new(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }
}
