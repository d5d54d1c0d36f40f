//! Shared HTTP types

mod validated_json;

pub use validated_json::{ValidatedJson, ValidatedJsonRejection};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Human-readable outcome message.
///
/// Every error body on the wire has this shape: `{"message": "..."}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// What happened
    #[schema(example = "Parking spot not found.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
