use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct JsonError {
    status: String,
    message: String,
}

#[cfg(feature = "rocket")]
impl From<(rocket::http::Status, String)> for JsonError {
    fn from((status, message): (rocket::http::Status, String)) -> Self {
        JsonError {
            status: status.to_string(),
            message,
        }
    }
}

/// Validation failure for a request body, reported before anything
/// touches the datastore.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("name must be at least 2 characters")]
    NameTooShort,

    #[error("description must be between 30 and 1000 characters")]
    DescriptionLength,

    #[error("at least one tag is required")]
    NoTags,

    #[error("rating must be between 1 and 5")]
    RatingOutOfRange,

    #[error("comment must be between 10 and 500 characters")]
    CommentLength,

    #[error("invalid pricing descriptor: {0}")]
    Pricing(#[from] PricingError),
}

/// The pricing column is stored as a JSON blob; this is the error
/// raised when the blob does not match the typed model.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct PricingError(#[from] pub serde_json::Error);
