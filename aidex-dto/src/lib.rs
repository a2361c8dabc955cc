pub mod error;
pub mod params;

pub mod platforms;
pub mod reviews;
pub mod tags;

#[cfg(feature = "client")]
pub mod client;

/// The expected response of an end point that does not return anything.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct Ok;

pub use error::JsonError;
