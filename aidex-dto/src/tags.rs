use serde::{Deserialize, Serialize};

/// One entry of the predefined tag vocabulary offered during
/// submission. Free-form custom tags never get a row here; they only
/// live on the platforms that carry them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct Tag {
    pub id: i32,
    pub name: String,
}

/// The full tag universe: the predefined vocabulary merged with every
/// tag currently in use on a platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct TagList {
    pub tags: Vec<String>,
}
