use crate::error::{PricingError, ValidationError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as Json;
use url::Url;

/// One paid plan inside a platform's pricing descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PaidPlan {
    pub name: String,
    pub price: String,
    pub description: String,
}

/// The pricing descriptor of a platform. Stored as a JSON blob in the
/// datastore; parsed into this type at the data-access boundary so a
/// malformed blob is an error there, never an opaque value handed to
/// callers.
///
/// Field names mirror the stored blob (`hasFree`, `freeDescription`,
/// `paidPlans`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct Pricing {
    #[serde(default)]
    pub has_free: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub free_description: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paid_plans: Vec<PaidPlan>,
}

impl Pricing {
    pub fn from_json(value: Json) -> Result<Self, PricingError> {
        serde_json::from_value(value).map_err(PricingError::from)
    }

    pub fn to_json(&self) -> Json {
        // Serialization of a plain struct into a JSON value cannot fail.
        serde_json::to_value(self).unwrap_or(Json::Null)
    }
}

/// A directory entry describing one AI tool or service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct Platform {
    pub id: i32,

    pub name: String,
    pub description: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<Url>,
    pub url: Url,

    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub pricing: Pricing,

    /// Average rating, derived from the live review set. 0 when there
    /// are no reviews.
    pub rating: f64,
    /// Number of reviews, derived alongside `rating`.
    pub review_count: i32,

    pub api_available: bool,
    pub approved: bool,

    pub created_at: DateTime<Utc>,
}

/// Parameters for submitting a new platform to the directory. The entry
/// is created unapproved and becomes visible once a moderator approves
/// it.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PlatformCreateRequest<'v> {
    /// The human-readable name of the platform.
    pub name: &'v str,

    /// A description of the platform. Between 30 and 1000 characters.
    pub description: &'v str,

    /// An optional URL to the platform's logo.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Url>,

    /// The platform's homepage.
    pub url: Url,

    /// Tags, from the predefined vocabulary or free-form. At least one.
    pub tags: Vec<String>,

    /// An ordered list of feature descriptions.
    #[serde(default)]
    pub features: Vec<String>,

    /// The pricing descriptor.
    #[serde(default)]
    pub pricing: Pricing,

    /// Whether the platform exposes a public API.
    #[serde(default)]
    pub api_available: bool,
}

impl PlatformCreateRequest<'_> {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().chars().count() < 2 {
            return Err(ValidationError::NameTooShort);
        }
        let len = self.description.chars().count();
        if !(30..=1000).contains(&len) {
            return Err(ValidationError::DescriptionLength);
        }
        if self.tags.iter().all(|t| t.trim().is_empty()) {
            return Err(ValidationError::NoTags);
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PlatformCreateResponse {
    /// The ID of the new platform created.
    pub id: i32,
}

/// Parameters for updating a platform's information. The derived
/// `rating`/`review_count` columns and the creation timestamp are not
/// editable through this request.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PlatformUpdateRequest<'v> {
    #[serde(borrow)]
    pub name: Option<&'v str>,
    #[serde(borrow)]
    pub description: Option<&'v str>,
    pub logo: Option<Url>,
    pub url: Option<Url>,
    pub tags: Option<Vec<String>>,
    pub features: Option<Vec<String>>,
    pub pricing: Option<Pricing>,
    pub api_available: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn pricing_parses_stored_blob() {
        let pricing = Pricing::from_json(json!({
            "hasFree": true,
            "freeDescription": "Free for personal use",
            "paidPlans": [
                { "name": "Pro", "price": "$20/mo", "description": "All features" }
            ]
        }))
        .unwrap();

        assert!(pricing.has_free);
        assert_eq!(pricing.free_description.as_deref(), Some("Free for personal use"));
        assert_eq!(pricing.paid_plans.len(), 1);
        assert_eq!(pricing.paid_plans[0].name, "Pro");
    }

    #[test]
    fn pricing_defaults_missing_fields() {
        let pricing = Pricing::from_json(json!({})).unwrap();
        assert!(!pricing.has_free);
        assert!(pricing.free_description.is_none());
        assert!(pricing.paid_plans.is_empty());
    }

    #[test]
    fn pricing_rejects_malformed_blob() {
        assert!(Pricing::from_json(json!({ "hasFree": "yes" })).is_err());
        assert!(Pricing::from_json(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn pricing_round_trips() {
        let pricing = Pricing {
            has_free: true,
            free_description: None,
            paid_plans: vec![],
        };
        assert_eq!(Pricing::from_json(pricing.to_json()).unwrap(), pricing);
    }

    #[test]
    fn create_request_validation() {
        let mut request = PlatformCreateRequest {
            name: "Aidex",
            description: "A directory entry description that is long enough to pass.",
            logo: None,
            url: Url::parse("https://example.com").unwrap(),
            tags: vec!["API".to_string()],
            features: vec![],
            pricing: Pricing::default(),
            api_available: false,
        };
        assert!(request.validate().is_ok());

        request.name = "A";
        assert!(matches!(
            request.validate(),
            Err(ValidationError::NameTooShort)
        ));

        request.name = "Aidex";
        request.description = "too short";
        assert!(matches!(
            request.validate(),
            Err(ValidationError::DescriptionLength)
        ));

        request.description = "A directory entry description that is long enough to pass.";
        request.tags = vec![];
        assert!(matches!(request.validate(), Err(ValidationError::NoTags)));
    }
}
