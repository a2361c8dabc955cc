use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-submitted rating and comment tied to one platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct Review {
    pub id: i32,
    pub platform_id: i32,

    pub user_name: String,
    pub rating: i32,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,

    pub date: DateTime<Utc>,

    /// Marked for moderation; hidden from the default listing until a
    /// moderator resolves it.
    pub flagged: bool,
    /// Set once a moderator has resolved a flag, either way.
    pub reviewed: bool,

    /// The owning platform's name. Only populated on the moderation
    /// queue listing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_name: Option<String>,
}

/// Parameters for posting a review of a platform.
#[derive(Debug, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct ReviewCreateRequest<'v> {
    pub user_name: &'v str,

    /// Star rating, 1 to 5.
    pub rating: i32,

    /// Between 10 and 500 characters when present.
    #[serde(borrow, default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<&'v str>,
}

impl ReviewCreateRequest<'_> {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(1..=5).contains(&self.rating) {
            return Err(ValidationError::RatingOutOfRange);
        }
        if let Some(comment) = self.comment {
            let len = comment.chars().count();
            if !(10..=500).contains(&len) {
                return Err(ValidationError::CommentLength);
            }
        }
        Ok(())
    }
}

/// A platform's displayed rating, recomputed from its live review set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct RatingSummary {
    /// Mean rating rounded to one decimal place; 0 with no reviews.
    pub rating: f64,
    pub review_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_request_validation() {
        let mut request = ReviewCreateRequest {
            user_name: "sam",
            rating: 4,
            comment: Some("Solid tool, quick onboarding."),
        };
        assert!(request.validate().is_ok());

        request.rating = 0;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::RatingOutOfRange)
        ));
        request.rating = 6;
        assert!(matches!(
            request.validate(),
            Err(ValidationError::RatingOutOfRange)
        ));

        request.rating = 5;
        request.comment = Some("too short");
        assert!(matches!(
            request.validate(),
            Err(ValidationError::CommentLength)
        ));

        // A missing comment is fine.
        request.comment = None;
        assert!(request.validate().is_ok());
    }
}
