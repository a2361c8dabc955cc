use serde::{Deserialize, Serialize};

pub const PAGE_DEFAULT: i64 = 0;
pub const PAGE_MIN: i64 = 0;
pub const LIMIT_DEFAULT: i64 = 20;
pub const LIMIT_MIN: i64 = 10;
pub const LIMIT_MAX: i64 = 100;

/// Parameters for paging through a list of items.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "rocket", derive(rocket::form::FromForm))]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PagingParams {
    /// The page index to retrieve. The first page is 0. This will
    /// multiply by the limit to get the actual item offset.
    /// Defaults to 0.
    pub page: Option<i64>,

    /// The maximum number of items to retrieve. Must be between 10
    /// and 100. Defaults to 20.
    pub limit: Option<i64>,
}

impl PagingParams {
    pub fn validate(&self) -> Result<(i64, i64), String> {
        fn validate_page(page: i64) -> Result<i64, String> {
            if page < PAGE_MIN {
                Err(format!("Page must be greater than or equal to {PAGE_MIN}"))
            } else {
                Ok(page)
            }
        }

        fn validate_limit(limit: i64) -> Result<i64, String> {
            if limit < LIMIT_MIN {
                Err(format!(
                    "Limit must be greater than or equal to {LIMIT_MIN}"
                ))
            } else if limit > LIMIT_MAX {
                Err(format!("Limit must be less than or equal to {LIMIT_MAX}"))
            } else {
                Ok(limit)
            }
        }

        match (self.page, self.limit) {
            (Some(p), Some(l)) => Ok((validate_page(p)?, validate_limit(l)?)),
            (None, Some(l)) => Ok((PAGE_DEFAULT, validate_limit(l)?)),
            (Some(p), None) => Ok((validate_page(p)?, LIMIT_DEFAULT)),
            (None, None) => Ok((PAGE_DEFAULT, LIMIT_DEFAULT)),
        }
    }
}

/// Parameters for filtering the directory listing.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "rocket", derive(rocket::form::FromForm))]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct PlatformListParams {
    /// Only include platforms carrying this exact tag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,

    /// Include platforms that have not been approved yet. Only honored
    /// for administrators; the public listing is always approved-only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_pending: Option<bool>,

    /// Paging parameters.
    #[serde(flatten)]
    pub paging: PagingParams,
}

/// Parameters for listing the reviews of a platform.
#[derive(Debug, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "rocket", derive(rocket::form::FromForm))]
#[cfg_attr(feature = "openapi", derive(schemars::JsonSchema))]
pub struct ReviewListParams {
    /// Also include reviews that are currently flagged. Flagged reviews
    /// are hidden from the default listing until a moderator resolves
    /// them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_flagged: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paging_defaults() {
        assert_eq!(PagingParams::default().validate(), Ok((0, 20)));
    }

    #[test]
    fn paging_rejects_out_of_bounds() {
        let p = PagingParams {
            page: Some(-1),
            limit: None,
        };
        assert!(p.validate().is_err());

        let p = PagingParams {
            page: None,
            limit: Some(5),
        };
        assert!(p.validate().is_err());

        let p = PagingParams {
            page: None,
            limit: Some(101),
        };
        assert!(p.validate().is_err());
    }

    #[test]
    fn paging_accepts_bounds() {
        let p = PagingParams {
            page: Some(3),
            limit: Some(100),
        };
        assert_eq!(p.validate(), Ok((3, 100)));
    }
}
