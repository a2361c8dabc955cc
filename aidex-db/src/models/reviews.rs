use crate::db::Db;
use crate::models::Platform;
use crate::schema;
use aidex_dto as dto;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rocket_db_pools::diesel::RunQueryDsl;
use tracing::info;

#[derive(Queryable, Debug, Identifiable, Associations, Selectable)]
#[diesel(belongs_to(Platform))]
#[diesel(table_name = schema::reviews)]
pub struct Review {
    pub id: i32,
    pub platform_id: i32,
    pub user_name: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub date: DateTime<Utc>,
    pub flagged: bool,
    pub reviewed: bool,
}

/// Fold a set of star ratings into the displayed summary: the mean
/// rounded to one decimal place, or zero when there are no reviews.
/// Flag state does not matter here; flagged reviews stay in the
/// aggregate until they are deleted.
pub fn summarize_ratings(ratings: &[i32]) -> dto::reviews::RatingSummary {
    if ratings.is_empty() {
        return dto::reviews::RatingSummary {
            rating: 0.0,
            review_count: 0,
        };
    }

    let total: i64 = ratings.iter().map(|r| i64::from(*r)).sum();
    let mean = total as f64 / ratings.len() as f64;

    dto::reviews::RatingSummary {
        rating: (mean * 10.0).round() / 10.0,
        review_count: ratings.len() as i32,
    }
}

impl From<Review> for dto::reviews::Review {
    fn from(value: Review) -> Self {
        dto::reviews::Review {
            id: value.id,
            platform_id: value.platform_id,
            user_name: value.user_name,
            rating: value.rating,
            comment: value.comment,
            date: value.date,
            flagged: value.flagged,
            reviewed: value.reviewed,
            platform_name: None,
        }
    }
}

impl Review {
    pub async fn create(
        db: &mut Db,
        platform_id: i32,
        user_name: &str,
        rating: i32,
        comment: Option<&str>,
    ) -> Result<Self, diesel::result::Error> {
        diesel::insert_into(schema::reviews::table)
            .values((
                schema::reviews::platform_id.eq(platform_id),
                schema::reviews::user_name.eq(user_name),
                schema::reviews::rating.eq(rating),
                schema::reviews::comment.eq(comment),
            ))
            .returning(schema::reviews::all_columns)
            .get_result::<Self>(db)
            .await
    }

    pub async fn get(db: &mut Db, id: i32) -> Result<Option<Self>, diesel::result::Error> {
        schema::reviews::table
            .filter(schema::reviews::id.eq(id))
            .first(db)
            .await
            .optional()
    }

    pub async fn list_for_platform(
        db: &mut Db,
        platform_id: i32,
        include_flagged: bool,
    ) -> Result<Vec<Self>, diesel::result::Error> {
        use schema::reviews::dsl;

        let mut query = schema::reviews::table
            .filter(dsl::platform_id.eq(platform_id))
            .into_boxed();

        if !include_flagged {
            query = query.filter(dsl::flagged.eq(false));
        }

        query.order_by(dsl::date.desc()).load::<Self>(db).await
    }

    /// The moderation queue: flagged reviews paired with their
    /// platform's name, newest first.
    pub async fn flagged_with_platform_name(
        db: &mut Db,
    ) -> Result<Vec<(Self, String)>, diesel::result::Error> {
        use schema::reviews::dsl;

        schema::reviews::table
            .inner_join(schema::platforms::table)
            .filter(dsl::flagged.eq(true))
            .order_by(dsl::date.desc())
            .select((schema::reviews::all_columns, schema::platforms::name))
            .load::<(Self, String)>(db)
            .await
    }

    /// Recompute the platform's displayed rating from its live review
    /// set. This is the authoritative aggregation path; the columns on
    /// the platform row are only a cache of its result.
    pub async fn summary_for_platform(
        db: &mut Db,
        platform_id: i32,
    ) -> Result<dto::reviews::RatingSummary, diesel::result::Error> {
        let ratings = schema::reviews::table
            .filter(schema::reviews::platform_id.eq(platform_id))
            .select(schema::reviews::rating)
            .load::<i32>(db)
            .await?;

        Ok(summarize_ratings(&ratings))
    }

    /// Mark a review for moderation. Idempotent.
    pub async fn flag(db: &mut Db, id: i32) -> Result<bool, diesel::result::Error> {
        let affected = diesel::update(schema::reviews::table.filter(schema::reviews::id.eq(id)))
            .set(schema::reviews::flagged.eq(true))
            .execute(db)
            .await?;

        Ok(affected > 0)
    }

    /// Resolve a flagged review. Approving clears the flag; rejecting
    /// keeps the review flagged (hidden). Both mark it reviewed, so the
    /// two outcomes are the only terminal states.
    pub async fn verify(
        db: &mut Db,
        id: i32,
        approved: bool,
    ) -> Result<bool, diesel::result::Error> {
        let affected = diesel::update(schema::reviews::table.filter(schema::reviews::id.eq(id)))
            .set((
                schema::reviews::flagged.eq(!approved),
                schema::reviews::reviewed.eq(true),
            ))
            .execute(db)
            .await?;

        if affected > 0 {
            info!(review_id = id, approved, "review moderated");
        }

        Ok(affected > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::summarize_ratings;

    #[test]
    fn empty_review_set_is_zero() {
        let summary = summarize_ratings(&[]);
        assert_eq!(summary.rating, 0.0);
        assert_eq!(summary.review_count, 0);
    }

    #[test]
    fn mean_is_rounded_to_one_decimal() {
        let summary = summarize_ratings(&[5, 4, 3]);
        assert_eq!(summary.rating, 4.0);
        assert_eq!(summary.review_count, 3);

        let summary = summarize_ratings(&[4, 5]);
        assert_eq!(summary.rating, 4.5);

        // 4/3 rounds down to 1.3, 5/3 up to 1.7.
        let summary = summarize_ratings(&[1, 1, 2]);
        assert_eq!(summary.rating, 1.3);

        let summary = summarize_ratings(&[1, 2, 2]);
        assert_eq!(summary.rating, 1.7);
    }

    #[test]
    fn summary_is_deterministic() {
        let ratings = [3, 5, 1, 4, 4, 2];
        assert_eq!(summarize_ratings(&ratings), summarize_ratings(&ratings));
    }
}
