use crate::db::Db;
use crate::schema;
use aidex_dto as dto;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use rocket_db_pools::diesel::{AsyncConnection, RunQueryDsl};
use scoped_futures::ScopedFutureExt;
use serde_json::Value as Json;

#[derive(Queryable, Debug, Identifiable, Selectable)]
#[diesel(table_name = schema::platforms)]
pub struct Platform {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub logo: Option<String>,
    pub url: String,
    pub tags: Vec<String>,
    pub features: Vec<String>,
    pub pricing: Json,
    pub rating: f64,
    pub review_count: i32,
    pub api_available: bool,
    pub approved: bool,
    pub created_at: DateTime<Utc>,
}

fn data_error(
    e: impl std::error::Error + Send + Sync + 'static,
) -> diesel::result::Error {
    diesel::result::Error::DeserializationError(Box::new(e))
}

impl Platform {
    /// Convert a row into its DTO, validating the pricing blob and the
    /// stored URLs at the boundary. A malformed row is a data-access
    /// error, not a value handed to callers.
    pub fn into_dto(self) -> Result<dto::platforms::Platform, diesel::result::Error> {
        let pricing = dto::platforms::Pricing::from_json(self.pricing).map_err(data_error)?;
        let url = url::Url::parse(&self.url).map_err(data_error)?;
        let logo = self
            .logo
            .as_deref()
            .map(url::Url::parse)
            .transpose()
            .map_err(data_error)?;

        Ok(dto::platforms::Platform {
            id: self.id,
            name: self.name,
            description: self.description,
            logo,
            url,
            tags: self.tags,
            features: self.features,
            pricing,
            rating: self.rating,
            review_count: self.review_count,
            api_available: self.api_available,
            approved: self.approved,
            created_at: self.created_at,
        })
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &mut Db,
        name: &str,
        description: &str,
        logo: Option<&str>,
        url: &str,
        tags: Vec<String>,
        features: Vec<String>,
        pricing: Json,
        api_available: bool,
    ) -> Result<Self, diesel::result::Error> {
        diesel::insert_into(schema::platforms::table)
            .values((
                schema::platforms::name.eq(name),
                schema::platforms::description.eq(description),
                schema::platforms::logo.eq(logo),
                schema::platforms::url.eq(url),
                schema::platforms::tags.eq(tags),
                schema::platforms::features.eq(features),
                schema::platforms::pricing.eq(pricing),
                schema::platforms::api_available.eq(api_available),
                // New submissions always start out of the directory.
                schema::platforms::approved.eq(false),
                schema::platforms::rating.eq(0f64),
                schema::platforms::review_count.eq(0),
            ))
            .returning(schema::platforms::all_columns)
            .get_result::<Self>(db)
            .await
    }

    pub async fn get(db: &mut Db, id: i32) -> Result<Option<Self>, diesel::result::Error> {
        schema::platforms::table
            .filter(schema::platforms::id.eq(id))
            .first(db)
            .await
            .optional()
    }

    pub async fn list(
        db: &mut Db,
        page: i64,
        limit: i64,
        tag: Option<&str>,
        include_pending: bool,
    ) -> Result<Vec<Self>, diesel::result::Error> {
        use schema::platforms::dsl;

        let mut query = schema::platforms::table.into_boxed();

        if !include_pending {
            query = query.filter(dsl::approved.eq(true));
        }
        if let Some(tag) = tag {
            query = query.filter(dsl::tags.contains(vec![tag.to_string()]));
        }

        query
            .order_by(dsl::created_at.desc())
            .offset(page * limit)
            .limit(limit)
            .load::<Self>(db)
            .await
    }

    /// The whole approved directory, in creation order. This is the
    /// corpus the search engine ranks.
    pub async fn all_approved(db: &mut Db) -> Result<Vec<Self>, diesel::result::Error> {
        use schema::platforms::dsl;

        schema::platforms::table
            .filter(dsl::approved.eq(true))
            .order_by(dsl::created_at.desc())
            .load::<Self>(db)
            .await
    }

    pub async fn pending(db: &mut Db) -> Result<Vec<Self>, diesel::result::Error> {
        use schema::platforms::dsl;

        schema::platforms::table
            .filter(dsl::approved.eq(false))
            .order_by(dsl::created_at.asc())
            .load::<Self>(db)
            .await
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        db: &mut Db,
        id: i32,
        name: Option<&'_ str>,
        description: Option<&'_ str>,
        logo: Option<&'_ str>,
        url: Option<&'_ str>,
        tags: Option<Vec<String>>,
        features: Option<Vec<String>>,
        pricing: Option<Json>,
        api_available: Option<bool>,
    ) -> Result<bool, diesel::result::Error> {
        #[derive(AsChangeset)]
        #[diesel(table_name = schema::platforms)]
        struct UpdateChangeset<'a> {
            name: Option<&'a str>,
            description: Option<&'a str>,
            logo: Option<&'a str>,
            url: Option<&'a str>,
            tags: Option<Vec<String>>,
            features: Option<Vec<String>>,
            pricing: Option<Json>,
            api_available: Option<bool>,
        }

        let changeset = UpdateChangeset {
            name,
            description,
            logo,
            url,
            tags,
            features,
            pricing,
            api_available,
        };

        // A body with no fields set is a no-op, not a query error.
        if changeset.name.is_none()
            && changeset.description.is_none()
            && changeset.logo.is_none()
            && changeset.url.is_none()
            && changeset.tags.is_none()
            && changeset.features.is_none()
            && changeset.pricing.is_none()
            && changeset.api_available.is_none()
        {
            return Ok(Self::get(db, id).await?.is_some());
        }

        let affected =
            diesel::update(schema::platforms::table.filter(schema::platforms::id.eq(id)))
                .set(changeset)
                .execute(db)
                .await?;

        Ok(affected > 0)
    }

    /// Transition an entry into the public directory. Idempotent; false
    /// only when the platform does not exist.
    pub async fn approve(db: &mut Db, id: i32) -> Result<bool, diesel::result::Error> {
        let affected =
            diesel::update(schema::platforms::table.filter(schema::platforms::id.eq(id)))
                .set(schema::platforms::approved.eq(true))
                .execute(db)
                .await?;

        Ok(affected > 0)
    }

    /// Remove a platform and all of its reviews in one transaction. A
    /// failure leaves both untouched.
    pub async fn delete_cascade(db: &mut Db, id: i32) -> Result<bool, diesel::result::Error> {
        db.transaction(|db| {
            async move {
                diesel::delete(
                    schema::reviews::table.filter(schema::reviews::platform_id.eq(id)),
                )
                .execute(db)
                .await?;

                let affected = diesel::delete(
                    schema::platforms::table.filter(schema::platforms::id.eq(id)),
                )
                .execute(db)
                .await?;

                Ok(affected > 0)
            }
            .scope_boxed()
        })
        .await
    }

    /// Refresh the cached rating columns from a freshly recomputed
    /// summary. The cache is a performance hint; read paths overlay the
    /// live summary regardless.
    pub async fn refresh_rating_cache(
        db: &mut Db,
        id: i32,
        summary: dto::reviews::RatingSummary,
    ) -> Result<(), diesel::result::Error> {
        diesel::update(schema::platforms::table.filter(schema::platforms::id.eq(id)))
            .set((
                schema::platforms::rating.eq(summary.rating),
                schema::platforms::review_count.eq(summary.review_count),
            ))
            .execute(db)
            .await?;

        Ok(())
    }

    /// Every tag currently carried by a platform row.
    pub async fn tags_in_use(db: &mut Db) -> Result<Vec<Vec<String>>, diesel::result::Error> {
        schema::platforms::table
            .select(schema::platforms::tags)
            .load::<Vec<String>>(db)
            .await
    }
}
