use crate::error::Error;
use crate::guards;
use crate::search;
use aidex_db::models;
use aidex_db::Db;
use aidex_dto as dto;
use rocket::serde::json::Json;
use rocket::{get, post, put};
use rocket_okapi::openapi;

/// Convert a row into its DTO with the rating recomputed from the live
/// review set. The columns on the row are only a cache; read paths
/// always overlay a fresh summary.
pub(super) async fn with_live_summary(
    db: &mut Db,
    platform: models::Platform,
) -> Result<dto::platforms::Platform, Error> {
    let summary = models::Review::summary_for_platform(db, platform.id).await?;
    let mut platform = platform.into_dto()?;
    platform.rating = summary.rating;
    platform.review_count = summary.review_count;
    Ok(platform)
}

/// List the public directory, newest first. Optionally filter by tag.
/// `include_pending` is only honored for administrators.
#[openapi(tag = "Platforms", ignore = "db")]
#[get("/platforms?<filter..>")]
pub async fn platforms_list(
    mut db: Db,
    admin: Option<guards::admin::AdminGuard>,
    filter: dto::params::PlatformListParams,
) -> Result<Json<Vec<dto::platforms::Platform>>, Error> {
    let (page, limit) = filter.paging.validate().map_err(Error::Request)?;
    let include_pending = admin.is_some() && filter.include_pending.unwrap_or(false);

    let platforms =
        models::Platform::list(&mut db, page, limit, filter.tag.as_deref(), include_pending)
            .await?;

    let mut result = Vec::with_capacity(platforms.len());
    for platform in platforms {
        result.push(with_live_summary(&mut db, platform).await?);
    }

    Ok(Json(result))
}

/// Search the approved directory with a free-text query, most relevant
/// first. An empty query returns the directory unranked.
#[openapi(tag = "Platforms", ignore = "db")]
#[get("/platforms/search?<q>")]
pub async fn platforms_search(
    mut db: Db,
    q: Option<String>,
) -> Result<Json<Vec<dto::platforms::Platform>>, Error> {
    let rows = models::Platform::all_approved(&mut db).await?;

    let mut platforms = Vec::with_capacity(rows.len());
    for row in rows {
        platforms.push(with_live_summary(&mut db, row).await?);
    }

    let ranked = search::rank_platforms(platforms, q.as_deref().unwrap_or_default());

    Ok(Json(ranked))
}

#[openapi(tag = "Platforms", ignore = "db")]
#[get("/platforms/<platform_id>")]
pub async fn platforms_details(
    mut db: Db,
    platform_id: i32,
) -> Result<Json<dto::platforms::Platform>, Error> {
    let platform = models::Platform::get(&mut db, platform_id)
        .await?
        .ok_or(Error::RecordNotFound)?;

    Ok(Json(with_live_summary(&mut db, platform).await?))
}

/// Submit a new platform to the directory. The entry starts unapproved
/// and only shows up publicly once a moderator approves it.
#[openapi(tag = "Platforms", ignore = "db")]
#[post("/platforms", format = "application/json", data = "<form>")]
pub async fn platforms_create(
    mut db: Db,
    form: Json<dto::platforms::PlatformCreateRequest<'_>>,
) -> Result<Json<dto::platforms::PlatformCreateResponse>, Error> {
    let form = form.into_inner();
    form.validate()?;

    let platform = models::Platform::create(
        &mut db,
        form.name,
        form.description,
        form.logo.as_ref().map(url::Url::as_str),
        form.url.as_str(),
        form.tags,
        form.features,
        form.pricing.to_json(),
        form.api_available,
    )
    .await?;

    Ok(Json(dto::platforms::PlatformCreateResponse { id: platform.id }))
}

/// Edit a platform. The derived rating columns and the creation
/// timestamp cannot be edited.
#[openapi(tag = "Platforms", ignore = "db")]
#[put("/platforms/<platform_id>", format = "application/json", data = "<form>")]
pub async fn platforms_update(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
    platform_id: i32,
    form: Json<dto::platforms::PlatformUpdateRequest<'_>>,
) -> Result<Json<dto::Ok>, Error> {
    let form = form.into_inner();

    let found = models::Platform::update(
        &mut db,
        platform_id,
        form.name,
        form.description,
        form.logo.as_ref().map(url::Url::as_str),
        form.url.as_ref().map(url::Url::as_str),
        form.tags,
        form.features,
        form.pricing.as_ref().map(dto::platforms::Pricing::to_json),
        form.api_available,
    )
    .await?;

    if !found {
        return Err(Error::RecordNotFound);
    }

    Ok(Json(dto::Ok))
}
