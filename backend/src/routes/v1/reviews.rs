use crate::error::Error;
use aidex_db::models;
use aidex_db::Db;
use aidex_dto as dto;
use rocket::serde::json::Json;
use rocket::{get, post};
use rocket_okapi::openapi;
use tracing::info;

/// List a platform's reviews, newest first. Flagged reviews are hidden
/// unless `include_flagged` is set. An unknown platform id yields an
/// empty list, the same as a platform with no reviews.
#[openapi(tag = "Reviews", ignore = "db")]
#[get("/platforms/<platform_id>/reviews?<params..>")]
pub async fn reviews_list(
    mut db: Db,
    platform_id: i32,
    params: dto::params::ReviewListParams,
) -> Result<Json<Vec<dto::reviews::Review>>, Error> {
    let reviews = models::Review::list_for_platform(
        &mut db,
        platform_id,
        params.include_flagged.unwrap_or(false),
    )
    .await?;

    Ok(Json(reviews.into_iter().map(Into::into).collect()))
}

/// Post a review of a platform. The platform's cached rating is
/// refreshed from the full review set afterwards.
#[openapi(tag = "Reviews", ignore = "db")]
#[post(
    "/platforms/<platform_id>/reviews",
    format = "application/json",
    data = "<form>"
)]
pub async fn reviews_create(
    mut db: Db,
    platform_id: i32,
    form: Json<dto::reviews::ReviewCreateRequest<'_>>,
) -> Result<Json<dto::reviews::Review>, Error> {
    let form = form.into_inner();
    form.validate()?;

    let platform = models::Platform::get(&mut db, platform_id)
        .await?
        .ok_or(Error::RecordNotFound)?;

    let review = models::Review::create(
        &mut db,
        platform.id,
        form.user_name,
        form.rating,
        form.comment,
    )
    .await?;

    let summary = models::Review::summary_for_platform(&mut db, platform.id).await?;
    models::Platform::refresh_rating_cache(&mut db, platform.id, summary).await?;

    Ok(Json(review.into()))
}

/// Flag a review for moderation. Idempotent; flagging does not touch
/// the platform's aggregate.
#[openapi(tag = "Reviews", ignore = "db")]
#[post("/reviews/<review_id>/flag")]
pub async fn reviews_flag(mut db: Db, review_id: i32) -> Result<Json<dto::Ok>, Error> {
    if !models::Review::flag(&mut db, review_id).await? {
        return Err(Error::RecordNotFound);
    }

    info!(review_id, "review flagged");
    Ok(Json(dto::Ok))
}
