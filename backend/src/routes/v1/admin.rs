use crate::error::Error;
use crate::guards;
use aidex_db::models;
use aidex_db::Db;
use aidex_dto as dto;
use rocket::serde::json::Json;
use rocket::{delete, get, post};
use rocket_okapi::openapi;
use tracing::info;

/// Submissions waiting for approval, oldest first.
#[openapi(tag = "Admin", ignore = "db")]
#[get("/admin/platforms/pending")]
pub async fn admin_platforms_pending(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
) -> Result<Json<Vec<dto::platforms::Platform>>, Error> {
    let rows = models::Platform::pending(&mut db).await?;

    let mut result = Vec::with_capacity(rows.len());
    for row in rows {
        result.push(super::platforms::with_live_summary(&mut db, row).await?);
    }

    Ok(Json(result))
}

/// Approve a submission into the public directory. Idempotent; there
/// is no path back to pending.
#[openapi(tag = "Admin", ignore = "db")]
#[post("/admin/platforms/<platform_id>/approve")]
pub async fn admin_platforms_approve(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
    platform_id: i32,
) -> Result<Json<dto::Ok>, Error> {
    if !models::Platform::approve(&mut db, platform_id).await? {
        return Err(Error::RecordNotFound);
    }

    info!(platform_id, "platform approved");
    Ok(Json(dto::Ok))
}

/// Delete a platform and all of its reviews.
#[openapi(tag = "Admin", ignore = "db")]
#[delete("/admin/platforms/<platform_id>")]
pub async fn admin_platforms_delete(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
    platform_id: i32,
) -> Result<Json<dto::Ok>, Error> {
    if !models::Platform::delete_cascade(&mut db, platform_id).await? {
        return Err(Error::RecordNotFound);
    }

    info!(platform_id, "platform deleted");
    Ok(Json(dto::Ok))
}

/// The moderation queue: flagged reviews with their platform's name,
/// newest first.
#[openapi(tag = "Admin", ignore = "db")]
#[get("/admin/reviews/flagged")]
pub async fn admin_reviews_flagged(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
) -> Result<Json<Vec<dto::reviews::Review>>, Error> {
    let flagged = models::Review::flagged_with_platform_name(&mut db).await?;

    Ok(Json(
        flagged
            .into_iter()
            .map(|(review, platform_name)| {
                let mut review: dto::reviews::Review = review.into();
                review.platform_name = Some(platform_name);
                review
            })
            .collect(),
    ))
}

/// Resolve a flag by approving the review: the flag is cleared and the
/// review is visible again.
#[openapi(tag = "Admin", ignore = "db")]
#[post("/admin/reviews/<review_id>/approve")]
pub async fn admin_reviews_approve(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
    review_id: i32,
) -> Result<Json<dto::Ok>, Error> {
    if !models::Review::verify(&mut db, review_id, true).await? {
        return Err(Error::RecordNotFound);
    }

    Ok(Json(dto::Ok))
}

/// Resolve a flag by rejecting the review: it stays flagged, hence
/// hidden, and is marked reviewed.
#[openapi(tag = "Admin", ignore = "db")]
#[post("/admin/reviews/<review_id>/reject")]
pub async fn admin_reviews_reject(
    mut db: Db,
    _admin: guards::admin::AdminGuard,
    review_id: i32,
) -> Result<Json<dto::Ok>, Error> {
    if !models::Review::verify(&mut db, review_id, false).await? {
        return Err(Error::RecordNotFound);
    }

    Ok(Json(dto::Ok))
}
