use crate::error::Error;
use aidex_db::models;
use aidex_db::Db;
use aidex_dto as dto;
use rocket::get;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

/// The full tag universe: the predefined vocabulary merged with every
/// custom tag in use, deduplicated and sorted.
#[openapi(tag = "Tags", ignore = "db")]
#[get("/tags")]
pub async fn tags(mut db: Db) -> Result<Json<dto::tags::TagList>, Error> {
    let tags = models::tags::tag_universe(&mut db).await?;

    Ok(Json(dto::tags::TagList { tags }))
}
