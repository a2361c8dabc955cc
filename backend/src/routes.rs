pub mod v1;

use rocket::http::Status;
use rocket::response::status::NoContent;
use rocket::{get, routes, Route};

#[get("/healthz")]
pub async fn health_handler() -> Result<NoContent, Status> {
    Ok(NoContent)
}

pub fn routes() -> Vec<Route> {
    routes![health_handler]
}
