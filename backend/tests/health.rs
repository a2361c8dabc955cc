use aidex_db::AidexDbPool;
use backend::routes::{self, v1};
use rocket::http::Status;
use rocket::local::asynchronous::Client;

// Endpoints that touch the database are not exercised here; the pool
// must still be attached for its connection guards to pass ignition.
// Pool creation does not connect, so no live database is required.
#[rocket::async_test]
async fn health_and_route_wiring() {
    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost:5432/aidex".to_string());
    let figment =
        rocket::Config::figment().merge(("databases.aidex_db.url", database_url));

    let rocket = rocket::custom(figment)
        .mount("/", routes::routes())
        .mount("/api/v1", v1::routes())
        .attach(AidexDbPool::init());
    let client = Client::tracked(rocket).await.expect("Rocket client failed");

    let response = client.get("/healthz").dispatch().await;
    assert_eq!(response.status(), Status::NoContent);
}
