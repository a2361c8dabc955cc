use aidex_db::{run_migrations, AidexDbPool};
use aidex_dto as dto;
use backend::fairings::config::JwtKeys;
use backend::guards::admin::AdminGuard;
use backend::routes::{self, v1};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rocket::http::{ContentType, Header, Status};
use rocket::local::asynchronous::Client;
use serde_json::json;

const SECRET: &[u8] = b"moderation-harness-secret";

fn admin_bearer() -> Header<'static> {
    let claims = AdminGuard {
        sub: "moderator".to_string(),
        admin: true,
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(SECRET),
    )
    .expect("Token encoding failed");

    Header::new("Authorization", format!("Bearer {token}"))
}

async fn client(database_url: &str) -> Client {
    let figment = rocket::Config::figment()
        .merge(("databases.aidex_db.url", database_url.to_string()));

    let rocket = rocket::custom(figment)
        .mount("/", routes::routes())
        .mount("/api/v1", v1::routes())
        .attach(AidexDbPool::init())
        .manage(JwtKeys::from_base64(&STANDARD.encode(SECRET)));

    Client::tracked(rocket).await.expect("Rocket client failed")
}

// Walks a submission through its whole moderation life: created
// pending, approved twice (idempotent), edited with an empty body,
// reviewed, flagged, and finally deleted with its reviews. Needs a live
// database; set DATABASE_URL to run it.
#[rocket::async_test]
async fn moderation_lifecycle() {
    let Ok(database_url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL not set, skipping the moderation lifecycle test");
        return;
    };
    run_migrations(&database_url);
    let client = client(&database_url).await;

    // Submit a platform; it starts out of the public directory.
    let response = client
        .post("/api/v1/platforms")
        .header(ContentType::JSON)
        .body(
            json!({
                "name": "Nightjar",
                "description": "An assistant for drafting and editing long form text documents.",
                "url": "https://nightjar.example.com",
                "tags": ["Productivity"],
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let platform_id = response
        .into_json::<dto::platforms::PlatformCreateResponse>()
        .await
        .expect("Create response body")
        .id;

    let details = |id: i32| format!("/api/v1/platforms/{id}");
    let platform = client
        .get(details(platform_id))
        .dispatch()
        .await
        .into_json::<dto::platforms::Platform>()
        .await
        .expect("Platform body");
    assert!(!platform.approved);

    // Approving needs the admin token, and approving twice is fine.
    let approve = format!("/api/v1/admin/platforms/{platform_id}/approve");
    let response = client.post(approve.as_str()).dispatch().await;
    assert_eq!(response.status(), Status::Unauthorized);

    let response = client
        .post(approve.as_str())
        .header(admin_bearer())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let response = client
        .post(approve.as_str())
        .header(admin_bearer())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let platform = client
        .get(details(platform_id))
        .dispatch()
        .await
        .into_json::<dto::platforms::Platform>()
        .await
        .expect("Platform body");
    assert!(platform.approved);

    // An edit with no fields set is a no-op, not an error.
    let response = client
        .put(details(platform_id))
        .header(admin_bearer())
        .header(ContentType::JSON)
        .body("{}")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client
        .put(details(999_999_999))
        .header(admin_bearer())
        .header(ContentType::JSON)
        .body("{}")
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::NotFound);

    // Review the platform, then flag the review into the queue.
    let reviews = format!("/api/v1/platforms/{platform_id}/reviews");
    let response = client
        .post(reviews.as_str())
        .header(ContentType::JSON)
        .body(
            json!({
                "user_name": "sam",
                "rating": 4,
                "comment": "Solid drafting tool, quick onboarding.",
            })
            .to_string(),
        )
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);
    let review_id = response
        .into_json::<dto::reviews::Review>()
        .await
        .expect("Review body")
        .id;

    let response = client
        .post(format!("/api/v1/reviews/{review_id}/flag"))
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let in_queue = |queue: &[dto::reviews::Review]| queue.iter().any(|r| r.id == review_id);
    let queue = client
        .get("/api/v1/admin/reviews/flagged")
        .header(admin_bearer())
        .dispatch()
        .await
        .into_json::<Vec<dto::reviews::Review>>()
        .await
        .expect("Queue body");
    assert!(in_queue(&queue));

    // Deleting the platform takes its reviews with it: the details 404
    // and the flagged queue no longer knows the review.
    let response = client
        .delete(details(platform_id))
        .header(admin_bearer())
        .dispatch()
        .await;
    assert_eq!(response.status(), Status::Ok);

    let response = client.get(details(platform_id)).dispatch().await;
    assert_eq!(response.status(), Status::NotFound);

    let queue = client
        .get("/api/v1/admin/reviews/flagged")
        .header(admin_bearer())
        .dispatch()
        .await
        .into_json::<Vec<dto::reviews::Review>>()
        .await
        .expect("Queue body");
    assert!(!in_queue(&queue));
}
