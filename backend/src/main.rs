use aidex_db::{run_migrations, AidexDbPool};
use backend::fairings;
use backend::routes::{self, v1};
use rocket::figment::providers::Env;
use rocket_okapi::rapidoc::{make_rapidoc, GeneralConfig, HideShowConfig, RapiDocConfig};
use rocket_okapi::settings::UrlObject;
use rocket_okapi::swagger_ui::{make_swagger_ui, SwaggerUIConfig};
use std::env;

#[rocket::launch]
async fn rocket() -> _ {
    // The order is first, local environment variables, then global ones,
    // then only use development if in debug mode.
    dotenvy::from_filename(".env.local").ok();
    dotenvy::dotenv().ok();

    #[cfg(debug_assertions)]
    dotenvy::from_filename(".env.development").ok();

    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set.");
    run_migrations(&database_url);

    let figment = rocket::Config::figment()
        .merge(("databases.aidex_db.url", database_url))
        .merge(Env::prefixed("APP_").split("_"));

    let secret_key = figment
        .find_value("secret_key")
        .expect("No secret key.")
        .into_string()
        .unwrap();
    let jwt_secret = env::var("JWT_SECRET").unwrap_or_else(|_| secret_key.clone());

    let prometheus = rocket_prometheus::PrometheusMetrics::new();

    rocket::custom(figment)
        // The health endpoint.
        .mount("/", routes::routes())
        // The v1 actual API endpoints.
        .mount("/api/v1", v1::routes())
        .mount(
            "/api/swagger",
            make_swagger_ui(&SwaggerUIConfig {
                url: "/api/v1/openapi.json".to_owned(),
                ..Default::default()
            }),
        )
        .mount(
            "/api/rapidoc/",
            make_rapidoc(&RapiDocConfig {
                general: GeneralConfig {
                    spec_urls: vec![UrlObject::new("General", "../openapi.json")],
                    ..Default::default()
                },
                hide_show: HideShowConfig {
                    allow_spec_url_load: false,
                    allow_spec_file_load: false,
                    ..Default::default()
                },
                ..Default::default()
            }),
        )
        .mount("/metrics", prometheus.clone())
        .attach(AidexDbPool::init())
        .attach(prometheus)
        .attach(fairings::cors::Cors)
        .manage(fairings::config::JwtKeys::from_base64(&jwt_secret))
}
