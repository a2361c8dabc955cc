use rocket_okapi::openapi_get_routes;

mod admin;
mod platforms;
mod reviews;
mod tags;

pub fn routes() -> Vec<rocket::Route> {
    openapi_get_routes![
        admin::admin_platforms_pending,
        admin::admin_platforms_approve,
        admin::admin_platforms_delete,
        admin::admin_reviews_flagged,
        admin::admin_reviews_approve,
        admin::admin_reviews_reject,
        platforms::platforms_list,
        platforms::platforms_search,
        platforms::platforms_details,
        platforms::platforms_create,
        platforms::platforms_update,
        reviews::reviews_list,
        reviews::reviews_create,
        reviews::reviews_flag,
        tags::tags,
    ]
}
