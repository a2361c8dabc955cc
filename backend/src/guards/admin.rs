use crate::fairings::config::JwtKeys;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::{request, Request, State};
use rocket_okapi::OpenApiFromRequest;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// The claims of an administrator token. Who gets such a token is the
/// external identity provider's concern; this guard only verifies the
/// signature, the expiry and the `admin` claim. Route handlers behind
/// it can assume the caller is already authorized.
#[derive(Debug, Clone, Serialize, Deserialize, OpenApiFromRequest)]
pub struct AdminGuard {
    pub sub: String,
    pub admin: bool,
    pub exp: i64,
}

#[rocket::async_trait]
impl<'r> request::FromRequest<'r> for AdminGuard {
    type Error = String;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let keys = match request.guard::<&State<JwtKeys>>().await {
            Outcome::Success(keys) => keys,
            _ => {
                return Outcome::Error((
                    Status::InternalServerError,
                    "JWT keys not configured".to_string(),
                ))
            }
        };

        let token = request
            .headers()
            .get_one("Authorization")
            .and_then(|header| header.strip_prefix("Bearer "));

        let Some(token) = token else {
            return Outcome::Error((Status::Unauthorized, "Unauthorized".to_string()));
        };

        match jsonwebtoken::decode::<AdminGuard>(
            token,
            &keys.decoding,
            &jsonwebtoken::Validation::default(),
        ) {
            Ok(data) if data.claims.admin => Outcome::Success(data.claims),
            Ok(_) => Outcome::Error((Status::Forbidden, "Forbidden".to_string())),
            Err(e) => {
                warn!("invalid admin token: {e}");
                Outcome::Error((Status::Unauthorized, "Unauthorized".to_string()))
            }
        }
    }
}
