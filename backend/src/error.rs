use aidex_dto::JsonError;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket_okapi::gen::OpenApiGenerator;
use rocket_okapi::okapi::openapi3::Responses;
use rocket_okapi::response::OpenApiResponderInner;
use std::fmt;
use tracing::error;

/// Every expected failure mode of an operation. No operation is fatal
/// to the process; collaborator failures become a 5xx response and the
/// server keeps serving.
#[derive(Debug)]
pub enum Error {
    Request(String),
    Validation(String),
    Database(String),
    RecordNotFound,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Request(message) => f.write_str(message),
            Error::Validation(message) => f.write_str(message),
            Error::Database(message) => f.write_str(message),
            Error::RecordNotFound => f.write_str("Record not found"),
        }
    }
}

impl<'a> rocket::response::Responder<'a, 'a> for Error {
    fn respond_to(self, request: &'a rocket::request::Request<'_>) -> rocket::response::Result<'a> {
        let status = match self {
            Error::Request(_) | Error::Validation(_) => Status::BadRequest,
            Error::Database(_) => Status::InternalServerError,
            Error::RecordNotFound => Status::NotFound,
        };

        let json = JsonError::from((status, self.to_string()));

        rocket::response::Response::build_from(Json(json).respond_to(request)?)
            .status(status)
            .ok()
    }
}

impl OpenApiResponderInner for Error {
    fn responses(_gen: &mut OpenApiGenerator) -> rocket_okapi::Result<Responses> {
        Ok(Responses::default())
    }
}

impl From<diesel::result::Error> for Error {
    fn from(value: diesel::result::Error) -> Self {
        match value {
            diesel::result::Error::NotFound => Error::RecordNotFound,
            value => {
                error!("database error: {value}");
                Error::Database(value.to_string())
            }
        }
    }
}

impl From<aidex_dto::error::ValidationError> for Error {
    fn from(value: aidex_dto::error::ValidationError) -> Self {
        Error::Validation(value.to_string())
    }
}

impl<'a> From<rocket::form::Errors<'a>> for Error {
    fn from(value: rocket::form::Errors<'a>) -> Self {
        Error::Request(value.to_string())
    }
}
