pub mod error;
pub mod fairings;
pub mod guards;
pub mod routes;
pub mod search;
