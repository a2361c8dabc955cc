pub mod models;
pub mod schema;

mod db;
pub use db::*;
