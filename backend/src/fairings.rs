pub mod config;
pub mod cors;
