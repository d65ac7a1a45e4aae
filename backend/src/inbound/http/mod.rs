//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod fallback;
pub mod health;
pub mod json;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod screenings;
pub mod state;
#[cfg(test)]
pub mod test_utils;

pub use error::ApiResult;
