//! Axum extractors for request handling

mod json;
mod query;

pub use json::JsonBody;
pub use query::QueryParams;
