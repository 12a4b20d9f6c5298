//! Query string extractor
//!
//! The lookup endpoints answer "not banned" for anything they cannot read,
//! so an unparseable query string is treated like an empty one.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use std::convert::Infallible;
use tracing::debug;

/// Query string parameters, falling back to `T::default()`
#[derive(Debug, Clone, Default)]
pub struct QueryParams<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for QueryParams<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(params)) => Ok(QueryParams(params)),
            Err(e) => {
                debug!(
                    query = parts.uri.query(),
                    error = %e.body_text(),
                    "Ignoring unreadable query string"
                );
                Ok(QueryParams(T::default()))
            }
        }
    }
}
