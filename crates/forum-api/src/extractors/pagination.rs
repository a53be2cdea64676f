//! Pagination extractor
//!
//! Extracts page-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_COUNT: i64 = 5;
/// Maximum page size
const MAX_COUNT: i64 = 50;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PageParams {
    /// Zero-based page number
    #[serde(default)]
    pub page: Option<i64>,
    /// Items per page
    #[serde(default)]
    pub count: Option<i64>,
}

/// Validated pagination parameters
#[derive(Debug, Clone, Copy)]
pub struct Page {
    /// Zero-based page number
    pub page: i64,
    /// Items per page (validated to 1-50)
    pub count: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            page: 0,
            count: DEFAULT_COUNT,
        }
    }
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self {
            page: params.page.unwrap_or(0).max(0),
            count: params.count.unwrap_or(DEFAULT_COUNT).clamp(1, MAX_COUNT),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Page
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Ok(Page::from(params))
    }
}
