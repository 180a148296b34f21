//! IOC search against `GET /api/iocs`.
//!
//! A [`SearchQuery`] renders straight to a query string: `search` and
//! `limit` are always present, `type` only when a filter is set. The client
//! issues exactly one request per call and hands back whatever the server
//! returned; deciding what to show on failure is up to the caller.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use std::num::NonZeroU32;

use serde_json::Value;

use super::api::{ApiError, JsonTransport, decode};
use super::types::{IocRecord, IocType};
use crate::config::DEFAULT_SEARCH_LIMIT;

/// An immutable search request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
    ioc_type: Option<IocType>,
    limit: NonZeroU32,
}

impl SearchQuery {
    #[must_use]
    pub fn new(term: impl Into<String>) -> Self {
        Self { term: term.into(), ioc_type: None, limit: DEFAULT_SEARCH_LIMIT }
    }

    #[must_use]
    pub fn with_type(self, ioc_type: Option<IocType>) -> Self {
        Self { ioc_type, ..self }
    }

    #[must_use]
    pub fn with_limit(self, limit: NonZeroU32) -> Self {
        Self { limit, ..self }
    }

    /// Apply a caller-supplied limit. `None` and zero keep the current limit.
    #[must_use]
    pub fn with_requested_limit(self, limit: Option<u32>) -> Self {
        match limit.and_then(NonZeroU32::new) {
            Some(limit) => self.with_limit(limit),
            None => self,
        }
    }

    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }

    #[must_use]
    pub fn ioc_type(&self) -> Option<IocType> {
        self.ioc_type
    }

    #[must_use]
    pub fn limit(&self) -> NonZeroU32 {
        self.limit
    }

    /// Percent-encoded `search=..&limit=..[&type=..]`.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!("search={}&limit={}", urlencoding::encode(&self.term), self.limit);
        if let Some(ioc_type) = self.ioc_type {
            query.push_str("&type=");
            query.push_str(ioc_type.as_str());
        }
        query
    }

    #[must_use]
    pub fn url(&self, endpoint: &str) -> String {
        format!("{endpoint}?{}", self.query_string())
    }
}

pub struct SearchClient<T> {
    transport: T,
    endpoint: String,
    default_limit: NonZeroU32,
}

impl<T: JsonTransport> SearchClient<T> {
    #[must_use]
    pub fn new(transport: T, endpoint: impl Into<String>, default_limit: NonZeroU32) -> Self {
        Self { transport, endpoint: endpoint.into(), default_limit }
    }

    /// Start a query for `term` using this client's default limit.
    #[must_use]
    pub fn query(&self, term: impl Into<String>) -> SearchQuery {
        SearchQuery::new(term).with_limit(self.default_limit)
    }

    /// Run `query` and return the raw JSON body.
    ///
    /// # Errors
    ///
    /// Propagates the transport, status, or decode failure unchanged.
    pub async fn search(&self, query: &SearchQuery) -> Result<Value, ApiError> {
        let url = query.url(&self.endpoint);
        log::debug!("searching iocs: {url}");
        self.transport.get_json(&url).await
    }

    /// Run `query` and decode the body as IOC rows.
    ///
    /// # Errors
    ///
    /// Same as [`SearchClient::search`], plus [`ApiError::Decode`] when the
    /// body is not a list of records.
    pub async fn search_records(&self, query: &SearchQuery) -> Result<Vec<IocRecord>, ApiError> {
        decode(self.search(query).await?)
    }
}
