//! Networking for the dashboard REST endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the transport seam and its error type, `search` builds and
//! issues `/api/iocs` queries, and `types` holds the IOC wire schema.

pub mod api;
pub mod search;
pub mod types;

pub use api::{ApiError, JsonTransport};
pub use search::{SearchClient, SearchQuery};
pub use types::{IocRecord, IocType};
