//! # ioc-monitor-client
//!
//! WASM runtime for the IOC Monitor dashboard pages. The server renders the
//! HTML; this crate adds the interactive pieces on top of it: clipboard
//! copies with toast feedback, the periodic statistics refresh on the
//! dashboard route, and the search helper used by the search page.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`notify`] | Toast notifications and the [`notify::NotificationCenter`] |
//! | [`clipboard`] | Clipboard copy with a legacy `execCommand` fallback |
//! | [`stats`] | Dashboard statistics snapshot and the [`stats::StatsPoller`] |
//! | [`net`] | JSON transport seam, search queries and IOC wire types |
//! | [`config`] | Runtime configuration read from the host page |
//! | [`util`] | Display formatting helpers |
//!
//! Browser bindings (`web`, `app`) are compiled only with the `hydrate`
//! feature. Everything else builds natively and is tested against in-memory
//! fakes of the browser seams.

pub mod clipboard;
pub mod config;
pub mod net;
pub mod notify;
pub mod stats;
pub mod util;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod web;

#[cfg(test)]
mod test_fakes;
