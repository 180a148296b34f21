//! Display helpers shared by the dashboard pages.

pub mod format;
