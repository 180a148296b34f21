//! Dashboard statistics refresh.
//!
//! SYSTEM CONTEXT
//! ==============
//! `snapshot` decodes `/api/stats`; `poller` fetches it on a timer and
//! writes the counters into the page through the [`StatsBoard`] seam.

pub mod poller;
pub mod snapshot;

pub use poller::{PollStart, StatsBoard, StatsPoller, Ticker};
pub use snapshot::{StatField, StatsSnapshot};
