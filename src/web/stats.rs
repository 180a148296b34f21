//! DOM-backed stats board and `gloo-timers` ticker.

use std::time::Duration;

use gloo_timers::future::IntervalStream;

use super::describe_js;
use crate::stats::{StatField, StatsBoard, Ticker};

/// Writes counters into `[data-stat="<key>"]` elements.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomStatsBoard;

impl StatsBoard for DomStatsBoard {
    fn set_stat(&self, field: StatField, text: &str) -> bool {
        let Ok(document) = super::document() else {
            return false;
        };
        let selector = format!("[data-stat=\"{}\"]", field.key());
        match document.query_selector(&selector) {
            Ok(Some(element)) => {
                element.set_text_content(Some(text));
                true
            }
            Ok(None) => false,
            Err(err) => {
                log::warn!("bad stat selector {selector}: {}", describe_js(&err));
                false
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct IntervalTicker;

impl Ticker for IntervalTicker {
    type Ticks = IntervalStream;

    fn every(&self, period: Duration) -> IntervalStream {
        let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
        IntervalStream::new(millis)
    }
}
