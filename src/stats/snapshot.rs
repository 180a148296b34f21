//! Dashboard statistics as served by `GET /api/stats`.
//!
//! DESIGN
//! ======
//! The server only emits `<type>_count` keys for types that have rows, so
//! any of the four counters may be missing. Missing and `null` counters read
//! as zero; extra keys such as `unique_iocs` are ignored. The body itself
//! must be a JSON object: arrays and scalars are decode errors.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One of the four statistic cards on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StatField {
    TotalIocs,
    IpCount,
    DomainCount,
    UrlCount,
}

impl StatField {
    pub const ALL: [Self; 4] = [Self::TotalIocs, Self::IpCount, Self::DomainCount, Self::UrlCount];

    /// Response key, also used as the element's `data-stat` value.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::TotalIocs => "total_iocs",
            Self::IpCount => "ip_count",
            Self::DomainCount => "domain_count",
            Self::UrlCount => "url_count",
        }
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub total_iocs: u64,
    pub ip_count: u64,
    pub domain_count: u64,
    pub url_count: u64,
}

impl<'de> Deserialize<'de> for StatsSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Objects only; arrays and scalars never map onto the counters.
        let body = Map::<String, Value>::deserialize(deserializer)?;
        let count = |field: StatField| {
            count_from(body.get(field.key())).map_err(|msg| D::Error::custom(format!("{field}: {msg}")))
        };
        Ok(Self {
            total_iocs: count(StatField::TotalIocs)?,
            ip_count: count(StatField::IpCount)?,
            domain_count: count(StatField::DomainCount)?,
            url_count: count(StatField::UrlCount)?,
        })
    }
}

impl StatsSnapshot {
    #[must_use]
    pub fn get(&self, field: StatField) -> u64 {
        match field {
            StatField::TotalIocs => self.total_iocs,
            StatField::IpCount => self.ip_count,
            StatField::DomainCount => self.domain_count,
            StatField::UrlCount => self.url_count,
        }
    }
}

fn count_from(value: Option<&Value>) -> Result<u64, &'static str> {
    match value {
        None | Some(Value::Null) => Ok(0),
        Some(Value::Number(number)) => {
            if let Some(int) = number.as_u64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= 0.0
                && float <= u64::MAX as f64
            {
                return Ok(float as u64);
            }
            Err("expected a non-negative integer count")
        }
        Some(_) => Err("expected a number"),
    }
}
