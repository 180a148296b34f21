//! IOC wire schema returned by `/api/iocs`.
//!
//! DESIGN
//! ======
//! `ioc_type` stays a plain string on [`IocRecord`] so records with types
//! this client does not know about still decode; [`IocRecord::kind`] gives
//! the typed view.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::api::ApiError;

/// Indicator category used for filtering searches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IocType {
    Ip,
    Domain,
    Url,
}

impl IocType {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ip => "ip",
            Self::Domain => "domain",
            Self::Url => "url",
        }
    }

    /// Parse an optional filter value. Empty or whitespace means no filter.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownType`] for a non-empty unknown name.
    pub fn parse_filter(raw: &str) -> Result<Option<Self>, ApiError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        trimmed.parse().map(Some)
    }
}

impl fmt::Display for IocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IocType {
    type Err = ApiError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw {
            "ip" => Ok(Self::Ip),
            "domain" => Ok(Self::Domain),
            "url" => Ok(Self::Url),
            other => Err(ApiError::UnknownType(other.to_owned())),
        }
    }
}

/// One detected indicator, as stored by the monitor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IocRecord {
    pub id: i64,
    pub ioc_value: String,
    pub ioc_type: String,
    #[serde(default)]
    pub source_chat_id: Option<i64>,
    #[serde(default)]
    pub source_chat_title: Option<String>,
    #[serde(default)]
    pub source_message_id: Option<i64>,
    #[serde(default)]
    pub message_content: Option<String>,
    #[serde(default)]
    pub sender_id: Option<i64>,
    #[serde(default)]
    pub sender_username: Option<String>,
    #[serde(default)]
    pub detected_at: Option<String>,
}

impl IocRecord {
    #[must_use]
    pub fn kind(&self) -> Option<IocType> {
        self.ioc_type.parse().ok()
    }
}
