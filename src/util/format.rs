//! Formatting for IOC tables: timestamps and type badges.
//!
//! TRADE-OFFS
//! ==========
//! Locale formatting needs the browser's `Date`; native builds return the
//! raw timestamp unchanged so server-side and test paths stay deterministic.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::IocType;

/// Bootstrap colour for an IOC type badge. Unknown types are `secondary`.
#[must_use]
pub fn type_badge_color(kind: &str) -> &'static str {
    match kind.parse::<IocType>() {
        Ok(IocType::Ip) => "success",
        Ok(IocType::Domain) => "warning",
        Ok(IocType::Url) => "info",
        Err(_) => "secondary",
    }
}

/// Render `raw` in the user's locale, or return it unchanged if the browser
/// cannot parse it.
#[must_use]
pub fn format_date_time(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
