//! WASM entry point and the page-facing JavaScript API.
//!
//! `start` runs once when the module is instantiated: it installs the panic
//! hook and console logger, reads the page's runtime config, and arms the
//! stats refresh when the page is the dashboard. The exported functions keep
//! the global names the server-rendered templates call from inline handlers.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Promise;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

use crate::clipboard::ClipboardService;
use crate::config::{CONFIG_ELEMENT_ID, ConfigError, RuntimeConfig};
use crate::net::{IocType, SearchClient};
use crate::notify::{NotificationCenter, Severity};
use crate::stats::StatsPoller;
use crate::util::format;
use crate::web::clipboard::BrowserClipboard;
use crate::web::http::GlooTransport;
use crate::web::stats::{DomStatsBoard, IntervalTicker};
use crate::web::toast::BootstrapToasts;
use crate::web::{BrowserSpawner, current_path};

type Notifications = NotificationCenter<BootstrapToasts, BrowserSpawner>;

struct Runtime {
    notifications: Notifications,
    clipboard: ClipboardService<BrowserClipboard, BootstrapToasts, BrowserSpawner>,
    poller: StatsPoller<GlooTransport, DomStatsBoard, IntervalTicker, BrowserSpawner>,
    search: SearchClient<GlooTransport>,
}

impl Runtime {
    fn new(config: &RuntimeConfig) -> Self {
        let notifications = NotificationCenter::new(
            BootstrapToasts::new(config.toast_container_id.clone()),
            BrowserSpawner,
        );
        Self {
            clipboard: ClipboardService::new(BrowserClipboard, notifications.clone()),
            poller: StatsPoller::new(GlooTransport, DomStatsBoard, IntervalTicker, BrowserSpawner, config),
            search: SearchClient::new(GlooTransport, config.search_endpoint.clone(), config.default_search_limit),
            notifications,
        }
    }
}

thread_local! {
    static RUNTIME: RefCell<Option<Rc<Runtime>>> = const { RefCell::new(None) };
}

fn read_config() -> Result<RuntimeConfig, ConfigError> {
    let Ok(document) = crate::web::document() else {
        return Ok(RuntimeConfig::default());
    };
    let raw = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => RuntimeConfig::from_json(&raw),
        _ => Ok(RuntimeConfig::default()),
    }
}

fn install(config: &RuntimeConfig) -> Rc<Runtime> {
    RUNTIME.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(runtime) = slot.as_ref() {
            return Rc::clone(runtime);
        }
        let runtime = Rc::new(Runtime::new(config));
        *slot = Some(Rc::clone(&runtime));
        runtime
    })
}

fn runtime() -> Rc<Runtime> {
    let installed = RUNTIME.with(|slot| slot.borrow().clone());
    installed.unwrap_or_else(|| install(&load_config()))
}

fn load_config() -> RuntimeConfig {
    read_config().unwrap_or_else(|err| {
        log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
        RuntimeConfig::default()
    })
}

fn js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let loaded = read_config();
    let level = loaded.as_ref().map_or(log::Level::Info, RuntimeConfig::log_level);
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("console logger already installed: {err}");
    }
    let config = match loaded {
        Ok(config) => config,
        Err(err) => {
            log::error!("ignoring #{CONFIG_ELEMENT_ID}: {err}");
            RuntimeConfig::default()
        }
    };

    let runtime = install(&config);
    let path = current_path();
    match runtime.poller.start(&path) {
        Ok(state) => log::debug!("stats refresh on {path}: {state:?}"),
        Err(err) => log::error!("failed to start stats refresh: {err}"),
    }
}

/// Copy `text` to the clipboard. Resolves to whether the copy succeeded.
#[wasm_bindgen(js_name = copyToClipboard)]
pub fn copy_to_clipboard(text: String) -> Promise {
    let runtime = runtime();
    future_to_promise(async move {
        let outcome = runtime.clipboard.copy(&text).await;
        Ok(JsValue::from_bool(outcome.copied))
    })
}

/// Show a toast. Unknown or missing severities render as `success`.
#[wasm_bindgen(js_name = showToast)]
pub fn show_toast(message: String, severity: Option<String>) -> Result<(), JsValue> {
    let severity = match severity.as_deref().map(str::parse::<Severity>) {
        None => Severity::default(),
        Some(Ok(severity)) => severity,
        Some(Err(unknown)) => {
            log::debug!("unknown toast severity {unknown:?}, using success");
            Severity::default()
        }
    };
    runtime()
        .notifications
        .notify(message, severity)
        .map(|_| ())
        .map_err(js_error)
}

/// Search IOCs. Resolves to the decoded response body; rejects with the
/// error text on transport, status, or decode failure.
///
/// A missing or zero `limit` is sent as the configured default limit, not as
/// `limit=0`.
#[wasm_bindgen(js_name = performSearch)]
pub fn perform_search(term: String, ioc_type: Option<String>, limit: Option<u32>) -> Promise {
    let runtime = runtime();
    future_to_promise(async move {
        let ioc_type = IocType::parse_filter(ioc_type.as_deref().unwrap_or_default()).map_err(js_error)?;
        let query = runtime.search.query(term).with_type(ioc_type).with_requested_limit(limit);
        let body = runtime.search.search(&query).await.map_err(|err| {
            log::error!("search failed: {err}");
            js_error(err)
        })?;
        js_sys::JSON::parse(&body.to_string())
    })
}

/// Refresh the statistics cards once, outside the timer. Resolves to `false`
/// when a refresh was already outstanding and this call did not fetch.
#[wasm_bindgen(js_name = updateDashboardStats)]
pub fn update_dashboard_stats() -> Promise {
    let runtime = runtime();
    future_to_promise(async move {
        match runtime.poller.refresh().await {
            Ok(Some(_)) => Ok(JsValue::TRUE),
            Ok(None) => {
                log::debug!("stats refresh already outstanding");
                Ok(JsValue::FALSE)
            }
            Err(err) => {
                log::warn!("failed to update stats: {err}");
                Err(js_error(err))
            }
        }
    })
}

#[wasm_bindgen(js_name = formatDateTime)]
pub fn format_date_time(raw: &str) -> String {
    format::format_date_time(raw)
}

#[wasm_bindgen(js_name = getTypeBadgeColor)]
pub fn get_type_badge_color(kind: &str) -> String {
    format::type_badge_color(kind).to_owned()
}
