//! Browser implementations of the runtime seams.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything here talks to `web-sys`, `gloo-net` or `gloo-timers` and is
//! compiled only with the `hydrate` feature. The logic these adapters feed
//! lives in `notify`, `clipboard`, `stats` and `net`.

pub mod clipboard;
pub mod http;
pub mod stats;
pub mod toast;

use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};
use wasm_bindgen::{JsCast, JsValue};

/// Spawns local tasks onto the browser microtask queue.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}

/// Current `location.pathname`, or an empty string outside a page.
#[must_use]
pub fn current_path() -> String {
    let Some(window) = web_sys::window() else {
        return String::new();
    };
    match window.location().pathname() {
        Ok(path) => path,
        Err(err) => {
            log::warn!("failed to read location.pathname: {}", describe_js(&err));
            String::new()
        }
    }
}

pub(crate) fn document() -> Result<web_sys::Document, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "no document".to_owned())
}

/// Best-effort human-readable text for a thrown JS value.
pub(crate) fn describe_js(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    format!("{value:?}")
}
