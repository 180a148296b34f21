//! Bootstrap toast surface.
//!
//! Toasts are plain Bootstrap 5 markup driven by `bootstrap.Toast`. The
//! dismissal future resolves on the toast's `hidden.bs.toast` event, which
//! Bootstrap fires after the fade-out transition (timer or close button).
//!
//! The message goes in through `textContent`, so toast text is never parsed
//! as HTML.

use futures::channel::oneshot;
use futures::future::LocalBoxFuture;
use futures::FutureExt;
use wasm_bindgen::prelude::*;
use web_sys::{AddEventListenerOptions, Document, Element};

use super::describe_js;
use crate::notify::{Notification, NotificationId, SurfaceError, ToastSurface};

const CONTAINER_CLASS: &str = "toast-container position-fixed top-0 end-0 p-3";
const CONTAINER_STYLE: &str = "z-index: 1100;";
const TOAST_ID_ATTR: &str = "data-toast-id";
const HIDDEN_EVENT: &str = "hidden.bs.toast";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap, js_name = Toast)]
    type BootstrapToast;

    #[wasm_bindgen(catch, constructor, js_namespace = bootstrap, js_class = "Toast")]
    fn new(element: &Element) -> Result<BootstrapToast, JsValue>;

    #[wasm_bindgen(method)]
    fn show(this: &BootstrapToast);
}

fn dom_err(err: JsValue) -> SurfaceError {
    SurfaceError::Dom(describe_js(&err))
}

#[derive(Clone, Debug)]
pub struct BootstrapToasts {
    container_id: String,
}

impl BootstrapToasts {
    #[must_use]
    pub fn new(container_id: impl Into<String>) -> Self {
        Self { container_id: container_id.into() }
    }

    fn toast_element(document: &Document, notification: &Notification) -> Result<Element, SurfaceError> {
        let toast = document.create_element("div").map_err(dom_err)?;
        toast.set_class_name(&format!(
            "toast align-items-center text-white bg-{} border-0",
            notification.severity.as_str()
        ));
        toast.set_attribute("role", "alert").map_err(dom_err)?;
        toast
            .set_attribute(TOAST_ID_ATTR, &notification.id.to_string())
            .map_err(dom_err)?;

        let row = document.create_element("div").map_err(dom_err)?;
        row.set_class_name("d-flex");

        let body = document.create_element("div").map_err(dom_err)?;
        body.set_class_name("toast-body");
        body.set_text_content(Some(&notification.message));

        let close = document.create_element("button").map_err(dom_err)?;
        close.set_class_name("btn-close btn-close-white me-2 m-auto");
        close.set_attribute("type", "button").map_err(dom_err)?;
        close.set_attribute("data-bs-dismiss", "toast").map_err(dom_err)?;
        close.set_attribute("aria-label", "Close").map_err(dom_err)?;

        row.append_child(&body).map_err(dom_err)?;
        row.append_child(&close).map_err(dom_err)?;
        toast.append_child(&row).map_err(dom_err)?;
        Ok(toast)
    }
}

impl ToastSurface for BootstrapToasts {
    type Container = Element;
    type Dismissed = LocalBoxFuture<'static, ()>;

    fn create_container(&self) -> Result<Element, SurfaceError> {
        let document = super::document().map_err(SurfaceError::Dom)?;
        if let Some(existing) = document.get_element_by_id(&self.container_id) {
            return Ok(existing);
        }

        let container = document.create_element("div").map_err(dom_err)?;
        container.set_id(&self.container_id);
        container.set_class_name(CONTAINER_CLASS);
        container.set_attribute("style", CONTAINER_STYLE).map_err(dom_err)?;
        let body = document.body().ok_or(SurfaceError::NoAttachmentPoint)?;
        body.append_child(&container).map_err(dom_err)?;
        Ok(container)
    }

    fn present(&self, container: &Element, notification: &Notification) -> Result<Self::Dismissed, SurfaceError> {
        let document = super::document().map_err(SurfaceError::Dom)?;
        let toast = Self::toast_element(&document, notification)?;
        container.append_child(&toast).map_err(dom_err)?;

        let (tx, rx) = oneshot::channel::<()>();
        let on_hidden = Closure::once_into_js(move || {
            if tx.send(()).is_err() {
                log::debug!("toast dismissed after its owner went away");
            }
        });
        let options = AddEventListenerOptions::new();
        options.set_once(true);
        let listening = toast.add_event_listener_with_callback_and_add_event_listener_options(
            HIDDEN_EVENT,
            on_hidden.unchecked_ref(),
            &options,
        );
        let shown = listening.and_then(|()| BootstrapToast::new(&toast)).map(|handle| handle.show());
        if let Err(err) = shown {
            toast.remove();
            return Err(dom_err(err));
        }

        let id = notification.id;
        Ok(async move {
            if rx.await.is_err() {
                log::debug!("toast {id} listener dropped before hiding");
            }
        }
        .boxed_local())
    }

    fn remove(&self, container: &Element, id: NotificationId) {
        let selector = format!("[{TOAST_ID_ATTR}=\"{id}\"]");
        match container.query_selector(&selector) {
            Ok(Some(toast)) => toast.remove(),
            Ok(None) => log::debug!("toast {id} already gone"),
            Err(err) => log::warn!("failed to find toast {id}: {}", describe_js(&err)),
        }
    }
}
