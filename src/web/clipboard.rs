//! Browser [`ClipboardHost`] backed by `navigator.clipboard` and
//! `document.execCommand("copy")`.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use super::describe_js;
use crate::clipboard::{ClipboardError, ClipboardHost};

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl BrowserClipboard {
    fn navigator_clipboard() -> Option<web_sys::Clipboard> {
        web_sys::window()?.navigator().clipboard()
    }
}

impl ClipboardHost for BrowserClipboard {
    type Scratch = HtmlTextAreaElement;

    fn has_secure_clipboard(&self) -> bool {
        let secure = web_sys::window().is_some_and(|w| w.is_secure_context());
        secure && Self::navigator_clipboard().is_some()
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = Self::navigator_clipboard()
            .ok_or_else(|| ClipboardError::WriteRejected("navigator.clipboard unavailable".to_owned()))?;
        JsFuture::from(clipboard.write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| ClipboardError::WriteRejected(describe_js(&err)))
    }

    fn create_scratch(&self, text: &str) -> Result<HtmlTextAreaElement, ClipboardError> {
        let scratch_err = |err: JsValue| ClipboardError::Scratch(describe_js(&err));
        let document = super::document().map_err(ClipboardError::Scratch)?;
        let body = document
            .body()
            .ok_or_else(|| ClipboardError::Scratch("document has no body".to_owned()))?;

        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .map_err(scratch_err)?
            .dyn_into()
            .map_err(|_| ClipboardError::Scratch("created element is not a textarea".to_owned()))?;
        area.set_value(text);
        area.set_read_only(true);
        let style = area.style();
        style.set_property("position", "fixed").map_err(scratch_err)?;
        style.set_property("left", "-9999px").map_err(scratch_err)?;
        style.set_property("top", "0").map_err(scratch_err)?;

        body.append_child(&area).map_err(scratch_err)?;
        if let Err(err) = area.focus() {
            log::debug!("scratch textarea refused focus: {}", describe_js(&err));
        }
        area.select();
        Ok(area)
    }

    #[allow(deprecated)]
    fn exec_copy(&self, _scratch: &HtmlTextAreaElement) -> Result<(), ClipboardError> {
        let document: HtmlDocument = super::document()
            .map_err(ClipboardError::CommandFailed)?
            .dyn_into()
            .map_err(|_| ClipboardError::CommandFailed("not an HTML document".to_owned()))?;
        match document.exec_command("copy") {
            Ok(true) => Ok(()),
            Ok(false) => Err(ClipboardError::CommandRefused),
            Err(err) => Err(ClipboardError::CommandFailed(describe_js(&err))),
        }
    }

    fn remove_scratch(&self, scratch: &HtmlTextAreaElement) {
        scratch.remove();
    }
}
