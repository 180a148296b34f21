//! Clipboard copy with toast feedback.
//!
//! Uses the async Clipboard API when the page runs in a secure context and
//! falls back to the legacy `execCommand("copy")` path otherwise. Either way
//! the caller never sees an error: the outcome is reported as exactly one
//! toast, emitted after the copy attempt has resolved.
//!
//! ERROR HANDLING
//! ==============
//! The legacy path needs a temporary `<textarea>` in the document. It is held
//! by a guard that removes it on drop, so no exit path can leak it.

#[cfg(test)]
#[path = "clipboard_test.rs"]
mod clipboard_test;

use std::fmt;
use std::future::Future;

use futures::task::LocalSpawn;
use thiserror::Error;

use crate::notify::{NotificationCenter, Severity, ToastSurface};

pub const COPIED_MESSAGE: &str = "Copied to clipboard!";
pub const COPY_FAILED_MESSAGE: &str = "Failed to copy";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard write rejected: {0}")]
    WriteRejected(String),
    #[error("could not create scratch element: {0}")]
    Scratch(String),
    #[error("copy command failed: {0}")]
    CommandFailed(String),
    #[error("copy command was refused by the browser")]
    CommandRefused,
}

/// Browser clipboard capabilities.
pub trait ClipboardHost {
    /// Off-screen editable element used by the legacy path.
    type Scratch;

    /// Whether the async Clipboard API is usable in this context.
    fn has_secure_clipboard(&self) -> bool;

    /// Write `text` through the async Clipboard API.
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;

    /// Insert an off-screen element holding `text` and select its contents.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError::Scratch`] if the element cannot be created.
    fn create_scratch(&self, text: &str) -> Result<Self::Scratch, ClipboardError>;

    /// Run the legacy copy command against the current selection.
    ///
    /// # Errors
    ///
    /// Returns [`ClipboardError`] if the command throws or is refused.
    fn exec_copy(&self, scratch: &Self::Scratch) -> Result<(), ClipboardError>;

    fn remove_scratch(&self, scratch: &Self::Scratch);
}

/// Which mechanism a copy went through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyPath {
    Async,
    Legacy,
}

impl fmt::Display for CopyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Async => f.write_str("clipboard api"),
            Self::Legacy => f.write_str("legacy copy"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CopyOutcome {
    pub path: CopyPath,
    pub copied: bool,
}

struct ScratchGuard<'a, H: ClipboardHost> {
    host: &'a H,
    scratch: H::Scratch,
}

impl<H: ClipboardHost> Drop for ScratchGuard<'_, H> {
    fn drop(&mut self) {
        self.host.remove_scratch(&self.scratch);
    }
}

pub struct ClipboardService<H, S: ToastSurface, P> {
    host: H,
    notifications: NotificationCenter<S, P>,
}

impl<H, S, P> ClipboardService<H, S, P>
where
    H: ClipboardHost,
    S: ToastSurface + 'static,
    P: LocalSpawn + 'static,
{
    #[must_use]
    pub fn new(host: H, notifications: NotificationCenter<S, P>) -> Self {
        Self { host, notifications }
    }

    /// Copy `text` and report the result as a toast.
    pub async fn copy(&self, text: &str) -> CopyOutcome {
        let (path, result) = if self.host.has_secure_clipboard() {
            (CopyPath::Async, self.host.write_text(text).await)
        } else {
            (CopyPath::Legacy, self.legacy_copy(text))
        };

        let shown = match &result {
            Ok(()) => self.notifications.notify(COPIED_MESSAGE, Severity::Success),
            Err(err) => {
                log::error!("failed to copy via {path}: {err}");
                self.notifications.notify(COPY_FAILED_MESSAGE, Severity::Danger)
            }
        };
        if let Err(err) = shown {
            log::error!("copy feedback toast failed: {err}");
        }

        CopyOutcome { path, copied: result.is_ok() }
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let guard = ScratchGuard { host: &self.host, scratch: self.host.create_scratch(text)? };
        self.host.exec_copy(&guard.scratch)
    }
}
