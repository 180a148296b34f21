//! Transient toast notifications.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the notification model, `center` owns the lazily created
//! container and each toast's lifecycle. Rendering goes through the
//! [`ToastSurface`] seam so the lifecycle logic runs without a browser.

pub mod center;
pub mod types;

pub use center::{NotificationCenter, NotifyError, SurfaceError, ToastSurface};
pub use types::{Notification, NotificationId, Severity};
