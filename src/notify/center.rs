//! Notification center: one lazily created container, many toasts.
//!
//! DESIGN
//! ======
//! The container handle lives inside the center instead of being looked up
//! globally. Each toast is presented through the [`ToastSurface`], and a
//! spawned task awaits the surface's dismissal future before dropping the
//! toast from the stack and the DOM. That task is the only removal path.
//!
//! All state sits behind `Rc<RefCell<_>>`: the browser event loop is single
//! threaded, so borrows never overlap across await points.

#[cfg(test)]
#[path = "center_test.rs"]
mod center_test;

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;

use futures::task::{LocalSpawn, LocalSpawnExt, SpawnError};
use thiserror::Error;

use super::types::{Notification, NotificationId, Severity};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    #[error("no attachment point for the notification container")]
    NoAttachmentPoint,
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    #[error("failed to schedule toast dismissal: {0}")]
    Spawn(#[from] SpawnError),
}

/// Rendering seam for toasts.
pub trait ToastSurface {
    /// Handle to the element that holds every toast.
    type Container: Clone + 'static;
    /// Resolves once the toast's hide transition has finished.
    type Dismissed: Future<Output = ()> + 'static;

    /// Find or create the container. Called at most once per center.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the page has nowhere to attach it.
    fn create_container(&self) -> Result<Self::Container, SurfaceError>;

    /// Append and show a toast.
    ///
    /// # Errors
    ///
    /// Returns [`SurfaceError`] if the toast cannot be rendered.
    fn present(
        &self,
        container: &Self::Container,
        notification: &Notification,
    ) -> Result<Self::Dismissed, SurfaceError>;

    /// Detach a dismissed toast.
    fn remove(&self, container: &Self::Container, id: NotificationId);
}

struct CenterState<C> {
    container: Option<C>,
    stack: Vec<Notification>,
    next_id: u64,
}

struct Inner<S: ToastSurface, P> {
    surface: S,
    spawner: P,
    state: RefCell<CenterState<S::Container>>,
}

impl<S: ToastSurface, P> Inner<S, P> {
    fn release(&self, container: &S::Container, id: NotificationId) {
        self.state.borrow_mut().stack.retain(|n| n.id != id);
        self.surface.remove(container, id);
    }
}

/// Creates, shows, and retires toast notifications.
///
/// Cloning is cheap and every clone drives the same container.
pub struct NotificationCenter<S: ToastSurface, P> {
    inner: Rc<Inner<S, P>>,
}

impl<S: ToastSurface, P> Clone for NotificationCenter<S, P> {
    fn clone(&self) -> Self {
        Self { inner: Rc::clone(&self.inner) }
    }
}

impl<S, P> NotificationCenter<S, P>
where
    S: ToastSurface + 'static,
    P: LocalSpawn + 'static,
{
    #[must_use]
    pub fn new(surface: S, spawner: P) -> Self {
        Self {
            inner: Rc::new(Inner {
                surface,
                spawner,
                state: RefCell::new(CenterState { container: None, stack: Vec::new(), next_id: 1 }),
            }),
        }
    }

    /// Show `message` until the user or the toast timer hides it.
    ///
    /// No deduplication and no upper bound: every call adds a toast.
    ///
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the container or toast cannot be rendered,
    /// or if the dismissal task cannot be scheduled.
    pub fn notify(&self, message: impl Into<String>, severity: Severity) -> Result<NotificationId, NotifyError> {
        let container = self.container()?;
        let notification = {
            let mut state = self.inner.state.borrow_mut();
            let id = NotificationId(state.next_id);
            state.next_id += 1;
            Notification { id, message: message.into(), severity }
        };
        let id = notification.id;

        let dismissed = self.inner.surface.present(&container, &notification)?;
        self.inner.state.borrow_mut().stack.push(notification);

        let inner = Rc::clone(&self.inner);
        let task_container = container.clone();
        let scheduled = self.inner.spawner.spawn_local(async move {
            dismissed.await;
            inner.release(&task_container, id);
        });
        if let Err(err) = scheduled {
            self.inner.release(&container, id);
            return Err(err.into());
        }

        log::debug!("toast {id} shown ({severity})");
        Ok(id)
    }

    /// Toasts currently on screen, oldest first.
    #[must_use]
    pub fn active(&self) -> Vec<Notification> {
        self.inner.state.borrow().stack.clone()
    }

    #[must_use]
    pub fn has_container(&self) -> bool {
        self.inner.state.borrow().container.is_some()
    }

    fn container(&self) -> Result<S::Container, SurfaceError> {
        let existing = self.inner.state.borrow().container.clone();
        if let Some(container) = existing {
            return Ok(container);
        }
        let created = self.inner.surface.create_container()?;
        self.inner.state.borrow_mut().container = Some(created.clone());
        Ok(created)
    }
}
