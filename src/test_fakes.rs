//! In-memory stand-ins for the browser seams.
//!
//! Each fake is a cheap `Rc` handle: hand one clone to the component under
//! test and keep another to inspect or drive it.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet, VecDeque};
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::channel::{mpsc, oneshot};
use futures::future::LocalBoxFuture;
use serde_json::Value;

use crate::clipboard::{ClipboardError, ClipboardHost};
use crate::net::{ApiError, JsonTransport};
use crate::notify::{Notification, NotificationId, Severity, SurfaceError, ToastSurface};
use crate::stats::{StatField, StatsBoard, Ticker};

// =============================================================
// Toast surface
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeContainer(pub usize);

#[derive(Default)]
pub struct SurfaceLog {
    pub containers_created: usize,
    pub no_attachment_point: bool,
    pub presented: Vec<Notification>,
    pub on_screen: Vec<NotificationId>,
    dismissers: HashMap<NotificationId, oneshot::Sender<()>>,
}

#[derive(Clone, Default)]
pub struct FakeSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
}

impl FakeSurface {
    pub fn without_attachment_point() -> Self {
        let surface = Self::default();
        surface.log.borrow_mut().no_attachment_point = true;
        surface
    }

    /// Finish the hide transition of one toast.
    pub fn dismiss(&self, id: NotificationId) {
        let sender = self.log.borrow_mut().dismissers.remove(&id);
        if let Some(sender) = sender {
            assert!(sender.send(()).is_ok(), "dismissal receiver dropped for toast {id}");
        }
    }

    pub fn presented_with(&self, severity: Severity) -> Vec<Notification> {
        self.log
            .borrow()
            .presented
            .iter()
            .filter(|n| n.severity == severity)
            .cloned()
            .collect()
    }

    pub fn on_screen(&self) -> Vec<NotificationId> {
        self.log.borrow().on_screen.clone()
    }
}

impl ToastSurface for FakeSurface {
    type Container = FakeContainer;
    type Dismissed = LocalBoxFuture<'static, ()>;

    fn create_container(&self) -> Result<FakeContainer, SurfaceError> {
        let mut log = self.log.borrow_mut();
        if log.no_attachment_point {
            return Err(SurfaceError::NoAttachmentPoint);
        }
        log.containers_created += 1;
        Ok(FakeContainer(log.containers_created))
    }

    fn present(&self, _container: &FakeContainer, notification: &Notification) -> Result<Self::Dismissed, SurfaceError> {
        let (tx, rx) = oneshot::channel::<()>();
        let mut log = self.log.borrow_mut();
        log.presented.push(notification.clone());
        log.on_screen.push(notification.id);
        log.dismissers.insert(notification.id, tx);
        Ok(rx.map(|_| ()).boxed_local())
    }

    fn remove(&self, _container: &FakeContainer, id: NotificationId) {
        self.log.borrow_mut().on_screen.retain(|shown| *shown != id);
    }
}

// =============================================================
// Clipboard host
// =============================================================

pub struct ClipboardLog {
    pub secure: bool,
    pub write_result: Result<(), ClipboardError>,
    pub exec_result: Result<(), ClipboardError>,
    pub scratch_result: Result<(), ClipboardError>,
    pub writes: Vec<String>,
    pub scratch_created: Vec<String>,
    pub scratch_live: Vec<u32>,
    pub exec_calls: usize,
    next_scratch: u32,
}

impl Default for ClipboardLog {
    fn default() -> Self {
        Self {
            secure: true,
            write_result: Ok(()),
            exec_result: Ok(()),
            scratch_result: Ok(()),
            writes: Vec::new(),
            scratch_created: Vec::new(),
            scratch_live: Vec::new(),
            exec_calls: 0,
            next_scratch: 1,
        }
    }
}

#[derive(Clone, Default)]
pub struct FakeClipboard {
    pub log: Rc<RefCell<ClipboardLog>>,
}

impl FakeClipboard {
    pub fn secure(write_result: Result<(), ClipboardError>) -> Self {
        let clipboard = Self::default();
        clipboard.log.borrow_mut().write_result = write_result;
        clipboard
    }

    pub fn legacy(exec_result: Result<(), ClipboardError>) -> Self {
        let clipboard = Self::default();
        {
            let mut log = clipboard.log.borrow_mut();
            log.secure = false;
            log.exec_result = exec_result;
        }
        clipboard
    }
}

impl ClipboardHost for FakeClipboard {
    type Scratch = u32;

    fn has_secure_clipboard(&self) -> bool {
        self.log.borrow().secure
    }

    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mut log = self.log.borrow_mut();
        log.writes.push(text.to_owned());
        log.write_result.clone()
    }

    fn create_scratch(&self, text: &str) -> Result<u32, ClipboardError> {
        let mut log = self.log.borrow_mut();
        log.scratch_result.clone()?;
        let handle = log.next_scratch;
        log.next_scratch += 1;
        log.scratch_created.push(text.to_owned());
        log.scratch_live.push(handle);
        Ok(handle)
    }

    fn exec_copy(&self, scratch: &u32) -> Result<(), ClipboardError> {
        let mut log = self.log.borrow_mut();
        assert!(log.scratch_live.contains(scratch), "copy ran without a live scratch element");
        log.exec_calls += 1;
        log.exec_result.clone()
    }

    fn remove_scratch(&self, scratch: &u32) {
        self.log.borrow_mut().scratch_live.retain(|live| live != scratch);
    }
}

// =============================================================
// JSON transport
// =============================================================

#[derive(Default)]
pub struct TransportLog {
    pub requests: Vec<String>,
    pub responses: VecDeque<Result<Value, ApiError>>,
    pub hold: bool,
    gates: VecDeque<oneshot::Sender<()>>,
}

#[derive(Clone, Default)]
pub struct FakeTransport {
    pub log: Rc<RefCell<TransportLog>>,
}

impl FakeTransport {
    pub fn respond(&self, response: Result<Value, ApiError>) {
        self.log.borrow_mut().responses.push_back(response);
    }

    /// Keep every request pending until [`FakeTransport::release_next`].
    pub fn hold_requests(&self) {
        self.log.borrow_mut().hold = true;
    }

    pub fn release_next(&self) {
        let gate = self.log.borrow_mut().gates.pop_front();
        if let Some(gate) = gate {
            assert!(gate.send(()).is_ok(), "held request was dropped");
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.log.borrow().requests.clone()
    }
}

impl JsonTransport for FakeTransport {
    fn get_json(&self, url: &str) -> impl Future<Output = Result<Value, ApiError>> {
        let gate = {
            let mut log = self.log.borrow_mut();
            log.requests.push(url.to_owned());
            if log.hold {
                let (tx, rx) = oneshot::channel::<()>();
                log.gates.push_back(tx);
                Some(rx)
            } else {
                None
            }
        };
        let log = Rc::clone(&self.log);
        async move {
            if let Some(gate) = gate {
                if gate.await.is_err() {
                    return Err(ApiError::Transport("request abandoned".to_owned()));
                }
            }
            log.borrow_mut().responses.pop_front().unwrap_or_else(|| Ok(serde_json::json!({})))
        }
    }
}

// =============================================================
// Stats board
// =============================================================

#[derive(Default)]
pub struct BoardLog {
    pub present: HashSet<StatField>,
    pub text: HashMap<StatField, String>,
}

#[derive(Clone, Default)]
pub struct FakeBoard {
    pub log: Rc<RefCell<BoardLog>>,
}

impl FakeBoard {
    pub fn with_fields(fields: &[StatField]) -> Self {
        let board = Self::default();
        board.log.borrow_mut().present.extend(fields.iter().copied());
        board
    }

    pub fn text(&self, field: StatField) -> Option<String> {
        self.log.borrow().text.get(&field).cloned()
    }
}

impl StatsBoard for FakeBoard {
    fn set_stat(&self, field: StatField, text: &str) -> bool {
        let mut log = self.log.borrow_mut();
        if !log.present.contains(&field) {
            return false;
        }
        log.text.insert(field, text.to_owned());
        true
    }
}

// =============================================================
// Ticker
// =============================================================

#[derive(Clone, Default)]
pub struct ChannelTicker {
    periods: Rc<RefCell<Vec<Duration>>>,
    senders: Rc<RefCell<Vec<mpsc::UnboundedSender<()>>>>,
}

impl ChannelTicker {
    /// Fire one tick on every armed timer.
    pub fn tick(&self) {
        for sender in self.senders.borrow().iter() {
            assert!(sender.unbounded_send(()).is_ok(), "timer stream dropped");
        }
    }

    pub fn periods(&self) -> Vec<Duration> {
        self.periods.borrow().clone()
    }
}

impl Ticker for ChannelTicker {
    type Ticks = mpsc::UnboundedReceiver<()>;

    fn every(&self, period: Duration) -> Self::Ticks {
        let (tx, rx) = mpsc::unbounded();
        self.periods.borrow_mut().push(period);
        self.senders.borrow_mut().push(tx);
        rx
    }
}
