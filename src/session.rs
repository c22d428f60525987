use crate::mailbox::{CapturedFrame, Mailbox, ScanUpdate};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    Camera,
    TrackedRegion,
}

/// What a capture worker sees of its session: the active flag it must poll
/// and the mailbox it publishes into. Nothing else crosses the thread
/// boundary.
#[derive(Clone)]
pub struct SessionHandle {
    active: Arc<AtomicBool>,
    mailbox: Mailbox,
}

impl SessionHandle {
    /// Loop condition for workers. Cleared by `cancel`/`deactivate`; workers
    /// must observe it at least once per sleep interval.
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn publish(&self, frame: CapturedFrame) {
        self.mailbox.publish(ScanUpdate::Frame(frame));
    }

    /// Publish a terminal error and end the session from the worker side.
    /// The poller surfaces the message and tears the session down.
    pub fn fail(&self, message: impl Into<String>) {
        self.mailbox.publish(ScanUpdate::Failure(message.into()));
        self.active.store(false, Ordering::SeqCst);
    }
}

/// One user-initiated scan with a background worker. At most one exists at a
/// time: the app cancels any current session before starting another, so the
/// camera and the screen grabber always have a single owner.
pub struct ScanSession {
    kind: SessionKind,
    active: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
}

impl ScanSession {
    /// Start a session and run `worker` on a background thread. The worker
    /// receives a [`SessionHandle`] and must exit promptly once the handle
    /// reports inactive.
    pub fn spawn<F>(kind: SessionKind, mailbox: &Mailbox, worker: F) -> Self
    where
        F: FnOnce(SessionHandle) + Send + 'static,
    {
        let active = Arc::new(AtomicBool::new(true));
        let handle = SessionHandle {
            active: active.clone(),
            mailbox: mailbox.clone(),
        };
        let join = std::thread::spawn(move || worker(handle));
        Self {
            kind,
            active,
            worker: Some(join),
        }
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    /// Clear the active flag without waiting for the worker. Used by the
    /// poller when it surfaces a Failure sentinel: the worker's own loop
    /// condition turns false on its next check.
    pub fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }

    /// Cancel the session: clear the flag and wait for the worker to exit.
    /// The worker re-checks the flag within one sleep interval, so the join
    /// is bounded. The capture device is released by the time this returns.
    pub fn cancel(&mut self) {
        self.active.store(false, Ordering::SeqCst);
        if let Some(join) = self.worker.take() {
            if join.join().is_err() {
                tracing::warn!("capture worker panicked during shutdown");
            }
        }
    }
}

impl Drop for ScanSession {
    fn drop(&mut self) {
        self.cancel();
    }
}
