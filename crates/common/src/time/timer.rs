//! One-shot timers with cancellation support
//!
//! [`timeout`] spawns a detached sleep that runs a callback unless the
//! returned [`TimerHandle`] was cancelled first. [`ScopedTimer`] holds at most
//! one pending timer: scheduling a new one cancels the previous, and dropping
//! the scope cancels whatever is still pending.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::time::sleep;
use tracing::{trace, warn};

/// A timer handle that can be used to cancel a timer
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: Arc<AtomicBool>,
    fired: Arc<AtomicBool>,
}

impl TimerHandle {
    fn new() -> Self {
        Self { cancelled: Arc::new(AtomicBool::new(false)), fired: Arc::new(AtomicBool::new(false)) }
    }

    /// Cancel the timer. Has no effect once the callback ran.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Check if the timer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }

    /// Check if the callback has run
    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::SeqCst)
    }

    /// Neither fired nor cancelled yet.
    pub fn is_pending(&self) -> bool {
        !self.is_cancelled() && !self.has_fired()
    }
}

/// Run `callback` after `duration` unless cancelled.
///
/// The sleep is spawned on the current tokio runtime. Outside of one nothing
/// is scheduled: a warning is logged and the returned handle is already
/// cancelled, so `callback` never runs.
///
/// # Examples
///
/// ```no_run
/// use std::time::Duration;
///
/// use travelgate_common::time::timer::timeout;
///
/// #[tokio::main]
/// async fn main() {
///     let handle = timeout(Duration::from_secs(5), || {
///         println!("Timeout!");
///     });
///     handle.cancel();
/// }
/// ```
pub fn timeout<F>(duration: Duration, callback: F) -> TimerHandle
where
    F: FnOnce() + Send + 'static,
{
    let handle = TimerHandle::new();
    let Ok(runtime) = Handle::try_current() else {
        warn!(?duration, "no tokio runtime; timer not scheduled");
        handle.cancel();
        return handle;
    };
    let handle_clone = handle.clone();

    runtime.spawn(async move {
        sleep(duration).await;
        if handle_clone.is_cancelled() {
            trace!("timer cancelled before firing");
            return;
        }
        handle_clone.fired.store(true, Ordering::SeqCst);
        callback();
    });

    handle
}

/// Single-slot timer owned by a component.
#[derive(Debug, Default)]
pub struct ScopedTimer {
    current: Mutex<Option<TimerHandle>>,
}

impl ScopedTimer {
    /// Create an empty scope
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `callback`, cancelling any timer still pending in this scope.
    pub fn schedule<F>(&self, duration: Duration, callback: F) -> TimerHandle
    where
        F: FnOnce() + Send + 'static,
    {
        let mut slot = self.current.lock();
        if let Some(previous) = slot.take() {
            previous.cancel();
        }
        let handle = timeout(duration, callback);
        *slot = Some(handle.clone());
        handle
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&self) {
        if let Some(previous) = self.current.lock().take() {
            previous.cancel();
        }
    }

    /// Whether a scheduled callback is still waiting to run.
    pub fn is_pending(&self) -> bool {
        self.current.lock().as_ref().is_some_and(TimerHandle::is_pending)
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if let Some(previous) = self.current.get_mut().take() {
            previous.cancel();
        }
    }
}
