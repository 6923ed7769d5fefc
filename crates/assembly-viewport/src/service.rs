//! The viewport service: republishes breakpoint changes as "is mobile".
//!
//! [`ViewportService`] is constructed by the composition root with a
//! [`BreakpointObserver`] and handed to consumers by reference. After
//! [`ViewportService::check_for_change`] it keeps a cached flag up to date
//! and pushes each new value to every [`watch::Receiver`] handed out by
//! [`ViewportService::subscribe`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::breakpoint::{BreakpointObserver, BreakpointState, MOBILE_BREAKPOINTS};

/// State shared between the service and the listener it registers.
#[derive(Debug)]
struct ViewportShared {
    is_mobile: AtomicBool,
    tx: watch::Sender<bool>,
}

impl ViewportShared {
    fn apply(&self, state: &BreakpointState) {
        self.is_mobile.store(state.matches, Ordering::SeqCst);
        // send_replace never fails, even with no receivers left.
        self.tx.send_replace(state.matches);
        debug!(is_mobile = state.matches, "viewport classification changed");
    }
}

/// Classifies the viewport as mobile-sized or not.
pub struct ViewportService<O> {
    observer: O,
    shared: Arc<ViewportShared>,
    observing: AtomicBool,
}

impl<O: BreakpointObserver> ViewportService<O> {
    /// Create a service backed by `observer`. Nothing is observed until
    /// [`Self::check_for_change`] is called.
    pub fn new(observer: O) -> Self {
        let (tx, _) = watch::channel(false);
        Self {
            observer,
            shared: Arc::new(ViewportShared {
                is_mobile: AtomicBool::new(false),
                tx,
            }),
            observing: AtomicBool::new(false),
        }
    }

    /// Start observing the mobile breakpoints.
    ///
    /// Only the first call registers with the observer and returns `true`.
    /// Later calls are ignored and return `false`.
    pub fn check_for_change(&self) -> bool {
        if self.observing.swap(true, Ordering::SeqCst) {
            warn!("viewport observation already started, ignoring repeated call");
            return false;
        }

        let shared = Arc::clone(&self.shared);
        self.observer.observe(
            &MOBILE_BREAKPOINTS,
            Box::new(move |state: &BreakpointState| shared.apply(state)),
        );
        true
    }

    /// Whether observation has been started.
    pub fn is_observing(&self) -> bool {
        self.observing.load(Ordering::SeqCst)
    }

    /// Last known classification. `false` until the first notification.
    pub fn is_mobile(&self) -> bool {
        self.shared.is_mobile.load(Ordering::SeqCst)
    }

    /// Subscribe to classification changes.
    ///
    /// The receiver starts out holding the current value; each later change
    /// marks it as changed.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.shared.tx.subscribe()
    }

    /// The underlying observer.
    pub const fn observer(&self) -> &O {
        &self.observer
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::breakpoint::{Breakpoint, BreakpointListener};

    /// Records registrations without ever emitting.
    #[derive(Default)]
    struct CountingObserver {
        queries: Mutex<Vec<Vec<Breakpoint>>>,
    }

    impl BreakpointObserver for CountingObserver {
        fn observe(&self, queries: &[Breakpoint], _listener: BreakpointListener) {
            if let Ok(mut seen) = self.queries.lock() {
                seen.push(queries.to_vec());
            }
        }
    }

    #[test]
    fn registers_mobile_breakpoints_once() {
        let service = ViewportService::new(CountingObserver::default());
        assert!(!service.is_observing());

        assert!(service.check_for_change());
        assert!(!service.check_for_change());
        assert!(service.is_observing());

        let seen = service.observer().queries.lock().map(|q| q.clone()).unwrap_or_default();
        assert_eq!(seen, vec![MOBILE_BREAKPOINTS.to_vec()]);
    }

    #[test]
    fn starts_not_mobile() {
        let service = ViewportService::new(CountingObserver::default());
        assert!(!service.is_mobile());
        assert!(!*service.subscribe().borrow());
    }
}
