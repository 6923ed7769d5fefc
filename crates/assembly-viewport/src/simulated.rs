//! In-process [`BreakpointObserver`] driven by explicit emit calls.
//!
//! Used by tests and by tools that have no real viewport. Listeners receive
//! the last emitted state on registration, then every later emission.

use std::sync::Mutex;

use tracing::debug;

use crate::breakpoint::{Breakpoint, BreakpointListener, BreakpointObserver, BreakpointState};

struct Registration {
    queries: Vec<Breakpoint>,
    listener: BreakpointListener,
}

/// A breakpoint observer whose viewport is set by the caller.
#[derive(Default)]
pub struct SimulatedBreakpointObserver {
    registrations: Mutex<Vec<Registration>>,
    current: Mutex<Vec<Breakpoint>>,
}

impl SimulatedBreakpointObserver {
    /// Create an observer whose viewport matches no breakpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners registered so far.
    pub fn listener_count(&self) -> usize {
        self.registrations.lock().map_or(0, |r| r.len())
    }

    /// Set which breakpoints the simulated viewport currently matches and
    /// notify every listener.
    pub fn set_matching(&self, matching: &[Breakpoint]) {
        if let Ok(mut current) = self.current.lock() {
            current.clear();
            current.extend_from_slice(matching);
        }
        let Ok(mut registrations) = self.registrations.lock() else {
            return;
        };
        debug!(listeners = registrations.len(), ?matching, "emitting breakpoint change");
        for registration in registrations.iter_mut() {
            let state = evaluate(&registration.queries, matching);
            (registration.listener)(&state);
        }
    }

    /// Emit a change where either all observed breakpoints match or none do.
    pub fn emit(&self, matches: bool) {
        let matching: Vec<Breakpoint> = if matches {
            self.observed_queries()
        } else {
            Vec::new()
        };
        self.set_matching(&matching);
    }

    fn observed_queries(&self) -> Vec<Breakpoint> {
        let Ok(registrations) = self.registrations.lock() else {
            return Vec::new();
        };
        let mut queries: Vec<Breakpoint> = registrations
            .iter()
            .flat_map(|r| r.queries.iter().copied())
            .collect();
        queries.sort_unstable();
        queries.dedup();
        queries
    }
}

impl BreakpointObserver for SimulatedBreakpointObserver {
    fn observe(&self, queries: &[Breakpoint], mut listener: BreakpointListener) {
        let matching = self
            .current
            .lock()
            .map(|current| current.clone())
            .unwrap_or_default();
        listener(&evaluate(queries, &matching));

        if let Ok(mut registrations) = self.registrations.lock() {
            registrations.push(Registration {
                queries: queries.to_vec(),
                listener,
            });
        }
    }
}

fn evaluate(queries: &[Breakpoint], matching: &[Breakpoint]) -> BreakpointState {
    BreakpointState::from_results(queries.iter().map(|bp| (*bp, matching.contains(bp))))
}
