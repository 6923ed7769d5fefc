//! Mobile viewport classification for the Assembly client.
//!
//! Wraps a [`BreakpointObserver`] and republishes one boolean, "is the
//! viewport mobile-sized", both as a cached value and as a push stream:
//!
//! ```
//! use assembly_viewport::{SimulatedBreakpointObserver, ViewportService};
//!
//! let viewport = ViewportService::new(SimulatedBreakpointObserver::new());
//! let mut rx = viewport.subscribe();
//! viewport.check_for_change();
//!
//! viewport.observer().emit(true);
//! assert!(viewport.is_mobile());
//! assert!(*rx.borrow_and_update());
//! ```

pub mod breakpoint;
pub mod service;
pub mod simulated;

pub use breakpoint::{
    Breakpoint, BreakpointListener, BreakpointObserver, BreakpointState, MOBILE_BREAKPOINTS,
};
pub use service::ViewportService;
pub use simulated::SimulatedBreakpointObserver;
