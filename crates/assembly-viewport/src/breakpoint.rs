//! Named viewport breakpoints and the observer capability that reports them.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A named viewport-width threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Breakpoint {
    /// Small screens: 600px up to (not including) 960px wide.
    Small,
    /// Phones held upright.
    HandsetPortrait,
}

impl Breakpoint {
    /// The media query this breakpoint stands for.
    pub const fn media_query(self) -> &'static str {
        match self {
            Self::Small => "(min-width: 600px) and (max-width: 959.98px)",
            Self::HandsetPortrait => "(max-width: 599.98px) and (orientation: portrait)",
        }
    }
}

/// Breakpoints that classify a viewport as mobile.
pub const MOBILE_BREAKPOINTS: [Breakpoint; 2] = [Breakpoint::Small, Breakpoint::HandsetPortrait];

/// Result of evaluating a set of breakpoints against the current viewport.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakpointState {
    /// Whether any of the observed breakpoints matches.
    pub matches: bool,
    /// Per-query match results, keyed by media query.
    pub breakpoints: BTreeMap<String, bool>,
}

impl BreakpointState {
    /// Build a state from per-breakpoint results. `matches` is true if any
    /// breakpoint matched.
    pub fn from_results<I>(results: I) -> Self
    where
        I: IntoIterator<Item = (Breakpoint, bool)>,
    {
        let breakpoints: BTreeMap<String, bool> = results
            .into_iter()
            .map(|(bp, matched)| (bp.media_query().to_owned(), matched))
            .collect();
        let matches = breakpoints.values().any(|matched| *matched);
        Self {
            matches,
            breakpoints,
        }
    }
}

/// Callback invoked with every breakpoint change.
pub type BreakpointListener = Box<dyn FnMut(&BreakpointState) + Send>;

/// Something that can watch the viewport and report breakpoint changes.
///
/// Implementations call `listener` once with the current state and again
/// whenever the evaluation of `queries` changes.
pub trait BreakpointObserver {
    /// Start reporting changes of `queries` to `listener`.
    fn observe(&self, queries: &[Breakpoint], listener: BreakpointListener);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn any_match_marks_state_matching() {
        let state = BreakpointState::from_results([
            (Breakpoint::Small, false),
            (Breakpoint::HandsetPortrait, true),
        ]);
        assert!(state.matches);
        assert_eq!(state.breakpoints.len(), 2);
        assert_eq!(
            state.breakpoints.get(Breakpoint::HandsetPortrait.media_query()),
            Some(&true)
        );
    }

    #[test]
    fn no_match_marks_state_not_matching() {
        let state = BreakpointState::from_results(MOBILE_BREAKPOINTS.map(|bp| (bp, false)));
        assert!(!state.matches);
    }
}
