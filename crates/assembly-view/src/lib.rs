//! Denormalized motion view projections for the Assembly client.
//!
//! A [`ViewMotion`] joins a motion with its category, workflow, current
//! state, agenda item, submitters and supporters, and exposes read-only
//! accessors that degrade to `None` instead of failing when a reference is
//! missing. Upstream changes are folded in by foreign-key match, either in
//! place or through the pure [`reduce`] function.
//!
//! # Modules
//!
//! - [`view_motion`] -- The projection and its accessors
//! - [`update`] -- Change notifications and the reducer
//! - [`summary`] -- Flat DTO exported to `TypeScript` for templates
//! - [`display`] -- Per-view presentation state
//! - [`config`] -- YAML configuration

pub mod config;
pub mod display;
pub mod summary;
pub mod update;
pub mod view_motion;

pub use config::{ConfigError, LoggingConfig, MotionDisplayConfig, ViewConfig};
pub use display::{ChangeRecoMode, DisplaySettings, LineNumberingMode};
pub use summary::{MotionSummary, StateSummary};
pub use update::{ModelUpdate, reduce, reduce_all};
pub use view_motion::{MotionParts, UserList, ViewMotion};

#[cfg(test)]
mod tests {
    #[test]
    fn export_bindings() {
        use ts_rs::TS;

        let _ = crate::display::LineNumberingMode::export_all();
        let _ = crate::display::ChangeRecoMode::export_all();
        let _ = crate::display::DisplaySettings::export_all();
        let _ = crate::summary::StateSummary::export_all();
        let _ = crate::summary::MotionSummary::export_all();
    }
}
