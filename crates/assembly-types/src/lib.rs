//! Persisted record types for the Assembly client.
//!
//! These are the raw records the server delivers. The view layer in
//! `assembly-view` joins them into UI-facing projections. Types flow
//! downstream to `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- Typed integer identifiers for every record kind
//! - [`motion`] -- Motions and motion comments
//! - [`workflow`] -- Workflows, workflow states, and categories
//! - [`agenda`] -- Agenda items and their list of speakers
//! - [`user`] -- Users referenced as submitters and supporters

pub mod agenda;
pub mod ids;
pub mod motion;
pub mod user;
pub mod workflow;

// Re-export all public types at crate root for convenience.
pub use agenda::{Item, Speaker};
pub use ids::{
    CategoryId, CommentSectionId, ItemId, MotionId, SpeakerId, StateId, UserId, WorkflowId,
};
pub use motion::{Motion, MotionComment};
pub use user::User;
pub use workflow::{Category, Workflow, WorkflowState};
