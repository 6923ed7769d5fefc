//! Error types for the inspect binary.

use assembly_types::{CategoryId, ItemId, MotionId, StateId, UserId, WorkflowId};

/// Errors that can occur while loading and resolving a motion bundle.
#[derive(Debug, thiserror::Error)]
pub enum InspectError {
    /// Configuration loading failed.
    #[error("configuration error: {0}")]
    Config(#[from] assembly_view::ConfigError),

    /// The bundle file could not be read.
    #[error("failed to read bundle: {0}")]
    Io(#[from] std::io::Error),

    /// The bundle is not valid JSON or does not match the expected shape.
    #[error("failed to parse bundle: {0}")]
    Json(#[from] serde_json::Error),

    /// A foreign key on the motion points at a record the bundle lacks.
    #[error("motion {motion} references unknown {kind} {id}")]
    Unresolved {
        /// The referencing motion.
        motion: MotionId,
        /// Record kind (category, workflow, ...).
        kind: &'static str,
        /// The dangling id.
        id: String,
    },
}

impl InspectError {
    fn unresolved(motion: MotionId, kind: &'static str, id: impl ToString) -> Self {
        Self::Unresolved {
            motion,
            kind,
            id: id.to_string(),
        }
    }

    /// Unknown category.
    pub fn category(motion: MotionId, id: CategoryId) -> Self {
        Self::unresolved(motion, "category", id)
    }

    /// Unknown workflow.
    pub fn workflow(motion: MotionId, id: WorkflowId) -> Self {
        Self::unresolved(motion, "workflow", id)
    }

    /// Unknown workflow state.
    pub fn state(motion: MotionId, id: StateId) -> Self {
        Self::unresolved(motion, "state", id)
    }

    /// Unknown agenda item.
    pub fn item(motion: MotionId, id: ItemId) -> Self {
        Self::unresolved(motion, "agenda item", id)
    }

    /// Unknown user.
    pub fn user(motion: MotionId, id: UserId) -> Self {
        Self::unresolved(motion, "user", id)
    }
}
