//! The persisted motion record and its comments.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{CategoryId, CommentSectionId, ItemId, MotionId, StateId, UserId, WorkflowId};

/// A motion as delivered by the server.
///
/// Foreign keys (`category_id`, `workflow_id`, `agenda_item_id`, ...) point
/// at records that are resolved elsewhere and handed to the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Motion {
    /// Primary key.
    pub id: MotionId,
    /// Human-facing number such as `A1`. Unset until the motion is numbered.
    #[serde(default)]
    pub identifier: Option<String>,
    /// Motion title.
    pub title: String,
    /// Motion body (HTML).
    #[serde(default)]
    pub text: String,
    /// Justification (HTML).
    #[serde(default)]
    pub reason: String,
    /// Ordering weight within the call list.
    #[serde(default)]
    pub weight: i32,
    /// Parent motion in the call list tree, if any.
    #[serde(default)]
    pub sort_parent_id: Option<MotionId>,
    /// Agenda item this motion is attached to.
    #[serde(default)]
    pub agenda_item_id: Option<ItemId>,
    /// Category the motion is filed under.
    #[serde(default)]
    pub category_id: Option<CategoryId>,
    /// Users who submitted the motion.
    #[serde(default)]
    pub submitters_id: Vec<UserId>,
    /// Users who support the motion.
    #[serde(default)]
    pub supporters_id: Vec<UserId>,
    /// Workflow driving the motion's state machine.
    #[serde(default)]
    pub workflow_id: Option<WorkflowId>,
    /// Current workflow state.
    #[serde(default)]
    pub state_id: Option<StateId>,
    /// Recommended workflow state, if a recommendation was given.
    #[serde(default)]
    pub recommendation_id: Option<StateId>,
    /// Free-text origin (e.g. the submitting body).
    #[serde(default)]
    pub origin: String,
    /// Comments, at most one per comment section.
    #[serde(default)]
    pub comments: Vec<MotionComment>,
}

/// A comment attached to a motion inside one comment section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MotionComment {
    /// Section the comment belongs to.
    pub section_id: CommentSectionId,
    /// Comment body (HTML).
    pub comment: String,
}
