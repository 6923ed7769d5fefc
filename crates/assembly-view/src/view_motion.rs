//! The motion view projection.
//!
//! [`ViewMotion`] holds shared references to a motion and every record it
//! points at, and exposes "safe" accessors for templates: each one returns
//! `None` when the motion (or the related record it needs) is not held, so
//! a half-loaded projection can be rendered without ever failing.
//!
//! Related records are refreshed by foreign-key match, either in place via
//! the `update_*` methods or functionally via [`crate::update::reduce`].

use std::sync::Arc;

use assembly_types::{
    Category, CategoryId, CommentSectionId, Item, ItemId, Motion, MotionComment, MotionId,
    StateId, User, UserId, Workflow, WorkflowState,
};
use tracing::trace;

use crate::display::DisplaySettings;
use crate::update::ModelUpdate;

/// Shared, immutable list of users.
pub type UserList = Arc<[Arc<User>]>;

/// The records a [`ViewMotion`] is assembled from. Every part is optional.
#[derive(Debug, Clone, Default)]
pub struct MotionParts {
    /// The primary record.
    pub motion: Option<Arc<Motion>>,
    /// Resolved `category_id`.
    pub category: Option<Arc<Category>>,
    /// Resolved `submitters_id`.
    pub submitters: Option<UserList>,
    /// Resolved `supporters_id`.
    pub supporters: Option<UserList>,
    /// Resolved `workflow_id`.
    pub workflow: Option<Arc<Workflow>>,
    /// Resolved `state_id`.
    pub state: Option<Arc<WorkflowState>>,
    /// Resolved `agenda_item_id`.
    pub item: Option<Arc<Item>>,
}

/// A motion together with all of its resolved references.
///
/// Cloning is shallow: the clone shares every record with the original.
#[derive(Debug, Clone, Default)]
pub struct ViewMotion {
    motion: Option<Arc<Motion>>,
    category: Option<Arc<Category>>,
    submitters: Option<UserList>,
    supporters: Option<UserList>,
    workflow: Option<Arc<Workflow>>,
    state: Option<Arc<WorkflowState>>,
    item: Option<Arc<Item>>,

    /// Presentation state, read and written by templates.
    pub display: DisplaySettings,
}

impl ViewMotion {
    /// Assemble a projection with default display settings.
    pub fn new(parts: MotionParts) -> Self {
        Self {
            motion: parts.motion,
            category: parts.category,
            submitters: parts.submitters,
            supporters: parts.supporters,
            workflow: parts.workflow,
            state: parts.state,
            item: parts.item,
            display: DisplaySettings::default(),
        }
    }

    /// Replace the display settings, e.g. with configured defaults.
    #[must_use]
    pub fn with_display(mut self, display: DisplaySettings) -> Self {
        self.display = display;
        self
    }

    // -----------------------------------------------------------------------
    // Held references
    // -----------------------------------------------------------------------

    /// The primary record.
    pub const fn motion(&self) -> Option<&Arc<Motion>> {
        self.motion.as_ref()
    }

    /// The held category.
    pub const fn category(&self) -> Option<&Arc<Category>> {
        self.category.as_ref()
    }

    /// The held submitters.
    pub fn submitters(&self) -> Option<&[Arc<User>]> {
        self.submitters.as_deref()
    }

    /// The held supporters.
    pub fn supporters(&self) -> Option<&[Arc<User>]> {
        self.supporters.as_deref()
    }

    /// The held workflow.
    pub const fn workflow(&self) -> Option<&Arc<Workflow>> {
        self.workflow.as_ref()
    }

    /// The held current state.
    pub const fn state(&self) -> Option<&Arc<WorkflowState>> {
        self.state.as_ref()
    }

    /// The held agenda item.
    pub const fn item(&self) -> Option<&Arc<Item>> {
        self.item.as_ref()
    }

    // -----------------------------------------------------------------------
    // Fields forwarded from the motion
    // -----------------------------------------------------------------------

    /// Motion id.
    pub fn id(&self) -> Option<MotionId> {
        self.motion.as_ref().map(|m| m.id)
    }

    /// Motion identifier (number). `None` also when the motion is unnumbered.
    pub fn identifier(&self) -> Option<&str> {
        self.motion.as_ref()?.identifier.as_deref()
    }

    /// Motion title.
    pub fn title(&self) -> Option<&str> {
        self.motion.as_ref().map(|m| m.title.as_str())
    }

    /// Motion text.
    pub fn text(&self) -> Option<&str> {
        self.motion.as_ref().map(|m| m.text.as_str())
    }

    /// Motion reason.
    pub fn reason(&self) -> Option<&str> {
        self.motion.as_ref().map(|m| m.reason.as_str())
    }

    /// Ordering weight.
    pub fn weight(&self) -> Option<i32> {
        self.motion.as_ref().map(|m| m.weight)
    }

    /// Parent id in the call list.
    pub fn sort_parent_id(&self) -> Option<MotionId> {
        self.motion.as_ref()?.sort_parent_id
    }

    /// Category id. Only reported while the category itself is held.
    pub fn category_id(&self) -> Option<CategoryId> {
        self.category.as_ref()?;
        self.motion.as_ref()?.category_id
    }

    /// Agenda item id.
    pub fn agenda_item_id(&self) -> Option<ItemId> {
        self.motion.as_ref()?.agenda_item_id
    }

    /// Submitter ids as stored on the motion.
    pub fn submitters_id(&self) -> Option<&[UserId]> {
        self.motion.as_ref().map(|m| m.submitters_id.as_slice())
    }

    /// Supporter ids as stored on the motion.
    pub fn supporters_id(&self) -> Option<&[UserId]> {
        self.motion.as_ref().map(|m| m.supporters_id.as_slice())
    }

    /// Current state id.
    pub fn state_id(&self) -> Option<StateId> {
        self.motion.as_ref()?.state_id
    }

    /// Recommendation id.
    pub fn recommendation_id(&self) -> Option<StateId> {
        self.motion.as_ref()?.recommendation_id
    }

    /// Motion origin.
    pub fn origin(&self) -> Option<&str> {
        self.motion.as_ref().map(|m| m.origin.as_str())
    }

    // -----------------------------------------------------------------------
    // Computed fields
    // -----------------------------------------------------------------------

    /// The recommended state, resolved through the held workflow.
    pub fn recommendation(&self) -> Option<&Arc<WorkflowState>> {
        let id = self.recommendation_id()?;
        self.workflow.as_ref()?.get_state_by_id(id)
    }

    /// All states of the held workflow that can be used as a recommendation.
    pub fn possible_recommendations(&self) -> Option<Vec<Arc<WorkflowState>>> {
        let workflow = self.workflow.as_ref()?;
        Some(
            workflow
                .states
                .iter()
                .filter(|state| state.is_recommendation())
                .cloned()
                .collect(),
        )
    }

    /// States reachable from the current state.
    pub fn next_states(&self) -> Option<Vec<Arc<WorkflowState>>> {
        let state = self.state.as_ref()?;
        let workflow = self.workflow.as_ref()?;
        Some(state.next_states(workflow))
    }

    /// Length of the agenda item's list of speakers.
    pub fn agenda_speaker_amount(&self) -> Option<usize> {
        self.item.as_ref().map(|item| item.speaker_amount())
    }

    /// Title prefixed with the identifier, e.g. `A1 - Budget`.
    pub fn display_title(&self) -> Option<String> {
        let title = self.title()?;
        Some(match self.identifier() {
            Some(identifier) => format!("{identifier} - {title}"),
            None => title.to_owned(),
        })
    }

    /// Whether at least one supporter is held.
    pub fn has_supporters(&self) -> bool {
        self.supporters.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// The motion's comment in the given section, if one exists.
    pub fn get_comment_for_section(&self, section: CommentSectionId) -> Option<&MotionComment> {
        self.motion
            .as_ref()?
            .comments
            .iter()
            .find(|comment| comment.section_id == section)
    }

    // -----------------------------------------------------------------------
    // Setters
    // -----------------------------------------------------------------------

    /// Replace the submitters and rewrite `submitters_id` on the motion.
    pub fn set_submitters(&mut self, users: Vec<Arc<User>>) {
        let ids = user_ids(&users);
        self.submitters = Some(users.into());
        if let Some(motion) = self.motion.as_mut() {
            Arc::make_mut(motion).submitters_id = ids;
        }
    }

    /// Replace the supporters and rewrite `supporters_id` on the motion.
    pub fn set_supporters(&mut self, users: Vec<Arc<User>>) {
        let ids = user_ids(&users);
        self.supporters = Some(users.into());
        if let Some(motion) = self.motion.as_mut() {
            Arc::make_mut(motion).supporters_id = ids;
        }
    }

    // -----------------------------------------------------------------------
    // Updates
    // -----------------------------------------------------------------------

    /// Route a changed record to the matching `update_*` method.
    pub fn update_values(&mut self, update: &ModelUpdate) {
        match update {
            ModelUpdate::Category(category) => self.update_category(category),
            ModelUpdate::Workflow(workflow) => self.update_workflow(workflow),
            ModelUpdate::Item(item) => self.update_item(item),
            ModelUpdate::Other => {}
        }
    }

    /// Hold `update` if it is the motion's category.
    pub fn update_category(&mut self, update: &Arc<Category>) {
        let matches = self
            .motion
            .as_ref()
            .is_some_and(|m| m.category_id == Some(update.id));
        if matches {
            self.category = Some(Arc::clone(update));
        } else {
            trace!(category_id = %update.id, motion_id = ?self.id(), "ignoring unrelated category");
        }
    }

    /// Hold `update` if it is the motion's workflow.
    pub fn update_workflow(&mut self, update: &Arc<Workflow>) {
        let matches = self
            .motion
            .as_ref()
            .is_some_and(|m| m.workflow_id == Some(update.id));
        if matches {
            self.workflow = Some(Arc::clone(update));
        } else {
            trace!(workflow_id = %update.id, motion_id = ?self.id(), "ignoring unrelated workflow");
        }
    }

    /// Hold `update` if it is the motion's agenda item.
    pub fn update_item(&mut self, update: &Arc<Item>) {
        let matches = self
            .motion
            .as_ref()
            .is_some_and(|m| m.agenda_item_id == Some(update.id));
        if matches {
            self.item = Some(Arc::clone(update));
        } else {
            trace!(item_id = %update.id, motion_id = ?self.id(), "ignoring unrelated agenda item");
        }
    }

    /// Duplicate this projection. The copy shares every record with `self`.
    #[must_use]
    pub fn copy(&self) -> Self {
        self.clone()
    }
}

fn user_ids(users: &[Arc<User>]) -> Vec<UserId> {
    users.iter().map(|user| user.id).collect()
}

#[cfg(test)]
mod tests {
    use assembly_types::WorkflowId;

    use super::*;

    fn user(id: u32) -> Arc<User> {
        Arc::new(User {
            id: UserId::new(id),
            username: format!("user{id}"),
            first_name: String::new(),
            last_name: String::new(),
        })
    }

    fn motion() -> Arc<Motion> {
        Arc::new(Motion {
            id: MotionId::new(1),
            identifier: Some(String::from("M1")),
            title: String::from("Budget"),
            category_id: Some(CategoryId::new(4)),
            workflow_id: Some(WorkflowId::new(1)),
            ..Motion::default()
        })
    }

    #[test]
    fn display_title_joins_identifier() {
        let view = ViewMotion::new(MotionParts {
            motion: Some(motion()),
            ..MotionParts::default()
        });
        assert_eq!(view.display_title().as_deref(), Some("M1 - Budget"));

        let unnumbered = ViewMotion::new(MotionParts {
            motion: Some(Arc::new(Motion {
                title: String::from("Budget"),
                ..Motion::default()
            })),
            ..MotionParts::default()
        });
        assert_eq!(unnumbered.display_title().as_deref(), Some("Budget"));
    }

    #[test]
    fn set_submitters_rewrites_ids() {
        let mut view = ViewMotion::new(MotionParts {
            motion: Some(motion()),
            ..MotionParts::default()
        });
        view.set_submitters(vec![user(3), user(1)]);
        assert_eq!(view.submitters_id(), Some(&[UserId::new(3), UserId::new(1)][..]));
        assert_eq!(view.submitters().map(<[_]>::len), Some(2));
    }

    #[test]
    fn set_supporters_without_motion_only_stores_list() {
        let mut view = ViewMotion::default();
        view.set_supporters(vec![user(5)]);
        assert!(view.has_supporters());
        assert_eq!(view.supporters_id(), None);
    }

    #[test]
    fn set_supporters_does_not_leak_into_shared_motion() {
        let shared = motion();
        let mut view = ViewMotion::new(MotionParts {
            motion: Some(Arc::clone(&shared)),
            ..MotionParts::default()
        });
        view.set_supporters(vec![user(9)]);
        assert!(shared.supporters_id.is_empty());
        assert_eq!(view.supporters_id(), Some(&[UserId::new(9)][..]));
    }

    #[test]
    fn category_id_requires_held_category() {
        let mut view = ViewMotion::new(MotionParts {
            motion: Some(motion()),
            ..MotionParts::default()
        });
        assert_eq!(view.category_id(), None);

        view.update_category(&Arc::new(Category {
            id: CategoryId::new(4),
            name: String::from("Finance"),
            prefix: None,
        }));
        assert_eq!(view.category_id(), Some(CategoryId::new(4)));
    }

    #[test]
    fn has_supporters_false_for_empty_list() {
        let mut view = ViewMotion::default();
        assert!(!view.has_supporters());
        view.set_supporters(Vec::new());
        assert!(!view.has_supporters());
    }
}
