//! Flat, serializable snapshot of a projection for templates.

use assembly_types::{CategoryId, ItemId, MotionId, StateId, UserId};
use serde::Serialize;
use ts_rs::TS;

use crate::display::DisplaySettings;
use crate::view_motion::ViewMotion;

/// A workflow state reduced to what a template shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct StateSummary {
    /// State id.
    pub id: StateId,
    /// State name.
    pub name: String,
    /// Recommendation label, if the state can be recommended.
    pub recommendation_label: Option<String>,
}

/// Everything a motion template reads, with absent values left as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct MotionSummary {
    /// Motion id.
    pub id: Option<MotionId>,
    /// Motion identifier.
    pub identifier: Option<String>,
    /// Motion title.
    pub title: Option<String>,
    /// Identifier and title joined for headings.
    pub display_title: Option<String>,
    /// Motion text.
    pub text: Option<String>,
    /// Motion reason.
    pub reason: Option<String>,
    /// Ordering weight.
    pub weight: Option<i32>,
    /// Parent id in the call list.
    pub sort_parent_id: Option<MotionId>,
    /// Motion origin.
    pub origin: Option<String>,
    /// Category id, present only while the category is held.
    pub category_id: Option<CategoryId>,
    /// Name of the held category.
    pub category_name: Option<String>,
    /// Agenda item id.
    pub agenda_item_id: Option<ItemId>,
    /// Length of the agenda item's list of speakers.
    pub agenda_speaker_amount: Option<u32>,
    /// Submitter ids stored on the motion.
    pub submitters_id: Option<Vec<UserId>>,
    /// Display names of the held submitters.
    pub submitter_names: Option<Vec<String>>,
    /// Supporter ids stored on the motion.
    pub supporters_id: Option<Vec<UserId>>,
    /// Display names of the held supporters.
    pub supporter_names: Option<Vec<String>>,
    /// Current state.
    pub state: Option<StateSummary>,
    /// Recommended state.
    pub recommendation: Option<StateSummary>,
    /// States that may be recommended.
    pub possible_recommendations: Option<Vec<StateSummary>>,
    /// States reachable from the current one.
    pub next_states: Option<Vec<StateSummary>>,
    /// Presentation state.
    pub display: DisplaySettings,
}

impl ViewMotion {
    /// Snapshot every derived field into a [`MotionSummary`].
    pub fn summary(&self) -> MotionSummary {
        MotionSummary {
            id: self.id(),
            identifier: self.identifier().map(str::to_owned),
            title: self.title().map(str::to_owned),
            display_title: self.display_title(),
            text: self.text().map(str::to_owned),
            reason: self.reason().map(str::to_owned),
            weight: self.weight(),
            sort_parent_id: self.sort_parent_id(),
            origin: self.origin().map(str::to_owned),
            category_id: self.category_id(),
            category_name: self.category().map(|c| c.name.clone()),
            agenda_item_id: self.agenda_item_id(),
            agenda_speaker_amount: self
                .agenda_speaker_amount()
                .map(|n| u32::try_from(n).unwrap_or(u32::MAX)),
            submitters_id: self.submitters_id().map(<[_]>::to_vec),
            submitter_names: self
                .submitters()
                .map(|users| users.iter().map(|u| u.full_name()).collect()),
            supporters_id: self.supporters_id().map(<[_]>::to_vec),
            supporter_names: self
                .supporters()
                .map(|users| users.iter().map(|u| u.full_name()).collect()),
            state: self.state().map(|s| state_summary(s)),
            recommendation: self.recommendation().map(|s| state_summary(s)),
            possible_recommendations: self
                .possible_recommendations()
                .map(|states| states.iter().map(|s| state_summary(s)).collect()),
            next_states: self
                .next_states()
                .map(|states| states.iter().map(|s| state_summary(s)).collect()),
            display: self.display.clone(),
        }
    }
}

fn state_summary(state: &assembly_types::WorkflowState) -> StateSummary {
    StateSummary {
        id: state.id,
        name: state.name.clone(),
        recommendation_label: state.recommendation_label.clone(),
    }
}
