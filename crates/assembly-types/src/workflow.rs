//! Motion workflows, their states, and categories.
//!
//! A [`Workflow`] owns an ordered list of [`WorkflowState`]s. Each state names
//! the states reachable from it via `next_states_id`; resolution happens
//! against the owning workflow so dangling ids simply drop out.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{CategoryId, StateId, WorkflowId};

/// A category motions can be filed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Category {
    /// Primary key.
    pub id: CategoryId,
    /// Display name.
    pub name: String,
    /// Prefix used when numbering motions in this category.
    #[serde(default)]
    pub prefix: Option<String>,
}

/// A workflow: the state machine a motion moves through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Workflow {
    /// Primary key.
    pub id: WorkflowId,
    /// Display name.
    pub name: String,
    /// All states belonging to this workflow.
    #[serde(default)]
    #[ts(as = "Vec<WorkflowState>")]
    pub states: Vec<Arc<WorkflowState>>,
    /// State new motions start in.
    #[serde(default)]
    pub first_state_id: Option<StateId>,
}

impl Workflow {
    /// Look up one of this workflow's states by id.
    pub fn get_state_by_id(&self, id: StateId) -> Option<&Arc<WorkflowState>> {
        self.states.iter().find(|state| state.id == id)
    }
}

/// A single state of a [`Workflow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WorkflowState {
    /// Primary key.
    pub id: StateId,
    /// Display name.
    pub name: String,
    /// Owning workflow.
    pub workflow_id: WorkflowId,
    /// Label shown when this state is used as a recommendation. States
    /// without a label cannot be recommended.
    #[serde(default)]
    pub recommendation_label: Option<String>,
    /// States a motion may move to from here.
    #[serde(default)]
    pub next_states_id: Vec<StateId>,
}

impl WorkflowState {
    /// Whether this state may be chosen as a recommendation.
    pub const fn is_recommendation(&self) -> bool {
        self.recommendation_label.is_some()
    }

    /// Resolve the states reachable from this one within `workflow`.
    ///
    /// Ids that do not belong to `workflow` are skipped. Order follows
    /// `next_states_id`.
    pub fn next_states(&self, workflow: &Workflow) -> Vec<Arc<WorkflowState>> {
        self.next_states_id
            .iter()
            .filter_map(|id| workflow.get_state_by_id(*id).cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(id: u32, label: Option<&str>, next: &[u32]) -> Arc<WorkflowState> {
        Arc::new(WorkflowState {
            id: StateId::new(id),
            name: format!("state {id}"),
            workflow_id: WorkflowId::new(1),
            recommendation_label: label.map(str::to_owned),
            next_states_id: next.iter().copied().map(StateId::new).collect(),
        })
    }

    #[test]
    fn next_states_skips_foreign_ids() {
        let submitted = state(1, None, &[2, 99, 3]);
        let workflow = Workflow {
            id: WorkflowId::new(1),
            name: String::from("Simple"),
            states: vec![submitted.clone(), state(2, Some("Acceptance"), &[]), state(3, None, &[])],
            first_state_id: Some(StateId::new(1)),
        };

        let next: Vec<StateId> = submitted.next_states(&workflow).iter().map(|s| s.id).collect();
        assert_eq!(next, vec![StateId::new(2), StateId::new(3)]);
    }

    #[test]
    fn get_state_by_id_misses_cleanly() {
        let workflow = Workflow {
            id: WorkflowId::new(1),
            name: String::from("Empty"),
            states: Vec::new(),
            first_state_id: None,
        };
        assert!(workflow.get_state_by_id(StateId::new(1)).is_none());
    }
}
