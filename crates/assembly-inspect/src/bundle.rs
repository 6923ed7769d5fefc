//! Motion bundles: a motion plus every record it may reference.
//!
//! The bundle plays the part of the client's data store. [`resolve`] joins
//! the motion's foreign keys against the bundled records to build a
//! [`ViewMotion`]; bundled updates are then folded in with the reducer.

use std::collections::BTreeMap;
use std::sync::Arc;

use assembly_types::{Category, Item, Motion, User, UserId, Workflow};
use assembly_view::{DisplaySettings, ModelUpdate, MotionParts, ViewMotion, reduce_all};
use serde::Deserialize;
use tracing::warn;

use crate::error::InspectError;

/// Everything needed to project one motion.
#[derive(Debug, Clone, Deserialize)]
pub struct MotionBundle {
    /// The primary record.
    pub motion: Motion,
    /// Candidate categories.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Candidate users.
    #[serde(default)]
    pub users: Vec<User>,
    /// Candidate workflows (with their states).
    #[serde(default)]
    pub workflows: Vec<Workflow>,
    /// Candidate agenda items.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Changes applied after the initial projection, in order.
    #[serde(default)]
    pub updates: Vec<ModelUpdate>,
    /// Whether the simulated viewport is mobile-sized.
    #[serde(default)]
    pub mobile: bool,
}

/// Build the projection for `bundle` and apply its updates.
///
/// Dangling foreign keys leave the related record absent. With `strict`
/// they are reported as [`InspectError::Unresolved`] instead.
///
/// # Errors
///
/// Returns [`InspectError::Unresolved`] in strict mode when a foreign key
/// cannot be resolved.
pub fn resolve(
    bundle: &MotionBundle,
    display: DisplaySettings,
    strict: bool,
) -> Result<ViewMotion, InspectError> {
    let motion = &bundle.motion;

    let category = match motion.category_id {
        Some(id) => lookup(
            bundle.categories.iter().find(|c| c.id == id).cloned().map(Arc::new),
            strict,
            || InspectError::category(motion.id, id),
        )?,
        None => None,
    };

    let workflow = match motion.workflow_id {
        Some(id) => lookup(
            bundle.workflows.iter().find(|w| w.id == id).cloned().map(Arc::new),
            strict,
            || InspectError::workflow(motion.id, id),
        )?,
        None => None,
    };

    let state = match (motion.state_id, workflow.as_ref()) {
        (Some(id), Some(wf)) => lookup(wf.get_state_by_id(id).cloned(), strict, || {
            InspectError::state(motion.id, id)
        })?,
        _ => None,
    };

    let item = match motion.agenda_item_id {
        Some(id) => lookup(
            bundle.items.iter().find(|i| i.id == id).cloned().map(Arc::new),
            strict,
            || InspectError::item(motion.id, id),
        )?,
        None => None,
    };

    let users: BTreeMap<UserId, Arc<User>> = bundle
        .users
        .iter()
        .map(|u| (u.id, Arc::new(u.clone())))
        .collect();
    let submitters = resolve_users(motion, &motion.submitters_id, &users, strict)?;
    let supporters = resolve_users(motion, &motion.supporters_id, &users, strict)?;

    let view = ViewMotion::new(MotionParts {
        motion: Some(Arc::new(motion.clone())),
        category,
        submitters: Some(submitters.into()),
        supporters: Some(supporters.into()),
        workflow,
        state,
        item,
    })
    .with_display(display);

    Ok(reduce_all(&view, &bundle.updates))
}

fn lookup<T>(
    found: Option<Arc<T>>,
    strict: bool,
    missing: impl FnOnce() -> InspectError,
) -> Result<Option<Arc<T>>, InspectError> {
    match found {
        Some(record) => Ok(Some(record)),
        None => {
            let error = missing();
            if strict {
                return Err(error);
            }
            warn!(%error, "leaving unresolved reference absent");
            Ok(None)
        }
    }
}

fn resolve_users(
    motion: &Motion,
    ids: &[UserId],
    users: &BTreeMap<UserId, Arc<User>>,
    strict: bool,
) -> Result<Vec<Arc<User>>, InspectError> {
    let mut resolved = Vec::with_capacity(ids.len());
    for id in ids {
        match users.get(id) {
            Some(user) => resolved.push(Arc::clone(user)),
            None if strict => return Err(InspectError::user(motion.id, *id)),
            None => warn!(motion_id = %motion.id, user_id = %id, "skipping unknown user"),
        }
    }
    Ok(resolved)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use assembly_types::{CategoryId, MotionId, StateId};

    use super::*;

    const BUNDLE: &str = r#"{
        "motion": {
            "id": 1,
            "identifier": "A1",
            "title": "Budget",
            "category_id": 2,
            "workflow_id": 1,
            "state_id": 1,
            "agenda_item_id": 4,
            "submitters_id": [1],
            "supporters_id": [2, 3]
        },
        "categories": [{"id": 2, "name": "Finance"}],
        "users": [
            {"id": 1, "username": "ada", "first_name": "Ada", "last_name": "Lovelace"},
            {"id": 2, "username": "grace"}
        ],
        "workflows": [{
            "id": 1,
            "name": "Simple",
            "states": [
                {"id": 1, "name": "submitted", "workflow_id": 1, "next_states_id": [2]},
                {"id": 2, "name": "accepted", "workflow_id": 1, "recommendation_label": "Acceptance"}
            ]
        }],
        "items": [{"id": 4, "title": "Motions", "speakers": []}],
        "updates": [
            {"collection": "category", "id": 2, "name": "Finance & Budget"},
            {"collection": "item", "id": 9, "title": "Unrelated"}
        ]
    }"#;

    fn bundle() -> MotionBundle {
        serde_json::from_str(BUNDLE).unwrap()
    }

    #[test]
    fn lenient_resolution_skips_dangling_users() {
        let view = resolve(&bundle(), DisplaySettings::default(), false).unwrap();

        assert_eq!(view.id(), Some(MotionId::new(1)));
        assert_eq!(view.category_id(), Some(CategoryId::new(2)));
        assert_eq!(view.category().map(|c| c.name.as_str()), Some("Finance & Budget"));
        assert_eq!(view.supporters().map(<[_]>::len), Some(1));
        assert_eq!(view.state().map(|s| s.id), Some(StateId::new(1)));
        assert_eq!(view.next_states().map(|s| s.len()), Some(1));
        assert_eq!(view.agenda_speaker_amount(), Some(0));
    }

    #[test]
    fn strict_resolution_reports_dangling_users() {
        let result = resolve(&bundle(), DisplaySettings::default(), true);
        assert!(matches!(result, Err(InspectError::Unresolved { kind: "user", .. })));
    }

    #[test]
    fn lenient_resolution_leaves_unknown_category_absent() {
        let mut bundle = bundle();
        bundle.categories.clear();
        bundle.updates.clear();

        let view = resolve(&bundle, DisplaySettings::default(), false).unwrap();
        assert!(view.category().is_none());
        assert!(view.category_id().is_none());

        let strict = resolve(&bundle, DisplaySettings::default(), true);
        assert!(matches!(strict, Err(InspectError::Unresolved { kind: "category", .. })));
    }
}
