//! Change notifications and the projection reducer.
//!
//! Upstream changes arrive as a [`ModelUpdate`]. [`reduce`] folds one into a
//! projection and returns the result, leaving the input untouched, so a
//! stream of changes can be replayed deterministically.

use std::sync::Arc;

use assembly_types::{Category, Item, Workflow};
use serde::Deserialize;

use crate::view_motion::ViewMotion;

/// A record that changed upstream.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "collection", rename_all = "snake_case")]
pub enum ModelUpdate {
    /// A category changed.
    Category(Arc<Category>),
    /// A workflow (or one of its states) changed.
    Workflow(Arc<Workflow>),
    /// An agenda item changed.
    Item(Arc<Item>),
    /// A record kind motion projections do not hold.
    #[serde(other)]
    Other,
}

/// Apply `update` to `current`, returning the refreshed projection.
///
/// Records whose id does not match the corresponding foreign key on the
/// motion leave the projection as it was.
#[must_use]
pub fn reduce(current: &ViewMotion, update: &ModelUpdate) -> ViewMotion {
    let mut next = current.copy();
    next.update_values(update);
    next
}

/// Fold a sequence of updates into a projection.
#[must_use]
pub fn reduce_all<'a, I>(initial: &ViewMotion, updates: I) -> ViewMotion
where
    I: IntoIterator<Item = &'a ModelUpdate>,
{
    updates
        .into_iter()
        .fold(initial.copy(), |view, update| reduce(&view, update))
}

#[cfg(test)]
mod tests {
    use assembly_types::{CategoryId, ItemId, Motion, MotionId, WorkflowId};

    use super::*;
    use crate::view_motion::MotionParts;

    fn category(id: u32, name: &str) -> Arc<Category> {
        Arc::new(Category {
            id: CategoryId::new(id),
            name: name.to_owned(),
            prefix: None,
        })
    }

    #[test]
    fn reduce_leaves_input_untouched() {
        let view = ViewMotion::new(MotionParts {
            motion: Some(Arc::new(Motion {
                id: MotionId::new(1),
                category_id: Some(CategoryId::new(2)),
                ..Motion::default()
            })),
            ..MotionParts::default()
        });

        let next = reduce(&view, &ModelUpdate::Category(category(2, "Finance")));
        assert!(view.category().is_none());
        assert_eq!(next.category().map(|c| c.name.as_str()), Some("Finance"));
    }

    #[test]
    fn reduce_all_keeps_last_matching_update() {
        let view = ViewMotion::new(MotionParts {
            motion: Some(Arc::new(Motion {
                id: MotionId::new(1),
                category_id: Some(CategoryId::new(2)),
                ..Motion::default()
            })),
            ..MotionParts::default()
        });
        let updates = [
            ModelUpdate::Category(category(2, "Finance")),
            ModelUpdate::Category(category(3, "Elsewhere")),
            ModelUpdate::Other,
            ModelUpdate::Category(category(2, "Finance & Budget")),
        ];

        let next = reduce_all(&view, &updates);
        assert_eq!(next.category().map(|c| c.name.as_str()), Some("Finance & Budget"));
    }

    #[test]
    fn unknown_collection_deserializes_as_other() {
        let json = r#"{"collection": "assignment", "id": 1}"#;
        let update: Result<ModelUpdate, _> = serde_json::from_str(json);
        assert_eq!(update.ok(), Some(ModelUpdate::Other));
    }

    #[test]
    fn category_update_deserializes() {
        let json = r#"{"collection": "category", "id": 2, "name": "Finance"}"#;
        let update: Result<ModelUpdate, _> = serde_json::from_str(json);
        assert_eq!(update.ok(), Some(ModelUpdate::Category(category(2, "Finance"))));
    }

    #[test]
    fn workflow_update_deserializes() {
        let json = r#"{"collection": "workflow", "id": 1, "name": "Simple", "states": []}"#;
        let update: Result<ModelUpdate, _> = serde_json::from_str(json);
        let expected = Workflow {
            id: WorkflowId::new(1),
            name: String::from("Simple"),
            states: Vec::new(),
            first_state_id: None,
        };
        assert_eq!(update.ok(), Some(ModelUpdate::Workflow(Arc::new(expected))));
    }

    #[test]
    fn item_update_deserializes() {
        let json = r#"{"collection": "item", "id": 4, "title": "Motions"}"#;
        let update: Result<ModelUpdate, _> = serde_json::from_str(json);
        let expected = Item {
            id: ItemId::new(4),
            item_number: String::new(),
            title: String::from("Motions"),
            closed: false,
            speakers: Vec::new(),
        };
        assert_eq!(update.ok(), Some(ModelUpdate::Item(Arc::new(expected))));
    }
}
