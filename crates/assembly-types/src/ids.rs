//! Type-safe identifier wrappers around the server's integer primary keys.
//!
//! Every persisted record has its own strongly-typed ID so a category id can
//! never be compared against a workflow id by accident. Foreign-key matching
//! in the view layer relies on this.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around a `u32` primary key with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[serde(transparent)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw primary key.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the raw primary key.
            pub const fn into_inner(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a motion.
    MotionId
}

define_id! {
    /// Unique identifier for a motion category.
    CategoryId
}

define_id! {
    /// Unique identifier for a user (submitter, supporter, speaker).
    UserId
}

define_id! {
    /// Unique identifier for a motion workflow.
    WorkflowId
}

define_id! {
    /// Unique identifier for a single state inside a workflow.
    StateId
}

define_id! {
    /// Unique identifier for an agenda item.
    ItemId
}

define_id! {
    /// Unique identifier for a motion comment section.
    CommentSectionId
}

define_id! {
    /// Unique identifier for an entry on an agenda item's list of speakers.
    SpeakerId
}
