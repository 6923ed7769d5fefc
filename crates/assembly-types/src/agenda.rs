//! Agenda items and their list of speakers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{ItemId, SpeakerId, UserId};

/// An agenda item. Motions may be attached to one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Item {
    /// Primary key.
    pub id: ItemId,
    /// Agenda number such as `TOP 3`.
    #[serde(default)]
    pub item_number: String,
    /// Title shown on the agenda.
    pub title: String,
    /// Whether the item has been dealt with.
    #[serde(default)]
    pub closed: bool,
    /// List of speakers, in speaking order.
    #[serde(default)]
    pub speakers: Vec<Speaker>,
}

impl Item {
    /// Number of entries on the list of speakers.
    pub fn speaker_amount(&self) -> usize {
        self.speakers.len()
    }

    /// Speakers who have not started speaking yet.
    pub fn waiting_speakers(&self) -> impl Iterator<Item = &Speaker> {
        self.speakers.iter().filter(|speaker| speaker.is_waiting())
    }
}

/// One entry on an agenda item's list of speakers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Speaker {
    /// Primary key.
    pub id: SpeakerId,
    /// The speaking user.
    pub user_id: UserId,
    /// Position on the list.
    #[serde(default)]
    pub weight: i32,
    /// When the speaker started, if they have.
    #[serde(default)]
    pub begin_time: Option<DateTime<Utc>>,
    /// When the speaker finished, if they have.
    #[serde(default)]
    pub end_time: Option<DateTime<Utc>>,
}

impl Speaker {
    /// Whether the speaker is still waiting for the floor.
    pub const fn is_waiting(&self) -> bool {
        self.begin_time.is_none()
    }
}
