//! Captured item model.
//!
//! # Responsibility
//! - Define sentence intents and the item kinds they project to.
//! - Define the pipeline output (`CapturedItem`, `CaptureOutcome`).
//! - Define the persisted projection (`ItemRecord`).
//!
//! # Invariants
//! - `ItemKind::Agenda` items never carry a due date and always carry the
//!   `AGENDA_TAG` label.
//! - Agenda records are never completable (`done == None`).

use crate::model::profile::Profile;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

/// Tag label every agenda item carries.
pub const AGENDA_TAG: &str = "Te bespreken";

/// Stable identifier of a persisted item.
pub type ItemId = Uuid;

/// Classification result for one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Task,
    Agenda,
    Idea,
    Note,
}

impl Intent {
    /// Item kind this intent produces, if any.
    ///
    /// Ideas and notes only contribute tags.
    pub fn item_kind(self) -> Option<ItemKind> {
        match self {
            Self::Task => Some(ItemKind::Task),
            Self::Agenda => Some(ItemKind::Agenda),
            Self::Idea | Self::Note => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Agenda => "agenda",
            Self::Idea => "idea",
            Self::Note => "note",
        }
    }
}

/// Kind of an actionable item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    /// Completable to-do with optional due date.
    Task,
    /// Topic to discuss; never completable, never time-boxed.
    Agenda,
}

impl ItemKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Agenda => "agenda",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "task" => Some(Self::Task),
            "agenda" => Some(Self::Agenda),
            _ => None,
        }
    }
}

/// Per-sentence result of the capture pipeline, before projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceAnalysis {
    /// Cleaned sentence text.
    pub text: String,
    pub intent: Intent,
    /// Resolved for every sentence, even when the projection drops it.
    pub due_at: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
}

/// One actionable unit produced by a capture.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapturedItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub due_at: Option<NaiveDateTime>,
    pub tags: BTreeSet<String>,
}

/// Output of one capture over a raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureOutcome {
    /// Items in sentence order.
    pub items: Vec<CapturedItem>,
    /// Union of tags from idea/note sentences.
    pub mentioned_tags: BTreeSet<String>,
}

impl CaptureOutcome {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.mentioned_tags.is_empty()
    }
}

/// Persisted item as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: ItemId,
    pub profile: Profile,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub due_at: Option<NaiveDateTime>,
    /// `None` for agenda items, `Some(done)` for tasks.
    pub done: Option<bool>,
    pub created_at: NaiveDateTime,
    /// Inbox entry the item was captured from.
    pub source_inbox_id: Option<Uuid>,
    /// Sorted case-insensitively.
    pub tags: Vec<String>,
}

impl ItemRecord {
    /// Builds a fresh record for a captured item.
    ///
    /// Tasks start open; agenda items drop any due date.
    pub fn from_captured(
        item: &CapturedItem,
        profile: Profile,
        created_at: NaiveDateTime,
        source_inbox_id: Option<Uuid>,
    ) -> Self {
        let (due_at, done) = match item.kind {
            ItemKind::Task => (item.due_at, Some(false)),
            ItemKind::Agenda => (None, None),
        };
        let mut tags: Vec<String> = item.tags.iter().cloned().collect();
        sort_tags(&mut tags);

        Self {
            id: Uuid::new_v4(),
            profile,
            kind: item.kind,
            title: item.title.clone(),
            due_at,
            done,
            created_at,
            source_inbox_id,
            tags,
        }
    }

    /// Whether the item can be toggled done in the task view.
    pub fn is_completable(&self) -> bool {
        self.kind == ItemKind::Task
    }

    /// Case-insensitive tag membership.
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|value| value.to_lowercase() == wanted)
    }
}

/// Display order for tag lists: case-insensitive, then byte order.
pub fn sort_tags(tags: &mut [String]) {
    tags.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
}
