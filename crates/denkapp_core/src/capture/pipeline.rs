//! Capture pipeline: sentences in, items and topic mentions out.

use crate::capture::{classify, extract_tags, resolve_due, split};
use crate::model::item::{CaptureOutcome, CapturedItem, ItemKind, SentenceAnalysis, AGENDA_TAG};
use chrono::NaiveDateTime;

/// Runs classification, due-date resolution and tag extraction on every
/// sentence of `raw`, in document order.
pub fn analyze(raw: &str, now: NaiveDateTime) -> Vec<SentenceAnalysis> {
    split(raw)
        .into_iter()
        .map(|text| SentenceAnalysis {
            intent: classify(&text),
            due_at: resolve_due(&text, now),
            tags: extract_tags(&text),
            text,
        })
        .collect()
}

/// Captures one raw submission.
///
/// - `task` sentences become task items with their resolved due date.
/// - `agenda` sentences become agenda items without due date, tagged
///   `AGENDA_TAG`.
/// - `idea`/`note` sentences only add their tags to `mentioned_tags`.
pub fn capture(raw: &str, now: NaiveDateTime) -> CaptureOutcome {
    let mut outcome = CaptureOutcome::default();

    for analysis in analyze(raw, now) {
        match analysis.intent.item_kind() {
            Some(ItemKind::Task) => outcome.items.push(CapturedItem {
                title: analysis.text,
                kind: ItemKind::Task,
                due_at: analysis.due_at,
                tags: analysis.tags,
            }),
            Some(ItemKind::Agenda) => {
                let mut tags = analysis.tags;
                tags.insert(AGENDA_TAG.to_string());
                outcome.items.push(CapturedItem {
                    title: analysis.text,
                    kind: ItemKind::Agenda,
                    due_at: None,
                    tags,
                });
            }
            None => outcome.mentioned_tags.extend(analysis.tags),
        }
    }

    outcome
}
