//! Capture use-case: run the engine on raw input and persist the result.
//!
//! # Responsibility
//! - Log the raw submission, persist captured items and register topics.
//!
//! # Invariants
//! - One submission is persisted in a single immediate transaction; on
//!   error nothing is written and the call can be retried as-is.
//! - Every item tag and every mentioned tag has a topic node afterwards.
//! - Logs carry counts and ids only, never user text.

use crate::capture::capture;
use crate::model::item::{CaptureOutcome, ItemKind, ItemRecord};
use crate::model::profile::Profile;
use crate::repo::inbox_repo::{InboxEntry, InboxRepository, SqliteInboxRepository};
use crate::repo::item_repo::{ItemRepository, SqliteItemRepository};
use crate::repo::topic_repo::{SqliteTopicRepository, TopicRepository};
use crate::repo::RepoResult;
use chrono::NaiveDateTime;
use log::{error, info};
use rusqlite::{Connection, TransactionBehavior};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

/// Result of one persisted capture.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureReport {
    /// `None` when the input was blank and nothing was stored.
    pub inbox_id: Option<Uuid>,
    /// Persisted items in sentence order.
    pub items: Vec<ItemRecord>,
    /// Tags from idea/note sentences.
    pub mentioned_tags: Vec<String>,
    /// Number of topic nodes that did not exist before.
    pub topics_created: usize,
}

/// Capture service bound to one connection.
pub struct CaptureService<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> CaptureService<'conn> {
    pub fn new(conn: &'conn mut Connection) -> Self {
        Self { conn }
    }

    /// Captures `raw` for `profile`, stamping records with `now`.
    pub fn submit(
        &mut self,
        profile: Profile,
        raw: &str,
        now: NaiveDateTime,
    ) -> RepoResult<CaptureReport> {
        let started_at = Instant::now();
        if raw.trim().is_empty() {
            info!("event=capture module=service status=skipped profile={profile} reason=blank_input");
            return Ok(CaptureReport::default());
        }

        let outcome = capture(raw, now);
        match self.persist(profile, raw, &outcome, now) {
            Ok(report) => {
                let agenda = report
                    .items
                    .iter()
                    .filter(|item| item.kind == ItemKind::Agenda)
                    .count();
                info!(
                    "event=capture module=service status=ok profile={} inbox_id={} tasks={} agenda={} mentioned_tags={} topics_created={} duration_ms={}",
                    profile,
                    report.inbox_id.map(|id| id.to_string()).unwrap_or_default(),
                    report.items.len() - agenda,
                    agenda,
                    report.mentioned_tags.len(),
                    report.topics_created,
                    started_at.elapsed().as_millis()
                );
                Ok(report)
            }
            Err(err) => {
                error!(
                    "event=capture module=service status=error profile={} duration_ms={} error={}",
                    profile,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }

    fn persist(
        &mut self,
        profile: Profile,
        raw: &str,
        outcome: &CaptureOutcome,
        now: NaiveDateTime,
    ) -> RepoResult<CaptureReport> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;
        let report = {
            let inbox = SqliteInboxRepository::try_new(&tx)?;
            let items = SqliteItemRepository::try_new(&tx)?;
            let topics = SqliteTopicRepository::try_new(&tx)?;
            persist_outcome(&inbox, &items, &topics, profile, raw, outcome, now)?
        };
        tx.commit()?;
        Ok(report)
    }
}

/// Writes one capture through the given repositories.
///
/// Callers own transaction boundaries.
pub fn persist_outcome(
    inbox: &impl InboxRepository,
    items: &impl ItemRepository,
    topics: &impl TopicRepository,
    profile: Profile,
    raw: &str,
    outcome: &CaptureOutcome,
    now: NaiveDateTime,
) -> RepoResult<CaptureReport> {
    let entry = InboxEntry::new(profile, raw, now);
    let inbox_id = inbox.append_entry(&entry)?;

    let mut report = CaptureReport {
        inbox_id: Some(inbox_id),
        ..CaptureReport::default()
    };

    for captured in &outcome.items {
        let record = ItemRecord::from_captured(captured, profile, now, Some(inbox_id));
        items.create_item(&record)?;
        for tag in &record.tags {
            if topics.ensure_topic(profile, tag, now)? {
                report.topics_created += 1;
            }
        }
        report.items.push(record);
    }

    for tag in &outcome.mentioned_tags {
        if topics.ensure_topic(profile, tag, now)? {
            report.topics_created += 1;
        }
        report.mentioned_tags.push(tag.clone());
    }

    Ok(report)
}
