//! Topic node repository.
//!
//! # Responsibility
//! - Keep one topic node per tag label and profile for the mindmap view.
//!
//! # Invariants
//! - Titles are unique per profile by their lower-cased form (`title_key`).
//! - `ensure_topic` never renames an existing node.

use crate::model::profile::Profile;
use crate::capture::split::clean_sentence;
use crate::repo::{ensure_tables, format_timestamp, parse_timestamp, parse_uuid, RepoResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Persisted topic node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRecord {
    pub id: Uuid,
    pub profile: Profile,
    /// Casing of the first mention.
    pub title: String,
    pub created_at: NaiveDateTime,
}

/// Repository interface for topic nodes.
pub trait TopicRepository {
    /// Creates the topic when no case-insensitive match exists.
    ///
    /// Titles are cleaned like sentences first. Returns `true` when a new
    /// node was created; titles that clean to nothing are ignored.
    fn ensure_topic(&self, profile: Profile, title: &str, now: NaiveDateTime) -> RepoResult<bool>;
    /// Lists topics sorted case-insensitively by title.
    fn list_topics(&self, profile: Profile) -> RepoResult<Vec<TopicRecord>>;
}

/// SQLite-backed topic repository.
pub struct SqliteTopicRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteTopicRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["topics"])?;
        Ok(Self { conn })
    }
}

impl TopicRepository for SqliteTopicRepository<'_> {
    fn ensure_topic(&self, profile: Profile, title: &str, now: NaiveDateTime) -> RepoResult<bool> {
        let title = clean_sentence(title);
        if title.is_empty() {
            return Ok(false);
        }

        let changed = self.conn.execute(
            "INSERT OR IGNORE INTO topics (id, profile_id, title, title_key, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                Uuid::new_v4().to_string(),
                profile.as_str(),
                title.as_str(),
                title.to_lowercase(),
                format_timestamp(now),
            ],
        )?;

        Ok(changed == 1)
    }

    fn list_topics(&self, profile: Profile) -> RepoResult<Vec<TopicRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, created_at
             FROM topics
             WHERE profile_id = ?1
             ORDER BY title_key ASC, title ASC;",
        )?;
        let mut rows = stmt.query([profile.as_str()])?;
        let mut topics = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            let created_text: String = row.get("created_at")?;
            topics.push(TopicRecord {
                id: parse_uuid(&id_text, "topics.id")?,
                profile,
                title: row.get("title")?,
                created_at: parse_timestamp(&created_text, "topics.created_at")?,
            });
        }
        Ok(topics)
    }
}
