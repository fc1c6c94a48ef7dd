//! Raw input log.

use crate::model::profile::Profile;
use crate::repo::{ensure_tables, format_timestamp, parse_timestamp, parse_uuid, RepoResult};
use chrono::NaiveDateTime;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One raw text submission, stored verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboxEntry {
    pub id: Uuid,
    pub profile: Profile,
    pub raw_text: String,
    pub created_at: NaiveDateTime,
}

impl InboxEntry {
    pub fn new(profile: Profile, raw_text: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            profile,
            raw_text: raw_text.into(),
            created_at,
        }
    }
}

/// Repository interface for the raw input log.
pub trait InboxRepository {
    fn append_entry(&self, entry: &InboxEntry) -> RepoResult<Uuid>;
    /// Lists entries oldest first.
    fn list_entries(&self, profile: Profile) -> RepoResult<Vec<InboxEntry>>;
}

/// SQLite-backed inbox repository.
pub struct SqliteInboxRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteInboxRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["inbox_entries"])?;
        Ok(Self { conn })
    }
}

impl InboxRepository for SqliteInboxRepository<'_> {
    fn append_entry(&self, entry: &InboxEntry) -> RepoResult<Uuid> {
        self.conn.execute(
            "INSERT INTO inbox_entries (id, profile_id, raw_text, created_at)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                entry.id.to_string(),
                entry.profile.as_str(),
                entry.raw_text.as_str(),
                format_timestamp(entry.created_at),
            ],
        )?;
        Ok(entry.id)
    }

    fn list_entries(&self, profile: Profile) -> RepoResult<Vec<InboxEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, raw_text, created_at
             FROM inbox_entries
             WHERE profile_id = ?1
             ORDER BY created_at ASC, rowid ASC;",
        )?;
        let mut rows = stmt.query([profile.as_str()])?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            let id_text: String = row.get("id")?;
            let created_text: String = row.get("created_at")?;
            entries.push(InboxEntry {
                id: parse_uuid(&id_text, "inbox_entries.id")?,
                profile,
                raw_text: row.get("raw_text")?,
                created_at: parse_timestamp(&created_text, "inbox_entries.created_at")?,
            });
        }
        Ok(entries)
    }
}
