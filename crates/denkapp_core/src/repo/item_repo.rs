//! Item repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist captured task/agenda items with their tag links.
//! - Serve profile-scoped item listings and the task done toggle.
//!
//! # Invariants
//! - Agenda rows are stored with `done IS NULL` and `due_at IS NULL`.
//! - Tags are read back sorted case-insensitively.

use crate::model::item::{sort_tags, ItemId, ItemKind, ItemRecord};
use crate::model::profile::Profile;
use crate::repo::{
    ensure_tables, format_timestamp, parse_timestamp, parse_uuid, RepoError, RepoResult,
};
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    profile_id,
    kind,
    title,
    due_at,
    done,
    created_at,
    source_inbox_id
FROM items";

/// Query options for listing items of one profile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemListQuery {
    pub kind: Option<ItemKind>,
    /// Single-tag filter, matched case-insensitively.
    pub tag: Option<String>,
    /// When `false`, completed tasks are left out.
    pub include_done: bool,
}

/// Repository interface for captured items.
pub trait ItemRepository {
    /// Stores a record and its tags; returns the record id.
    fn create_item(&self, item: &ItemRecord) -> RepoResult<ItemId>;
    fn get_item(&self, profile: Profile, id: ItemId) -> RepoResult<Option<ItemRecord>>;
    /// Lists items in creation order.
    fn list_items(&self, profile: Profile, query: &ItemListQuery) -> RepoResult<Vec<ItemRecord>>;
    /// Sets the done flag of a task.
    fn set_task_done(&self, profile: Profile, id: ItemId, done: bool) -> RepoResult<()>;
}

/// SQLite-backed item repository.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_tables(conn, &["items", "item_tags"])?;
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn create_item(&self, item: &ItemRecord) -> RepoResult<ItemId> {
        let (due_at, done) = match item.kind {
            ItemKind::Task => (
                item.due_at.map(format_timestamp),
                Some(i64::from(item.done.unwrap_or(false))),
            ),
            ItemKind::Agenda => (None, None),
        };
        let id_text = item.id.to_string();

        self.conn.execute(
            "INSERT INTO items (
                id,
                profile_id,
                kind,
                title,
                due_at,
                done,
                created_at,
                source_inbox_id
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
            params![
                id_text,
                item.profile.as_str(),
                item.kind.as_str(),
                item.title.as_str(),
                due_at,
                done,
                format_timestamp(item.created_at),
                item.source_inbox_id.map(|id| id.to_string()),
            ],
        )?;

        for tag in &item.tags {
            self.conn.execute(
                "INSERT OR IGNORE INTO item_tags (item_id, tag) VALUES (?1, ?2);",
                params![id_text, tag.as_str()],
            )?;
        }

        Ok(item.id)
    }

    fn get_item(&self, profile: Profile, id: ItemId) -> RepoResult<Option<ItemRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ITEM_SELECT_SQL}
             WHERE id = ?1
               AND profile_id = ?2;"
        ))?;

        let mut rows = stmt.query(params![id.to_string(), profile.as_str()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(self.parse_item_row(row)?));
        }

        Ok(None)
    }

    fn list_items(&self, profile: Profile, query: &ItemListQuery) -> RepoResult<Vec<ItemRecord>> {
        let mut sql = format!("{ITEM_SELECT_SQL} WHERE profile_id = ?");
        let mut bind_values: Vec<Value> = vec![Value::Text(profile.as_str().to_string())];

        if let Some(kind) = query.kind {
            sql.push_str(" AND kind = ?");
            bind_values.push(Value::Text(kind.as_str().to_string()));
        }

        if !query.include_done {
            sql.push_str(" AND (done IS NULL OR done = 0)");
        }

        sql.push_str(" ORDER BY created_at ASC, rowid ASC");

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(self.parse_item_row(row)?);
        }

        // SQLite `lower()` only folds ASCII; match tags in Rust instead.
        if let Some(tag) = query.tag.as_deref().map(str::trim) {
            items.retain(|item| item.has_tag(tag));
        }

        Ok(items)
    }

    fn set_task_done(&self, profile: Profile, id: ItemId, done: bool) -> RepoResult<()> {
        let kind_text: Option<String> = self
            .conn
            .query_row(
                "SELECT kind FROM items WHERE id = ?1 AND profile_id = ?2;",
                params![id.to_string(), profile.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let kind = match kind_text {
            None => return Err(RepoError::NotFound(id)),
            Some(text) => ItemKind::parse(&text).ok_or_else(|| {
                RepoError::InvalidData(format!("invalid item kind `{text}` in items.kind"))
            })?,
        };
        if kind == ItemKind::Agenda {
            return Err(RepoError::NotCompletable(id));
        }

        self.conn.execute(
            "UPDATE items SET done = ?1 WHERE id = ?2 AND profile_id = ?3;",
            params![i64::from(done), id.to_string(), profile.as_str()],
        )?;
        Ok(())
    }
}

impl SqliteItemRepository<'_> {
    fn parse_item_row(&self, row: &Row<'_>) -> RepoResult<ItemRecord> {
        let id_text: String = row.get("id")?;
        let id = parse_uuid(&id_text, "items.id")?;

        let profile_text: String = row.get("profile_id")?;
        let profile = profile_text.parse::<Profile>().map_err(|_| {
            RepoError::InvalidData(format!("invalid profile `{profile_text}` in items.profile_id"))
        })?;

        let kind_text: String = row.get("kind")?;
        let kind = ItemKind::parse(&kind_text).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid item kind `{kind_text}` in items.kind"))
        })?;

        let due_at = match row.get::<_, Option<String>>("due_at")? {
            Some(value) => Some(parse_timestamp(&value, "items.due_at")?),
            None => None,
        };

        let done = match row.get::<_, Option<i64>>("done")? {
            None => None,
            Some(0) => Some(false),
            Some(1) => Some(true),
            Some(other) => {
                return Err(RepoError::InvalidData(format!(
                    "invalid done value `{other}` in items.done"
                )));
            }
        };

        let created_text: String = row.get("created_at")?;
        let source_inbox_id = match row.get::<_, Option<String>>("source_inbox_id")? {
            Some(value) => Some(parse_uuid(&value, "items.source_inbox_id")?),
            None => None,
        };

        Ok(ItemRecord {
            id,
            profile,
            kind,
            title: row.get("title")?,
            due_at,
            done,
            created_at: parse_timestamp(&created_text, "items.created_at")?,
            source_inbox_id,
            tags: load_tags_for_item(self.conn, &id_text)?,
        })
    }
}

fn load_tags_for_item(conn: &Connection, item_id: &str) -> RepoResult<Vec<String>> {
    let mut stmt = conn.prepare("SELECT tag FROM item_tags WHERE item_id = ?1;")?;
    let mut rows = stmt.query([item_id])?;
    let mut tags = Vec::new();
    while let Some(row) = rows.next()? {
        tags.push(row.get::<_, String>(0)?);
    }
    sort_tags(&mut tags);
    Ok(tags)
}
