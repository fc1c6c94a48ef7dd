//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose capture and browsing use-cases to Dart via FRB.
//! - Read the wall clock and resolve the database path for core calls.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - Failures are reported in response envelopes, never thrown.

use chrono::Local;
use denkapp_core::db::open_db;
use denkapp_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardService, CaptureService, ItemKind, ItemRecord, Profile, RepoResult,
    SqliteItemRepository, SqliteTopicRepository, TIMESTAMP_FORMAT,
};
use log::warn;
use rusqlite::Connection;
use std::path::PathBuf;
use std::sync::OnceLock;
use uuid::Uuid;

const ENTRY_DB_FILE_NAME: &str = "denkapp.sqlite3";
static ENTRY_DB_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Returns an empty string on success and the error message otherwise.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Item projection for list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryItem {
    pub id: String,
    /// `task|agenda`.
    pub kind: String,
    pub title: String,
    /// Local `YYYY-MM-DDTHH:MM:SS.mmm`, tasks only.
    pub due_at: Option<String>,
    /// `None` for agenda items.
    pub done: Option<bool>,
    pub tags: Vec<String>,
}

/// Response envelope for list calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryListResponse {
    pub ok: bool,
    pub items: Vec<EntryItem>,
    pub message: String,
}

impl EntryListResponse {
    fn from_result(operation: &str, result: Result<Vec<ItemRecord>, String>) -> Self {
        match result {
            Ok(records) => Self {
                ok: true,
                message: format!("{} item(s).", records.len()),
                items: records.iter().map(to_entry_item).collect(),
            },
            Err(err) => Self {
                ok: false,
                items: Vec::new(),
                message: format!("{operation} failed: {err}"),
            },
        }
    }
}

/// Response envelope for one capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCaptureResponse {
    pub ok: bool,
    pub items: Vec<EntryItem>,
    pub mentioned_tags: Vec<String>,
    pub message: String,
}

/// One mindmap group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryTopicGroup {
    pub topic: String,
    pub items: Vec<EntryItem>,
}

/// Response envelope for the mindmap view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryMindmapResponse {
    pub ok: bool,
    pub groups: Vec<EntryTopicGroup>,
    pub untagged: Vec<EntryItem>,
    pub message: String,
}

/// Captures free text for `profile` (`work|priv`).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_capture(profile: String, text: String) -> EntryCaptureResponse {
    let result = parse_profile(&profile).and_then(|profile| {
        with_connection(|conn| {
            CaptureService::new(conn).submit(profile, &text, Local::now().naive_local())
        })
    });

    match result {
        Ok(report) if report.inbox_id.is_none() => EntryCaptureResponse {
            ok: true,
            items: Vec::new(),
            mentioned_tags: Vec::new(),
            message: "Nothing to capture.".to_string(),
        },
        Ok(report) => EntryCaptureResponse {
            ok: true,
            message: format!(
                "Captured {} item(s), {} new topic(s).",
                report.items.len(),
                report.topics_created
            ),
            items: report.items.iter().map(to_entry_item).collect(),
            mentioned_tags: report.mentioned_tags,
        },
        Err(err) => EntryCaptureResponse {
            ok: false,
            items: Vec::new(),
            mentioned_tags: Vec::new(),
            message: format!("entry_capture failed: {err}"),
        },
    }
}

/// Lists tasks, open first.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_tasks(profile: String, include_done: bool) -> EntryListResponse {
    let result = parse_profile(&profile).and_then(|profile| {
        with_board(|board| board.tasks(profile, include_done))
    });
    EntryListResponse::from_result("entry_tasks", result)
}

/// Lists agenda items (not completable).
#[flutter_rust_bridge::frb(sync)]
pub fn entry_agenda(profile: String) -> EntryListResponse {
    let result =
        parse_profile(&profile).and_then(|profile| with_board(|board| board.agenda(profile)));
    EntryListResponse::from_result("entry_agenda", result)
}

/// Returns the tag-grouped view.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_mindmap(profile: String) -> EntryMindmapResponse {
    let result =
        parse_profile(&profile).and_then(|profile| with_board(|board| board.mindmap(profile)));
    match result {
        Ok(mindmap) => EntryMindmapResponse {
            ok: true,
            message: format!("{} topic(s).", mindmap.groups.len()),
            groups: mindmap
                .groups
                .iter()
                .map(|group| EntryTopicGroup {
                    topic: group.topic.clone(),
                    items: group.items.iter().map(to_entry_item).collect(),
                })
                .collect(),
            untagged: mindmap.untagged.iter().map(to_entry_item).collect(),
        },
        Err(err) => EntryMindmapResponse {
            ok: false,
            groups: Vec::new(),
            untagged: Vec::new(),
            message: format!("entry_mindmap failed: {err}"),
        },
    }
}

/// Toggles the done flag of a task.
#[flutter_rust_bridge::frb(sync)]
pub fn entry_set_task_done(profile: String, item_id: String, done: bool) -> EntryListResponse {
    let result = parse_profile(&profile).and_then(|profile| {
        let id = Uuid::parse_str(item_id.trim())
            .map_err(|_| format!("invalid item id `{item_id}`"))?;
        with_board(|board| board.set_task_done(profile, id, done).map(|item| vec![item]))
    });
    EntryListResponse::from_result("entry_set_task_done", result)
}

fn parse_profile(value: &str) -> Result<Profile, String> {
    value.parse::<Profile>().map_err(|err| err.to_string())
}

fn resolve_entry_db_path() -> PathBuf {
    ENTRY_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("DENKAPP_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(ENTRY_DB_FILE_NAME)
        })
        .clone()
}

fn with_connection<T>(f: impl FnOnce(&mut Connection) -> RepoResult<T>) -> Result<T, String> {
    let db_path = resolve_entry_db_path();
    let mut conn = open_db(&db_path).map_err(|err| {
        warn!("event=ffi_db_open module=ffi status=error error={err}");
        format!("entry DB open failed: {err}")
    })?;
    f(&mut conn).map_err(|err| err.to_string())
}

fn with_board<T>(
    f: impl FnOnce(&BoardService<SqliteItemRepository<'_>, SqliteTopicRepository<'_>>) -> RepoResult<T>,
) -> Result<T, String> {
    with_connection(|conn| {
        let board = BoardService::new(
            SqliteItemRepository::try_new(conn)?,
            SqliteTopicRepository::try_new(conn)?,
        );
        f(&board)
    })
}

fn to_entry_item(record: &ItemRecord) -> EntryItem {
    EntryItem {
        id: record.id.to_string(),
        kind: record.kind.as_str().to_string(),
        title: record.title.clone(),
        due_at: record
            .due_at
            .map(|value| value.format(TIMESTAMP_FORMAT).to_string()),
        done: match record.kind {
            ItemKind::Task => record.done,
            ItemKind::Agenda => None,
        },
        tags: record.tags.clone(),
    }
}
