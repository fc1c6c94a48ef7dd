use denkapp_core::db::migrations::latest_version;
use denkapp_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn in_memory_db_is_migrated_to_latest() {
    let conn = open_db_in_memory().unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());

    for table in ["inbox_entries", "items", "item_tags", "topics"] {
        let exists: i64 = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1);",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(exists, 1, "missing table {table}");
    }
}

#[test]
fn reopening_file_db_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("denkapp.sqlite3");

    drop(open_db(&path).unwrap());
    let conn = open_db(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, latest_version());
}

#[test]
fn newer_schema_version_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");
    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version() + 1))
            .unwrap();
    }

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, DbError::UnsupportedSchemaVersion { .. }));
}

#[test]
fn foreign_keys_are_enabled() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);
}

#[test]
fn schema_rejects_completable_agenda_rows() {
    let conn = open_db_in_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO items (id, profile_id, kind, title, due_at, done, created_at)
         VALUES ('x', 'work', 'agenda', 'bad', NULL, 0, '2024-05-01T09:00:00.000');",
        [],
    );
    assert!(result.is_err());
}
