//! Core domain logic for DenkApp.
//! This crate is the single source of truth for capture rules and storage
//! invariants.

pub mod capture;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use capture::{analyze, capture, classify, extract_tags, resolve_due, split};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{
    CaptureOutcome, CapturedItem, Intent, ItemId, ItemKind, ItemRecord, SentenceAnalysis,
    AGENDA_TAG,
};
pub use model::profile::{Profile, ProfileParseError};
pub use model::TIMESTAMP_FORMAT;
pub use repo::inbox_repo::{InboxEntry, InboxRepository, SqliteInboxRepository};
pub use repo::item_repo::{ItemListQuery, ItemRepository, SqliteItemRepository};
pub use repo::topic_repo::{SqliteTopicRepository, TopicRecord, TopicRepository};
pub use repo::{RepoError, RepoResult};
pub use service::board_service::{BoardService, Mindmap, TopicGroup};
pub use service::capture_service::{CaptureReport, CaptureService};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
