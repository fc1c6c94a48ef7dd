//! Domain model shared by the capture engine and the storage layer.
//!
//! # Responsibility
//! - Define the transient shapes produced by the capture pipeline.
//! - Define the persisted record shapes returned by repositories.
//!
//! # Invariants
//! - Capture shapes carry no identity; ids and timestamps are assigned by
//!   storage.
//! - Every persisted record belongs to exactly one `Profile`.

pub mod item;
pub mod profile;

/// Text encoding for local wall-clock timestamps in storage and wire output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
