//! Text classification and tagging engine.
//!
//! # Responsibility
//! - Turn one raw text submission into structured items and topic mentions.
//! - Stay pure: no I/O, no clock reads, no shared state.
//!
//! # Invariants
//! - Identical `raw` and `now` inputs always produce identical output.
//! - Every sentence yields exactly one intent; matching is total.

pub mod classify;
pub mod due;
pub mod pipeline;
pub mod split;
pub mod tags;

pub use classify::classify;
pub use due::resolve_due;
pub use pipeline::{analyze, capture};
pub use split::{clean_sentence, split};
pub use tags::extract_tags;
