//! Flutter-facing bindings for DenkApp core.

pub mod api;
