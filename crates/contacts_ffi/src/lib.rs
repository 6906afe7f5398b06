//! Flutter-facing bindings for the contacts core.

pub mod api;
