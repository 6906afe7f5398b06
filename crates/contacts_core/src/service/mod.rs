//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate directory and selection into group-creation use cases.
//! - Keep UI/FFI layers decoupled from session bookkeeping.

pub mod group_service;
pub mod group_session;
