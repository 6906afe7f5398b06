//! Contact source abstractions.
//!
//! # Responsibility
//! - Define where a session's contact batch comes from.
//! - Keep callers free to swap the built-in sample for a real store.

pub mod contact_source;
