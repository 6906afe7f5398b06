//! Domain model for the contact directory and group flows.
//!
//! # Responsibility
//! - Define the contact record and the finalized group result.
//!
//! # Invariants
//! - Every contact is identified by a stable `ContactId`.
//! - Selection is session state and never lives on the contact itself.

pub mod contact;
pub mod group;
