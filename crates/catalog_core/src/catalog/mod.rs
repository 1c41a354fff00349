//! Owning collection of book records.
//!
//! # Responsibility
//! - Append validated records in arrival order.
//! - Enumerate formatted descriptions for list views.
//! - Release owned records explicitly or on drop.
//!
//! # Invariants
//! - `entries` only holds fully valid `Record` values, never placeholders.
//! - A rejected add leaves `entries` unchanged.
//! - Listing is 1-indexed and restartable.

pub mod listing;
pub mod store;
