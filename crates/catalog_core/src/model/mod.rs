//! Domain model for catalog entries.
//!
//! # Responsibility
//! - Define the validated book record and its category tag.
//! - Keep every validation rule in one place for constructors and setters.
//!
//! # Invariants
//! - No `Record` value exists with a blank title/author or an out-of-range year
//!   (relative to the year it was validated against).

pub mod record;
