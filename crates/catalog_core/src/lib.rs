//! Core domain logic for the book catalog.
//! This crate owns record validation and collection management; it performs
//! no console or file I/O apart from optional logging.

pub mod catalog;
pub mod clock;
pub mod logging;
pub mod model;

pub use catalog::listing::{Listing, ListingLine, EMPTY_CATALOG_MESSAGE};
pub use catalog::store::{AddConfirmation, Catalog, NullRecordError};
pub use clock::{FixedYear, SystemClock, YearSource};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::record::{
    Category, Record, RecordField, ValidationError, ValidationReason, MIN_PUBLICATION_YEAR,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
