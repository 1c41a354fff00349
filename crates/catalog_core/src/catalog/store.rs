//! Catalog container and its add/list/dispose operations.

use crate::catalog::listing::Listing;
use crate::clock::{SystemClock, YearSource};
use crate::model::record::Record;
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Returned by `Catalog::add` when no record was supplied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NullRecordError;

impl Display for NullRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("cannot add an absent record to the catalog")
    }
}

impl Error for NullRecordError {}

/// Confirmation for a successful add, suitable for direct display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddConfirmation {
    /// 1-based position of the new entry.
    pub position: usize,
    /// Trimmed title of the added record.
    pub title: String,
}

impl Display for AddConfirmation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Book '{}' added.", self.title)
    }
}

/// Ordered, exclusively owning collection of records.
///
/// Records are released when the catalog is dropped or `dispose` is called.
#[derive(Debug)]
pub struct Catalog<C: YearSource = SystemClock> {
    entries: Vec<Record>,
    clock: C,
}

impl Catalog {
    /// Creates an empty catalog that reads the year from the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: YearSource> Catalog<C> {
    /// Creates an empty catalog using `clock` for descriptions.
    pub fn with_clock(clock: C) -> Self {
        Self {
            entries: Vec::new(),
            clock,
        }
    }

    /// Appends a record in arrival order.
    ///
    /// Accepts either a `Record` or an `Option<Record>`; `None` models an
    /// absent record.
    ///
    /// # Errors
    /// - `NullRecordError` when `record` is `None`. `entries` is unchanged.
    pub fn add(
        &mut self,
        record: impl Into<Option<Record>>,
    ) -> Result<AddConfirmation, NullRecordError> {
        let Some(record) = record.into() else {
            warn!("event=record_rejected module=catalog status=error reason=absent_record");
            return Err(NullRecordError);
        };

        let title = record.title().to_string();
        self.entries.push(record);
        let position = self.entries.len();
        info!(
            "event=record_added module=catalog status=ok position={}",
            position
        );

        Ok(AddConfirmation { position, title })
    }

    /// Enumerates formatted descriptions in insertion order.
    ///
    /// Yields a single `ListingLine::Empty` when there are no entries. Each
    /// call starts a fresh pass over the current state.
    pub fn list_all(&self) -> Listing<'_> {
        Listing::new(&self.entries, self.clock.current_year())
    }

    /// Releases every owned record and returns how many were released.
    ///
    /// Calling this on an empty catalog is a no-op returning `0`.
    pub fn dispose(&mut self) -> usize {
        let released = self.entries.len();
        if released == 0 {
            debug!("event=catalog_disposed module=catalog status=noop released=0");
            return 0;
        }

        self.entries.clear();
        info!(
            "event=catalog_disposed module=catalog status=ok released={}",
            released
        );
        released
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read-only view of the entries in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.entries
    }

    /// Year used for age computation in listings.
    pub fn current_year(&self) -> i32 {
        self.clock.current_year()
    }
}
