//! Lazy enumeration over catalog entries.

use crate::model::record::Record;
use std::fmt::{Display, Formatter};
use std::iter::{Enumerate, FusedIterator};
use std::slice::Iter;

/// Text shown in place of entries when the catalog holds none.
pub const EMPTY_CATALOG_MESSAGE: &str = "Library is empty.";

/// One line of a catalog listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingLine {
    /// Produced once, alone, when the catalog has no entries.
    Empty,
    /// Formatted record at a 1-based display position.
    Entry { position: usize, description: String },
}

impl ListingLine {
    pub fn is_empty_marker(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Display for ListingLine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => f.write_str(EMPTY_CATALOG_MESSAGE),
            Self::Entry {
                position,
                description,
            } => write!(f, "Book #{position}:\n{description}"),
        }
    }
}

/// Iterator returned by `Catalog::list_all`.
///
/// Descriptions are rendered on demand; nothing is formatted for entries the
/// caller never pulls.
#[derive(Debug, Clone)]
pub struct Listing<'a> {
    records: Enumerate<Iter<'a, Record>>,
    current_year: i32,
    empty_pending: bool,
}

impl<'a> Listing<'a> {
    pub(crate) fn new(records: &'a [Record], current_year: i32) -> Self {
        Self {
            records: records.iter().enumerate(),
            current_year,
            empty_pending: records.is_empty(),
        }
    }
}

impl Iterator for Listing<'_> {
    type Item = ListingLine;

    fn next(&mut self) -> Option<Self::Item> {
        if self.empty_pending {
            self.empty_pending = false;
            return Some(ListingLine::Empty);
        }
        self.records
            .next()
            .map(|(index, record)| ListingLine::Entry {
                position: index + 1,
                description: record.describe_at(self.current_year),
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len() + usize::from(self.empty_pending);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Listing<'_> {}

impl FusedIterator for Listing<'_> {}

#[cfg(test)]
mod tests {
    use super::{Listing, ListingLine};
    use crate::model::record::{Category, Record};

    #[test]
    fn empty_slice_yields_single_marker() {
        let lines: Vec<ListingLine> = Listing::new(&[], 2024).collect();
        assert_eq!(lines, vec![ListingLine::Empty]);
        assert_eq!(lines[0].to_string(), "Library is empty.");
    }

    #[test]
    fn entries_are_one_indexed_and_sized() {
        let records = vec![
            Record::new_at("A", "X", 2000, Category::Other, 2024).expect("valid record"),
            Record::new_at("B", "Y", 2001, Category::Other, 2024).expect("valid record"),
        ];
        let listing = Listing::new(&records, 2024);
        assert_eq!(listing.len(), 2);

        let positions: Vec<usize> = listing
            .map(|line| match line {
                ListingLine::Entry { position, .. } => position,
                ListingLine::Empty => 0,
            })
            .collect();
        assert_eq!(positions, vec![1, 2]);
    }

    #[test]
    fn entry_display_has_heading() {
        let line = ListingLine::Entry {
            position: 3,
            description: "Title: Dune".to_string(),
        };
        assert_eq!(line.to_string(), "Book #3:\nTitle: Dune");
    }
}
