//! Book record domain model.
//!
//! # Responsibility
//! - Define the validated catalog entry and its closed category tag.
//! - Render the human-readable description shown by list views.
//!
//! # Invariants
//! - `title` and `author` are stored trimmed and are never blank.
//! - `publication_year` lies in `0..=current_year` at the time it was set.
//! - Setters validate before mutating; a rejected value leaves state unchanged.
//! - `age` is derived on every call and never stored.

use crate::clock::system_year;
use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Earliest accepted publication year.
pub const MIN_PUBLICATION_YEAR: i32 = 0;

/// Literature classification attached to every record.
///
/// Discriminants are stable menu codes. Reordering variants must not change
/// them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Category {
    /// Novels, poetry and other literary works.
    Fiction = 0,
    /// Teaching and instructional material.
    Methodical = 1,
    /// Handbooks, dictionaries, encyclopedias.
    Reference = 2,
    /// Research publications.
    Scientific = 3,
    Other = 4,
}

impl Category {
    /// Every category ordered by code.
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::Methodical,
        Category::Reference,
        Category::Scientific,
        Category::Other,
    ];

    /// Stable numeric code used by the menu picker.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Resolves a menu code. Returns `None` for codes outside the closed set.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.code() == code)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction",
            Self::Methodical => "Methodical",
            Self::Reference => "Reference",
            Self::Scientific => "Scientific",
            Self::Other => "Other",
        }
    }

    /// Short explanation shown next to the tag in pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Fiction => "Fiction (literary works)",
            Self::Methodical => "Methodical (teaching materials)",
            Self::Reference => "Reference (handbooks, dictionaries)",
            Self::Scientific => "Scientific (research publications)",
            Self::Other => "Other",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record field named by a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordField {
    Title,
    Author,
    PublicationYear,
}

impl RecordField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::PublicationYear => "publication_year",
        }
    }
}

impl Display for RecordField {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constraint violated by a rejected field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationReason {
    /// Text was empty or whitespace-only.
    Blank,
    /// Year fell outside `0..=current_year`.
    YearOutOfRange { year: i32, current_year: i32 },
}

/// Field-level validation failure for record construction and setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: RecordField,
    pub reason: ValidationReason,
}

impl ValidationError {
    fn new(field: RecordField, reason: ValidationReason) -> Self {
        debug!(
            "event=record_validation_failed module=model status=error field={}",
            field
        );
        Self { field, reason }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            ValidationReason::Blank => write!(f, "{} must not be blank", self.field),
            ValidationReason::YearOutOfRange { year, current_year } => write!(
                f,
                "{} must be between {MIN_PUBLICATION_YEAR} and {current_year}, got {year}",
                self.field
            ),
        }
    }
}

impl Error for ValidationError {}

/// One validated catalog entry (a book).
///
/// Fields are private so that every write goes through validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RecordFields")]
pub struct Record {
    title: String,
    author: String,
    publication_year: i32,
    category: Category,
}

impl Record {
    /// Creates a record validated against the system clock year.
    ///
    /// # Errors
    /// Returns the first violation in order: title, author, publication year.
    pub fn new(
        title: &str,
        author: &str,
        publication_year: i32,
        category: Category,
    ) -> Result<Self, ValidationError> {
        Self::new_at(title, author, publication_year, category, system_year())
    }

    /// Creates a record validated against an injected `current_year`.
    pub fn new_at(
        title: &str,
        author: &str,
        publication_year: i32,
        category: Category,
        current_year: i32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            title: normalize_text(RecordField::Title, title)?,
            author: normalize_text(RecordField::Author, author)?,
            publication_year: check_year(publication_year, current_year)?,
            category,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn publication_year(&self) -> i32 {
        self.publication_year
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Replaces the title with its trimmed form.
    pub fn set_title(&mut self, title: &str) -> Result<(), ValidationError> {
        self.title = normalize_text(RecordField::Title, title)?;
        Ok(())
    }

    /// Replaces the author with its trimmed form.
    pub fn set_author(&mut self, author: &str) -> Result<(), ValidationError> {
        self.author = normalize_text(RecordField::Author, author)?;
        Ok(())
    }

    /// Replaces the publication year, checked against the system clock year.
    pub fn set_publication_year(&mut self, year: i32) -> Result<(), ValidationError> {
        self.set_publication_year_at(year, system_year())
    }

    pub fn set_publication_year_at(
        &mut self,
        year: i32,
        current_year: i32,
    ) -> Result<(), ValidationError> {
        self.publication_year = check_year(year, current_year)?;
        Ok(())
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Years elapsed since publication according to the system clock.
    pub fn age(&self) -> i32 {
        self.age_at(system_year())
    }

    pub fn age_at(&self, current_year: i32) -> i32 {
        current_year - self.publication_year
    }

    /// Re-checks every field against `current_year`.
    ///
    /// A record accepted in one year can fail here in an earlier one, since
    /// the year bound moves with the clock.
    pub fn validate_at(&self, current_year: i32) -> Result<(), ValidationError> {
        normalize_text(RecordField::Title, &self.title)?;
        normalize_text(RecordField::Author, &self.author)?;
        check_year(self.publication_year, current_year)?;
        Ok(())
    }

    /// Multi-line description using the system clock year for the age.
    pub fn describe(&self) -> String {
        self.describe_at(system_year())
    }

    pub fn describe_at(&self, current_year: i32) -> String {
        format!(
            "Title: {}\nAuthor: {}\nPublication year: {}\nAge: {} years\nCategory: {}",
            self.title,
            self.author,
            self.publication_year,
            self.age_at(current_year),
            self.category
        )
    }
}

/// Unvalidated wire shape; converted through the constructor on decode.
#[derive(Deserialize)]
struct RecordFields {
    title: String,
    author: String,
    publication_year: i32,
    category: Category,
}

impl TryFrom<RecordFields> for Record {
    type Error = ValidationError;

    fn try_from(value: RecordFields) -> Result<Self, Self::Error> {
        Self::new(
            &value.title,
            &value.author,
            value.publication_year,
            value.category,
        )
    }
}

fn normalize_text(field: RecordField, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(field, ValidationReason::Blank));
    }
    Ok(trimmed.to_string())
}

fn check_year(year: i32, current_year: i32) -> Result<i32, ValidationError> {
    if !(MIN_PUBLICATION_YEAR..=current_year).contains(&year) {
        return Err(ValidationError::new(
            RecordField::PublicationYear,
            ValidationReason::YearOutOfRange { year, current_year },
        ));
    }
    Ok(year)
}
