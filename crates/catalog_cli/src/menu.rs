//! Text menu driving the catalog.
//!
//! # Responsibility
//! - Prompt for and parse raw input into record fields.
//! - Call only the public catalog/record API; all formatting of results
//!   happens here.
//!
//! # Invariants
//! - Invalid input never ends the session; it prints an `Error:` line and
//!   returns to the main menu.
//! - End of input behaves like choosing Exit.
//! - The catalog is disposed exactly once, when the session ends.

use catalog_core::{Catalog, Category, ListingLine, Record, YearSource};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

/// Main-menu choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    AddBook,
    ListBooks,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddBook),
            "2" => Some(Self::ListBooks),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the session keeps going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Terminal I/O failure; the only error that ends a session early.
#[derive(Debug)]
pub enum MenuError {
    Io(io::Error),
}

impl Display for MenuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "terminal i/o failed: {err}"),
        }
    }
}

impl Error for MenuError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for MenuError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

/// Interactive session over arbitrary reader/writer handles.
pub struct Menu<R, W, C: YearSource> {
    input: R,
    output: W,
    catalog: Catalog<C>,
}

impl<R: BufRead, W: Write, C: YearSource> Menu<R, W, C> {
    pub fn new(input: R, output: W, catalog: Catalog<C>) -> Self {
        Self {
            input,
            output,
            catalog,
        }
    }

    #[cfg(test)]
    pub fn catalog(&self) -> &Catalog<C> {
        &self.catalog
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until Exit or end of input, then disposes the catalog.
    pub fn run(&mut self) -> Result<(), MenuError> {
        while self.step()? == Flow::Continue {}

        let released = self.catalog.dispose();
        info!(
            "event=session_end module=cli status=ok released={}",
            released
        );
        Ok(())
    }

    /// Shows the main menu and handles one choice.
    pub fn step(&mut self) -> Result<Flow, MenuError> {
        writeln!(self.output, "\nLibrary menu:")?;
        writeln!(self.output, "1. Add book")?;
        writeln!(self.output, "2. List all books")?;
        writeln!(self.output, "3. Exit")?;
        let Some(choice) = self.prompt("Choose an action (1-3): ")? else {
            return self.exit();
        };

        match MenuCommand::parse(&choice) {
            Some(MenuCommand::AddBook) => self.add_book(),
            Some(MenuCommand::ListBooks) => {
                self.list_books()?;
                Ok(Flow::Continue)
            }
            Some(MenuCommand::Exit) => self.exit(),
            None => {
                warn!("event=input_rejected module=cli status=error reason=invalid_choice");
                writeln!(
                    self.output,
                    "Error: invalid choice. Please choose 1, 2 or 3."
                )?;
                Ok(Flow::Continue)
            }
        }
    }

    fn add_book(&mut self) -> Result<Flow, MenuError> {
        writeln!(self.output, "\nAdd a new book:")?;
        let Some(title) = self.prompt("Title: ")? else {
            return self.exit();
        };
        let Some(author) = self.prompt("Author: ")? else {
            return self.exit();
        };
        let Some(year_input) = self.prompt("Publication year: ")? else {
            return self.exit();
        };
        let Ok(year) = year_input.trim().parse::<i32>() else {
            warn!("event=input_rejected module=cli status=error reason=year_format");
            writeln!(self.output, "Error: invalid year format.")?;
            return Ok(Flow::Continue);
        };

        writeln!(self.output, "Choose a category:")?;
        for category in Category::ALL {
            writeln!(self.output, "{} - {}", category.code(), category.label())?;
        }
        let Some(code_input) = self.prompt("Enter a number (0-4): ")? else {
            return self.exit();
        };
        let Some(category) = code_input
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Category::from_code)
        else {
            warn!("event=input_rejected module=cli status=error reason=category_code");
            writeln!(self.output, "Error: invalid category.")?;
            return Ok(Flow::Continue);
        };

        let current_year = self.catalog.current_year();
        match Record::new_at(&title, &author, year, category, current_year) {
            Ok(record) => match self.catalog.add(record) {
                Ok(confirmation) => writeln!(self.output, "{confirmation}")?,
                Err(err) => writeln!(self.output, "Error: {err}")?,
            },
            Err(err) => writeln!(self.output, "Error: {err}")?,
        }
        Ok(Flow::Continue)
    }

    fn list_books(&mut self) -> Result<(), MenuError> {
        let mut wrote_header = false;
        for line in self.catalog.list_all() {
            match line {
                ListingLine::Empty => writeln!(self.output, "{line}")?,
                ListingLine::Entry { .. } => {
                    if !wrote_header {
                        writeln!(self.output, "\nAll books in the library:")?;
                        wrote_header = true;
                    }
                    writeln!(self.output, "\n{line}")?;
                }
            }
        }
        Ok(())
    }

    fn exit(&mut self) -> Result<Flow, MenuError> {
        writeln!(self.output, "Goodbye.")?;
        Ok(Flow::Exit)
    }

    /// Writes `label`, then reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, MenuError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
