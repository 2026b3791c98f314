use crate::error::{NotesError, Result};
use std::fmt;
use std::str::FromStr;

/// Number of cells in an index table row.
pub const INDEX_COLUMNS: usize = 5;

/// Placeholder written into the range cell of a freshly inserted row.
pub const RANGE_PLACEHOLDER: &str = "TBD";

/// A three-digit entry number (001-999).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(u16);

impl EntryId {
    pub const MAX: u16 = 999;

    pub fn new(value: u16) -> Result<Self> {
        if value == 0 {
            return Err(NotesError::Api("Entry IDs start at 001".to_string()));
        }
        if value > Self::MAX {
            return Err(NotesError::IdSpaceExhausted(Self::MAX));
        }
        Ok(Self(value))
    }

    pub fn first() -> Self {
        Self(1)
    }

    pub fn value(self) -> u16 {
        self.0
    }

    /// The ID following this one, failing once 999 is used up.
    pub fn next(self) -> Result<Self> {
        Self::new(self.0 + 1)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

impl FromStr for EntryId {
    type Err = NotesError;

    /// Accepts exactly three ASCII digits, the form used in headings and rows.
    fn from_str(s: &str) -> Result<Self> {
        if !is_entry_id(s) {
            return Err(NotesError::Api(format!("Invalid entry ID: {}", s)));
        }
        let value: u16 = s
            .parse()
            .map_err(|_| NotesError::Api(format!("Invalid entry ID: {}", s)))?;
        Self::new(value)
    }
}

/// True when `s` is exactly three ASCII digits.
pub fn is_entry_id(s: &str) -> bool {
    s.len() == 3 && s.bytes().all(|b| b.is_ascii_digit())
}

/// A 1-indexed, inclusive span of document lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

impl FromStr for LineRange {
    type Err = NotesError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || NotesError::Api(format!("Invalid line range: {}", s));
        let (start, end) = s.trim().split_once('-').ok_or_else(invalid)?;
        let start = start.trim().parse().map_err(|_| invalid())?;
        let end = end.trim().parse().map_err(|_| invalid())?;
        Ok(Self { start, end })
    }
}

/// The user-supplied parts of a new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEntry {
    pub title: String,
    pub body: String,
    pub when_read: String,
    pub keywords: String,
}

impl NewEntry {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        when_read: impl Into<String>,
        keywords: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            when_read: when_read.into(),
            keywords: keywords.into(),
        }
    }
}

/// One data row of the index table.
///
/// `id` is kept as text so rows read from disk can be carried around without
/// being re-validated; only rows whose ID is three digits are ever parsed
/// into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexRow {
    pub id: String,
    pub title: String,
    pub when_read: String,
    pub keywords: String,
    pub range: String,
}

impl IndexRow {
    /// A row for a just-appended entry; its range is filled in afterwards.
    pub fn for_new_entry(id: EntryId, entry: &NewEntry) -> Self {
        Self {
            id: id.to_string(),
            title: entry.title.clone(),
            when_read: entry.when_read.clone(),
            keywords: entry.keywords.clone(),
            range: RANGE_PLACEHOLDER.to_string(),
        }
    }

    /// Builds a row from already-trimmed cells. Missing cells are left empty;
    /// the range is always the last cell of a full-width row.
    pub fn from_cells(cells: &[String]) -> Self {
        let cell = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let range = if cells.len() >= INDEX_COLUMNS {
            cells.last().cloned().unwrap_or_default()
        } else {
            String::new()
        };
        Self {
            id: cell(0),
            title: cell(1),
            when_read: cell(2),
            keywords: cell(3),
            range,
        }
    }

    pub fn recorded_range(&self) -> Option<LineRange> {
        self.range.parse().ok()
    }

    pub fn render(&self) -> String {
        render_cells(&[
            &self.id,
            &self.title,
            &self.when_read,
            &self.keywords,
            &self.range,
        ])
    }
}

/// Joins cells into a `| a | b |` table line.
pub fn render_cells<S: AsRef<str>>(cells: &[S]) -> String {
    let joined: Vec<&str> = cells.iter().map(|c| c.as_ref()).collect();
    format!("| {} |", joined.join(" | "))
}
