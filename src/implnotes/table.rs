//! # Index Table
//!
//! A minimal reader/writer for the one pipe table that indexes the entries.
//!
//! Grammar, as far as this module cares:
//!
//! ```text
//! | ID | Title | ...        <- header, found by its literal prefix
//! |----|-------|-...        <- separator, never inspected
//! | 001 | ... | 12-40 |     <- data rows: first cell is exactly three digits
//! ```
//!
//! The table ends at the first line that does not start with `|` once
//! surrounding whitespace is removed. Only the first matching header counts.
//! Rows whose first cell is not a three-digit ID are skipped and never
//! rewritten.

use crate::document::Document;
use crate::entry::EntryRanges;
use crate::error::{NotesError, Result};
use crate::model::{is_entry_id, render_cells, IndexRow, INDEX_COLUMNS};

/// Literal prefix identifying the header row.
pub const TABLE_HEADER_PREFIX: &str = "| ID | Title |";

/// Header and separator rows preceding the data rows.
const HEADER_ROWS: usize = 2;

/// Location of the index table: `start` is the header line, `end` is
/// exclusive. Both are 0-based line indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpan {
    pub start: usize,
    pub end: usize,
}

impl TableSpan {
    /// First line that may hold a data row.
    pub fn body_start(&self) -> usize {
        self.start + HEADER_ROWS
    }
}

/// A recognized data row and where it sits in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLocation {
    /// 0-based line index.
    pub line: usize,
    pub id: String,
    pub cells: Vec<String>,
}

pub fn locate_index_table(lines: &[String]) -> Result<TableSpan> {
    let start = lines
        .iter()
        .position(|line| line.trim().starts_with(TABLE_HEADER_PREFIX))
        .ok_or(NotesError::IndexTableNotFound)?;
    let end = lines[start..]
        .iter()
        .position(|line| !line.trim().starts_with('|'))
        .map(|offset| start + offset)
        .unwrap_or(lines.len());
    log::debug!("index table spans lines {}..{}", start + 1, end);
    Ok(TableSpan { start, end })
}

/// Splits a table line into trimmed cells. Returns `None` for lines that are
/// not table lines.
pub fn split_cells(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if !line.starts_with('|') {
        return None;
    }
    Some(
        line.trim_matches('|')
            .split('|')
            .map(|cell| cell.trim().to_string())
            .collect(),
    )
}

/// Data rows of the table in document order.
pub fn parse_index_rows(lines: &[String], span: TableSpan) -> Vec<RowLocation> {
    let mut rows = Vec::new();
    for i in span.body_start()..span.end.min(lines.len()) {
        let Some(cells) = split_cells(&lines[i]) else {
            continue;
        };
        let id = cells.first().cloned().unwrap_or_default();
        if !is_entry_id(&id) {
            log::trace!("skipping table line {}: {:?} is not an entry ID", i + 1, id);
            continue;
        }
        rows.push(RowLocation { line: i, id, cells });
    }
    rows
}

/// Index rows as typed values, for reporting.
pub fn read_index_rows(lines: &[String], span: TableSpan) -> Vec<IndexRow> {
    parse_index_rows(lines, span)
        .iter()
        .map(|row| IndexRow::from_cells(&row.cells))
        .collect()
}

/// Where a new row goes: right after the last data row, or right after the
/// separator when the table has none.
pub fn row_insertion_point(rows: &[RowLocation], span: TableSpan) -> usize {
    rows.last()
        .map(|row| row.line + 1)
        .unwrap_or_else(|| span.body_start())
}

/// Adds `row` at the bottom of the table's data rows.
pub fn insert_index_row(doc: Document, row: &IndexRow) -> Result<Document> {
    let span = locate_index_table(doc.lines())?;
    let rows = parse_index_rows(doc.lines(), span);
    let at = row_insertion_point(&rows, span);
    log::debug!("inserting index row {} at line {}", row.id, at + 1);
    Ok(doc.with_line_inserted(at, row.render()))
}

/// Result of rewriting range cells.
#[derive(Debug)]
pub struct RangeUpdate {
    pub document: Document,
    /// Rows whose text changed.
    pub changed: usize,
    /// IDs of data rows with no matching entry heading.
    pub orphaned: Vec<String>,
}

/// Rewrites the range cell of every data row from `ranges`.
///
/// Rows without a matching heading, or with fewer than the five expected
/// cells, keep their original text. Rewritten rows are normalized to
/// single-space cell padding.
pub fn update_index_ranges(doc: Document, ranges: &EntryRanges) -> Result<RangeUpdate> {
    let span = locate_index_table(doc.lines())?;
    let rows = parse_index_rows(doc.lines(), span);

    let mut document = doc;
    let mut changed = 0;
    let mut orphaned = Vec::new();
    for row in rows {
        let Some(range) = ranges.get(&row.id) else {
            orphaned.push(row.id);
            continue;
        };
        if row.cells.len() < INDEX_COLUMNS {
            log::trace!("row {} has {} cells, leaving it alone", row.id, row.cells.len());
            continue;
        }
        let mut cells = row.cells;
        if let Some(last) = cells.last_mut() {
            *last = range.to_string();
        }
        let rendered = render_cells(&cells);
        if document.lines()[row.line] != rendered {
            changed += 1;
            document = document.with_line_replaced(row.line, rendered);
        }
    }

    Ok(RangeUpdate {
        document,
        changed,
        orphaned,
    })
}
