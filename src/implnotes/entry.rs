//! # Entries
//!
//! An entry is a `## <ID> — <Title>` heading and everything below it up to the
//! next entry heading (or the end of the document). Headings are found with a
//! plain line scan; nothing here understands markdown beyond that pattern, so
//! a heading-shaped line inside a fenced code block is still treated as one.

use crate::error::Result;
use crate::model::{EntryId, LineRange};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

static ENTRY_HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^## ([0-9]{3}) — ").expect("entry heading pattern is valid"));

/// Current line span of every entry, keyed by its three-digit ID text.
pub type EntryRanges = BTreeMap<String, LineRange>;

/// An entry heading found in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryHeading {
    /// The three digits as written, `000` included.
    pub id: String,
    /// 1-indexed line number of the heading itself.
    pub line: usize,
}

/// Returns the three-digit ID of `line` if it is an entry heading.
pub fn parse_heading(line: &str) -> Option<&str> {
    ENTRY_HEADING_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// All entry headings in document order.
pub fn find_headings(lines: &[String]) -> Vec<EntryHeading> {
    lines
        .iter()
        .enumerate()
        .filter_map(|(i, line)| {
            parse_heading(line).map(|id| EntryHeading {
                id: id.to_string(),
                line: i + 1,
            })
        })
        .collect()
}

/// The ID the next entry should get: one past the largest existing ID.
///
/// Headings may appear in any order; only the maximum matters.
pub fn next_entry_id(lines: &[String]) -> Result<EntryId> {
    let max = find_headings(lines)
        .iter()
        .filter_map(|h| h.id.parse::<u16>().ok())
        .max();
    match max {
        Some(max) => EntryId::new(max + 1),
        None => Ok(EntryId::first()),
    }
}

/// Renders a heading, a blank line and the body.
///
/// Leading and trailing line breaks of the body are dropped; everything in
/// between (indentation, code fences, inner blank lines) is kept verbatim.
pub fn build_entry_block(id: EntryId, title: &str, body: &str) -> Vec<String> {
    let mut block = vec![format!("## {} — {}", id, title), String::new()];
    let body = body.trim_matches(|c| c == '\n' || c == '\r');
    if !body.is_empty() {
        block.extend(body.lines().map(str::to_string));
    }
    block
}

/// Maps each entry to the lines it currently occupies.
///
/// An entry ends on the line before the next heading; the last one runs to
/// the final line of the document. If an ID occurs twice the later heading
/// wins.
pub fn compute_entry_ranges(lines: &[String]) -> EntryRanges {
    let headings = find_headings(lines);
    let mut ranges = EntryRanges::new();
    for (i, heading) in headings.iter().enumerate() {
        let next_start = headings
            .get(i + 1)
            .map(|next| next.line)
            .unwrap_or(lines.len() + 1);
        ranges.insert(heading.id.clone(), LineRange::new(heading.line, next_start - 1));
    }
    log::debug!("computed ranges for {} entries", ranges.len());
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NotesError;

    fn doc(text: &str) -> Vec<String> {
        text.lines().map(str::to_string).collect()
    }

    fn id(n: u16) -> EntryId {
        EntryId::new(n).unwrap()
    }

    #[test]
    fn heading_requires_exact_pattern() {
        assert_eq!(parse_heading("## 004 — Title"), Some("004"));
        assert_eq!(parse_heading("## 000 — Zero"), Some("000"));
        assert_eq!(parse_heading("## 4 — Title"), None);
        assert_eq!(parse_heading("## 0004 — Title"), None);
        assert_eq!(parse_heading("### 004 — Title"), None);
        assert_eq!(parse_heading("## 004 - Title"), None);
        assert_eq!(parse_heading(" ## 004 — Title"), None);
    }

    #[test]
    fn next_id_on_empty_document_is_one() {
        assert_eq!(next_entry_id(&doc("# Notes\n\nNothing yet")).unwrap(), id(1));
    }

    #[test]
    fn next_id_uses_maximum_not_count() {
        let lines = doc("## 007 — A\n\n## 002 — B\n\n## 010 — C\n");
        assert_eq!(next_entry_id(&lines).unwrap(), id(11));
    }

    #[test]
    fn next_id_fails_after_999() {
        let lines = doc("## 999 — Last\n");
        assert!(matches!(
            next_entry_id(&lines),
            Err(NotesError::IdSpaceExhausted(999))
        ));
    }

    #[test]
    fn block_strips_outer_blank_lines_only() {
        let body = "\n\nFirst\n\n    indented\n```rust\nfn main() {}\n```\n\n\n";
        let block = build_entry_block(id(3), "Foo", body);
        assert_eq!(
            block,
            vec![
                "## 003 — Foo",
                "",
                "First",
                "",
                "    indented",
                "```rust",
                "fn main() {}",
                "```",
            ]
        );
    }

    #[test]
    fn block_with_empty_body_is_heading_and_blank() {
        assert_eq!(build_entry_block(id(1), "Empty", "\n\n"), vec!["## 001 — Empty", ""]);
        assert_eq!(build_entry_block(id(1), "Empty", ""), vec!["## 001 — Empty", ""]);
    }

    #[test]
    fn block_keeps_leading_spaces_on_first_line() {
        let block = build_entry_block(id(2), "Code", "    let x = 1;\n");
        assert_eq!(block[2], "    let x = 1;");
    }

    #[test]
    fn ranges_run_to_next_heading_or_end() {
        let lines = doc("# Notes\n## 001 — A\nbody\n\n## 002 — B\nmore\nlast");
        let ranges = compute_entry_ranges(&lines);
        assert_eq!(ranges["001"], LineRange::new(2, 4));
        assert_eq!(ranges["002"], LineRange::new(5, 7));
    }

    #[test]
    fn duplicate_heading_takes_later_position() {
        let lines = doc("## 001 — A\n## 001 — again\nx");
        let ranges = compute_entry_ranges(&lines);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges["001"], LineRange::new(2, 3));
    }

    #[test]
    fn zero_heading_still_ends_previous_entry() {
        let lines = doc("# Notes\n\n| ID | Title |\n|---|---|\n\n## 001 — A\na\n## 000 — Z\nz");
        let ranges = compute_entry_ranges(&lines);
        assert_eq!(ranges["001"], LineRange::new(6, 7));
        assert_eq!(ranges["000"], LineRange::new(8, 9));
    }

    #[test]
    fn zero_heading_does_not_affect_allocation() {
        let lines = doc("## 000 — Z\n");
        assert_eq!(next_entry_id(&lines).unwrap(), id(1));
    }

    #[test]
    fn ranges_are_a_pure_function_of_lines() {
        let lines = doc("## 001 — A\nx\n## 002 — B\ny");
        assert_eq!(compute_entry_ranges(&lines), compute_entry_ranges(&lines));
    }
}
