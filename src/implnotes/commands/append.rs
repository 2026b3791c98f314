use crate::commands::{AppendedEntry, CmdMessage, CmdResult};
use crate::document::Document;
use crate::entry::{build_entry_block, compute_entry_ranges, next_entry_id};
use crate::error::{NotesError, Result};
use crate::model::{EntryId, IndexRow, LineRange, NewEntry};
use crate::store::DocumentStore;
use crate::table::{insert_index_row, update_index_ranges};

/// The document after an append, plus what was added.
#[derive(Debug)]
pub struct AppendOutcome {
    pub document: Document,
    pub id: EntryId,
    pub range: Option<LineRange>,
}

/// Appends `entry` to `doc` and refreshes every index range.
///
/// Steps: allocate the next ID, append `---` and the entry block, add an index
/// row below the existing ones, then recompute ranges from the final heading
/// positions. Nothing is written here.
pub fn apply(doc: Document, entry: &NewEntry) -> Result<AppendOutcome> {
    let id = next_entry_id(doc.lines())?;
    log::debug!("allocated entry {}", id);

    let block = build_entry_block(id, &entry.title, &entry.body);
    let doc = doc.with_entry_block(block);
    let doc = insert_index_row(doc, &IndexRow::for_new_entry(id, entry))?;

    let ranges = compute_entry_ranges(doc.lines());
    let range = ranges.get(&id.to_string()).copied();
    let update = update_index_ranges(doc, &ranges)?;

    Ok(AppendOutcome {
        document: update.document,
        id,
        range,
    })
}

pub fn run<S: DocumentStore>(store: &mut S, entry: &NewEntry, dry_run: bool) -> Result<CmdResult> {
    validate(entry)?;

    let doc = store.load()?;
    let outcome = apply(doc, entry)?;

    let mut result = CmdResult::default().with_appended(AppendedEntry {
        id: outcome.id,
        title: entry.title.clone(),
        range: outcome.range,
    });

    let lines = outcome
        .range
        .map(|r| format!(" (lines {})", r))
        .unwrap_or_default();

    if dry_run {
        result.add_message(CmdMessage::info(format!(
            "Dry run: entry {} — {}{} not written to {}",
            outcome.id,
            entry.title,
            lines,
            store.location().display()
        )));
        return Ok(result.with_rendered(outcome.document.render()));
    }

    store.save(&outcome.document)?;
    result.add_message(CmdMessage::success(format!(
        "Entry added: {} — {}{}",
        outcome.id, entry.title, lines
    )));
    Ok(result)
}

/// Rejects input that would produce a broken heading or index row: an empty
/// (or whitespace-only) title, and line breaks in the title, when-to-read or
/// keywords. The earlier Python helper accepted an empty title and wrote a
/// `## NNN — ` heading with nothing after it; this one refuses.
fn validate(entry: &NewEntry) -> Result<()> {
    if entry.title.trim().is_empty() {
        return Err(NotesError::Api("Title cannot be empty".into()));
    }
    let fields = [
        ("Title", &entry.title),
        ("When-to-read", &entry.when_read),
        ("Keywords", &entry.keywords),
    ];
    for (name, value) in fields {
        if value.contains('\n') || value.contains('\r') {
            return Err(NotesError::Api(format!("{} must be a single line", name)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;
    use crate::table::{locate_index_table, parse_index_rows};

    const TWO_ENTRIES: &str = "\
# Notes

| ID | Title | When to read | Keywords | Lines |
|----|-------|--------------|----------|-------|
| 001 | A | w | k | 1-1 |
| 002 | B | w | k | 1-1 |

---

## 001 — A

alpha

---

## 002 — B

beta
";

    fn foo() -> NewEntry {
        NewEntry::new("Foo", "one\ntwo\nthree\n", "When foo", "foo, bar")
    }

    fn row_ids(doc: &Document) -> Vec<String> {
        let span = locate_index_table(doc.lines()).unwrap();
        parse_index_rows(doc.lines(), span)
            .into_iter()
            .map(|r| r.id)
            .collect()
    }

    #[test]
    fn appends_entry_and_refreshes_all_ranges() {
        let mut store = InMemoryStore::with_text(TWO_ENTRIES);
        let result = run(&mut store, &foo(), false).unwrap();

        let expected = "\
# Notes

| ID | Title | When to read | Keywords | Lines |
|----|-------|--------------|----------|-------|
| 001 | A | w | k | 11-16 |
| 002 | B | w | k | 17-22 |
| 003 | Foo | When foo | foo, bar | 23-27 |

---

## 001 — A

alpha

---

## 002 — B

beta

---

## 003 — Foo

one
two
three
";
        assert_eq!(store.text(), expected);
        assert_eq!(store.writes(), 1);

        let appended = result.appended.unwrap();
        assert_eq!(appended.id.to_string(), "003");
        assert_eq!(appended.range, Some(LineRange::new(23, 27)));
    }

    #[test]
    fn first_entry_row_lands_below_separator() {
        let text = "# Notes\n\n| ID | Title | When to read | Keywords | Lines |\n|---|---|---|---|---|\n";
        let outcome = apply(Document::parse(text), &NewEntry::new("First", "body", "w", "k")).unwrap();

        assert_eq!(outcome.id.to_string(), "001");
        let lines = outcome.document.lines();
        assert_eq!(lines[4], "| 001 | First | w | k | 9-11 |");
        assert_eq!(lines[5], "");
        assert_eq!(lines[6], "---");
        assert_eq!(lines[8], "## 001 — First");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn id_is_one_past_maximum() {
        let text = "\
| ID | Title | When to read | Keywords | Lines |
|---|---|---|---|---|
| 004 | D | w | k | x |
| 002 | B | w | k | x |

## 004 — D

## 002 — B
";
        let outcome = apply(Document::parse(text), &foo()).unwrap();
        assert_eq!(outcome.id.to_string(), "005");
        // Appended rows keep insertion order rather than ID order.
        assert_eq!(row_ids(&outcome.document), vec!["004", "002", "005"]);
    }

    #[test]
    fn row_count_grows_by_one() {
        let before = row_ids(&Document::parse(TWO_ENTRIES)).len();
        let outcome = apply(Document::parse(TWO_ENTRIES), &foo()).unwrap();
        assert_eq!(row_ids(&outcome.document).len(), before + 1);
    }

    #[test]
    fn body_is_copied_verbatim() {
        let body = "\n\nIntro line\n\n```ts\nconst x = {\n    nested: true,\n};\n```\n\n  - item\n\t- tabbed\n\n";
        let outcome = apply(
            Document::parse(TWO_ENTRIES),
            &NewEntry::new("Code", body, "w", "k"),
        )
        .unwrap();
        let rendered = outcome.document.render();
        let expected_body = "Intro line\n\n```ts\nconst x = {\n    nested: true,\n};\n```\n\n  - item\n\t- tabbed\n";
        assert!(rendered.ends_with(&format!("## 003 — Code\n\n{}", expected_body)));
    }

    #[test]
    fn malformed_rows_survive_untouched() {
        let text = "\
| ID | Title | When to read | Keywords | Lines |
|---|---|---|---|---|
| 001 | A | w | k | 1-1 |
|  abc | stray |  row | here | zz |

## 001 — A
";
        let outcome = apply(Document::parse(text), &foo()).unwrap();
        let lines = outcome.document.lines();
        assert_eq!(lines[3], "| 002 | Foo | When foo | foo, bar | 11-15 |");
        assert_eq!(lines[4], "|  abc | stray |  row | here | zz |");
        assert_eq!(row_ids(&outcome.document), vec!["001", "002"]);
    }

    #[test]
    fn missing_table_fails_without_writing() {
        let text = "# Notes\n\n## 001 — A\n";
        let mut store = InMemoryStore::with_text(text);
        let err = run(&mut store, &foo(), false).unwrap_err();
        assert!(matches!(err, NotesError::IndexTableNotFound));
        assert_eq!(store.writes(), 0);
        assert_eq!(store.text(), text);
    }

    #[test]
    fn dry_run_renders_without_writing() {
        let mut store = InMemoryStore::with_text(TWO_ENTRIES);
        let result = run(&mut store, &foo(), true).unwrap();
        assert_eq!(store.writes(), 0);
        assert_eq!(store.text(), TWO_ENTRIES);
        assert!(result.rendered.unwrap().contains("## 003 — Foo"));
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut store = InMemoryStore::with_text(TWO_ENTRIES);
        let entry = NewEntry::new("  ", "body", "w", "k");
        assert!(matches!(
            run(&mut store, &entry, false),
            Err(NotesError::Api(_))
        ));
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn multi_line_keywords_are_rejected() {
        let mut store = InMemoryStore::with_text(TWO_ENTRIES);
        let entry = NewEntry::new("T", "body", "w", "a\nb");
        match run(&mut store, &entry, false) {
            Err(NotesError::Api(msg)) => assert_eq!(msg, "Keywords must be a single line"),
            other => panic!("expected Api error, got {:?}", other.map(|_| ())),
        }
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn output_ends_with_single_newline() {
        let mut store = InMemoryStore::with_text(TWO_ENTRIES);
        run(&mut store, &NewEntry::new("T", "body\n\n\n", "w", "k"), false).unwrap();
        let text = store.text();
        assert!(text.ends_with("body\n"));
        assert!(!text.ends_with("\n\n"));
    }
}
