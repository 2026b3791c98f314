use crate::commands::{CmdMessage, CmdResult, ListedEntry, RowStatus};
use crate::entry::compute_entry_ranges;
use crate::error::Result;
use crate::store::DocumentStore;
use crate::table::{locate_index_table, read_index_rows};

/// Lists the index rows and compares each recorded range with the entry's
/// actual position. Never writes.
pub fn run<S: DocumentStore>(store: &S) -> Result<CmdResult> {
    let doc = store.load()?;
    let span = locate_index_table(doc.lines())?;
    let ranges = compute_entry_ranges(doc.lines());

    let listed: Vec<ListedEntry> = read_index_rows(doc.lines(), span)
        .into_iter()
        .map(|row| {
            let actual = ranges.get(&row.id).copied();
            let status = match actual {
                None => RowStatus::Orphaned,
                Some(range) if row.recorded_range() == Some(range) => RowStatus::Current,
                Some(_) => RowStatus::Stale,
            };
            ListedEntry {
                id: row.id,
                title: row.title,
                recorded: row.range,
                actual,
                status,
            }
        })
        .collect();

    let stale = listed
        .iter()
        .filter(|e| e.status == RowStatus::Stale)
        .count();

    let mut result = CmdResult::default();
    if listed.is_empty() {
        result.add_message(CmdMessage::info("No entries indexed yet."));
    } else if stale > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} stale range(s); run `implnotes reindex` to refresh",
            stale
        )));
    }
    Ok(result.with_listed_entries(listed))
}
