use crate::commands::{CmdMessage, CmdResult};
use crate::entry::compute_entry_ranges;
use crate::error::Result;
use crate::store::DocumentStore;
use crate::table::update_index_ranges;

/// Recomputes every index range from the current heading positions.
///
/// The document is only written when at least one row changed.
pub fn run<S: DocumentStore>(store: &mut S, dry_run: bool) -> Result<CmdResult> {
    let doc = store.load()?;
    let ranges = compute_entry_ranges(doc.lines());
    let update = update_index_ranges(doc, &ranges)?;

    let mut result = CmdResult {
        updated_rows: update.changed,
        ..CmdResult::default()
    };
    for id in &update.orphaned {
        result.add_message(CmdMessage::warning(format!(
            "Index row {} has no matching entry heading",
            id
        )));
    }

    if update.changed == 0 {
        result.add_message(CmdMessage::info("Index ranges are up to date"));
        return Ok(result);
    }

    if dry_run {
        result.add_message(CmdMessage::info(format!(
            "Dry run: {} index row(s) would change",
            update.changed
        )));
        return Ok(result.with_rendered(update.document.render()));
    }

    store.save(&update.document)?;
    result.add_message(CmdMessage::success(format!(
        "Updated {} index row(s) in {}",
        update.changed,
        store.location().display()
    )));
    Ok(result)
}
