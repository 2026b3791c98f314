use crate::model::{EntryId, LineRange};

pub mod append;
pub mod list;
pub mod reindex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// The entry created by an `append`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppendedEntry {
    pub id: EntryId,
    pub title: String,
    pub range: Option<LineRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowStatus {
    /// Recorded range matches the heading positions.
    Current,
    /// Recorded range differs from the heading positions.
    Stale,
    /// No heading carries this row's ID.
    Orphaned,
}

/// One index row as reported by `list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListedEntry {
    pub id: String,
    pub title: String,
    pub recorded: String,
    pub actual: Option<LineRange>,
    pub status: RowStatus,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub appended: Option<AppendedEntry>,
    pub listed_entries: Vec<ListedEntry>,
    /// Full document text, set when a command ran without writing.
    pub rendered: Option<String>,
    pub updated_rows: usize,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_appended(mut self, entry: AppendedEntry) -> Self {
        self.appended = Some(entry);
        self
    }

    pub fn with_listed_entries(mut self, entries: Vec<ListedEntry>) -> Self {
        self.listed_entries = entries;
        self
    }

    pub fn with_rendered(mut self, text: String) -> Self {
        self.rendered = Some(text);
        self
    }
}
