//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for UI
//! clients. It dispatches to `commands/*.rs` and returns `Result<CmdResult>`;
//! it never prints.
//!
//! `NotesApi<S: DocumentStore>` is generic over the storage backend:
//! - Production: `NotesApi<FileStore>`
//! - Testing: `NotesApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::model::NewEntry;
use crate::store::fs::read_text;
use crate::store::DocumentStore;
use std::path::Path;

pub use crate::commands::{
    AppendedEntry, CmdMessage, CmdResult, ListedEntry, MessageLevel, RowStatus,
};

pub struct NotesApi<S: DocumentStore> {
    store: S,
}

impl<S: DocumentStore> NotesApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn append_entry(&mut self, entry: &NewEntry, dry_run: bool) -> Result<CmdResult> {
        commands::append::run(&mut self.store, entry, dry_run)
    }

    /// Like [`append_entry`](Self::append_entry), reading the body from a file.
    pub fn append_entry_from_file(
        &mut self,
        body_path: &Path,
        title: String,
        when_read: String,
        keywords: String,
        dry_run: bool,
    ) -> Result<CmdResult> {
        let body = read_text(body_path)?;
        let entry = NewEntry::new(title, body, when_read, keywords);
        self.append_entry(&entry, dry_run)
    }

    pub fn reindex(&mut self, dry_run: bool) -> Result<CmdResult> {
        commands::reindex::run(&mut self.store, dry_run)
    }

    pub fn list_entries(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }
}
