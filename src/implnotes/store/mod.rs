//! # Storage Layer
//!
//! The notes document is read once and written once per run. The
//! [`DocumentStore`] trait hides where it lives so commands can be tested
//! without touching the filesystem.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: the markdown file on disk.
//!   - Reads the whole file into a [`Document`].
//!   - Writes through a temporary sibling file that is renamed over the
//!     target, so readers never see a half-written file.
//!
//! - [`memory::InMemoryStore`]: an in-memory document for tests.
//!   - Counts writes, which lets tests assert that failed runs persist
//!     nothing.

use crate::document::Document;
use crate::error::Result;
use std::path::Path;

pub mod fs;
pub mod memory;

/// Abstract interface for the notes document.
pub trait DocumentStore {
    /// Read the full document
    fn load(&self) -> Result<Document>;

    /// Replace the stored document in a single write
    fn save(&mut self, document: &Document) -> Result<()>;

    /// Where the document lives, for messages
    fn location(&self) -> &Path;
}
