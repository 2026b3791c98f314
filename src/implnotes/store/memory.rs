use super::DocumentStore;
use crate::document::Document;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// In-memory document for testing.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    document: Document,
    location: PathBuf,
    writes: usize,
}

impl InMemoryStore {
    pub fn with_text(text: &str) -> Self {
        Self {
            document: Document::parse(text),
            location: PathBuf::from("memory.md"),
            writes: 0,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn text(&self) -> String {
        self.document.render()
    }

    /// Number of successful `save` calls so far.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DocumentStore for InMemoryStore {
    fn load(&self) -> Result<Document> {
        Ok(self.document.clone())
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        self.document = document.clone();
        self.writes += 1;
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.location
    }
}
