use super::DocumentStore;
use crate::document::Document;
use crate::error::{NotesError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file that actually gets rewritten: symlinks are followed so the
    /// link itself stays in place. Falls back to the configured path when it
    /// does not exist yet.
    fn target_path(&self) -> PathBuf {
        fs::canonicalize(&self.path).unwrap_or_else(|_| self.path.clone())
    }
}

fn temp_path_for(target: &Path) -> PathBuf {
    let name = target
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "notes".to_string());
    target.with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
}

impl DocumentStore for FileStore {
    fn load(&self) -> Result<Document> {
        let text = read_text(&self.path)?;
        log::debug!("loaded {} bytes from {}", text.len(), self.path.display());
        Ok(Document::parse(&text))
    }

    fn save(&mut self, document: &Document) -> Result<()> {
        let target = self.target_path();
        let tmp_file = temp_path_for(&target);
        fs::write(&tmp_file, document.render()).map_err(|e| NotesError::io(&tmp_file, e))?;
        if let Err(e) = fs::rename(&tmp_file, &target) {
            let _ = fs::remove_file(&tmp_file);
            return Err(NotesError::io(&target, e));
        }
        log::debug!("wrote {} lines to {}", document.lines().len(), target.display());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Reads a UTF-8 text file, reporting the path on failure.
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| NotesError::io(path, e))
}
