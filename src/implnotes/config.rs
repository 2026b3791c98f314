//! # Configuration
//!
//! The only setting is which notes file to operate on. It is resolved in
//! priority order:
//! 1. **Command line**: `--file` (or the `IMPLNOTES_FILE` environment variable).
//! 2. **Project config**: `.implnotes.json` in the working directory.
//! 3. **Global config**: `config.json` in the OS config directory.
//! 4. **Default**: `design/UI_IMPLEMENTATION_NOTES.md`.
//!
//! Relative paths in a config file are taken relative to the working
//! directory, like the default.

use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const PROJECT_CONFIG_FILENAME: &str = ".implnotes.json";
pub const GLOBAL_CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_NOTES_FILE: &str = "design/UI_IMPLEMENTATION_NOTES.md";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    /// Notes document to append to
    #[serde(default = "default_file")]
    pub file: PathBuf,
}

fn default_file() -> PathBuf {
    PathBuf::from(DEFAULT_NOTES_FILE)
}

impl Default for NotesConfig {
    fn default() -> Self {
        Self {
            file: default_file(),
        }
    }
}

impl NotesConfig {
    /// Load a config file, or `None` if it does not exist.
    pub fn load_file(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(|e| NotesError::io(path, e))?;
        let config: NotesConfig = serde_json::from_str(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(Some(config))
    }

    /// Project config first, then the global one, then defaults.
    pub fn resolve(project_dir: &Path, global_dir: Option<&Path>) -> Result<Self> {
        if let Some(config) = Self::load_file(&project_dir.join(PROJECT_CONFIG_FILENAME))? {
            return Ok(config);
        }
        if let Some(dir) = global_dir {
            if let Some(config) = Self::load_file(&dir.join(GLOBAL_CONFIG_FILENAME))? {
                return Ok(config);
            }
        }
        Ok(Self::default())
    }

    /// The notes file, with a command-line override taking precedence.
    pub fn notes_file(&self, cli_override: Option<&Path>) -> PathBuf {
        cli_override
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.file.clone())
    }
}
