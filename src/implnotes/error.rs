use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotesError {
    #[error("Index table header not found.")]
    IndexTableNotFound,

    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Entry IDs exhausted: {0} is the last three-digit ID")]
    IdSpaceExhausted(u16),

    #[error("Api Error: {0}")]
    Api(String),
}

impl NotesError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NotesError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, NotesError>;
