//! Error type for the memorial renderer.
//!
//! Every failure is fatal to a run: nothing in the library retries or
//! skips a record.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading, rendering, or writing memorial text.
#[derive(Debug, Error)]
pub enum MemoriamError {
    /// A record has neither a name nor any nicknames.
    #[error("record #{position} has neither a name nor nicknames")]
    MissingIdentity { position: usize },

    /// A record is sorted under an empty nickname or name.
    #[error("record #{position} has an empty sorting key")]
    EmptySortingKey { position: usize },

    /// The first character of a sorting key has no book group.
    #[error("no book group for '{ch}' (sorting key \"{key}\")")]
    UnmappedBucket { key: String, ch: char },

    #[error("cannot read '{}': {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed person data{}: {source}", in_file(.path))]
    SourceParse {
        path: Option<PathBuf>,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("malformed template{}: {message}", in_file(.path))]
    TemplateParse {
        path: Option<PathBuf>,
        message: String,
    },

    #[error("cannot write '{}': {source}", .path.display())]
    SinkWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl MemoriamError {
    pub(crate) fn template(message: impl Into<String>) -> Self {
        MemoriamError::TemplateParse {
            path: None,
            message: message.into(),
        }
    }

    /// Attach the file a parse error came from.
    pub fn in_path(self, file: &Path) -> Self {
        match self {
            MemoriamError::SourceParse { source, .. } => MemoriamError::SourceParse {
                path: Some(file.to_path_buf()),
                source,
            },
            MemoriamError::TemplateParse { message, .. } => MemoriamError::TemplateParse {
                path: Some(file.to_path_buf()),
                message,
            },
            other => other,
        }
    }
}

fn in_file(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" in '{}'", path.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, MemoriamError>;
