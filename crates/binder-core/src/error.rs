use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything a Binder core operation can fail with.
#[derive(Debug, Error)]
pub enum Error {
    #[error("could not read {}: {source}", .path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not write {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Nothing selected to copy/cut, or nothing on the clipboard to paste.
    /// Callers treat this as a silent no-op.
    #[error("clipboard has nothing to offer")]
    ClipboardUnavailable,

    #[error("could not access preferences at {}: {source}", .path.display())]
    Preferences {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed preferences: {0}")]
    PreferencesFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
