//! One open document (tab): buffer plus where it lives on disk.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::buffer::TextBuffer;
use crate::error::{Error, Result};
use crate::labels;

/// Stable identity of a document for the lifetime of its tab.
///
/// Independent of the file name, so two `notes.txt` from different
/// directories never get mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DocumentId(Uuid);

impl DocumentId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Where a document's content is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Never saved.
    Untitled,
    /// Loaded from or saved to this absolute path.
    Bound(PathBuf),
}

impl Origin {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Origin::Untitled => None,
            Origin::Bound(path) => Some(path),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Document {
    id: DocumentId,
    pub buffer: TextBuffer,
    origin: Origin,
    clean_revision: u64,
}

impl Document {
    /// Fresh, empty, untitled document.
    pub fn untitled() -> Self {
        Self {
            id: DocumentId::new(),
            buffer: TextBuffer::new(),
            origin: Origin::Untitled,
            clean_revision: 0,
        }
    }

    /// Read `path` in full and bind the new document to it.
    ///
    /// `path` is made absolute against the working directory first.
    pub fn load(path: &Path) -> Result<Self> {
        let path = absolute(path).map_err(|source| Error::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let text = fs::read_to_string(&path).map_err(|source| Error::FileRead {
            path: path.clone(),
            source,
        })?;
        Ok(Self {
            id: DocumentId::new(),
            buffer: TextBuffer::from_text(text),
            origin: Origin::Bound(path),
            clean_revision: 0,
        })
    }

    pub fn id(&self) -> DocumentId {
        self.id
    }

    pub fn origin(&self) -> &Origin {
        &self.origin
    }

    pub fn path(&self) -> Option<&Path> {
        self.origin.path()
    }

    pub fn display_label(&self) -> String {
        labels::display_label(self.path())
    }

    /// Buffer changed since it was last loaded or saved.
    pub fn is_dirty(&self) -> bool {
        self.buffer.revision() != self.clean_revision
    }

    /// Write the buffer back to the bound path.
    ///
    /// Returns the path written, or `None` for an untitled document (the
    /// caller must pick a target and use [`Document::save_as`]).
    pub fn save(&mut self) -> Result<Option<PathBuf>> {
        let Some(path) = self.path().map(Path::to_path_buf) else {
            return Ok(None);
        };
        write_text(&path, self.buffer.text())?;
        self.clean_revision = self.buffer.revision();
        Ok(Some(path))
    }

    /// Write the buffer to `path` and bind the document to it.
    ///
    /// On failure the origin is left untouched.
    pub fn save_as(&mut self, path: &Path) -> Result<PathBuf> {
        let path = absolute(path).map_err(|source| Error::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        write_text(&path, self.buffer.text())?;
        self.origin = Origin::Bound(path.clone());
        self.clean_revision = self.buffer.revision();
        Ok(path)
    }
}

fn write_text(path: &Path, text: &str) -> Result<()> {
    fs::write(path, text).map_err(|source| Error::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn absolute(path: &Path) -> std::io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        std::path::absolute(path)
    }
}
