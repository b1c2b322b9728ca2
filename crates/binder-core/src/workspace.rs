//! The ordered set of open documents and which one has focus.

use std::path::{Path, PathBuf};

use log::debug;

use crate::document::{Document, DocumentId};
use crate::error::Result;
use crate::labels;

/// What the shell needs to draw one tab. Document text is not copied here;
/// look it up with [`Workspace::get`] when a view is first created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSnapshot {
    pub id: DocumentId,
    /// File name or "Untitled".
    pub label: String,
    /// Label with the parent directory appended when another tab shares it.
    pub caption: String,
    pub is_active: bool,
    pub is_dirty: bool,
}

/// Open documents in tab order.
///
/// Empty only before startup; every operation that removes documents puts a
/// fresh untitled one back when nothing is left.
#[derive(Debug, Default)]
pub struct Workspace {
    documents: Vec<Document>,
    active: Option<usize>,
}

impl Workspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn get(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|d| d.id() == id)
    }

    pub fn active(&self) -> Option<&Document> {
        self.active.and_then(|i| self.documents.get(i))
    }

    pub fn active_mut(&mut self) -> Option<&mut Document> {
        match self.active {
            Some(i) => self.documents.get_mut(i),
            None => None,
        }
    }

    pub fn active_id(&self) -> Option<DocumentId> {
        self.active().map(Document::id)
    }

    /// Append `doc` as the last tab and focus it.
    pub fn add(&mut self, doc: Document) -> DocumentId {
        let id = doc.id();
        self.documents.push(doc);
        self.active = Some(self.documents.len() - 1);
        id
    }

    pub fn new_document(&mut self) -> DocumentId {
        let id = self.add(Document::untitled());
        debug!("new untitled document {}", id);
        id
    }

    /// Load `path` into a new tab. Nothing changes if the read fails.
    pub fn open_document(&mut self, path: &Path) -> Result<DocumentId> {
        let doc = Document::load(path)?;
        Ok(self.add(doc))
    }

    /// Drop the focused document without saving it.
    ///
    /// Focus moves to the tab that slides into the freed slot, or to the new
    /// last tab when the closed one was last. Returns the newly active id.
    pub fn close_active(&mut self) -> DocumentId {
        if let Some(index) = self.active {
            let closed = self.documents.remove(index);
            debug!("closed document {}", closed.id());
            self.active = match self.documents.len() {
                0 => None,
                len => Some(index.min(len - 1)),
            };
        }
        self.ensure_not_empty()
    }

    /// Drop every document and start over with one untitled document.
    pub fn close_all(&mut self) -> DocumentId {
        debug!("closing all {} documents", self.documents.len());
        self.documents.clear();
        self.active = None;
        self.ensure_not_empty()
    }

    /// Focus the document with `id`. Unknown ids are ignored.
    pub fn activate(&mut self, id: DocumentId) -> bool {
        match self.documents.iter().position(|d| d.id() == id) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    /// Focus the first document whose label is `label`.
    ///
    /// Labels are not unique; prefer [`Workspace::activate`].
    pub fn activate_by_label(&mut self, label: &str) -> bool {
        match self.documents.iter().position(|d| d.display_label() == label) {
            Some(index) => {
                self.active = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn window_title(&self) -> String {
        labels::window_title(self.active().and_then(Document::path))
    }

    /// Directory file dialogs should start in: the active file's folder.
    pub fn start_dir(&self) -> Option<PathBuf> {
        self.active()
            .and_then(Document::path)
            .and_then(Path::parent)
            .map(Path::to_path_buf)
    }

    pub fn tabs(&self) -> Vec<TabSnapshot> {
        let names: Vec<String> = self.documents.iter().map(Document::display_label).collect();
        self.documents
            .iter()
            .enumerate()
            .map(|(i, doc)| {
                let label = &names[i];
                let clashes = doc.path().is_some()
                    && names
                        .iter()
                        .enumerate()
                        .any(|(j, other)| j != i && other == label);
                TabSnapshot {
                    id: doc.id(),
                    label: label.clone(),
                    caption: labels::disambiguated_caption(doc.path(), clashes),
                    is_active: self.active == Some(i),
                    is_dirty: doc.is_dirty(),
                }
            })
            .collect()
    }

    fn ensure_not_empty(&mut self) -> DocumentId {
        match self.active_id() {
            Some(id) => id,
            None => self.new_document(),
        }
    }
}
