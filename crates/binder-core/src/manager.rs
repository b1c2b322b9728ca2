//! Document lifecycle operations as the shell invokes them.
//!
//! Each menu action maps onto one method here. Methods run to completion on
//! the caller's thread; file handles never outlive a single call.

use std::path::{Path, PathBuf};

use log::{debug, info, warn};

use crate::buffer::TextBuffer;
use crate::clipboard;
use crate::document::{Document, DocumentId};
use crate::error::{Error, Result};
use crate::shell::{Clipboard, PathPicker};
use crate::workspace::{TabSnapshot, Workspace};

pub struct DocumentManager<P, C> {
    workspace: Workspace,
    picker: P,
    clipboard: C,
}

impl<P: PathPicker, C: Clipboard> DocumentManager<P, C> {
    /// Manager with an empty workspace; call [`DocumentManager::startup`]
    /// before handing it to the shell.
    pub fn new(picker: P, clipboard: C) -> Self {
        Self {
            workspace: Workspace::new(),
            picker,
            clipboard,
        }
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    pub fn picker_mut(&mut self) -> &mut P {
        &mut self.picker
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Populate the workspace at launch.
    ///
    /// Opens `<cwd>/<readme>` first when it exists, then every file in
    /// `files` (relative ones resolve against `cwd`). Falls back to one
    /// untitled document if nothing opened. Returns the launch-file
    /// failures so the shell can report them; a broken README is only
    /// logged.
    pub fn startup(&mut self, cwd: &Path, readme: Option<&str>, files: &[PathBuf]) -> Vec<Error> {
        if let Some(name) = readme {
            let readme_path = cwd.join(name);
            if readme_path.is_file() {
                match self.workspace.open_document(&readme_path) {
                    Ok(_) => info!("opened {}", readme_path.display()),
                    Err(err) => warn!("skipping readme: {}", err),
                }
            }
        }

        let mut failures = Vec::new();
        for file in files {
            let path = if file.is_absolute() {
                file.clone()
            } else {
                cwd.join(file)
            };
            match self.workspace.open_document(&path) {
                Ok(_) => info!("opened {}", path.display()),
                Err(err) => {
                    warn!("{}", err);
                    failures.push(err);
                }
            }
        }

        if self.workspace.is_empty() {
            self.workspace.new_document();
        }
        failures
    }

    pub fn new_document(&mut self) -> DocumentId {
        self.workspace.new_document()
    }

    /// Open `path`, or ask the picker for one. `Ok(None)` when the user
    /// cancelled the dialog.
    pub fn open_document(&mut self, path: Option<&Path>) -> Result<Option<DocumentId>> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let start = self.workspace.start_dir();
                match self.picker.pick_open_path(start.as_deref()) {
                    Some(p) => p,
                    None => {
                        debug!("open cancelled");
                        return Ok(None);
                    }
                }
            }
        };
        let id = self.workspace.open_document(&path)?;
        info!("opened {}", path.display());
        Ok(Some(id))
    }

    /// Save the focused document to its own path; untitled documents go
    /// through Save As. Returns the path written, `None` when cancelled or
    /// when there is no document to save.
    pub fn save_active_document(&mut self) -> Result<Option<PathBuf>> {
        let Some(doc) = self.workspace.active_mut() else {
            return Ok(None);
        };
        if doc.path().is_none() {
            return self.save_active_document_as(None);
        }
        let written = doc.save()?;
        if let Some(path) = &written {
            info!("saved {}", path.display());
        }
        Ok(written)
    }

    /// Save the focused document to `path` (or a picked path) and bind it
    /// there.
    pub fn save_active_document_as(&mut self, path: Option<&Path>) -> Result<Option<PathBuf>> {
        if self.workspace.active().is_none() {
            return Ok(None);
        }
        let target = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let start = self.workspace.start_dir();
                let suggested = self
                    .workspace
                    .active()
                    .map(Document::display_label)
                    .unwrap_or_default();
                match self.picker.pick_save_path(start.as_deref(), &suggested) {
                    Some(p) => p,
                    None => {
                        debug!("save as cancelled");
                        return Ok(None);
                    }
                }
            }
        };
        let Some(doc) = self.workspace.active_mut() else {
            return Ok(None);
        };
        let written = doc.save_as(&target)?;
        info!("saved {}", written.display());
        Ok(Some(written))
    }

    /// Close the focused tab, discarding unsaved edits.
    pub fn close_active_document(&mut self) -> DocumentId {
        self.workspace.close_active()
    }

    pub fn close_all_documents(&mut self) -> DocumentId {
        self.workspace.close_all()
    }

    pub fn set_active_document(&mut self, id: DocumentId) -> bool {
        self.workspace.activate(id)
    }

    /// Focus by tab label; an unknown label does nothing.
    pub fn set_active_document_by_label(&mut self, label: &str) -> bool {
        let found = self.workspace.activate_by_label(label);
        if !found {
            debug!("no tab labelled {:?}", label);
        }
        found
    }

    pub fn active_document(&self) -> Option<&Document> {
        self.workspace.active()
    }

    pub fn active_buffer_mut(&mut self) -> Option<&mut TextBuffer> {
        self.workspace.active_mut().map(|d| &mut d.buffer)
    }

    pub fn copy_selection(&mut self) -> Result<()> {
        let doc = self.workspace.active().ok_or(Error::ClipboardUnavailable)?;
        clipboard::copy_selection(&doc.buffer, &mut self.clipboard)
    }

    pub fn cut_selection(&mut self) -> Result<()> {
        let doc = self.workspace.active_mut().ok_or(Error::ClipboardUnavailable)?;
        clipboard::cut_selection(&mut doc.buffer, &mut self.clipboard)
    }

    pub fn paste_clipboard(&mut self) -> Result<()> {
        let doc = self.workspace.active_mut().ok_or(Error::ClipboardUnavailable)?;
        clipboard::paste_clipboard(&mut doc.buffer, &mut self.clipboard)
    }

    pub fn window_title(&self) -> String {
        self.workspace.window_title()
    }

    pub fn tabs(&self) -> Vec<TabSnapshot> {
        self.workspace.tabs()
    }
}
