//! Capabilities the UI shell lends to the document manager.
//!
//! The AppKit shell backs these with `NSOpenPanel`/`NSSavePanel` and
//! `NSPasteboard`; the in-memory versions below drive tests and headless use.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

/// File dialogs. `None` means the user cancelled.
pub trait PathPicker {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf>;

    fn pick_save_path(&mut self, start_dir: Option<&Path>, suggested_name: &str)
        -> Option<PathBuf>;
}

/// System clipboard, plain text only.
pub trait Clipboard {
    fn read_text(&mut self) -> Option<String>;

    /// Replace the clipboard content. Returns false if the clipboard
    /// refused the write.
    fn write_text(&mut self, text: &str) -> bool;
}

/// Clipboard held in a `String`.
#[derive(Debug, Default, Clone)]
pub struct MemoryClipboard {
    content: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            content: Some(text.into()),
        }
    }

    pub fn content(&self) -> Option<&str> {
        self.content.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn read_text(&mut self) -> Option<String> {
        self.content.clone()
    }

    fn write_text(&mut self, text: &str) -> bool {
        self.content = Some(text.to_string());
        true
    }
}

/// Picker that answers from a queue of canned responses.
///
/// Each pick pops the next answer; an empty queue behaves like a cancelled
/// dialog. The start directories it was asked with are recorded.
#[derive(Debug, Default, Clone)]
pub struct ScriptedPicker {
    answers: VecDeque<Option<PathBuf>>,
    pub start_dirs: Vec<Option<PathBuf>>,
}

impl ScriptedPicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a chosen path for the next dialog.
    pub fn answer(mut self, path: impl Into<PathBuf>) -> Self {
        self.answers.push_back(Some(path.into()));
        self
    }

    /// Queue a cancelled dialog.
    pub fn cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    fn next(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.start_dirs.push(start_dir.map(Path::to_path_buf));
        self.answers.pop_front().flatten()
    }
}

impl PathPicker for ScriptedPicker {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        self.next(start_dir)
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>, _suggested_name: &str) -> Option<PathBuf> {
        self.next(start_dir)
    }
}
