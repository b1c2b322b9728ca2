//! Platform-neutral core of Binder: documents, tabs, clipboard editing and
//! preferences. The AppKit shell lives in the `binder` crate.

pub mod buffer;
pub mod clipboard;
pub mod document;
pub mod error;
pub mod labels;
pub mod manager;
pub mod preferences;
pub mod shell;
pub mod workspace;

pub use buffer::TextBuffer;
pub use document::{Document, DocumentId, Origin};
pub use error::{Error, Result};
pub use manager::DocumentManager;
pub use preferences::Preferences;
pub use shell::{Clipboard, MemoryClipboard, PathPicker, ScriptedPicker};
pub use workspace::{TabSnapshot, Workspace};
