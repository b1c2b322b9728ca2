//! Display strings derived from a document's origin.
//!
//! Pure functions, shared by the workspace and the AppKit tab/path bars.

use std::path::Path;

pub const UNTITLED: &str = "Untitled";
pub const APP_NAME: &str = "Binder";

/// File name of `path`, or `"Untitled"` for documents without one.
pub fn display_label(path: Option<&Path>) -> String {
    path.and_then(|p| p.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Label text for a tab button.
/// Prefixes "• " when `is_dirty` is true.
pub fn tab_label(caption: &str, is_dirty: bool) -> String {
    if is_dirty {
        format!("• {}", caption)
    } else {
        caption.to_string()
    }
}

/// Full path string for the path bar.
pub fn path_label(path: Option<&Path>) -> String {
    path.map(|p| p.display().to_string())
        .unwrap_or_else(|| format!("{} — not saved", UNTITLED))
}

/// Status bar text for the active document: the full path, flagged when
/// the buffer has unsaved edits.
pub fn status_label(path: Option<&Path>, is_dirty: bool) -> String {
    match path {
        Some(p) if is_dirty => format!("{} (edited)", p.display()),
        _ => path_label(path),
    }
}

/// Tab count for the status bar, with the number of unsaved tabs if any.
pub fn tab_summary(open: usize, unsaved: usize) -> String {
    let tabs = if open == 1 {
        "1 tab".to_string()
    } else {
        format!("{} tabs", open)
    };
    match unsaved {
        0 => tabs,
        n => format!("{}, {} unsaved", tabs, n),
    }
}

/// `"<full path> - Binder"`, or `"Untitled - Binder"`.
pub fn window_title(path: Option<&Path>) -> String {
    let subject = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| UNTITLED.to_string());
    format!("{} - {}", subject, APP_NAME)
}

/// Tab caption that tells apart documents sharing a file name.
///
/// `clashes` is true when another open document has the same label; the
/// parent directory name is then appended.
pub fn disambiguated_caption(path: Option<&Path>, clashes: bool) -> String {
    let label = display_label(path);
    if !clashes {
        return label;
    }
    match path
        .and_then(|p| p.parent())
        .and_then(|p| p.file_name())
    {
        Some(dir) => format!("{} — {}", label, dir.to_string_lossy()),
        None => label,
    }
}
