//! Cut, copy and paste between a buffer and a [`Clipboard`].

use crate::buffer::TextBuffer;
use crate::error::{Error, Result};
use crate::shell::Clipboard;

/// Put the selection on the clipboard. The buffer is not touched.
pub fn copy_selection(buffer: &TextBuffer, clipboard: &mut dyn Clipboard) -> Result<()> {
    let text = buffer.selected_text().ok_or(Error::ClipboardUnavailable)?;
    if !clipboard.write_text(text) {
        return Err(Error::ClipboardUnavailable);
    }
    Ok(())
}

/// Copy the selection, then remove it from the buffer.
///
/// If the clipboard rejects the text the buffer keeps it.
pub fn cut_selection(buffer: &mut TextBuffer, clipboard: &mut dyn Clipboard) -> Result<()> {
    copy_selection(buffer, clipboard)?;
    buffer.delete_selection();
    Ok(())
}

/// Replace the selection with the clipboard text, or insert it at the
/// cursor when nothing is selected.
pub fn paste_clipboard(buffer: &mut TextBuffer, clipboard: &mut dyn Clipboard) -> Result<()> {
    let text = clipboard
        .read_text()
        .filter(|t| !t.is_empty())
        .ok_or(Error::ClipboardUnavailable)?;
    buffer.replace_selection(&text);
    Ok(())
}
