//! Editable text content of one document.
//!
//! Positions are character offsets (not bytes) so callers never have to care
//! about UTF-8 boundaries. The AppKit shell talks UTF-16; the conversion
//! helpers at the bottom bridge the two.

use std::ops::Range;

/// A contiguous text buffer with a single selection.
///
/// The selection is an `anchor`/`head` pair; when they are equal the
/// selection is empty and `head` is the cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    anchor: usize,
    head: usize,
    revision: u64,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text`, cursor at the start.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Bumped on every content change; selection moves do not count.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn cursor(&self) -> usize {
        self.head
    }

    /// Selected range, ordered low to high.
    pub fn selection(&self) -> Range<usize> {
        self.anchor.min(self.head)..self.anchor.max(self.head)
    }

    pub fn has_selection(&self) -> bool {
        self.anchor != self.head
    }

    /// Collapse the selection to `pos` (clamped to the buffer end).
    pub fn set_cursor(&mut self, pos: usize) {
        let pos = pos.min(self.len_chars());
        self.anchor = pos;
        self.head = pos;
    }

    pub fn select(&mut self, anchor: usize, head: usize) {
        let len = self.len_chars();
        self.anchor = anchor.min(len);
        self.head = head.min(len);
    }

    /// Currently selected text, `None` when the selection is empty.
    pub fn selected_text(&self) -> Option<&str> {
        if !self.has_selection() {
            return None;
        }
        let range = self.byte_range(self.selection());
        Some(&self.text[range])
    }

    /// Insert `s` at the cursor; the cursor ends up after the inserted text.
    pub fn insert(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        let at = self.byte_offset(self.head);
        self.text.insert_str(at, s);
        self.set_cursor(self.head + s.chars().count());
        self.revision += 1;
    }

    /// Replace the selection with `s`, or insert at the cursor if nothing
    /// is selected.
    pub fn replace_selection(&mut self, s: &str) {
        self.delete_selection();
        self.insert(s);
    }

    /// Remove the selected text and return it. The cursor lands where the
    /// selection started.
    pub fn delete_selection(&mut self) -> Option<String> {
        if !self.has_selection() {
            return None;
        }
        let chars = self.selection();
        let bytes = self.byte_range(chars.clone());
        let removed: String = self.text.drain(bytes).collect();
        self.set_cursor(chars.start);
        self.revision += 1;
        Some(removed)
    }

    /// Replace the whole content, keeping the selection where it still fits.
    ///
    /// The shell calls this to pull edits made directly in a text view.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text == self.text {
            return;
        }
        self.text = text;
        let (anchor, head) = (self.anchor, self.head);
        self.select(anchor, head);
        self.revision += 1;
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn byte_range(&self, chars: Range<usize>) -> Range<usize> {
        self.byte_offset(chars.start)..self.byte_offset(chars.end)
    }
}

// ---------------------------------------------------------------------------
// UTF-16 bridging (NSRange offsets)
// ---------------------------------------------------------------------------

/// Convert a UTF-16 code-unit offset in `text` to a character offset.
///
/// An offset landing inside a surrogate pair resolves to the character that
/// pair encodes.
pub fn utf16_to_char(text: &str, utf16_pos: usize) -> usize {
    let mut units = 0;
    for (i, c) in text.chars().enumerate() {
        if units >= utf16_pos {
            return i;
        }
        units += c.len_utf16();
        if units > utf16_pos {
            return i;
        }
    }
    text.chars().count()
}

/// Convert a character offset in `text` to a UTF-16 code-unit offset.
pub fn char_to_utf16(text: &str, char_pos: usize) -> usize {
    text.chars().take(char_pos).map(char::len_utf16).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_moves_cursor_past_text() {
        let mut b = TextBuffer::new();
        b.insert("hello");
        assert_eq!(b.text(), "hello");
        assert_eq!(b.cursor(), 5);
        assert_eq!(b.revision(), 1);
    }

    #[test]
    fn selection_is_ordered_regardless_of_direction() {
        let mut b = TextBuffer::from_text("abcdef");
        b.select(4, 1);
        assert_eq!(b.selection(), 1..4);
        assert_eq!(b.selected_text(), Some("bcd"));
    }

    #[test]
    fn delete_selection_handles_multibyte_chars() {
        let mut b = TextBuffer::from_text("añb€c");
        b.select(1, 4);
        assert_eq!(b.delete_selection().as_deref(), Some("ñb€"));
        assert_eq!(b.text(), "ac");
        assert_eq!(b.cursor(), 1);
    }

    #[test]
    fn select_clamps_to_end() {
        let mut b = TextBuffer::from_text("abc");
        b.select(1, 99);
        assert_eq!(b.selection(), 1..3);
    }

    #[test]
    fn set_text_same_content_keeps_revision() {
        let mut b = TextBuffer::from_text("abc");
        b.set_text("abc");
        assert_eq!(b.revision(), 0);
        b.set_text("ab");
        assert_eq!(b.revision(), 1);
    }

    #[test]
    fn set_text_clamps_selection() {
        let mut b = TextBuffer::from_text("abcdef");
        b.select(2, 6);
        b.set_text("abc");
        assert_eq!(b.selection(), 2..3);
    }

    #[test]
    fn utf16_offsets_account_for_surrogate_pairs() {
        let text = "a😀b";
        assert_eq!(char_to_utf16(text, 2), 3);
        assert_eq!(utf16_to_char(text, 3), 2);
        assert_eq!(utf16_to_char(text, 0), 0);
        assert_eq!(utf16_to_char(text, 99), 3);
    }
}
