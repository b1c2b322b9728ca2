//! Per-document view state: one instance per open tab.

use binder_core::buffer::{char_to_utf16, utf16_to_char};
use binder_core::{DocumentId, TextBuffer};
use objc2::rc::Retained;
use objc2_app_kit::{NSScrollView, NSTextView};
use objc2_foundation::{MainThreadMarker, NSRange, NSRect, NSString};

use crate::editor::text_view::create_editor_view;

/// The AppKit views belonging to one open document.
pub struct DocumentState {
    pub id: DocumentId,
    pub scroll_view: Retained<NSScrollView>,
    pub text_view: Retained<NSTextView>,
}

impl DocumentState {
    /// Create the views for document `id`, pre-filled with `text`.
    pub fn new(mtm: MainThreadMarker, id: DocumentId, text: &str, font_size: f64, frame: NSRect) -> Self {
        let (scroll_view, text_view) = create_editor_view(mtm, frame, text, font_size);
        Self {
            id,
            scroll_view,
            text_view,
        }
    }

    /// Copy the text view's content and selection into `buffer`.
    pub fn pull_into(&self, buffer: &mut TextBuffer) {
        let text = self.text_view.string().to_string();
        let range = self.text_view.selectedRange();
        let start = utf16_to_char(&text, range.location);
        let end = utf16_to_char(&text, range.location + range.length);
        buffer.set_text(text);
        buffer.select(start, end);
    }

    /// Show `buffer`'s content and selection in the text view.
    pub fn push_from(&self, buffer: &TextBuffer) {
        let text = buffer.text();
        if self.text_view.string().to_string() != text {
            self.text_view.setString(&NSString::from_str(text));
        }
        let sel = buffer.selection();
        let location = char_to_utf16(text, sel.start);
        let length = char_to_utf16(text, sel.end) - location;
        self.text_view.setSelectedRange(NSRange { location, length });
    }
}
