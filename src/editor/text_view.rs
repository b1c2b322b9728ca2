use objc2::rc::Retained;
use objc2::MainThreadOnly;
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSColor, NSFont, NSFontWeightRegular, NSScrollView, NSTextView,
};
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

// ---------------------------------------------------------------------------
// Public factory
// ---------------------------------------------------------------------------

/// Build an NSScrollView containing a plain-text `NSTextView` showing `text`.
///
/// Rich text and the automatic substitutions are off so the buffer round-trips
/// to disk unchanged. The text view itself owns cut/copy/paste keyboard
/// handling; the Edit menu routes through the app delegate instead.
pub fn create_editor_view(
    mtm: MainThreadMarker,
    frame: NSRect,
    text: &str,
    font_size: f64,
) -> (Retained<NSScrollView>, Retained<NSTextView>) {
    // 1. Scroll view
    let scroll = NSScrollView::initWithFrame(NSScrollView::alloc(mtm), frame);
    scroll.setHasVerticalScroller(true);
    scroll.setAutohidesScrollers(true);
    scroll.setAutoresizingMask(
        NSAutoresizingMaskOptions::ViewWidthSizable
            | NSAutoresizingMaskOptions::ViewHeightSizable,
    );

    let content_size = scroll.contentSize();
    let text_rect = NSRect::new(
        NSPoint::new(0.0, 0.0),
        NSSize::new(content_size.width, content_size.height),
    );

    // 2. Plain text view
    let text_view = NSTextView::initWithFrame(NSTextView::alloc(mtm), text_rect);
    text_view.setRichText(false);
    let font = unsafe { NSFont::monospacedSystemFontOfSize_weight(font_size, NSFontWeightRegular) };
    text_view.setFont(Some(&font));
    text_view.setTextColor(Some(&NSColor::textColor()));
    text_view.setBackgroundColor(&NSColor::textBackgroundColor());
    text_view.setAutomaticQuoteSubstitutionEnabled(false);
    text_view.setAutomaticDashSubstitutionEnabled(false);
    text_view.setAutomaticTextReplacementEnabled(false);
    text_view.setAutoresizingMask(
        NSAutoresizingMaskOptions::ViewWidthSizable
            | NSAutoresizingMaskOptions::ViewHeightSizable,
    );
    text_view.setTextContainerInset(NSSize::new(8.0, 8.0));
    text_view.setString(&NSString::from_str(text));

    scroll.setDocumentView(Some(&text_view));

    (scroll, text_view)
}
