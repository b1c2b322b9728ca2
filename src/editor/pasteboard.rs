//! `NSPasteboard`-backed clipboard for the document manager.

use binder_core::Clipboard;
use objc2_app_kit::{NSPasteboard, NSPasteboardTypeString};
use objc2_foundation::NSString;

/// The general pasteboard, plain-text flavour only.
#[derive(Debug, Default)]
pub struct Pasteboard;

impl Clipboard for Pasteboard {
    fn read_text(&mut self) -> Option<String> {
        let pb = NSPasteboard::generalPasteboard();
        unsafe { pb.stringForType(NSPasteboardTypeString) }.map(|s| s.to_string())
    }

    fn write_text(&mut self, text: &str) -> bool {
        let pb = NSPasteboard::generalPasteboard();
        pb.clearContents();
        unsafe { pb.setString_forType(&NSString::from_str(text), NSPasteboardTypeString) }
    }
}
