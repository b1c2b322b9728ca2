//! Strip along the bottom of the window: the active document's path on the
//! left, tab and unsaved counts on the right.

use std::path::Path;

use binder_core::labels::{status_label, tab_summary};
use binder_core::TabSnapshot;
use objc2::rc::Retained;
use objc2::MainThreadOnly;
use objc2_app_kit::{NSAutoresizingMaskOptions, NSColor, NSFont, NSTextAlignment, NSTextField, NSView};
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

const SUMMARY_W: f64 = 160.0;
const INSET: f64 = 6.0;

pub struct StatusBar {
    container: Retained<NSView>,
    path: Retained<NSTextField>,
    summary: Retained<NSTextField>,
}

impl StatusBar {
    pub const HEIGHT: f64 = 22.0;

    pub fn new(mtm: MainThreadMarker, width: f64) -> Self {
        let container = NSView::initWithFrame(
            NSView::alloc(mtm),
            NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, Self::HEIGHT)),
        );
        container.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable | NSAutoresizingMaskOptions::ViewMaxYMargin,
        );

        let path_w = (width - SUMMARY_W - 2.0 * INSET).max(0.0);
        let path = label_field(mtm, NSRect::new(NSPoint::new(INSET, 0.0), NSSize::new(path_w, Self::HEIGHT)));
        path.setSelectable(true);
        path.setAutoresizingMask(NSAutoresizingMaskOptions::ViewWidthSizable);

        let summary = label_field(
            mtm,
            NSRect::new(
                NSPoint::new(width - SUMMARY_W - INSET, 0.0),
                NSSize::new(SUMMARY_W, Self::HEIGHT),
            ),
        );
        summary.setAlignment(NSTextAlignment::Right);
        summary.setAutoresizingMask(NSAutoresizingMaskOptions::ViewMinXMargin);

        container.addSubview(&path);
        container.addSubview(&summary);
        Self {
            container,
            path,
            summary,
        }
    }

    /// Show `active_path` for the focused tab and count the tabs in `tabs`.
    pub fn update(&self, active_path: Option<&Path>, tabs: &[TabSnapshot]) {
        let active_dirty = tabs.iter().any(|t| t.is_active && t.is_dirty);
        let unsaved = tabs.iter().filter(|t| t.is_dirty).count();
        self.path
            .setStringValue(&NSString::from_str(&status_label(active_path, active_dirty)));
        self.summary
            .setStringValue(&NSString::from_str(&tab_summary(tabs.len(), unsaved)));
    }

    pub fn view(&self) -> &NSView {
        &self.container
    }
}

fn label_field(mtm: MainThreadMarker, frame: NSRect) -> Retained<NSTextField> {
    let field = NSTextField::initWithFrame(NSTextField::alloc(mtm), frame);
    field.setEditable(false);
    field.setBordered(false);
    field.setDrawsBackground(false);
    unsafe {
        field.setFont(Some(&NSFont::systemFontOfSize(11.0)));
        field.setTextColor(Some(&NSColor::secondaryLabelColor()));
    }
    field
}
