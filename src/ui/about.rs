//! About panel. At most one exists; asking again brings it to the front.

use std::cell::RefCell;

use objc2::rc::Retained;
use objc2::MainThreadOnly;
use objc2_app_kit::{NSBackingStoreType, NSPanel, NSTextAlignment, NSTextField, NSWindowStyleMask};
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

const PANEL_W: f64 = 320.0;
const PANEL_H: f64 = 140.0;

#[derive(Default)]
pub struct AboutController {
    panel: RefCell<Option<Retained<NSPanel>>>,
}

impl AboutController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&self, mtm: MainThreadMarker) {
        let mut slot = self.panel.borrow_mut();
        let panel = slot.get_or_insert_with(|| build_panel(mtm));
        panel.center();
        panel.makeKeyAndOrderFront(None);
    }
}

fn build_panel(mtm: MainThreadMarker) -> Retained<NSPanel> {
    let panel = NSPanel::initWithContentRect_styleMask_backing_defer(
        NSPanel::alloc(mtm),
        NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(PANEL_W, PANEL_H)),
        NSWindowStyleMask::Titled | NSWindowStyleMask::Closable,
        NSBackingStoreType::Buffered,
        false,
    );
    // Closing only hides the panel so the controller can re-show it.
    unsafe { panel.setReleasedWhenClosed(false) };
    panel.setTitle(&NSString::from_str("About Binder"));

    let text = format!(
        "Binder {}\n\n{}",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_DESCRIPTION"),
    );
    let label = NSTextField::wrappingLabelWithString(&NSString::from_str(&text), mtm);
    label.setFrame(NSRect::new(
        NSPoint::new(20.0, 20.0),
        NSSize::new(PANEL_W - 40.0, PANEL_H - 40.0),
    ));
    label.setAlignment(NSTextAlignment::Center);
    if let Some(content) = panel.contentView() {
        content.addSubview(&label);
    }
    panel
}
