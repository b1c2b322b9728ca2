//! Tab strip across the top of the window: one push-on/push-off button per
//! open document. Button tags are tab indices; clicks send `selectTab:` to
//! the target.

use std::cell::RefCell;

use binder_core::labels::tab_label;
use binder_core::TabSnapshot;
use objc2::rc::Retained;
use objc2::runtime::{AnyObject, Sel};
use objc2::{sel, MainThreadOnly};
use objc2_app_kit::{
    NSAutoresizingMaskOptions, NSBezelStyle, NSButton, NSButtonType, NSControl,
    NSControlStateValueOff, NSControlStateValueOn, NSFont, NSView,
};
use objc2_foundation::{MainThreadMarker, NSPoint, NSRect, NSSize, NSString};

const HEIGHT: f64 = 28.0;
const TAB_W: f64 = 150.0;
const TAB_H: f64 = 24.0;
const TAB_GAP: f64 = 2.0;
const MARGIN: f64 = 4.0;

pub struct TabBar {
    mtm: MainThreadMarker,
    container: Retained<NSView>,
    buttons: RefCell<Vec<Retained<NSButton>>>,
}

impl TabBar {
    /// Create an empty bar pinned to the top of a `width` × `parent_height`
    /// content view.
    pub fn new(mtm: MainThreadMarker, width: f64, parent_height: f64) -> Self {
        let container = NSView::initWithFrame(
            NSView::alloc(mtm),
            NSRect::new(
                NSPoint::new(0.0, parent_height - HEIGHT),
                NSSize::new(width, HEIGHT),
            ),
        );
        container.setAutoresizingMask(
            NSAutoresizingMaskOptions::ViewWidthSizable
                | NSAutoresizingMaskOptions::ViewMinYMargin,
        );
        Self {
            mtm,
            container,
            buttons: RefCell::new(Vec::new()),
        }
    }

    /// Sync the buttons with `tabs`. Titles and highlight are updated in
    /// place while the tab count is unchanged; otherwise the row is rebuilt.
    pub fn update(&self, tabs: &[TabSnapshot], target: &AnyObject) {
        let mut buttons = self.buttons.borrow_mut();
        if buttons.len() != tabs.len() {
            for btn in buttons.drain(..) {
                btn.removeFromSuperview();
            }
            for index in 0..tabs.len() {
                let btn = self.make_button(index, target);
                self.container.addSubview(&btn);
                buttons.push(btn);
            }
        }

        for (btn, tab) in buttons.iter().zip(tabs) {
            let title = tab_label(&tab.caption, tab.is_dirty);
            btn.setTitle(&NSString::from_str(&title));
            btn.setToolTip(Some(&NSString::from_str(&tab.label)));
            btn.setState(if tab.is_active {
                NSControlStateValueOn
            } else {
                NSControlStateValueOff
            });
        }
    }

    fn make_button(&self, index: usize, target: &AnyObject) -> Retained<NSButton> {
        let x = MARGIN + index as f64 * (TAB_W + TAB_GAP);
        let btn = NSButton::initWithFrame(
            NSButton::alloc(self.mtm),
            NSRect::new(
                NSPoint::new(x, (HEIGHT - TAB_H) / 2.0),
                NSSize::new(TAB_W, TAB_H),
            ),
        );
        btn.setButtonType(NSButtonType::PushOnPushOff);
        btn.setBezelStyle(NSBezelStyle::Inline);
        let action: Sel = sel!(selectTab:);
        unsafe {
            NSControl::setTarget(&btn, Some(target));
            NSControl::setAction(&btn, Some(action));
            let font = NSFont::systemFontOfSize_weight(12.0, 0.0);
            btn.setFont(Some(&font));
        }
        btn.setTag(index as isize);
        btn
    }

    pub fn view(&self) -> &NSView {
        &self.container
    }

    pub const HEIGHT: f64 = HEIGHT;
}
