use std::cell::{OnceCell, RefCell};

use anyhow::{anyhow, Result};
use binder_core::{DocumentManager, Error, TabSnapshot};
use log::{debug, error, warn};
use objc2::rc::Retained;
use objc2::runtime::{AnyObject, ProtocolObject};
use objc2::{define_class, msg_send, DefinedClass, MainThreadOnly};
use objc2_app_kit::{
    NSApplication, NSApplicationActivationPolicy, NSApplicationDelegate, NSBackingStoreType,
    NSButton, NSResponder, NSTextDelegate, NSTextViewDelegate, NSView, NSWindow,
    NSWindowDelegate, NSWindowStyleMask, NSWorkspace,
};
use objc2_foundation::{
    MainThreadMarker, NSNotification, NSObject, NSObjectProtocol, NSPoint, NSRect, NSSize,
    NSString, NSURL,
};

use crate::config::Config;
use crate::editor::document_state::DocumentState;
use crate::editor::pasteboard::Pasteboard;
use crate::menu::build_main_menu;
use crate::ui::about::AboutController;
use crate::ui::dialogs::{show_error, PanelPicker};
use crate::ui::status_bar::StatusBar;
use crate::ui::tab_bar::TabBar;

type Manager = DocumentManager<PanelPicker, Pasteboard>;

// ---------------------------------------------------------------------------
// App Delegate
// ---------------------------------------------------------------------------

struct AppDelegateIvars {
    config: Config,
    manager: RefCell<Manager>,
    window: OnceCell<Retained<NSWindow>>,
    tab_bar: OnceCell<TabBar>,
    status_bar: OnceCell<StatusBar>,
    /// Views for every open document, in no particular order.
    views: RefCell<Vec<DocumentState>>,
    about: AboutController,
}

define_class!(
    #[unsafe(super = NSObject)]
    #[thread_kind = MainThreadOnly]
    #[ivars = AppDelegateIvars]
    struct AppDelegate;

    unsafe impl NSObjectProtocol for AppDelegate {}

    unsafe impl NSApplicationDelegate for AppDelegate {
        #[unsafe(method(applicationDidFinishLaunching:))]
        fn did_finish_launching(&self, _notification: &NSNotification) {
            let mtm = self.mtm();
            let app = NSApplication::sharedApplication(mtm);

            build_main_menu(&app, mtm, self.ivars().config.website.is_some());
            self.create_window(mtm);
            self.load_startup_documents();

            app.setActivationPolicy(NSApplicationActivationPolicy::Regular);
            #[allow(deprecated)]
            app.activateIgnoringOtherApps(true);
        }

        #[unsafe(method(applicationShouldTerminateAfterLastWindowClosed:))]
        fn should_terminate_after_last_window_closed(&self, _sender: &NSApplication) -> bool {
            true
        }
    }

    unsafe impl NSWindowDelegate for AppDelegate {
        #[unsafe(method(windowWillClose:))]
        fn window_will_close(&self, _notification: &NSNotification) {
            unsafe { NSApplication::sharedApplication(self.mtm()).terminate(None) };
        }
    }

    unsafe impl NSTextDelegate for AppDelegate {
        /// Keystrokes in the active text view: pull them into the buffer so
        /// the dirty marker stays current.
        #[unsafe(method(textDidChange:))]
        fn text_did_change(&self, _notification: &NSNotification) {
            if self.busy() {
                return;
            }
            self.pull_active();
            self.refresh_chrome();
        }
    }

    unsafe impl NSTextViewDelegate for AppDelegate {}

    impl AppDelegate {
        // File menu

        #[unsafe(method(newDocument:))]
        fn new_document(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            self.ivars().manager.borrow_mut().new_document();
            self.refresh();
        }

        #[unsafe(method(openDocument:))]
        fn open_document(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().open_document(None);
            self.report(result);
            self.refresh();
        }

        #[unsafe(method(saveDocument:))]
        fn save_document(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().save_active_document();
            self.report(result);
            self.refresh_chrome();
        }

        #[unsafe(method(saveDocumentAs:))]
        fn save_document_as(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().save_active_document_as(None);
            self.report(result);
            self.refresh_chrome();
        }

        #[unsafe(method(closeTab:))]
        fn close_tab(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.ivars().manager.borrow_mut().close_active_document();
            self.refresh();
        }

        #[unsafe(method(closeAllTabs:))]
        fn close_all_tabs(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.ivars().manager.borrow_mut().close_all_documents();
            self.refresh();
        }

        #[unsafe(method(selectTab:))]
        fn select_tab(&self, sender: &NSButton) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let index = sender.tag();
            let id = {
                let manager = self.ivars().manager.borrow();
                usize::try_from(index)
                    .ok()
                    .and_then(|i| manager.tabs().get(i).map(|t| t.id))
            };
            match id {
                Some(id) => {
                    self.ivars().manager.borrow_mut().set_active_document(id);
                }
                None => debug!("no tab at index {}", index),
            }
            self.refresh();
        }

        // Edit menu

        #[unsafe(method(cutSelection:))]
        fn cut_selection(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().cut_selection();
            self.report(result);
            self.push_active();
            self.refresh_chrome();
        }

        #[unsafe(method(copySelection:))]
        fn copy_selection(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().copy_selection();
            self.report(result);
        }

        #[unsafe(method(pasteClipboard:))]
        fn paste_clipboard(&self, _sender: Option<&AnyObject>) {
            if self.busy() {
                return;
            }
            self.pull_active();
            let result = self.ivars().manager.borrow_mut().paste_clipboard();
            self.report(result);
            self.push_active();
            self.refresh_chrome();
        }

        // App and Help menus

        #[unsafe(method(showAbout:))]
        fn show_about(&self, _sender: Option<&AnyObject>) {
            self.ivars().about.show(self.mtm());
        }

        #[unsafe(method(openWebsite:))]
        fn open_website(&self, _sender: Option<&AnyObject>) {
            let Some(homepage) = self.ivars().config.website.as_deref() else {
                warn!("no website configured");
                return;
            };
            match NSURL::URLWithString(&NSString::from_str(homepage)) {
                Some(url) => {
                    NSWorkspace::sharedWorkspace().openURL(&url);
                }
                None => warn!("invalid homepage url {:?}", homepage),
            }
        }
    }
);

impl AppDelegate {
    fn new(mtm: MainThreadMarker, config: Config) -> Retained<Self> {
        let manager = DocumentManager::new(PanelPicker::new(mtm), Pasteboard);
        let this = Self::alloc(mtm).set_ivars(AppDelegateIvars {
            config,
            manager: RefCell::new(manager),
            window: OnceCell::new(),
            tab_bar: OnceCell::new(),
            status_bar: OnceCell::new(),
            views: RefCell::new(Vec::new()),
            about: AboutController::new(),
        });
        unsafe { msg_send![super(this), init] }
    }

    fn create_window(&self, mtm: MainThreadMarker) {
        let prefs = &self.ivars().config.preferences;
        let style = NSWindowStyleMask::Titled
            | NSWindowStyleMask::Closable
            | NSWindowStyleMask::Miniaturizable
            | NSWindowStyleMask::Resizable;

        let window = unsafe {
            NSWindow::initWithContentRect_styleMask_backing_defer(
                NSWindow::alloc(mtm),
                NSRect::new(
                    NSPoint::new(0.0, 0.0),
                    NSSize::new(prefs.window_width, prefs.window_height),
                ),
                style,
                NSBackingStoreType::Buffered,
                false,
            )
        };

        unsafe { window.setReleasedWhenClosed(false) };
        window.setTitle(&NSString::from_str("Binder"));
        window.setContentMinSize(NSSize::new(400.0, 300.0));
        window.setDelegate(Some(ProtocolObject::from_ref(self)));

        if let Some(content) = window.contentView() {
            let bounds = content.bounds();
            let tab_bar = TabBar::new(mtm, bounds.size.width, bounds.size.height);
            content.addSubview(tab_bar.view());
            let status_bar = StatusBar::new(mtm, bounds.size.width);
            content.addSubview(status_bar.view());
            let _ = self.ivars().tab_bar.set(tab_bar);
            let _ = self.ivars().status_bar.set(status_bar);
        } else {
            error!("window has no content view");
        }

        window.center();
        window.makeKeyAndOrderFront(None);
        let _ = self.ivars().window.set(window);
    }

    fn load_startup_documents(&self) {
        let config = &self.ivars().config;
        let failures = self.ivars().manager.borrow_mut().startup(
            &config.working_dir,
            config.readme.as_deref(),
            &config.files,
        );
        self.refresh();
        for err in &failures {
            show_error(self.mtm(), err);
        }
    }

    /// True while a manager call is still running, which happens when a
    /// file panel's modal session lets another action through. Such actions
    /// are dropped.
    fn busy(&self) -> bool {
        let busy = self.ivars().manager.try_borrow_mut().is_err();
        if busy {
            debug!("ignoring action while a file panel is open");
        }
        busy
    }

    /// Surface a failed operation. Clipboard misses are silent.
    fn report<T>(&self, result: binder_core::Result<T>) {
        match result {
            Ok(_) => {}
            Err(Error::ClipboardUnavailable) => debug!("clipboard operation had nothing to do"),
            Err(err) => {
                error!("{}", err);
                show_error(self.mtm(), &err);
            }
        }
    }

    /// Copy the active text view's content and selection into its buffer.
    fn pull_active(&self) {
        let mut manager = self.ivars().manager.borrow_mut();
        let Some(id) = manager.workspace().active_id() else {
            return;
        };
        let views = self.ivars().views.borrow();
        if let (Some(state), Some(buffer)) =
            (views.iter().find(|v| v.id == id), manager.active_buffer_mut())
        {
            state.pull_into(buffer);
        }
    }

    /// Show the active buffer in its text view.
    fn push_active(&self) {
        let manager = self.ivars().manager.borrow();
        let Some(doc) = manager.active_document() else {
            return;
        };
        let views = self.ivars().views.borrow();
        if let Some(state) = views.iter().find(|v| v.id == doc.id()) {
            state.push_from(&doc.buffer);
        }
    }

    /// Reconcile text views with the open documents, show the active one,
    /// then update the tab bar, path bar and title.
    fn refresh(&self) {
        let mtm = self.mtm();
        let tabs = self.ivars().manager.borrow().tabs();
        let Some(window) = self.ivars().window.get() else {
            return;
        };
        let Some(content) = window.contentView() else {
            return;
        };
        let frame = editor_frame(&content);
        let font_size = self.ivars().config.preferences.font_size;

        {
            let manager = self.ivars().manager.borrow();
            let mut views = self.ivars().views.borrow_mut();
            views.retain(|state| {
                let open = tabs.iter().any(|t| t.id == state.id);
                if !open {
                    state.scroll_view.removeFromSuperview();
                }
                open
            });
            for tab in &tabs {
                if views.iter().any(|v| v.id == tab.id) {
                    continue;
                }
                let text = manager
                    .workspace()
                    .get(tab.id)
                    .map(|doc| doc.buffer.text())
                    .unwrap_or_default();
                let state = DocumentState::new(mtm, tab.id, text, font_size, frame);
                unsafe { state.text_view.setDelegate(Some(ProtocolObject::from_ref(self))) };
                content.addSubview(&state.scroll_view);
                views.push(state);
            }
            for state in views.iter() {
                let active = tabs.iter().any(|t| t.id == state.id && t.is_active);
                state.scroll_view.setHidden(!active);
                if active {
                    let responder: &NSResponder = &state.text_view;
                    window.makeFirstResponder(Some(responder));
                }
            }
        }

        self.push_active();
        self.refresh_chrome_with(&tabs);
    }

    fn refresh_chrome(&self) {
        let tabs = self.ivars().manager.borrow().tabs();
        self.refresh_chrome_with(&tabs);
    }

    fn refresh_chrome_with(&self, tabs: &[TabSnapshot]) {
        let manager = self.ivars().manager.borrow();
        if let Some(tab_bar) = self.ivars().tab_bar.get() {
            let target: &AnyObject = self;
            tab_bar.update(tabs, target);
        }
        if let Some(status_bar) = self.ivars().status_bar.get() {
            status_bar.update(manager.active_document().and_then(|d| d.path()), tabs);
        }
        if let Some(window) = self.ivars().window.get() {
            window.setTitle(&NSString::from_str(&manager.window_title()));
        }
    }
}

/// Area between the tab bar and the status bar.
fn editor_frame(content: &NSView) -> NSRect {
    let bounds = content.bounds();
    NSRect::new(
        NSPoint::new(0.0, StatusBar::HEIGHT),
        NSSize::new(
            bounds.size.width,
            (bounds.size.height - StatusBar::HEIGHT - TabBar::HEIGHT).max(0.0),
        ),
    )
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub fn run(config: Config) -> Result<()> {
    let mtm = MainThreadMarker::new().ok_or_else(|| anyhow!("Binder must run on the main thread"))?;
    let app = NSApplication::sharedApplication(mtm);
    let delegate = AppDelegate::new(mtm, config);
    app.setDelegate(Some(ProtocolObject::from_ref(&*delegate)));
    app.run();
    Ok(())
}
