//! macOS menu bar for Binder, built from the tables in [`crate::commands`].
//!
//! Items get a nil target so their actions travel the responder chain up to
//! the app delegate.

use objc2::rc::Retained;
use objc2::runtime::Sel;
use objc2::MainThreadOnly;
use objc2_app_kit::{NSApplication, NSEventModifierFlags, NSMenu, NSMenuItem};
use objc2_foundation::{MainThreadMarker, NSString};

use crate::commands::{Chord, Command, Entry, Menu, MENU_BAR, OPEN_WEBSITE};

/// Build and install the main menu. `has_website` enables Help > Binder
/// Website.
///
/// Call once inside `applicationDidFinishLaunching:`.
pub fn build_main_menu(app: &NSApplication, mtm: MainThreadMarker, has_website: bool) {
    let bar = NSMenu::initWithTitle(NSMenu::alloc(mtm), &NSString::from_str("MainMenu"));
    for menu in MENU_BAR {
        bar.addItem(&top_level_item(menu, mtm, has_website));
    }
    app.setMainMenu(Some(&bar));
}

fn top_level_item(menu: &Menu, mtm: MainThreadMarker, has_website: bool) -> Retained<NSMenuItem> {
    let submenu = NSMenu::initWithTitle(NSMenu::alloc(mtm), &NSString::from_str(menu.title));
    for entry in menu.entries {
        match entry {
            Entry::Separator => submenu.addItem(&NSMenuItem::separatorItem(mtm)),
            Entry::Command(command) => {
                let item = command_item(command, mtm);
                if command.selector == OPEN_WEBSITE && !has_website {
                    // AppKit would re-enable it since the delegate responds
                    submenu.setAutoenablesItems(false);
                    item.setEnabled(false);
                }
                submenu.addItem(&item);
            }
        }
    }

    let top = new_item(menu.title, None, "", mtm);
    top.setSubmenu(Some(&submenu));
    top
}

fn command_item(command: &Command, mtm: MainThreadMarker) -> Retained<NSMenuItem> {
    let action = Sel::register(command.selector);
    let item = new_item(command.title, Some(action), command.key, mtm);
    if let Some(mask) = modifier_mask(command.chord) {
        item.setKeyEquivalentModifierMask(mask);
    }
    item
}

fn modifier_mask(chord: Chord) -> Option<NSEventModifierFlags> {
    match chord {
        Chord::None => None,
        Chord::Cmd => Some(NSEventModifierFlags::Command),
        Chord::CmdShift => Some(NSEventModifierFlags::Command | NSEventModifierFlags::Shift),
        Chord::CmdOption => Some(NSEventModifierFlags::Command | NSEventModifierFlags::Option),
    }
}

fn new_item(title: &str, action: Option<Sel>, key: &str, mtm: MainThreadMarker) -> Retained<NSMenuItem> {
    unsafe {
        NSMenuItem::initWithTitle_action_keyEquivalent(
            NSMenuItem::alloc(mtm),
            &NSString::from_str(title),
            action,
            &NSString::from_str(key),
        )
    }
}
