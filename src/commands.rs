//! Menu bar layout: every item Binder shows, with the action selector it
//! sends and its key equivalent.
//!
//! Plain data with no AppKit types, so the layout is checked on every
//! platform. `menu.rs` turns these tables into `NSMenu`s on macOS.

use std::ffi::CStr;

/// Modifier keys held with a key equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Chord {
    /// No shortcut.
    None,
    Cmd,
    CmdShift,
    CmdOption,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub title: &'static str,
    /// Objective-C selector sent down the responder chain.
    pub selector: &'static CStr,
    pub key: &'static str,
    pub chord: Chord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry {
    Command(Command),
    Separator,
}

#[derive(Debug, Clone, Copy)]
pub struct Menu {
    pub title: &'static str,
    pub entries: &'static [Entry],
}

impl Menu {
    pub fn commands(&self) -> impl Iterator<Item = &'static Command> {
        let entries: &'static [Entry] = self.entries;
        entries.iter().filter_map(|entry| match entry {
            Entry::Command(command) => Some(command),
            Entry::Separator => None,
        })
    }
}

const fn command(title: &'static str, selector: &'static CStr, key: &'static str, chord: Chord) -> Entry {
    Entry::Command(Command {
        title,
        selector,
        key,
        chord,
    })
}

/// Sent by Help > Binder Website; greyed out when no website is configured.
pub const OPEN_WEBSITE: &CStr = c"openWebsite:";

// The application menu's title is replaced by the app name at runtime.
pub const APP_MENU: Menu = Menu {
    title: "",
    entries: &[
        command("About Binder", c"showAbout:", "", Chord::None),
        Entry::Separator,
        command("Hide Binder", c"hide:", "h", Chord::Cmd),
        command("Show All", c"unhideAllApplications:", "", Chord::None),
        Entry::Separator,
        command("Quit Binder", c"terminate:", "q", Chord::Cmd),
    ],
};

pub const FILE_MENU: Menu = Menu {
    title: "File",
    entries: &[
        command("New", c"newDocument:", "n", Chord::Cmd),
        command("Open…", c"openDocument:", "o", Chord::Cmd),
        Entry::Separator,
        command("Save", c"saveDocument:", "s", Chord::Cmd),
        command("Save As…", c"saveDocumentAs:", "s", Chord::CmdShift),
        Entry::Separator,
        command("Close Tab", c"closeTab:", "w", Chord::Cmd),
        command("Close All Tabs", c"closeAllTabs:", "w", Chord::CmdOption),
    ],
};

// Cut, Copy and Paste use custom selectors so they reach the app delegate
// instead of stopping at the focused text view. Select All is left to
// NSTextView.
pub const EDIT_MENU: Menu = Menu {
    title: "Edit",
    entries: &[
        command("Cut", c"cutSelection:", "x", Chord::Cmd),
        command("Copy", c"copySelection:", "c", Chord::Cmd),
        command("Paste", c"pasteClipboard:", "v", Chord::Cmd),
        Entry::Separator,
        command("Select All", c"selectAll:", "a", Chord::Cmd),
    ],
};

pub const HELP_MENU: Menu = Menu {
    title: "Help",
    entries: &[command("Binder Website", OPEN_WEBSITE, "", Chord::None)],
};

/// Menus in menu bar order.
pub const MENU_BAR: &[Menu] = &[APP_MENU, FILE_MENU, EDIT_MENU, HELP_MENU];

/// Look up the menu command that sends `selector`.
pub fn find(selector: &CStr) -> Option<&'static Command> {
    MENU_BAR
        .iter()
        .flat_map(Menu::commands)
        .find(|command| command.selector == selector)
}
