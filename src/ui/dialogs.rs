//! Open/save panels and error alerts.

use std::path::{Path, PathBuf};

use binder_core::{Error, PathPicker};
use objc2_app_kit::{NSAlert, NSAlertStyle, NSModalResponseOK, NSOpenPanel, NSSavePanel};
use objc2_foundation::{MainThreadMarker, NSString, NSURL};

/// [`PathPicker`] backed by the standard AppKit file panels.
pub struct PanelPicker {
    mtm: MainThreadMarker,
}

impl PanelPicker {
    pub fn new(mtm: MainThreadMarker) -> Self {
        Self { mtm }
    }
}

impl PathPicker for PanelPicker {
    fn pick_open_path(&mut self, start_dir: Option<&Path>) -> Option<PathBuf> {
        let panel = NSOpenPanel::openPanel(self.mtm);
        panel.setCanChooseFiles(true);
        panel.setCanChooseDirectories(false);
        panel.setAllowsMultipleSelection(false);
        panel.setTitle(&NSString::from_str("Open"));
        if let Some(dir) = start_dir {
            panel.setDirectoryURL(Some(&dir_url(dir)));
        }
        if panel.runModal() != NSModalResponseOK {
            return None;
        }
        panel.URL().and_then(|url| url_to_path(&url))
    }

    fn pick_save_path(&mut self, start_dir: Option<&Path>, suggested_name: &str) -> Option<PathBuf> {
        let panel = NSSavePanel::savePanel(self.mtm);
        panel.setTitle(&NSString::from_str("Save As"));
        panel.setNameFieldStringValue(&NSString::from_str(suggested_name));
        if let Some(dir) = start_dir {
            panel.setDirectoryURL(Some(&dir_url(dir)));
        }
        if panel.runModal() != NSModalResponseOK {
            return None;
        }
        panel.URL().and_then(|url| url_to_path(&url))
    }
}

/// Modal alert describing a failed file operation.
pub fn show_error(mtm: MainThreadMarker, err: &Error) {
    let heading = match err {
        Error::FileRead { .. } => "The file couldn’t be opened.",
        Error::FileWrite { .. } => "The file couldn’t be saved.",
        _ => "Something went wrong.",
    };
    let alert = NSAlert::new(mtm);
    alert.setAlertStyle(NSAlertStyle::Warning);
    alert.setMessageText(&NSString::from_str(heading));
    alert.setInformativeText(&NSString::from_str(&err.to_string()));
    alert.runModal();
}

fn dir_url(dir: &Path) -> objc2::rc::Retained<NSURL> {
    NSURL::fileURLWithPath(&NSString::from_str(&dir.to_string_lossy()))
}

fn url_to_path(url: &NSURL) -> Option<PathBuf> {
    url.path().map(|p| PathBuf::from(p.to_string()))
}
