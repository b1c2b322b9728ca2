use binder_core::labels::{
    disambiguated_caption, display_label, path_label, status_label, tab_label, tab_summary,
    window_title,
};
use std::path::Path;

#[test]
fn display_label_untitled() {
    assert_eq!(display_label(None), "Untitled");
}
#[test]
fn display_label_named() {
    assert_eq!(display_label(Some(Path::new("/a/notes.txt"))), "notes.txt");
}
#[test]
fn tab_label_clean() {
    assert_eq!(tab_label("notes.txt", false), "notes.txt");
}
#[test]
fn tab_label_dirty() {
    assert_eq!(tab_label("Untitled", true), "• Untitled");
}
#[test]
fn path_label_untitled() {
    assert_eq!(path_label(None), "Untitled — not saved");
}
#[test]
fn path_label_with_path() {
    assert_eq!(
        path_label(Some(Path::new("/Users/witt/notes.txt"))),
        "/Users/witt/notes.txt"
    );
}
#[test]
fn window_title_untitled() {
    assert_eq!(window_title(None), "Untitled - Binder");
}
#[test]
fn window_title_uses_full_path() {
    assert_eq!(window_title(Some(Path::new("/tmp/a.txt"))), "/tmp/a.txt - Binder");
}
#[test]
fn caption_without_clash_is_plain_label() {
    assert_eq!(disambiguated_caption(Some(Path::new("/x/a.txt")), false), "a.txt");
}
#[test]
fn caption_with_clash_appends_parent() {
    assert_eq!(disambiguated_caption(Some(Path::new("/x/docs/a.txt")), true), "a.txt — docs");
}
#[test]
fn status_label_marks_unsaved_edits() {
    assert_eq!(status_label(Some(Path::new("/tmp/a.txt")), false), "/tmp/a.txt");
    assert_eq!(status_label(Some(Path::new("/tmp/a.txt")), true), "/tmp/a.txt (edited)");
}
#[test]
fn status_label_untitled_ignores_dirty() {
    assert_eq!(status_label(None, true), "Untitled — not saved");
}
#[test]
fn tab_summary_counts() {
    assert_eq!(tab_summary(1, 0), "1 tab");
    assert_eq!(tab_summary(3, 0), "3 tabs");
    assert_eq!(tab_summary(3, 2), "3 tabs, 2 unsaved");
}
