use std::fs;

use binder_core::{DocumentManager, Error, MemoryClipboard, Origin, ScriptedPicker};
use tempfile::TempDir;

fn manager_with(picker: ScriptedPicker) -> DocumentManager<ScriptedPicker, MemoryClipboard> {
    DocumentManager::new(picker, MemoryClipboard::new())
}

#[test]
fn new_insert_save_as_writes_exact_content() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("a.txt");
    let mut m = manager_with(ScriptedPicker::new());

    m.new_document();
    m.active_buffer_mut().unwrap().insert("hello");
    let written = m.save_active_document_as(Some(&target)).unwrap();

    assert_eq!(written.as_deref(), Some(target.as_path()));
    assert_eq!(fs::read_to_string(&target).unwrap(), "hello");
    let doc = m.active_document().unwrap();
    assert_eq!(doc.origin(), &Origin::Bound(target.clone()));
    assert_eq!(doc.display_label(), "a.txt");
    assert!(!doc.is_dirty());
    assert_eq!(m.window_title(), format!("{} - Binder", target.display()));
}

#[test]
fn open_loads_content_and_label() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello").unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let id = m.open_document(Some(&path)).unwrap().expect("opened");

    let doc = m.active_document().unwrap();
    assert_eq!(doc.id(), id);
    assert_eq!(doc.buffer.text(), "hello");
    assert_eq!(doc.display_label(), "a.txt");
    assert_eq!(doc.path(), Some(path.as_path()));
}

#[test]
fn open_then_save_is_byte_identical() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notes.txt");
    let original = "line one\r\n\ttabbed — ünïcødé\n\nlast line without newline";
    fs::write(&path, original).unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    m.open_document(Some(&path)).unwrap();
    m.save_active_document().unwrap();

    assert_eq!(fs::read(&path).unwrap(), original.as_bytes());
}

#[test]
fn missing_file_is_read_error_and_workspace_unchanged() {
    let dir = TempDir::new().unwrap();
    let mut m = manager_with(ScriptedPicker::new());
    let before = m.new_document();

    let err = m
        .open_document(Some(&dir.path().join("nope.txt")))
        .unwrap_err();

    assert!(matches!(err, Error::FileRead { .. }));
    assert_eq!(m.workspace().len(), 1);
    assert_eq!(m.active_document().unwrap().id(), before);
}

#[test]
fn invalid_utf8_is_read_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("binary.bin");
    fs::write(&path, [0xff, 0xfe, 0x00, 0xc3]).unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let err = m.open_document(Some(&path)).unwrap_err();
    assert!(matches!(err, Error::FileRead { .. }));
    assert!(m.workspace().is_empty());
}

#[test]
fn failed_save_as_keeps_untitled_origin() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("missing-dir").join("a.txt");
    let mut m = manager_with(ScriptedPicker::new());
    m.new_document();
    m.active_buffer_mut().unwrap().insert("data");

    let err = m.save_active_document_as(Some(&target)).unwrap_err();

    assert!(matches!(err, Error::FileWrite { .. }));
    let doc = m.active_document().unwrap();
    assert_eq!(doc.origin(), &Origin::Untitled);
    assert_eq!(doc.buffer.text(), "data");
    assert!(doc.is_dirty());
}

#[test]
fn failed_save_keeps_bound_document_dirty() {
    let dir = TempDir::new().unwrap();
    let folder = dir.path().join("notes");
    fs::create_dir_all(&folder).unwrap();
    let path = folder.join("a.txt");
    fs::write(&path, "before").unwrap();
    let mut m = manager_with(ScriptedPicker::new());
    m.open_document(Some(&path)).unwrap();
    m.active_buffer_mut().unwrap().set_text("after");

    fs::remove_dir_all(&folder).unwrap();
    let err = m.save_active_document().unwrap_err();

    assert!(matches!(err, Error::FileWrite { .. }));
    let doc = m.active_document().unwrap();
    assert_eq!(doc.origin(), &Origin::Bound(path.clone()));
    assert_eq!(doc.buffer.text(), "after");
    assert!(doc.is_dirty());
    assert_eq!(m.workspace().len(), 1);
}

#[test]
fn save_untitled_asks_picker() {
    let dir = TempDir::new().unwrap();
    let target = dir.path().join("picked.txt");
    let mut m = manager_with(ScriptedPicker::new().answer(&target));
    m.new_document();
    m.active_buffer_mut().unwrap().insert("picked content");

    let written = m.save_active_document().unwrap();

    assert_eq!(written.as_deref(), Some(target.as_path()));
    assert_eq!(fs::read_to_string(&target).unwrap(), "picked content");
    assert_eq!(m.active_document().unwrap().display_label(), "picked.txt");
}

#[test]
fn cancelled_dialogs_change_nothing() {
    let mut m = manager_with(ScriptedPicker::new().cancel().cancel());
    m.new_document();

    assert!(m.open_document(None).unwrap().is_none());
    assert!(m.save_active_document().unwrap().is_none());

    assert_eq!(m.workspace().len(), 1);
    assert_eq!(m.active_document().unwrap().origin(), &Origin::Untitled);
}

#[test]
fn dialogs_start_in_active_documents_folder() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "").unwrap();
    let mut m = manager_with(ScriptedPicker::new().cancel());
    m.open_document(Some(&path)).unwrap();

    m.open_document(None).unwrap();

    assert_eq!(m.picker_mut().start_dirs, vec![Some(dir.path().to_path_buf())]);
}

#[test]
fn same_name_in_two_folders_saves_to_own_paths() {
    let root = TempDir::new().unwrap();
    let left = root.path().join("left");
    let right = root.path().join("right");
    fs::create_dir_all(&left).unwrap();
    fs::create_dir_all(&right).unwrap();
    fs::write(left.join("notes.txt"), "L").unwrap();
    fs::write(right.join("notes.txt"), "R").unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let l = m.open_document(Some(&left.join("notes.txt"))).unwrap().unwrap();
    m.open_document(Some(&right.join("notes.txt"))).unwrap();

    // focus the first tab after the second was opened, then save it
    m.set_active_document(l);
    m.active_buffer_mut().unwrap().set_text("L edited");
    m.save_active_document().unwrap();

    assert_eq!(fs::read_to_string(left.join("notes.txt")).unwrap(), "L edited");
    assert_eq!(fs::read_to_string(right.join("notes.txt")).unwrap(), "R");

    let captions: Vec<String> = m.tabs().into_iter().map(|t| t.caption).collect();
    assert_eq!(captions, vec!["notes.txt — left", "notes.txt — right"]);
}

#[test]
fn startup_opens_readme_first() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), "# Binder").unwrap();
    fs::write(dir.path().join("todo.txt"), "milk").unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let failures = m.startup(dir.path(), Some("README.md"), &["todo.txt".into()]);

    assert!(failures.is_empty());
    let tabs = m.tabs();
    assert_eq!(tabs.len(), 2);
    assert_eq!(tabs[0].label, "README.md");
    let readme = m.workspace().get(tabs[0].id).unwrap();
    assert_eq!(readme.buffer.text(), "# Binder");
    assert_eq!(tabs[1].label, "todo.txt");
    assert!(tabs[1].is_active);
}

#[test]
fn startup_without_readme_creates_untitled() {
    let dir = TempDir::new().unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let failures = m.startup(dir.path(), Some("README.md"), &[]);

    assert!(failures.is_empty());
    assert_eq!(m.workspace().len(), 1);
    assert_eq!(m.active_document().unwrap().origin(), &Origin::Untitled);
}

#[test]
fn startup_skips_unreadable_readme() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("README.md"), [0xff, 0xfe]).unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let failures = m.startup(dir.path(), Some("README.md"), &[]);

    // only launch files are reported; the readme is logged and dropped
    assert!(failures.is_empty());
    assert_eq!(m.workspace().len(), 1);
    assert_eq!(m.active_document().unwrap().origin(), &Origin::Untitled);
}

#[test]
fn startup_reports_unreadable_launch_files() {
    let dir = TempDir::new().unwrap();
    let mut m = manager_with(ScriptedPicker::new());

    let failures = m.startup(dir.path(), None, &["gone.txt".into()]);

    assert_eq!(failures.len(), 1);
    assert!(matches!(failures[0], Error::FileRead { .. }));
    assert_eq!(m.workspace().len(), 1);
}
