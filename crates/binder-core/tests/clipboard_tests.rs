use binder_core::{DocumentManager, Error, MemoryClipboard, ScriptedPicker};

fn manager_with_text(text: &str, clip: MemoryClipboard) -> DocumentManager<ScriptedPicker, MemoryClipboard> {
    let mut m = DocumentManager::new(ScriptedPicker::new(), clip);
    m.new_document();
    m.active_buffer_mut().unwrap().insert(text);
    m
}

#[test]
fn cut_with_empty_selection_changes_nothing() {
    let mut m = manager_with_text("hello", MemoryClipboard::with_text("kept"));

    let err = m.cut_selection().unwrap_err();

    assert!(matches!(err, Error::ClipboardUnavailable));
    assert_eq!(m.active_document().unwrap().buffer.text(), "hello");
    assert_eq!(m.clipboard().content(), Some("kept"));
}

#[test]
fn copy_puts_selection_on_clipboard() {
    let mut m = manager_with_text("hello world", MemoryClipboard::new());
    m.active_buffer_mut().unwrap().select(6, 11);

    m.copy_selection().unwrap();

    assert_eq!(m.clipboard().content(), Some("world"));
    assert_eq!(m.active_document().unwrap().buffer.text(), "hello world");
}

#[test]
fn cut_removes_selection() {
    let mut m = manager_with_text("hello world", MemoryClipboard::new());
    m.active_buffer_mut().unwrap().select(5, 11);

    m.cut_selection().unwrap();

    let buffer = &m.active_document().unwrap().buffer;
    assert_eq!(buffer.text(), "hello");
    assert_eq!(buffer.cursor(), 5);
    assert_eq!(m.clipboard().content(), Some(" world"));
}

#[test]
fn paste_replaces_selection() {
    let mut m = manager_with_text("hello world", MemoryClipboard::with_text("there"));
    m.active_buffer_mut().unwrap().select(6, 11);

    m.paste_clipboard().unwrap();

    assert_eq!(m.active_document().unwrap().buffer.text(), "hello there");
}

#[test]
fn paste_inserts_at_cursor() {
    let mut m = manager_with_text("ac", MemoryClipboard::with_text("b"));
    m.active_buffer_mut().unwrap().set_cursor(1);

    m.paste_clipboard().unwrap();

    let buffer = &m.active_document().unwrap().buffer;
    assert_eq!(buffer.text(), "abc");
    assert_eq!(buffer.cursor(), 2);
}

#[test]
fn paste_from_empty_clipboard_is_no_op() {
    let mut m = manager_with_text("abc", MemoryClipboard::new());
    let revision = m.active_document().unwrap().buffer.revision();

    assert!(matches!(m.paste_clipboard(), Err(Error::ClipboardUnavailable)));
    assert_eq!(m.active_document().unwrap().buffer.revision(), revision);
}

#[test]
fn clipboard_ops_without_documents_are_unavailable() {
    let mut m = DocumentManager::new(ScriptedPicker::new(), MemoryClipboard::with_text("x"));
    assert!(matches!(m.copy_selection(), Err(Error::ClipboardUnavailable)));
    assert!(matches!(m.paste_clipboard(), Err(Error::ClipboardUnavailable)));
}
