pub mod document_state;
pub mod pasteboard;
pub mod text_view;
