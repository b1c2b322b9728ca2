pub mod about;
pub mod dialogs;
pub mod status_bar;
pub mod tab_bar;
