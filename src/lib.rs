//! Binder: a small tabbed plain-text editor for macOS.
//!
//! Document handling lives in `binder-core`; this crate is the AppKit shell
//! around it plus launch configuration.

pub mod commands;
pub mod config;

#[cfg(target_os = "macos")]
pub mod app;
#[cfg(target_os = "macos")]
pub mod editor;
#[cfg(target_os = "macos")]
pub mod menu;
#[cfg(target_os = "macos")]
pub mod ui;
