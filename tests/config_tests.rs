use std::path::PathBuf;

use binder::config::{website_url, Args, Config};
use binder_core::Preferences;
use clap::Parser;

fn config(argv: &[&str], prefs: Preferences) -> Config {
    let args = Args::try_parse_from(argv).expect("parse args");
    Config::from_args(args, prefs, PathBuf::from("/work")).expect("config")
}

#[test]
fn defaults_open_readme() {
    let c = config(&["binder"], Preferences::default());
    assert_eq!(c.readme.as_deref(), Some("README.md"));
    assert!(c.files.is_empty());
}

#[test]
fn log_level_defaults_to_info() {
    let args = Args::try_parse_from(["binder"]).expect("parse args");
    assert_eq!(args.log_level, "info");
}

#[test]
fn no_readme_flag_wins_over_preferences() {
    let c = config(&["binder", "--no-readme"], Preferences::default());
    assert!(c.readme.is_none());
}

#[test]
fn preferences_can_disable_readme() {
    let prefs = Preferences {
        open_readme_on_startup: false,
        ..Preferences::default()
    };
    assert!(config(&["binder"], prefs).readme.is_none());
}

#[test]
fn custom_readme_name_is_used() {
    let prefs = Preferences {
        readme_file_name: "NOTES.md".into(),
        ..Preferences::default()
    };
    assert_eq!(config(&["binder"], prefs).readme.as_deref(), Some("NOTES.md"));
}

#[test]
fn positional_files_and_log_level() {
    let argv = ["binder", "a.txt", "docs/b.txt", "--log-level", "debug"];
    let args = Args::try_parse_from(argv).expect("parse args");
    assert_eq!(args.log_level, "debug");

    let c = config(&argv, Preferences::default());
    assert_eq!(c.files, vec![PathBuf::from("a.txt"), PathBuf::from("docs/b.txt")]);
    assert_eq!(c.working_dir, PathBuf::from("/work"));
}

#[test]
fn website_requires_http_url() {
    assert_eq!(website_url(""), None);
    assert_eq!(website_url("binder.example"), None);
    assert_eq!(website_url("https://"), None);
    assert_eq!(
        website_url(" https://example.org/binder "),
        Some("https://example.org/binder".to_string())
    );
}

#[test]
fn website_follows_package_homepage() {
    let c = config(&["binder"], Preferences::default());
    assert_eq!(c.website, website_url(env!("CARGO_PKG_HOMEPAGE")));
}
