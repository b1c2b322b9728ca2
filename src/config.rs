//! Launch configuration for Binder.
//!
//! Combines:
//! - Command-line arguments
//! - The preferences file in the user's config directory

use std::path::PathBuf;

use anyhow::Result;
use binder_core::Preferences;
use clap::Parser;

/// Command-line arguments
#[derive(Debug, Parser)]
#[command(name = "binder")]
#[command(about = "A small tabbed plain-text editor")]
#[command(version)]
pub struct Args {
    /// Files to open in tabs at launch
    pub files: Vec<PathBuf>,

    /// Don't auto-open README.md from the working directory
    #[arg(long)]
    pub no_readme: bool,

    /// Preferences file to use instead of the default location
    #[arg(long, help = "Path to a preferences JSON file")]
    pub preferences: Option<PathBuf>,

    #[arg(
        long,
        default_value = "info",
        help = "Log level (trace, debug, info, warn, error)"
    )]
    pub log_level: String,
}

/// Effective configuration: preferences overridden by CLI flags
#[derive(Debug, Clone)]
pub struct Config {
    pub files: Vec<PathBuf>,
    /// Readme file name to auto-open, `None` when disabled
    pub readme: Option<String>,
    pub working_dir: PathBuf,
    pub preferences: Preferences,
    /// Project website for the Help menu, `None` when the package sets no
    /// usable homepage
    pub website: Option<String>,
}

impl Config {
    /// Create configuration from parsed arguments, reading the preferences
    /// file and the working directory
    pub fn load(args: Args) -> Result<Self> {
        let prefs_path = args.preferences.clone().or_else(Preferences::default_path);
        let preferences = Preferences::load_or_default(prefs_path.as_deref());
        Self::from_args(args, preferences, std::env::current_dir()?)
    }

    /// Create configuration from explicit inputs (useful for testing)
    pub fn from_args(args: Args, preferences: Preferences, working_dir: PathBuf) -> Result<Self> {
        let readme = (preferences.open_readme_on_startup && !args.no_readme)
            .then(|| preferences.readme_file_name.clone());

        Ok(Config {
            files: args.files,
            readme,
            working_dir,
            preferences,
            website: website_url(env!("CARGO_PKG_HOMEPAGE")),
        })
    }
}

/// Accept `homepage` as a website only when it is an http(s) URL.
pub fn website_url(homepage: &str) -> Option<String> {
    let homepage = homepage.trim();
    let host = homepage
        .strip_prefix("https://")
        .or_else(|| homepage.strip_prefix("http://"))?;
    (!host.is_empty()).then(|| homepage.to_string())
}
