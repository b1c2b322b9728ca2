use anyhow::Result;
use binder::config::{Args, Config};
use clap::Parser;
use env_logger::Env;

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str()))
        .init();

    let config = Config::load(args)?;
    run(config)
}

#[cfg(target_os = "macos")]
fn run(config: Config) -> Result<()> {
    binder::app::run(config)
}

#[cfg(not(target_os = "macos"))]
fn run(_config: Config) -> Result<()> {
    anyhow::bail!("the Binder window shell is only available on macOS")
}
