//! Open command - launches the interactive app
//!
//! Takes over the terminal, draws the chrome once and swaps the content
//! region as the user navigates.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use cih_tui::{App, ViewRegistry, install_panic_hook, theme_by_name};

use crate::config::ConfigLoader;

#[derive(Args, Default)]
#[command(after_long_help = "\
Examples:
  cih                               Open at the configured path
  cih open --path /dashboard        Open the dashboard
  cih open --theme light            Use the light theme
")]
pub struct OpenArgs {
    /// Path to open at
    #[arg(long)]
    pub path: Option<String>,

    /// Use specific theme
    #[arg(long)]
    pub theme: Option<String>,
}

pub fn run(args: OpenArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let path = args.path.unwrap_or(config.ui.initial_path);
    let theme_name = args.theme.unwrap_or(config.ui.theme);
    let theme = theme_by_name(&theme_name)?;

    info!(path = %path, theme = %theme_name, "Starting app...");

    install_panic_hook();
    let mut app = App::with_options(ViewRegistry::standard(), theme, &path);
    app.run().context("terminal session failed")?;

    info!("App exited");
    Ok(())
}
