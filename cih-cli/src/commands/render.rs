//! Render command - prints one frame for a path without a TTY.

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use cih_tui::{App, ViewRegistry, render_to_string, theme_by_name};

use crate::config::ConfigLoader;

#[derive(Args)]
#[command(after_long_help = "\
Examples:
  cih render /                      Home page at the configured size
  cih render /about --width 80      About page, 80 columns wide
  cih render /nowhere               The not-found page
")]
pub struct RenderArgs {
    /// Path to load
    pub path: String,

    /// Frame width in cells
    #[arg(long)]
    pub width: Option<u16>,

    /// Frame height in rows
    #[arg(long)]
    pub height: Option<u16>,

    /// Use specific theme
    #[arg(long)]
    pub theme: Option<String>,
}

pub fn run(args: RenderArgs) -> Result<()> {
    let config = ConfigLoader::load()?;

    let width = args.width.unwrap_or(config.render.width);
    let height = args.height.unwrap_or(config.render.height);
    let theme = theme_by_name(args.theme.as_deref().unwrap_or(&config.ui.theme))?;

    let app = App::with_options(ViewRegistry::standard(), theme, &args.path);
    debug!(path = %app.current_path(), page = ?app.page(), width, height, "rendering frame");

    let text = render_to_string(&app, width, height).context("failed to render frame")?;
    println!("{text}");
    Ok(())
}
