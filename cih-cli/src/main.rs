use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "cih", about = "Terminal edition of the CIH starter app")]
#[command(version, propagate_version = true, args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    open: commands::open::OpenArgs,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive app (default)
    Open(commands::open::OpenArgs),
    /// Draw one frame for a path and print it as text
    Render(commands::render::RenderArgs),
    /// List the route table
    Routes(commands::routes::RoutesArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Open(cli.open)) {
        Commands::Open(args) => commands::open::run(args),
        Commands::Render(args) => commands::render::run(args),
        Commands::Routes(args) => commands::routes::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
