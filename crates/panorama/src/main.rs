mod commands;

use clap::{Parser, Subcommand};

use panorama_core::{config, log};

#[derive(Parser)]
#[command(
    name = "panorama",
    version,
    about = "Inspect display adapters, monitors, modes and desktop layout"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List the displays attached to the desktop
    List(commands::list::ListArgs),
    /// Show the resolutions and refresh rates a display supports
    Modes(commands::modes::ModesArgs),
    /// Print the normalized monitor layout
    Layout(commands::layout::LayoutArgs),
    /// Preview a mode change without applying it
    Edit(commands::edit::EditArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = config::load();
    if let Some(path) = log::init(&config.logging) {
        panorama_core::log_debug!("Logging to {}", path.display());
    }
    panorama_windows::enable_dpi_awareness();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::List(args) => commands::list::execute(&args),
        Commands::Modes(args) => commands::modes::execute(&args, &config),
        Commands::Layout(args) => commands::layout::execute(&args, &config),
        Commands::Edit(args) => commands::edit::execute(&args),
    }
}
