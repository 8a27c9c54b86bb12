//! Puppies - a terminal puppy catalog
//!
//! This is the binary entry point. All logic lives in the workspace crates.

use std::path::PathBuf;

use clap::Parser;
use puppy_app::config::default_config_dir;

/// Browse adoptable puppies in the terminal
#[derive(Parser, Debug)]
#[command(name = "puppies")]
#[command(about = "Browse adoptable puppies in the terminal", long_about = None)]
struct Args {
    /// Route to open at start: `list` or `details/<id>`
    #[arg(long, value_name = "PATH")]
    route: Option<String>,

    /// Print the screen as JSON instead of starting the TUI
    #[arg(long)]
    headless: bool,

    /// Directory holding config.toml
    #[arg(long, value_name = "DIR")]
    config: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    puppy_core::logging::init()?;

    let config_dir = args.config.unwrap_or_else(default_config_dir);
    let state = puppies::build_state(args.route.as_deref(), &config_dir)?;

    if args.headless {
        tracing::info!("Headless render of {}", state.route());
        let stdout = std::io::stdout();
        puppies::write_screen(&mut stdout.lock(), &state)?;
        return Ok(());
    }

    puppy_tui::run(state)?;
    Ok(())
}
