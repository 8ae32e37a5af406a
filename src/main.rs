use anyhow::{Context, Result};
use clap::Parser;
use playlist_manager::shell::ConsoleTerminal;
use playlist_manager::validation::validate_store_file;
use playlist_manager::{AppConfig, Shell, Store};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "playlist-manager")]
#[command(about = "Manage a personal collection of playlists", long_about = None)]
struct Args {
    /// Path to the playlist store file
    #[arg(short = 'f', long, default_value = "playlists.dat")]
    file: String,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Do not clear the screen between menus
    #[arg(long)]
    no_clear: bool,

    /// Do not wait for Enter after each action
    #[arg(long)]
    no_pause: bool,

    /// Only validate the store file (don't start the shell)
    #[arg(long)]
    validate: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Expand ~ in paths
    let store_path = PathBuf::from(shellexpand::tilde(&args.file).as_ref());

    // If validate-only mode, just validate and exit
    if args.validate {
        let report = validate_store_file(&store_path)?;
        println!(
            "{:?}: {} playlist(s), {} song(s), {} bytes",
            store_path, report.playlists, report.songs, report.file_size
        );
        return Ok(());
    }

    let config = AppConfig::new(store_path)
        .with_color(!args.no_color)
        .with_clear_screen(!args.no_clear)
        .with_pause(!args.no_pause);

    log::debug!("Configuration: {:?}", config);

    let (mut store, load_error) = Store::open_or_empty(&config.store_path);

    let terminal = ConsoleTerminal::stdio()
        .with_color(config.color)
        .with_clear_screen(config.clear_screen);
    let mut shell = Shell::new(&mut store, terminal, &config);
    if let Some(e) = load_error {
        shell = shell.with_startup_warning(format!("{}. Starting with no playlists.", e));
    }

    shell.run().context("Terminal I/O failed")?;
    Ok(())
}
