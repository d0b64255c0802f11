//! Timepick - pick a time of day from the terminal

use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use timepick::app::Actions;
use timepick::config::{Action, Config};
use timepick::{App, Clock, FixedClock, SystemClock, TimeOfDay, paths, tui};

/// Pick a time of day from the terminal
#[derive(Parser, Debug)]
#[command(name = "timepick")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Load configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Seed pickers from this time instead of the system clock
    #[arg(long, value_name = "HH:MM")]
    now: Option<TimeOfDay>,

    /// Print the accepted time to stdout on exit
    #[arg(long)]
    print: bool,

    /// Start with the picker already open
    #[arg(long)]
    open: bool,
}

fn init_logging() {
    // Log to <tmp>/timepick.log - tail with: tail -f "$TMPDIR/timepick.log"
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level == 0 {
        return;
    }

    let log_path = paths::log_path();
    // Clear the log file on startup
    if let Err(e) = std::fs::write(&log_path, "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    let level = match debug_level {
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };

    let dir = log_path
        .parent()
        .map_or_else(std::env::temp_dir, std::path::Path::to_path_buf);
    let file_appender = tracing_appender::rolling::never(dir, "timepick.log");
    tracing_subscriber::fmt()
        .with_writer(file_appender)
        .with_max_level(level)
        .with_ansi(false)
        .init();
}

fn load_config(path: Option<&PathBuf>) -> Result<Config> {
    path.map_or_else(Config::load, |path| Config::load_from(path))
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {e}");
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let config = load_config(cli.config.as_ref())?;
    let clock: Box<dyn Clock> = match cli.now {
        Some(time) => Box::new(FixedClock::new(time)),
        None => Box::new(SystemClock),
    };

    let mut app = App::new(config);
    if cli.open {
        Actions::new(clock.as_ref()).handle_action(&mut app, Action::OpenPicker);
    }

    tui::run(&mut app, clock.as_ref())?;

    if cli.print {
        println!("{}", app.screen.label());
    }

    Ok(())
}
