mod cli_messages;
mod config;
mod consts;
mod error;
mod icons;
mod learning_path;
mod logging;
mod theme;
mod ui;

use crate::config::Config;
use crate::error::DashboardError;
use crate::learning_path::PathKey;
use crate::theme::ThemeKey;
use crate::ui::dashboard::DashboardState;
use clap::{Args, Parser, Subcommand};
use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::path::PathBuf;
use std::{io, process};
use strum::IntoEnumIterator;

#[derive(Parser)]
#[command(author, version, about, long_about = None, args_conflicts_with_subcommands = true)]
/// Themed terminal dashboard for SEO learning paths
struct Cli {
    /// Command to execute (defaults to `run`)
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Open the dashboard
    Run(RunArgs),
    /// List the available theme keys
    Themes,
    /// List the learning paths with their module count and total XP
    Paths,
}

#[derive(Args, Debug, Default)]
struct RunArgs {
    /// Initial theme, e.g. oceanBreeze or neonNights
    #[arg(long, value_name = "THEME", value_parser = ThemeKey::from_key)]
    theme: Option<ThemeKey>,

    /// Initial learning path: ecommerce, content, local or technical
    #[arg(long, value_name = "PATH", value_parser = PathKey::from_key)]
    path: Option<PathKey>,

    /// Config file to read instead of ~/.seo-dashboard/config.json
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Append log records to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Themes) => {
            for theme in ThemeKey::iter() {
                println!("{}", theme);
            }
        }
        Some(Command::Paths) => {
            for key in PathKey::iter() {
                let path = key.path();
                println!(
                    "{:<10} {:<20} {} modules, {} XP",
                    key.to_string(),
                    path.title,
                    path.modules.len(),
                    path.total_xp()
                );
            }
        }
        Some(Command::Run(args)) => run(args),
        None => run(cli.run),
    }
}

/// Resolves the initial selection and runs the dashboard.
fn run(args: RunArgs) {
    if let Some(log_file) = &args.log_file {
        if let Err(e) = logging::init_file_logger(log_file) {
            exit_with_error("Failed to open log file", &e);
        }
        print_cmd_info!("Logging to", "{}", log_file.display());
    }

    let config = Config::resolve(args.config.as_deref())
        .unwrap_or_else(|e| exit_with_error("Failed to load config", &e));

    // Command-line flags take precedence over the config file
    let mut dashboard = DashboardState::new();
    if let Some(path) = args.path.or(config.path) {
        dashboard.select_path(path);
    }
    if let Some(theme) = args.theme.or(config.theme) {
        dashboard.select_theme(theme);
    }
    tracing::info!(
        "Starting dashboard with path {} and theme {}",
        dashboard.selected_path(),
        dashboard.selected_theme()
    );

    if let Err(e) = start(dashboard) {
        exit_with_error("Dashboard failed", &e);
    }
    tracing::info!("Dashboard closed");
}

/// Prints a CLI error and exits with a failure status.
fn exit_with_error(title: &str, error: &DashboardError) -> ! {
    print_cmd_error!(title, error.to_string().as_str());
    process::exit(1);
}

/// Takes over the terminal, runs the UI loop and restores the terminal.
fn start(dashboard: DashboardState) -> Result<(), DashboardError> {
    enable_raw_mode()?;
    restore_after(|| run_dashboard(dashboard), restore_terminal)
}

fn run_dashboard(dashboard: DashboardState) -> Result<(), DashboardError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    // Initialize the terminal with Crossterm backend.
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ui::run(&mut terminal, ui::App::new(dashboard))?;
    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture, Show)
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// An error from `body` is reported in preference to one from `restore`.
fn restore_after<T>(
    body: impl FnOnce() -> Result<T, DashboardError>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T, DashboardError> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}
