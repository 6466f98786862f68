//! Toast and alert overlay demo.
//!
//! A terminal track library whose actions report back through toasts and
//! alerts. Run with: toplevel-tui [--duration SECS] [--position top|middle|bottom]

mod app;
mod event;
mod logging;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tokio::time::Instant;
use toplevel::config::duration_from_secs;
use toplevel::constants::{defaults, POLL_TIMEOUT};
use toplevel::{ToastConfig, ToastPosition};

use crate::app::App;
use crate::event::EventHandler;
use crate::logging::{init_logging, LogConfig};

/// Command line arguments.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seconds a toast stays on screen
    #[arg(short, long, default_value_t = defaults::DURATION_SECS)]
    duration: f64,

    /// Toast background opacity, 0.0 to 1.0
    #[arg(short, long, default_value_t = defaults::OPACITY)]
    opacity: f64,

    /// Toast shadow radius (0 disables the shadow)
    #[arg(short, long, default_value_t = defaults::SHADOW_RADIUS)]
    shadow: f64,

    /// Where toasts appear
    #[arg(short, long, value_enum, default_value_t = ToastPosition::Top)]
    position: ToastPosition,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn toast_config(&self) -> ToastConfig {
        ToastConfig::new(
            duration_from_secs(self.duration),
            self.opacity,
            self.shadow,
            self.position,
        )
    }
}

/// Entry point for the application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig::from_verbosity(cli.verbose, cli.log_file.clone()))?;

    // Initialize the terminal
    let terminal = ratatui::init();

    let app = App::new(cli.toast_config());

    // Run the application
    let result = run_app(terminal, app);

    // Restore the terminal to its original state
    ratatui::restore();

    result
}

/// Main application loop.
///
/// 1. Fire the pending toast dismiss if it is due
/// 2. Redraw if anything visible changed
/// 3. Wait for input, no longer than the next dismiss deadline
/// 4. Repeat until the user quits
fn run_app(mut terminal: ratatui::DefaultTerminal, mut app: App) -> Result<()> {
    let event_handler = EventHandler::new();
    let mut drawn_revision = None;

    loop {
        let now = Instant::now();
        app.top_level.tick_at(now);

        let revision = app.top_level.revision();
        if drawn_revision != Some(revision) || app.top_level.is_animating(now) {
            terminal
                .draw(|frame| ui::draw(frame, &mut app))
                .context("Failed to draw UI")?;
            drawn_revision = Some(revision);
        }

        let timeout = poll_timeout(app.top_level.next_deadline(), Instant::now());
        let alert_open = app.top_level.alert().display;
        if let Some(action) = event_handler
            .next(timeout, alert_open)
            .context("Failed to read terminal event")?
        {
            if app.handle_event(action) {
                break;
            }
            // Host-only changes (selection, help) do not bump the revision.
            drawn_revision = None;
        }
    }

    Ok(())
}

/// Poll timeout that wakes the loop in time for `deadline`.
fn poll_timeout(deadline: Option<Instant>, now: Instant) -> Duration {
    match deadline {
        Some(deadline) => deadline.saturating_duration_since(now).min(POLL_TIMEOUT),
        None => POLL_TIMEOUT,
    }
}
