// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! # Artist catalogue TUI.
//!
//! A terminal browser for the Hungaroton artist catalogue.
//!
//! The filters on screen (search text, initial letter, artist type and page)
//! live in a single location query string, so any view can be bookmarked,
//! passed on the command line, or revisited through history.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** manages the terminal lifecycle, owns all view state
//!   and renders the UI.
//! * A **Task Worker** performs the blocking catalogue requests.
//! * **Event Loops** capture user input and system ticks to drive the UI
//!   state.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! between the UI and the background worker is handled via `std::sync::mpsc`
//! channels.

mod catalogue;
mod cli;
mod commander;
mod components;
mod config;
mod controller;
mod events;
mod location;
mod query;
mod render;
mod tasks;
mod theme;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    fs::{self, OpenOptions},
    io::{self},
    path::Path,
    sync::{
        Mutex,
        mpsc::{self, Receiver, Sender},
    },
    thread,
    time::Duration,
};
use tracing::info;
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::{
    catalogue::CatalogueClient,
    cli::Cli,
    commander::Commander,
    components::{ArtistTableState, FilterBar},
    config::AppConfig,
    controller::ViewController,
    events::{AppEvent, process_events},
    location::Location,
    tasks::AppTask,
    theme::Theme,
};

/// Application state.
struct App {
    pub config: AppConfig,

    pub theme: Theme,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub task_tx: Sender<AppTask>,

    pub location: Location,
    pub controller: ViewController,

    pub artist_table: ArtistTableState,
    pub filter_bar: FilterBar,
    pub commander: Commander,

    pub status: Option<String>,
}

impl App {
    /// Create a new instance of application state, starting at the given
    /// location query.
    pub fn new(config: AppConfig, task_tx: Sender<AppTask>, initial_query: &str) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let mut location = Location::new(initial_query);
        location.subscribe(event_tx.clone());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            task_tx,
            location,
            controller: ViewController::new(),
            artist_table: ArtistTableState::new(),
            filter_bar: FilterBar::new(),
            commander: Commander::new(),
            status: None,
        }
    }
}

/// The entry point of the application.
///
/// Parses the command line, loads the configuration, initializes logging and
/// the application state, manages the terminal lifecycle, and returns an error
/// if any part of the execution fails.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = config::load_config();
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }

    configure_logging(&config.log_path())?;
    info!("Catalogue at {}", config.api_base_url);

    let (task_tx, task_rx) = mpsc::channel();

    let mut app = App::new(config, task_tx, cli.query.as_deref().unwrap_or_default());

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app, task_rx);
    restore_terminal(&mut terminal);

    res.context("Application error occurred")
}

/// Sends log records to a file, the terminal being owned by the UI.
///
/// The level defaults to `info` and can be changed with `RUST_LOG`.
fn configure_logging(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_line_number(true)
        .with_target(false)
        .with_file(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}

/// Prepares the terminal for the TUI application.
///
/// This function performs the following side effects:
/// * Enables raw mode to capture all keyboard input.
/// * Switches the terminal to the alternate screen buffer.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This reverses the changes made by [`setup_terminal`], disabling raw mode
/// and leaving the alternate screen. It also ensures the cursor is made
/// visible again.
///
/// This function is designed to be "best-effort" and does not return a result,
/// as it is typically called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the application's background workers and enters the main event loop.
///
/// This function spawns several long-running background threads:
/// * A task worker to perform catalogue requests for [`AppTask`]s.
/// * An input thread to poll for system keyboard events.
/// * A tick thread to trigger periodic UI refreshes.
///
/// It then announces the initial location, which triggers the first fetch,
/// and hands control to [`process_events`].
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    task_rx: Receiver<AppTask>,
) -> Result<()> {
    let catalogue = CatalogueClient::new(&app.config.api_base_url);
    tasks::spawn_task_worker(catalogue, task_rx, app.event_tx.clone());

    // Spawn a thread to translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            if let Ok(event::Event::Key(key)) = event::read() {
                if key.kind == event::KeyEventKind::Press {
                    tx_keys.send(AppEvent::Key(key)).ok();
                }
            }
        }
    });

    // Spawn a thread to send a periodic tick application event, this is
    // effectively the minimum "frame rate" for rendering the TUI application.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            let _ = tx_tick.send(AppEvent::Tick);
            thread::sleep(Duration::from_millis(250));
        }
    });

    app.location.announce();

    // Application event loop, process events until the user quits
    process_events(terminal, app)
}
