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

//! # Playlist manager TUI.
//!
//! A terminal playlist of video links: add songs by name and link, search
//! them, sort them by how often they were played, and open them in a player
//! overlay.
//!
//! It uses an event-driven architecture where:
//!
//! * The **Main Thread** owns the playlist store and view state, and manages
//!   the terminal lifecycle and UI rendering.
//! * **Helper Threads** only produce events: key input, periodic ticks and
//!   the timer that retires the "song added" notice.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern to ensure the
//! terminal state is preserved even in the event of a crash. Communication
//! from helper threads to the main thread is handled via `std::sync::mpsc`
//! channels.

mod components;
mod config;
mod controller;
mod events;
mod model;
mod player;
mod render;
mod storage;
mod theme;
mod util;

use anyhow::{Context, Result};
use crossterm::{
    event::{self},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::{
    io::{self},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::{
    components::{Focus, SearchBox, SongForm, SongTableState},
    config::AppConfig,
    controller::PlaylistController,
    events::{AppEvent, process_events},
    model::{VideoId, playlist::PlaylistStore},
    player::VideoLauncher,
    storage::{MemoryStorage, SqliteStorage, Storage, bridge::PersistenceBridge},
    theme::Theme,
};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

/// Application state.
pub(crate) struct App {
    pub config: AppConfig,

    pub theme: Theme,
    pub focus: Focus,

    pub event_tx: Sender<AppEvent>,
    pub event_rx: Receiver<AppEvent>,

    pub store: PlaylistStore,
    pub controller: PlaylistController,

    pub song_form: SongForm,
    pub search_box: SearchBox,
    pub song_table: SongTableState,

    /// Song awaiting a yes/no answer before it is deleted.
    pub pending_delete: Option<VideoId>,

    pub launcher: VideoLauncher,
}

impl App {
    /// Create a new instance of application state around an opened store.
    pub fn new(config: AppConfig, store: PlaylistStore) -> Self {
        let (event_tx, event_rx) = mpsc::channel();

        let launcher = VideoLauncher::new(config.player_command.clone(), event_tx.clone());

        Self {
            config,
            theme: Theme::default(),
            focus: Focus::Name,
            event_tx,
            event_rx,
            store,
            controller: PlaylistController::new(),
            song_form: SongForm::new(),
            search_box: SearchBox::new(),
            song_table: SongTableState::new(),
            pending_delete: None,
            launcher,
        }
    }
}

/// The entry point of the application.
///
/// Sets up logging, opens the playlist store, manages the terminal lifecycle,
/// and returns an error if any part of the execution fails.
fn main() -> Result<()> {
    let _log_guard = init_logging();

    let config = config::load_config();
    info!("tubelist v{} starting", env!("CARGO_PKG_VERSION"));

    let store = open_store(&config);
    let mut app = App::new(config, store);

    let mut terminal = setup_terminal()?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(e) = &res {
        error!("application error: {e:#}");
    }

    res.context("Application error occurred")
}

/// Routes `tracing` output to a daily log file; the terminal belongs to the
/// UI. The returned guard flushes the log when dropped.
fn init_logging() -> Option<WorkerGuard> {
    let log_dir = config::data_dir().join("logs");
    std::fs::create_dir_all(&log_dir).ok()?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, "tubelist.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tubelist=info"));

    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .ok()?;

    Some(guard)
}

/// Opens the playlist database, falling back to memory-only storage for the
/// session when it cannot be opened.
fn open_store(config: &AppConfig) -> PlaylistStore {
    let path = config.database_path();

    let (storage, degraded): (Box<dyn Storage>, bool) = match SqliteStorage::open(&path) {
        Ok(storage) => {
            info!(path = %path.display(), "opened playlist database");
            (Box::new(storage), false)
        }
        Err(e) => {
            error!("playlist will not be saved this session: {e:#}");
            (Box::new(MemoryStorage::default()), true)
        }
    };

    let mut store = PlaylistStore::open(PersistenceBridge::new(storage, config.storage_key.clone()));
    if degraded {
        store.set_degraded();
    }

    store
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
/// This reverses the changes made by [`setup_terminal`] and makes the cursor
/// visible again. It is "best-effort" and does not return a result, as it is
/// called during cleanup.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) {
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();
}

/// Starts the input and tick threads and enters the main event loop.
///
/// # Errors
///
/// Returns an error if the event processing loop encounters an unrecoverable
/// application error.
fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    // Translate raw key events to application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    let _ = tx_keys.send(AppEvent::FatalError(e.to_string()));
                    break;
                }
            }
        }
    });

    // Periodic tick, the minimum "frame rate" for rendering.
    let tx_tick = app.event_tx.clone();
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(TICK_INTERVAL);
        }
    });

    process_events(terminal, app)
}
