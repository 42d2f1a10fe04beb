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

//! # Artist detail TUI.
//!
//! A terminal front end that shows one artist: its tracks in a track table,
//! its albums in a grid, and the library sidebar and control bar around them.
//!
//! The components under [`components`] are pure views. They borrow the artist
//! and the playback pointer for each frame and report user intent as action
//! values. This binary is the owner of that data: it loads the artist from a
//! snapshot file, keeps the playback pointer and applies the actions.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the
//! terminal is restored even when the run fails. An input thread and a tick
//! thread feed a single `std::sync::mpsc` channel that drives rendering.

mod components;
mod config;
mod events;
mod library;
mod model;
mod render;
mod theme;
mod util;

use std::{
    env,
    fs::{self, File},
    path::{Path, PathBuf},
    sync::mpsc::{self, Receiver, Sender},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};
use crossterm::event::{self, KeyEventKind};

use crate::{
    components::ArtistDetailView,
    config::AppConfig,
    events::{AppEvent, process_events},
    model::{Artist, PlaybackPointer},
    theme::Theme,
    util::term::{Tui, restore_terminal, setup_terminal},
};

/// Application state.
pub(crate) struct App {
    pub(crate) config: AppConfig,
    pub(crate) theme: Theme,

    pub(crate) event_tx: Sender<AppEvent>,
    pub(crate) event_rx: Receiver<AppEvent>,

    pub(crate) artist: Artist,
    pub(crate) view: ArtistDetailView,

    pub(crate) pointer: Option<PlaybackPointer>,
    pub(crate) status: Option<String>,
}

impl App {
    pub(crate) fn new(config: AppConfig, artist: Artist) -> Self {
        let (event_tx, event_rx) = mpsc::channel();
        let view = ArtistDetailView::new(config.track_list_config());

        Self {
            config,
            theme: Theme::default(),
            event_tx,
            event_rx,
            artist,
            view,
            pointer: None,
            status: None,
        }
    }
}

fn main() -> Result<()> {
    let config = config::load_config();

    if let Err(err) = init_logging(&config.log_path()) {
        eprintln!("Logging disabled: {:#}", err);
    }
    log::info!("Starting trackdeck v{}", env!("CARGO_PKG_VERSION"));

    let library = env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| config.library.clone())
        .context("No library snapshot given, pass a path or set `library` in the configuration")?;

    let library = library::load_library(&library).context("Failed to load library")?;

    let mut app = App::new(config, library.artist);
    app.pointer = library.pointer;

    let background = Theme::to_hex(app.theme.background_colour).unwrap_or_default();
    let mut terminal = setup_terminal(&background)?;
    let res = run(&mut terminal, &mut app);
    restore_terminal(&mut terminal);

    if let Err(err) = &res {
        log::error!("Application error: {:#}", err);
    }
    res.context("Application error occurred")
}

/// Sends log output to `path`, filtered by `RUST_LOG` (default `info`).
///
/// A file target keeps log lines off the alternate screen.
fn init_logging(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;
    }
    let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()
        .context("Failed to install logger")?;

    Ok(())
}

/// Spawns the input and tick threads, then hands control to
/// [`process_events`] until the user quits.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    // Translate raw key presses into application events.
    let tx_keys = app.event_tx.clone();
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(event::Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    if tx_keys.send(AppEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(event::Event::Resize(_, _)) => {
                    if tx_keys.send(AppEvent::Tick).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    log::error!("Failed to read terminal event: {}", err);
                    tx_keys.send(AppEvent::ExitApplication).ok();
                    break;
                }
            }
        }
    });

    // Periodic tick, the minimum frame rate of the UI.
    let tx_tick = app.event_tx.clone();
    let tick_rate = Duration::from_millis(app.config.tick_rate_ms.max(16));
    thread::spawn(move || {
        while tx_tick.send(AppEvent::Tick).is_ok() {
            thread::sleep(tick_rate);
        }
    });

    process_events(terminal, app)
}
