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

//! Application event loop.
//!
//! Events arrive on the [`AppEvent`] channel. Keys the application owns
//! (quit, pause, stop) are handled here, the rest go to the artist view, and
//! the actions the view raises are applied to the application state before
//! the next frame is drawn.

use anyhow::{Context, Result};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::{
    App,
    components::{ARTISTS_SECTION, ArtistDetailAction},
    model::{PlaybackPointer, Track},
    render::draw,
    util::term::Tui,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),
    Tick,
    ExitApplication,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

/// Runs the main application loop, handling events and redrawing after each
/// one, until a quit is requested or the channel closes.
pub(crate) fn process_events(terminal: &mut Tui, app: &mut App) -> Result<()> {
    terminal.draw(|f| draw(f, app)).context("Failed to draw frame")?;

    while let Ok(event) = app.event_rx.recv() {
        let flow = match event {
            AppEvent::Key(key) => process_key_event(app, key),
            AppEvent::Tick => Flow::Continue,
            AppEvent::ExitApplication => Flow::Exit,
        };

        if flow == Flow::Exit {
            break;
        }

        terminal.draw(|f| draw(f, app)).context("Failed to draw frame")?;
    }

    log::info!("Exiting");
    Ok(())
}

pub(crate) fn process_key_event(app: &mut App, key: KeyEvent) -> Flow {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Flow::Exit,

        (KeyCode::Char(' '), _) => {
            if let Some(pointer) = app.pointer.as_mut() {
                pointer.is_playing = !pointer.is_playing;
                log::debug!("Playback {}", if pointer.is_playing { "resumed" } else { "paused" });
            }
            return Flow::Continue;
        }

        (KeyCode::Char('s'), KeyModifiers::NONE) => {
            app.pointer = None;
            log::debug!("Playback stopped");
            return Flow::Continue;
        }

        _ => {}
    }

    let action = app
        .view
        .process_event(&Event::Key(key), &app.artist, app.pointer.as_ref());

    match action {
        Some(action) => apply_action(app, action),
        None => Flow::Continue,
    }
}

pub(crate) fn apply_action(app: &mut App, action: ArtistDetailAction) -> Flow {
    log::debug!("Artist view action {:?}", action);

    match action {
        ArtistDetailAction::Back => return Flow::Exit,

        ArtistDetailAction::PlayTrack { id, position } => {
            log::info!("Playing track {} at row {}", id, position);
            app.pointer = Some(PlaybackPointer::id(id, true));
            app.status = None;
        }

        ArtistDetailAction::ClickLibraryItem(section) => {
            if section != ARTISTS_SECTION {
                log::info!("Library section {} requested", section);
                app.status = Some(format!("The {} section is not available in this view", section));
            }
        }

        ArtistDetailAction::OpenContextMenu(id) => {
            let title = app
                .artist
                .tracks
                .iter()
                .find(|t| t.id == id)
                .map_or(id.as_str(), |t| t.title.as_str());
            log::info!("Context menu requested for {}", title);
            app.status = Some(format!("No context menu for {}", title));
        }

        ArtistDetailAction::Play | ArtistDetailAction::Shuffle => {
            log::warn!("{:?} for {} is not wired to playback", action, app.artist.name);
            app.status = Some(format!("{:?} is not available yet", action));
        }
    }

    Flow::Continue
}

/// The track the pointer refers to, if it belongs to the artist on screen.
pub(crate) fn now_playing<'a>(tracks: &'a [Track], pointer: Option<&PlaybackPointer>) -> Option<&'a Track> {
    let pointer = pointer?;
    tracks.iter().find(|track| pointer.targets(track))
}
