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

//! Event routing for the artist detail view.
//!
//! Global keys (back, focus cycling) are handled here; everything else goes
//! to whichever part of the view has focus.

use crossterm::event::{Event, KeyCode};

use crate::{
    components::{ArtistDetailAction, ArtistDetailView, Focus, HeaderButton, TrackListAction},
    model::{Album, Artist, PlaybackPointer},
};

impl ArtistDetailView {
    pub(crate) fn process_event(
        &mut self,
        event: &Event,
        artist: &Artist,
        pointer: Option<&PlaybackPointer>,
    ) -> Option<ArtistDetailAction> {
        if let Event::Key(key_event) = event {
            match key_event.code {
                KeyCode::Esc | KeyCode::Backspace => return Some(ArtistDetailAction::Back),
                KeyCode::Tab => {
                    self.focus = self.focus.next();
                    return None;
                }
                KeyCode::BackTab => {
                    self.focus = self.focus.previous();
                    return None;
                }
                _ => {}
            }
        }

        match self.focus {
            Focus::Sidebar => self
                .sidebar
                .process_event(event)
                .map(|section| ArtistDetailAction::ClickLibraryItem(section.to_string())),

            Focus::Actions => self.process_button_event(event),

            Focus::Tracks => self
                .track_list
                .as_widget(&artist.tracks, &self.track_config, pointer)
                .process_event(event)
                .map(|action| match action {
                    TrackListAction::PlayTrack { id, position } => ArtistDetailAction::PlayTrack { id, position },
                    TrackListAction::OpenContextMenu(id) => ArtistDetailAction::OpenContextMenu(id),
                }),

            Focus::Albums => {
                self.process_album_event(event, &artist.albums);
                None
            }
        }
    }

    fn process_button_event(&mut self, event: &Event) -> Option<ArtistDetailAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right => {
                self.button = match self.button {
                    HeaderButton::Play => HeaderButton::Shuffle,
                    HeaderButton::Shuffle => HeaderButton::Play,
                };
                None
            }
            KeyCode::Enter => Some(match self.button {
                HeaderButton::Play => ArtistDetailAction::Play,
                HeaderButton::Shuffle => ArtistDetailAction::Shuffle,
            }),
            _ => None,
        }
    }

    fn process_album_event(&mut self, event: &Event, albums: &[Album]) {
        let Event::Key(key_event) = event else {
            return;
        };
        let len = albums.len();
        if len == 0 {
            return;
        }

        let cursor = self.album_cursor.map(|c| c.min(len - 1));
        match key_event.code {
            KeyCode::Char('l') | KeyCode::Right => {
                self.album_cursor = Some(cursor.map_or(0, |c| (c + 1).min(len - 1)));
            }
            KeyCode::Char('h') | KeyCode::Left => {
                self.album_cursor = Some(cursor.map_or(0, |c| c.saturating_sub(1)));
            }
            KeyCode::Enter => {
                if let Some(album) = cursor.and_then(|c| albums.get(c)) {
                    log::debug!("Album {} ({}) activated, album navigation is not wired", album.id, album.title);
                }
            }
            _ => {}
        }
    }
}
