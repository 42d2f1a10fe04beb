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

//! Artist detail view.
//!
//! Composes the library sidebar, the control bar, the artist header with its
//! play and shuffle buttons, the artist's tracks and a grid of the artist's
//! albums. The view keeps only focus and cursor positions; the artist record
//! and the playback pointer are borrowed for each render or event, and every
//! user intent is handed back to the owner as an [`ArtistDetailAction`].

mod event;
mod render;
#[cfg(test)]
mod tests;

use crate::components::{Caption, Sidebar, TrackListConfig, TrackListState};

pub(crate) const ARTISTS_SECTION: &str = "artists";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ArtistDetailAction {
    Back,
    ClickLibraryItem(String),
    PlayTrack { id: String, position: usize },
    OpenContextMenu(String),
    /// Play the whole artist. Raised by the header button, the view itself
    /// attaches no playback semantics to it.
    Play,
    /// Shuffle the whole artist, unwired in the same way as [`Self::Play`].
    Shuffle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Sidebar,
    Actions,
    Tracks,
    Albums,
}

impl Focus {
    const RING: [Focus; 4] = [Focus::Sidebar, Focus::Actions, Focus::Tracks, Focus::Albums];

    fn next(self) -> Self {
        let i = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        Self::RING[(i + 1) % Self::RING.len()]
    }

    fn previous(self) -> Self {
        let i = Self::RING.iter().position(|f| *f == self).unwrap_or(0);
        Self::RING[(i + Self::RING.len() - 1) % Self::RING.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderButton {
    Play,
    Shuffle,
}

pub(crate) struct ArtistDetailView {
    pub(crate) focus: Focus,
    pub(crate) sidebar: Sidebar,
    pub(crate) track_list: TrackListState,
    pub(crate) track_config: TrackListConfig,
    pub(crate) button: HeaderButton,
    pub(crate) album_cursor: Option<usize>,
}

impl ArtistDetailView {
    /// Creates the view, showing the artist's tracks with `track_config`
    /// under a "Tracks" caption.
    pub(crate) fn new(track_config: TrackListConfig) -> Self {
        Self {
            focus: Focus::Tracks,
            sidebar: Sidebar::new(ARTISTS_SECTION),
            track_list: TrackListState::new(),
            track_config: track_config.with_caption(Caption::new("Tracks").with_trailing("See all")),
            button: HeaderButton::Play,
            album_cursor: None,
        }
    }
}

impl Default for ArtistDetailView {
    fn default() -> Self {
        Self::new(TrackListConfig::default())
    }
}
