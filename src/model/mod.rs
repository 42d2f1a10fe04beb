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

//! Domain models and core data structures.
//!
//! This module defines the records handed to the views (artists, albums and
//! tracks), the playback pointer that identifies the "current" track, and the
//! fixed set of table columns together with the typed accessors used to
//! extract a display value for each of them.


use serde::{Deserialize, Serialize};

use crate::util::format::format_time;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Track {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) artist: String,
    pub(crate) album: Option<String>,
    /// Length in seconds.
    pub(crate) duration: Option<u64>,
    pub(crate) position: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub(crate) struct Album {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) artist: String,
    #[serde(default)]
    pub(crate) cover: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Artist {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) tracks: Vec<Track>,
    pub(crate) albums: Vec<Album>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum PlaybackTarget {
    Position(usize),
    Id(String),
}

/// Identifies the current track and whether it is actively playing.
///
/// A stopped player is represented by the absence of a pointer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlaybackPointer {
    pub(crate) target: PlaybackTarget,
    pub(crate) is_playing: bool,
}

impl PlaybackPointer {
    pub(crate) fn position(position: usize, is_playing: bool) -> Self {
        Self { target: PlaybackTarget::Position(position), is_playing }
    }

    pub(crate) fn id(id: impl Into<String>, is_playing: bool) -> Self {
        Self { target: PlaybackTarget::Id(id.into()), is_playing }
    }

    /// Returns `true` if the pointer refers to the given track, ignoring the
    /// playing flag.
    pub(crate) fn targets(&self, track: &Track) -> bool {
        match &self.target {
            PlaybackTarget::Position(position) => *position == track.position,
            PlaybackTarget::Id(id) => *id == track.id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Column {
    RowNumber,
    Title,
    Artist,
    Album,
    Duration,
    Actions,
}

pub(crate) const DEFAULT_COLUMNS: [Column; 4] =
    [Column::Title, Column::Artist, Column::Album, Column::Duration];

impl Column {
    pub(crate) const fn label(self) -> &'static str {
        match self {
            Column::RowNumber => "#",
            Column::Title => "Title",
            Column::Artist => "Artist",
            Column::Album => "Album",
            Column::Duration => "Time",
            Column::Actions => "",
        }
    }

    /// Parses a column from its header label or name, ignoring case and
    /// surrounding whitespace.
    pub(crate) fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "#" | "row-number" | "row_number" | "number" => Some(Column::RowNumber),
            "title" => Some(Column::Title),
            "artist" => Some(Column::Artist),
            "album" => Some(Column::Album),
            "time" | "duration" => Some(Column::Duration),
            "actions" => Some(Column::Actions),
            _ => None,
        }
    }

    /// Extracts the display value of this column for a track shown at
    /// `row_index`.
    pub(crate) fn value(self, track: &Track, row_index: usize) -> String {
        match self {
            Column::RowNumber => (row_index + 1).to_string(),
            Column::Title => track.title.clone(),
            Column::Artist => track.artist.clone(),
            Column::Album => track.album.clone().unwrap_or_default(),
            Column::Duration => track.duration.map(format_time).unwrap_or_default(),
            Column::Actions => String::new(),
        }
    }
}

/// The rendering variant of a track list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum ListVariant {
    /// A mixed list, tracks carry a cover placeholder beside the title.
    #[default]
    Generic,
    /// A list scoped to one album, tracks are numbered.
    Album,
}

impl ListVariant {
    /// The variant implied by a column set: album exactly when the row-number
    /// column is present.
    pub(crate) fn for_columns(columns: &[Column]) -> Self {
        if columns.contains(&Column::RowNumber) {
            ListVariant::Album
        } else {
            ListVariant::Generic
        }
    }
}
