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

//! Track list widget and cursor state.
//!
//! This module provides the table used wherever a sequence of tracks is
//! shown. It separates the transient cursor state (`TrackListState`) from the
//! widget view (`TrackList`), which borrows the tracks, the configuration and
//! the playback pointer for the duration of one render or event. User intent
//! is reported back to the owner as a [`TrackListAction`].

mod event;
mod render;

pub(crate) use render::draw_caption;

use ratatui::widgets::TableState;

use crate::{
    components::TrackRow,
    model::{Column, DEFAULT_COLUMNS, ListVariant, PlaybackPointer, Track},
};

const DEFAULT_MAX_HEIGHT: u16 = 75;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TrackListAction {
    PlayTrack { id: String, position: usize },
    OpenContextMenu(String),
}

/// A heading rendered above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Caption {
    pub(crate) title: String,
    pub(crate) trailing: Option<String>,
}

impl Caption {
    pub(crate) fn new(title: impl Into<String>) -> Self {
        Self { title: title.into(), trailing: None }
    }

    pub(crate) fn with_trailing(mut self, trailing: impl Into<String>) -> Self {
        self.trailing = Some(trailing.into());
        self
    }
}

/// Display options for a track list.
///
/// The defaults are the generic column set (title, artist, album, time), the
/// generic variant, no caption and a height limit of 75% of the area the list
/// is drawn into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TrackListConfig {
    pub(crate) columns: Vec<Column>,
    pub(crate) variant: ListVariant,
    pub(crate) caption: Option<Caption>,
    pub(crate) max_height: u16,
}

impl Default for TrackListConfig {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS.to_vec(),
            variant: ListVariant::Generic,
            caption: None,
            max_height: DEFAULT_MAX_HEIGHT,
        }
    }
}

impl TrackListConfig {
    /// Replaces the column set and re-derives the variant from it.
    ///
    /// The actions column is always drawn at the end of the row, so it is
    /// dropped here if requested explicitly.
    pub(crate) fn with_columns(mut self, columns: impl IntoIterator<Item = Column>) -> Self {
        let mut unique: Vec<Column> = Vec::new();
        for column in columns {
            if column != Column::Actions && !unique.contains(&column) {
                unique.push(column);
            }
        }
        self.variant = ListVariant::for_columns(&unique);
        self.columns = unique;
        self
    }

    pub(crate) fn with_variant(mut self, variant: ListVariant) -> Self {
        self.variant = variant;
        self
    }

    pub(crate) fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    pub(crate) fn with_max_height(mut self, percent: u16) -> Self {
        self.max_height = percent.clamp(1, 100);
        self
    }

    /// Whether a column that can carry the now-playing highlight is shown.
    fn can_highlight(&self) -> bool {
        self.columns
            .iter()
            .any(|column| matches!(column, Column::Title | Column::RowNumber))
    }
}

pub(crate) struct TrackListState {
    pub(crate) table_state: TableState,
}

impl TrackListState {
    pub(crate) fn new() -> Self {
        Self { table_state: TableState::new() }
    }

    pub(crate) fn as_widget<'a>(
        &'a mut self,
        tracks: &'a [Track],
        config: &'a TrackListConfig,
        pointer: Option<&'a PlaybackPointer>,
    ) -> TrackList<'a> {
        TrackList {
            tracks,
            config,
            pointer,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct TrackList<'a> {
    tracks: &'a [Track],
    config: &'a TrackListConfig,
    pointer: Option<&'a PlaybackPointer>,
    table_state: &'a mut TableState,
}

impl<'a> TrackList<'a> {
    /// Returns `true` if `track` is the one currently playing.
    ///
    /// A paused track is not current, and neither is any track when the list
    /// shows neither the title nor the row-number column.
    pub(crate) fn is_current(&self, track: &Track) -> bool {
        self.config.can_highlight()
            && self
                .pointer
                .is_some_and(|pointer| pointer.is_playing && pointer.targets(track))
    }

    /// Index of the current row; the first match wins should the list carry
    /// duplicate identifiers.
    pub(crate) fn current_index(&self) -> Option<usize> {
        self.tracks.iter().position(|track| self.is_current(track))
    }

    pub(crate) fn row(&self, index: usize) -> Option<TrackRow<'a>> {
        let current = self.current_index();
        let tracks = self.tracks;
        tracks
            .get(index)
            .map(|track| TrackRow::new(track, index, current == Some(index), self.config.variant))
    }

    pub(crate) fn rows(&self) -> Vec<TrackRow<'a>> {
        let current = self.current_index();
        let tracks = self.tracks;
        tracks
            .iter()
            .enumerate()
            .map(|(index, track)| TrackRow::new(track, index, current == Some(index), self.config.variant))
            .collect()
    }

    pub(crate) fn hovered(&self) -> Option<usize> {
        self.table_state.selected().filter(|i| *i < self.tracks.len())
    }

    fn goto_next(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) => if i >= len - 1 { 0 } else { i + 1 },
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.tracks.len();
        if len == 0 { return; }
        let i = match self.table_state.selected() {
            Some(i) if i > 0 && i < len => i - 1,
            Some(_) => len - 1,
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if !self.tracks.is_empty() {
            self.table_state.select(Some(self.tracks.len() - 1));
        }
    }
}
