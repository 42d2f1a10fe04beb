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

//! Per-cell content resolution for a single track row.
//!
//! A row decides, for each visible column, whether the cell shows a play
//! affordance, the row number, a now-playing indicator, a cover placeholder or
//! just the field value. The decision is a pure function of the track, the
//! column, the list variant and whether the row is current; the result is
//! turned into ratatui cells separately so it can be asserted on directly.

use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Row},
};

use crate::{
    components::TrackListAction,
    model::{Column, ListVariant, Track},
    render::icons::{ICON_MENU, ICON_NOW_PLAYING, ICON_PLAY, ICON_TRACK},
    theme::Theme,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum CellPart {
    /// Decorative stand-in for album artwork.
    CoverPlaceholder,
    /// Marks the track that is currently playing.
    NowPlaying,
    /// A play affordance only visible while the row is hovered.
    HoverPlay,
    /// A play affordance while hovered, the row ordinal otherwise.
    PlayOrNumber(String),
    Text(String),
}

impl CellPart {
    fn is_play(&self) -> bool {
        matches!(self, CellPart::HoverPlay | CellPart::PlayOrNumber(_))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct CellContent {
    pub(crate) parts: Vec<CellPart>,
}

impl CellContent {
    fn with(parts: Vec<CellPart>) -> Self {
        Self { parts }
    }

    pub(crate) fn has_play(&self) -> bool {
        self.parts.iter().any(CellPart::is_play)
    }
}

pub(crate) struct TrackRow<'a> {
    pub(crate) track: &'a Track,
    pub(crate) index: usize,
    pub(crate) is_current: bool,
    pub(crate) variant: ListVariant,
}

impl<'a> TrackRow<'a> {
    pub(crate) fn new(track: &'a Track, index: usize, is_current: bool, variant: ListVariant) -> Self {
        Self { track, index, is_current, variant }
    }

    /// Resolves the content of the cell in `column`.
    pub(crate) fn resolve(&self, column: Column) -> CellContent {
        let album = self.variant == ListVariant::Album;
        let current = self.is_current;
        let value = || column.value(self.track, self.index);

        let mut parts = Vec::new();

        if column == Column::Title && !album && !current {
            parts.push(CellPart::CoverPlaceholder);
        }

        if current && album {
            if column == Column::RowNumber {
                parts.push(CellPart::NowPlaying);
            } else {
                parts.push(CellPart::Text(value()));
            }
            return CellContent::with(parts);
        }

        if current {
            if column == Column::Title {
                parts.push(CellPart::NowPlaying);
            }
            parts.push(CellPart::Text(value()));
            return CellContent::with(parts);
        }

        if !album && column == Column::Title {
            parts.push(CellPart::HoverPlay);
        }

        if column == Column::RowNumber {
            parts.push(CellPart::PlayOrNumber(value()));
        } else {
            parts.push(CellPart::Text(value()));
        }

        CellContent::with(parts)
    }

    /// The action raised when this row's play affordance is activated.
    ///
    /// Rows without a play affordance in any visible column (for example the
    /// current row) have nothing to activate.
    pub(crate) fn play_action(&self, columns: &[Column]) -> Option<TrackListAction> {
        columns
            .iter()
            .any(|column| self.resolve(*column).has_play())
            .then(|| TrackListAction::PlayTrack {
                id: self.track.id.clone(),
                position: self.index,
            })
    }

    /// Builds the table row, one cell per column plus the trailing actions
    /// cell.
    pub(crate) fn to_row(&self, columns: &[Column], hovered: bool, theme: &Theme) -> Row<'static> {
        let mut cells: Vec<Cell<'static>> = columns
            .iter()
            .map(|column| self.to_cell(*column, hovered, theme))
            .collect();

        let menu = if hovered { ICON_MENU } else { "" };
        cells.push(Cell::from(Line::from(menu).style(Style::default().fg(theme.muted_colour))));

        let row = Row::new(cells);
        if hovered {
            row.style(Style::default().bg(theme.hover_bg))
        } else {
            row
        }
    }

    fn to_cell(&self, column: Column, hovered: bool, theme: &Theme) -> Cell<'static> {
        let text_style = Style::default().fg(match column {
            Column::RowNumber => theme.table_number_fg,
            Column::Title => theme.table_title_fg,
            Column::Artist => theme.table_artist_fg,
            Column::Album => theme.table_album_fg,
            Column::Duration => theme.table_time_fg,
            Column::Actions => theme.muted_colour,
        });

        let mut spans: Vec<Span<'static>> = Vec::new();
        for part in self.resolve(column).parts {
            match part {
                CellPart::CoverPlaceholder => {
                    spans.push(Span::styled(format!("{} ", ICON_TRACK), Style::default().fg(theme.placeholder_colour)));
                }
                CellPart::NowPlaying => {
                    spans.push(Span::styled(format!("{} ", ICON_NOW_PLAYING), Style::default().fg(theme.now_playing_colour).add_modifier(Modifier::BOLD)));
                }
                CellPart::HoverPlay => {
                    if hovered {
                        spans.push(Span::styled(format!("{} ", ICON_PLAY), Style::default().fg(theme.accent_colour)));
                    }
                }
                CellPart::PlayOrNumber(number) => {
                    if hovered {
                        spans.push(Span::styled(ICON_PLAY, Style::default().fg(theme.accent_colour)));
                    } else {
                        spans.push(Span::styled(number, text_style));
                    }
                }
                CellPart::Text(text) => {
                    let style = if self.is_current && column == Column::Title {
                        text_style.fg(theme.now_playing_colour).add_modifier(Modifier::BOLD)
                    } else {
                        text_style
                    };
                    spans.push(Span::styled(text, style));
                }
            }
        }

        let line = Line::from(spans);
        let line = match column {
            Column::RowNumber | Column::Duration => line.alignment(Alignment::Right),
            _ => line,
        };
        Cell::from(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track {
            id: "t1".into(),
            title: "Otherside".into(),
            artist: "RHCP".into(),
            album: Some("Californication".into()),
            duration: Some(329),
            position: 0,
        }
    }

    fn text(value: &str) -> CellPart {
        CellPart::Text(value.into())
    }

    #[test]
    fn generic_title_not_current_has_cover_and_hover_play() {
        let track = track();
        let row = TrackRow::new(&track, 0, false, ListVariant::Generic);
        assert_eq!(
            row.resolve(Column::Title).parts,
            vec![CellPart::CoverPlaceholder, CellPart::HoverPlay, text("Otherside")]
        );
    }

    #[test]
    fn generic_title_current_is_prefixed_with_indicator() {
        let track = track();
        let row = TrackRow::new(&track, 0, true, ListVariant::Generic);
        assert_eq!(row.resolve(Column::Title).parts, vec![CellPart::NowPlaying, text("Otherside")]);
        assert_eq!(row.resolve(Column::Artist).parts, vec![text("RHCP")]);
        assert_eq!(row.resolve(Column::Album).parts, vec![text("Californication")]);
        assert_eq!(row.resolve(Column::Duration).parts, vec![text("05:29")]);
    }

    #[test]
    fn album_current_row_number_is_replaced_by_indicator() {
        let track = track();
        let row = TrackRow::new(&track, 0, true, ListVariant::Album);
        assert_eq!(row.resolve(Column::RowNumber).parts, vec![CellPart::NowPlaying]);
        assert_eq!(row.resolve(Column::Title).parts, vec![text("Otherside")]);
    }

    #[test]
    fn album_row_number_not_current_overlaps_play_and_number() {
        let track = track();
        let row = TrackRow::new(&track, 4, false, ListVariant::Album);
        assert_eq!(row.resolve(Column::RowNumber).parts, vec![CellPart::PlayOrNumber("5".into())]);
        assert_eq!(row.resolve(Column::Title).parts, vec![text("Otherside")]);
    }

    #[test]
    fn generic_row_number_not_current_still_offers_play() {
        let track = track();
        let row = TrackRow::new(&track, 2, false, ListVariant::Generic);
        assert!(row.resolve(Column::RowNumber).has_play());
    }

    #[test]
    fn missing_optional_fields_render_empty() {
        let mut track = track();
        track.album = None;
        track.duration = None;
        let row = TrackRow::new(&track, 0, false, ListVariant::Generic);
        assert_eq!(row.resolve(Column::Album).parts, vec![text("")]);
        assert_eq!(row.resolve(Column::Duration).parts, vec![text("")]);
        assert_eq!(row.resolve(Column::Actions).parts, vec![text("")]);
    }

    #[test]
    fn play_action_reports_row_id_and_position() {
        let track = track();
        for variant in [ListVariant::Generic, ListVariant::Album] {
            let row = TrackRow::new(&track, 7, false, variant);
            let columns = [Column::RowNumber, Column::Title, Column::Artist];
            assert_eq!(
                row.play_action(&columns),
                Some(TrackListAction::PlayTrack { id: "t1".into(), position: 7 })
            );
        }
    }

    #[test]
    fn current_row_has_no_play_action() {
        let track = track();
        let row = TrackRow::new(&track, 0, true, ListVariant::Generic);
        assert_eq!(row.play_action(&[Column::Title, Column::Artist]), None);
    }

    #[test]
    fn album_list_without_row_number_has_no_play_action() {
        let track = track();
        let row = TrackRow::new(&track, 0, false, ListVariant::Album);
        assert_eq!(row.play_action(&[Column::Title, Column::Artist]), None);
    }
}
