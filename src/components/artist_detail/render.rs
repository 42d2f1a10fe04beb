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

//! UI rendering logic for the artist detail view.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::{
        ArtistDetailView, Caption, ControlBar, Focus, HeaderButton, draw_caption,
    },
    model::{Album, Artist, PlaybackPointer, Track},
    render::{
        Render,
        icons::{ICON_BACK, ICON_COVER, ICON_PLAY, ICON_SHUFFLE},
    },
    theme::Theme,
};

const SIDEBAR_WIDTH: u16 = 16;
const ALBUM_TILE_WIDTH: u16 = 24;
const ALBUM_GRID_HEIGHT: u16 = 7;

impl ArtistDetailView {
    pub(crate) fn draw(
        &mut self,
        f: &mut Frame,
        area: Rect,
        artist: &Artist,
        pointer: Option<&PlaybackPointer>,
        now_playing: Option<&Track>,
        theme: &Theme,
    ) {
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
            .split(area);

        self.sidebar.draw(f, main[0], self.focus == Focus::Sidebar, theme);

        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(ALBUM_GRID_HEIGHT),
            ])
            .split(main[1]);

        ControlBar { pointer, track: now_playing }.draw(f, content[0], theme);

        let back = Paragraph::new(Line::from(vec![
            Span::styled(format!(" {} ", ICON_BACK), Style::default().fg(theme.table_title_fg).bg(theme.hover_bg)),
            Span::styled(" Back", Style::default().fg(theme.muted_colour)),
        ]));
        f.render_widget(back, content[1]);

        let name = Paragraph::new(Span::styled(
            format!(" {}", artist.name),
            Style::default().fg(theme.table_title_fg).add_modifier(Modifier::BOLD),
        ));
        f.render_widget(name, content[2]);

        self.draw_buttons(f, content[3], theme);

        let mut track_list = self.track_list.as_widget(&artist.tracks, &self.track_config, pointer);
        track_list.draw(f, content[4], theme);

        self.draw_albums(f, content[5], &artist.albums, theme);
    }

    fn draw_buttons(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let focused = self.focus == Focus::Actions;
        let button_style = |button: HeaderButton| {
            if focused && self.button == button {
                Style::default().fg(theme.table_title_fg).bg(theme.accent_colour).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.accent_colour)
            }
        };

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!(" {} Play ", ICON_PLAY), button_style(HeaderButton::Play)),
            Span::raw("   "),
            Span::styled(format!(" {} Shuffle ", ICON_SHUFFLE), button_style(HeaderButton::Shuffle)),
        ]);
        f.render_widget(Paragraph::new(line), area);
    }

    fn draw_albums(&self, f: &mut Frame, area: Rect, albums: &[Album], theme: &Theme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        draw_caption(f, chunks[0], &Caption::new("Albums").with_trailing("See all"), theme);

        let visible = usize::from((chunks[1].width / ALBUM_TILE_WIDTH).max(1));
        let cursor = self
            .album_cursor
            .filter(|_| self.focus == Focus::Albums)
            .map(|c| c.min(albums.len().saturating_sub(1)));
        let offset = cursor.map_or(0, |c| (c + 1).saturating_sub(visible));

        let tiles = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Length(ALBUM_TILE_WIDTH); visible])
            .split(chunks[1]);

        for (i, album) in albums.iter().enumerate().skip(offset).take(visible) {
            draw_album_tile(f, tiles[i - offset], album, cursor == Some(i), theme);
        }
    }
}

fn draw_album_tile(f: &mut Frame, area: Rect, album: &Album, focused: bool, theme: &Theme) {
    let border = if focused { theme.accent_colour } else { theme.border_colour };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));

    let cover = album.cover.as_deref().unwrap_or("no cover");
    let lines = vec![
        Line::from(Span::styled(format!("{} {}", ICON_COVER, cover), Style::default().fg(theme.placeholder_colour))),
        Line::from(Span::styled(album.title.as_str(), Style::default().fg(theme.table_title_fg))),
        Line::from(Span::styled(album.artist.as_str(), Style::default().fg(theme.muted_colour))),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
