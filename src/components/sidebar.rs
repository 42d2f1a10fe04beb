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

//! Library navigation sidebar.
//!
//! Lists the library sections, marks the one the current view belongs to and
//! reports the section under the cursor when it is activated.

use crossterm::event::{Event, KeyCode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Padding},
};

use crate::theme::Theme;

pub(crate) struct LibrarySection {
    pub(crate) id: &'static str,
    pub(crate) label: &'static str,
}

pub(crate) const LIBRARY_SECTIONS: [LibrarySection; 4] = [
    LibrarySection { id: "tracks", label: "Tracks" },
    LibrarySection { id: "albums", label: "Albums" },
    LibrarySection { id: "artists", label: "Artists" },
    LibrarySection { id: "playlists", label: "Playlists" },
];

pub(crate) struct Sidebar {
    active: &'static str,
    list_state: ListState,
}

impl Sidebar {
    pub(crate) fn new(active: &'static str) -> Self {
        let mut list_state = ListState::default();
        list_state.select(LIBRARY_SECTIONS.iter().position(|s| s.id == active));
        Self { active, list_state }
    }

    /// Moves the cursor, returning the id of the section activated with
    /// `Enter`.
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<&'static str> {
        let Event::Key(key_event) = event else {
            return None;
        };

        let len = LIBRARY_SECTIONS.len();
        let selected = self.list_state.selected().unwrap_or(0);

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => self.list_state.select(Some((selected + 1) % len)),
            KeyCode::Char('k') | KeyCode::Up => self.list_state.select(Some((selected + len - 1) % len)),
            KeyCode::Enter => return LIBRARY_SECTIONS.get(selected).map(|s| s.id),
            _ => {}
        }

        None
    }

    pub(crate) fn draw(&mut self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let items: Vec<ListItem> = LIBRARY_SECTIONS
            .iter()
            .map(|section| {
                let style = if section.id == self.active {
                    Style::default().fg(theme.accent_colour).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(theme.table_title_fg)
                };
                ListItem::new(Line::from(Span::styled(section.label, style)))
            })
            .collect();

        let highlight = if focused {
            Style::default().bg(theme.hover_bg)
        } else {
            Style::default()
        };

        let list = List::new(items)
            .block(
                Block::default()
                    .title("Library")
                    .borders(Borders::RIGHT)
                    .border_style(Style::default().fg(theme.border_colour))
                    .padding(Padding::horizontal(1)),
            )
            .highlight_style(highlight);

        f.render_stateful_widget(list, area, &mut self.list_state);
    }
}
