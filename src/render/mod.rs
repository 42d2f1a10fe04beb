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

//! User interface rendering logic.
//!
//! The primary entry point is the [`draw`] function, called after every
//! event to render the [`App`] state: the artist view fills the screen and a
//! one-line footer carries key hints or the latest status message.

pub(crate) mod icons;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, events::now_playing, theme::Theme};

const KEY_HINTS: &str = "tab focus | enter play | m menu | space pause | s stop | esc back | q quit";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(f.area());

    let now_playing = now_playing(&app.artist.tracks, app.pointer.as_ref());
    app.view.draw(f, outer[0], &app.artist, app.pointer.as_ref(), now_playing, &app.theme);

    let footer = match &app.status {
        Some(status) => Span::styled(status.as_str(), Style::default().fg(app.theme.accent_colour)),
        None => Span::styled(KEY_HINTS, Style::default().fg(app.theme.muted_colour)),
    };
    f.render_widget(Paragraph::new(Line::from(footer)), outer[1]);
}
