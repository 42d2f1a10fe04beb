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

//! Now-playing control bar.
//!
//! Shows the playback state and the track the pointer refers to. The bar has
//! no inputs of its own.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    model::{PlaybackPointer, Track},
    render::{
        Render,
        icons::{ICON_PAUSE, ICON_PLAY, ICON_STOP},
    },
    theme::Theme,
    util::format::format_time,
};

pub(crate) struct ControlBar<'a> {
    pub(crate) pointer: Option<&'a PlaybackPointer>,
    pub(crate) track: Option<&'a Track>,
}

impl Render for ControlBar<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let inner_area = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(10)])
            .split(inner_area);

        let icon = match self.pointer {
            Some(pointer) if pointer.is_playing => ICON_PLAY,
            Some(_) => ICON_PAUSE,
            None => ICON_STOP,
        };

        let bold = Style::default().add_modifier(Modifier::BOLD);
        let mut spans = vec![Span::styled(format!(" {} ", icon), bold).fg(Color::White)];

        match (self.pointer, self.track) {
            (Some(_), Some(track)) => {
                spans.push(Span::styled(track.title.as_str(), bold).fg(theme.accent_colour));
                if let Some(album) = &track.album {
                    spans.push(Span::raw(" from "));
                    spans.push(Span::styled(album.as_str(), bold).fg(theme.accent_colour));
                }
                spans.push(Span::raw(" by "));
                spans.push(Span::styled(track.artist.as_str(), bold).fg(theme.accent_colour));

                if let Some(duration) = track.duration {
                    let time = Paragraph::new(format_time(duration))
                        .alignment(Alignment::Right)
                        .fg(theme.muted_colour);
                    f.render_widget(time, chunks[1]);
                }
            }
            _ => spans.push(Span::styled("Stopped", Style::default().fg(theme.muted_colour))),
        }

        f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn render(pointer: Option<&PlaybackPointer>, track: Option<&Track>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 2)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                ControlBar { pointer, track }.draw(f, area, &Theme::default());
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..80).map(|x| buffer[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn shows_stopped_without_pointer() {
        let line = render(None, None);
        assert!(line.contains(ICON_STOP));
        assert!(line.contains("Stopped"));
    }

    #[test]
    fn shows_now_playing_track() {
        let track = Track {
            id: "t1".into(),
            title: "Otherside".into(),
            artist: "RHCP".into(),
            album: Some("Californication".into()),
            duration: Some(329),
            position: 0,
        };
        let pointer = PlaybackPointer::id("t1", true);
        let line = render(Some(&pointer), Some(&track));
        assert!(line.contains(ICON_PLAY));
        assert!(line.contains("Otherside from Californication by RHCP"));
        assert!(line.contains("05:29"));

        let paused = PlaybackPointer::id("t1", false);
        assert!(render(Some(&paused), Some(&track)).contains(ICON_PAUSE));
    }
}
