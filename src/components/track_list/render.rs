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

//! UI rendering logic for the track list.
//!
//! Lays out the optional caption above the table, sizes each column and
//! delegates the content of every row to [`TrackRow`](crate::components::TrackRow).

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Paragraph, Row, Table},
};

use crate::{
    components::{Caption, TrackList},
    model::Column,
    render::Render,
    theme::Theme,
};

const CAPTION_HEIGHT: u16 = 2;

impl Render for TrackList<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let table_area = match &self.config.caption {
            Some(caption) => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([Constraint::Length(CAPTION_HEIGHT), Constraint::Min(0)])
                    .split(area);
                draw_caption(f, chunks[0], caption, theme);
                chunks[1]
            }
            None => area,
        };

        let percent = u32::from(self.config.max_height.clamp(1, 100));
        let height = ((u32::from(table_area.height) * percent / 100) as u16)
            .max(1)
            .min(table_area.height);
        let table_area = Rect { height, ..table_area };

        self.draw_table(f, table_area, theme);
    }
}

impl TrackList<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let hovered = self.hovered();
        let columns = &self.config.columns;

        let rows: Vec<Row> = self
            .rows()
            .iter()
            .map(|row| row.to_row(columns, hovered == Some(row.index), theme))
            .collect();

        let mut widths: Vec<Constraint> = columns.iter().map(|column| column_width(*column)).collect();
        widths.push(Constraint::Length(2));

        let mut header: Vec<Cell> = columns
            .iter()
            .map(|column| {
                let line = Line::from(column.label());
                let line = match column {
                    Column::RowNumber | Column::Duration => line.alignment(Alignment::Right),
                    _ => line,
                };
                Cell::from(line)
            })
            .collect();
        header.push(Cell::from(Column::Actions.label()));

        let table = Table::new(rows, widths)
            .header(
                Row::new(header)
                    .style(Style::default().fg(theme.table_header_fg))
                    .bottom_margin(1),
            )
            .column_spacing(2)
            .block(Block::default());

        f.render_stateful_widget(table, area, &mut *self.table_state);
    }
}

fn column_width(column: Column) -> Constraint {
    match column {
        Column::RowNumber => Constraint::Length(3),
        Column::Title => Constraint::Fill(3),
        Column::Artist => Constraint::Fill(1),
        Column::Album => Constraint::Fill(1),
        Column::Duration => Constraint::Length(8),
        Column::Actions => Constraint::Length(2),
    }
}

pub(crate) fn draw_caption(f: &mut Frame, area: Rect, caption: &Caption, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(10)])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        caption.title.as_str(),
        Style::default().fg(theme.table_title_fg).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(title, chunks[0]);

    if let Some(trailing) = &caption.trailing {
        let trailing = Paragraph::new(trailing.as_str())
            .style(Style::default().fg(theme.muted_colour))
            .alignment(Alignment::Right);
        f.render_widget(trailing, chunks[1]);
    }
}
