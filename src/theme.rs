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

//! Visual styling and colour configuration for the TUI.
//!
//! Defines the palette shared by the sidebar, the artist view and the track
//! table, and converts colours to the hexadecimal form the terminal emulator
//! expects for its background.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub(crate) struct Theme {
    pub(crate) background_colour: Color,
    pub(crate) accent_colour: Color,
    pub(crate) border_colour: Color,
    pub(crate) muted_colour: Color,
    pub(crate) now_playing_colour: Color,
    pub(crate) placeholder_colour: Color,
    pub(crate) hover_bg: Color,

    pub(crate) table_header_fg: Color,
    pub(crate) table_number_fg: Color,
    pub(crate) table_title_fg: Color,
    pub(crate) table_artist_fg: Color,
    pub(crate) table_album_fg: Color,
    pub(crate) table_time_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl Theme {
    pub(crate) const fn default_theme() -> Self {
        Self {
            background_colour: Color::Rgb(40, 20, 50),
            accent_colour: Color::Rgb(171, 40, 252),
            border_colour: Color::Rgb(102, 102, 102),
            muted_colour: Color::Rgb(130, 130, 130),
            now_playing_colour: Color::Rgb(171, 40, 252),
            placeholder_colour: Color::Rgb(164, 163, 163),
            hover_bg: Color::Rgb(60, 40, 75),

            table_header_fg: Color::Rgb(162, 161, 166),
            table_number_fg: Color::Rgb(162, 161, 166),
            table_title_fg: Color::Rgb(255, 255, 255),
            table_artist_fg: Color::Rgb(255, 215, 0),
            table_album_fg: Color::Rgb(179, 157, 219),
            table_time_fg: Color::Rgb(162, 161, 166),
        }
    }

    /// Converts a [`Color`] into a CSS-style hexadecimal string.
    ///
    /// Non-RGB colours have no fixed value and map to `None`.
    pub(crate) fn to_hex(colour: Color) -> Option<String> {
        match colour {
            Color::Rgb(r, g, b) => Some(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            _ => None,
        }
    }
}
