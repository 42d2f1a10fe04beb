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

//! Unicode symbols for the TUI.
//!
//! All glyphs here occupy a single terminal column so that table cells line
//! up regardless of font.

// Media controls
pub(crate) const ICON_PLAY: &str = "\u{25B6}";
pub(crate) const ICON_PAUSE: &str = "\u{2016}";
pub(crate) const ICON_STOP: &str = "\u{25A0}";
pub(crate) const ICON_SHUFFLE: &str = "\u{21C4}";

// Track table
pub(crate) const ICON_NOW_PLAYING: &str = "\u{266A}";
pub(crate) const ICON_TRACK: &str = "\u{266B}";
pub(crate) const ICON_MENU: &str = "\u{22EF}";

// Navigation
pub(crate) const ICON_BACK: &str = "\u{2190}";
pub(crate) const ICON_COVER: &str = "\u{25A3}";
