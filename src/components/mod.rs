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

//! Reusable view components.
//!
//! Leaf first: [`TrackRow`] resolves cell content, [`TrackList`] iterates rows
//! and matches the current one, [`ArtistDetailView`] composes a track list
//! with the [`Sidebar`] and [`ControlBar`].

mod artist_detail;
mod control_bar;
mod sidebar;
mod track_list;
mod track_row;

pub(crate) use artist_detail::*;
pub(crate) use control_bar::*;
pub(crate) use sidebar::*;
pub(crate) use track_list::*;
pub(crate) use track_row::*;
