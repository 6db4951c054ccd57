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

//! Interactive view components.
//!
//! Each component owns its widget state and turns raw key events into
//! intents or cursor movement. Data is borrowed from the view controller at
//! draw time.

mod artist_table;
mod filter_bar;
pub(crate) mod pager;

pub(crate) use artist_table::{ArtistTable, ArtistTableState};
pub(crate) use filter_bar::{FilterBar, FilterBarEvent};
