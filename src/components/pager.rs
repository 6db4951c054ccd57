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

//! Page stepping for the artist table.
//!
//! The pager reports zero-based page indexes, while the location and the
//! catalogue count pages from one.

use crate::{controller::Intent, query::FilterState};

pub(crate) fn next_page(filters: &FilterState, page_count: u32) -> Option<Intent> {
    (filters.page < page_count).then_some(Intent::PageChanged(filters.page))
}

pub(crate) fn previous_page(filters: &FilterState) -> Option<Intent> {
    (filters.page > 1).then(|| Intent::PageChanged(filters.page - 2))
}

/// Jumps to a one-based page number, as typed on the command line.
pub(crate) fn goto_page(page: u32) -> Option<Intent> {
    page.checked_sub(1).map(Intent::PageChanged)
}
