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

//! Artist table widget and state management.
//!
//! This module provides the table that lists the current page of artists. It
//! separates persistent state (`ArtistTableState`) from the transient widget
//! view (`ArtistTable`), which borrows the records owned by the view
//! controller for the duration of a single draw or key press.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::catalogue::ArtistRecord;

#[derive(Default)]
pub(crate) struct ArtistTableState {
    pub(crate) table_state: TableState,
}

impl ArtistTableState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn as_widget<'a>(&'a mut self, records: &'a [ArtistRecord], loading: bool) -> ArtistTable<'a> {
        ArtistTable {
            records,
            loading,
            table_state: &mut self.table_state,
        }
    }

    /// Moves the cursor back to the first row, or clears it for an empty page.
    pub(crate) fn reset_selection(&mut self, len: usize) {
        self.table_state.select((len > 0).then_some(0));
        *self.table_state.offset_mut() = 0;
    }

    pub(crate) fn selected<'a>(&self, records: &'a [ArtistRecord]) -> Option<&'a ArtistRecord> {
        records.get(self.table_state.selected()?)
    }
}

pub(crate) struct ArtistTable<'a> {
    records: &'a [ArtistRecord],
    loading: bool,
    table_state: &'a mut TableState,
}

impl ArtistTable<'_> {
    fn goto_next(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.records.len();
        if len == 0 {
            return;
        }

        let i = match self.table_state.selected() {
            Some(0) | None => len - 1,
            Some(i) => i - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.records.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.records.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}
