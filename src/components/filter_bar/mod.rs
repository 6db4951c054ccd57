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

//! Filter bar: search input, type selector and letter buttons.
//!
//! The bar never changes filter state itself. Key presses are turned into
//! [`Intent`]s for the view controller, and the displayed values are read
//! back from the active [`FilterState`] on every draw.

mod event;
mod render;

use tui_input::Input;

use crate::controller::Intent;

/// What the filter bar made of a key press.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum FilterBarEvent {
    Ignored,
    Consumed,
    Intent(Intent),
}

#[derive(Default)]
pub(crate) struct FilterBar {
    pub(crate) input: Input,
    editing: bool,
}

impl FilterBar {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn editing(&self) -> bool {
        self.editing
    }

    /// Shows the active search text, unless the user is typing.
    pub(crate) fn sync_search(&mut self, search: Option<&str>) {
        if !self.editing {
            self.input = Input::new(search.unwrap_or_default().to_owned());
        }
    }
}
