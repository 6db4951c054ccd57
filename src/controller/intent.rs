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

//! User intents emitted by the presentation layer.

use crate::query::{ArtistType, Change, FilterUpdate, Letter};

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) enum Intent {
    SearchSubmitted(String),
    LetterClicked(char),
    LetterCleared,
    TypeChanged(Option<ArtistType>),
    /// Zero-based page index as reported by the pager.
    PageChanged(u32),
}

impl Intent {
    /// The location patch for this intent.
    ///
    /// Every intent except [`Intent::PageChanged`] also moves back to the first
    /// page. `None` means the intent carries nothing to apply.
    pub(crate) fn update(&self) -> Option<FilterUpdate> {
        let update = match self {
            Intent::SearchSubmitted(text) => {
                let text = text.trim();
                let search = if text.is_empty() {
                    Change::Clear
                } else {
                    Change::Set(text.to_owned())
                };
                FilterUpdate::first_page().with_search(search)
            }

            Intent::LetterClicked(c) => {
                let letter = Letter::new(*c)?;
                FilterUpdate::first_page().with_letter(Change::Set(letter))
            }

            Intent::LetterCleared => FilterUpdate::first_page().with_letter(Change::Clear),

            Intent::TypeChanged(artist_type) => {
                FilterUpdate::first_page().with_artist_type(Change::from_option(*artist_type))
            }

            Intent::PageChanged(index) => FilterUpdate {
                page: Change::Set(index.saturating_add(1)),
                ..FilterUpdate::default()
            },
        };

        Some(update)
    }
}
