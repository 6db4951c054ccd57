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

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::{
    components::{FilterBar, FilterBarEvent},
    controller::Intent,
    query::{ArtistType, FilterState},
};

impl FilterBar {
    pub(crate) fn process_event(&mut self, event: &Event, filters: &FilterState) -> FilterBarEvent {
        let Event::Key(key_event) = event else {
            return FilterBarEvent::Ignored;
        };

        if self.editing {
            return match key_event.code {
                KeyCode::Esc => {
                    self.editing = false;
                    self.sync_search(filters.search.as_deref());
                    FilterBarEvent::Consumed
                }

                KeyCode::Enter => {
                    self.editing = false;
                    FilterBarEvent::Intent(Intent::SearchSubmitted(self.input.value().to_owned()))
                }

                _ => {
                    self.input.handle_event(event);
                    FilterBarEvent::Consumed
                }
            };
        }

        match key_event.code {
            KeyCode::Char('/') => {
                self.editing = true;
                FilterBarEvent::Consumed
            }

            KeyCode::Char(c) if c.is_ascii_uppercase() => FilterBarEvent::Intent(Intent::LetterClicked(c)),

            KeyCode::Backspace | KeyCode::Char('x') if filters.letter.is_some() => {
                FilterBarEvent::Intent(Intent::LetterCleared)
            }

            KeyCode::Char('t') => {
                FilterBarEvent::Intent(Intent::TypeChanged(ArtistType::cycle(filters.artist_type)))
            }

            KeyCode::BackTab => {
                FilterBarEvent::Intent(Intent::TypeChanged(ArtistType::cycle_back(filters.artist_type)))
            }

            _ => FilterBarEvent::Ignored,
        }
    }
}
