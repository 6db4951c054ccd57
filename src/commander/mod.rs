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

//! Command-line input logic and state management.
//!
//! This module implements the logic for a command-line processing component,
//! handling a text input component, and posting the corresponding application
//! event when a command is submitted.

use std::sync::mpsc::Sender;

use crossterm::event::{Event, KeyCode};
use tracing::debug;
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    components::pager,
    controller::Intent,
    events::AppEvent,
    query::{ArtistType, Letter},
};

pub(crate) struct Commander {
    active: bool,
    pub(crate) input: Input,
}

impl Commander {
    pub(crate) fn new() -> Self {
        Self {
            active: false,
            input: Input::default(),
        }
    }

    pub(crate) fn active(&self) -> bool {
        self.active
    }

    /// Returns whether the event was taken by the command line.
    pub(crate) fn handle_event(&mut self, event: &Event, event_tx: &Sender<AppEvent>) -> bool {
        let Event::Key(key_event) = event else {
            return false;
        };

        if !self.active {
            if key_event.code == KeyCode::Char(':') {
                self.active = true;
                return true;
            }
            return false;
        }

        match key_event.code {
            KeyCode::Esc => {
                self.active = false;
                self.input.reset();
            }

            KeyCode::Enter => {
                if let Some(app_event) = parse_command(self.input.value()) {
                    debug!("Command '{}' -> {:?}", self.input.value(), app_event);
                    let _ = event_tx.send(app_event);
                }
                self.active = false;
                self.input.reset();
            }

            _ => {
                // Delegate all other key events to the managed input component.
                self.input.handle_event(event);
            }
        }

        true
    }
}

/// Maps a submitted command line to the event it stands for.
///
/// Returns `None` for a blank line, and an [`AppEvent::Error`] describing the
/// problem for anything that is not understood.
pub(crate) fn parse_command(buffer: &str) -> Option<AppEvent> {
    let parts: Vec<&str> = buffer.split_whitespace().collect();

    let event = match parts.as_slice() {
        [] => return None,

        ["q"] => AppEvent::ExitApplication,

        ["search", text @ ..] => AppEvent::Intent(Intent::SearchSubmitted(text.join(" "))),

        ["letter", letter] => match letter.parse::<Letter>() {
            Ok(letter) => AppEvent::Intent(Intent::LetterClicked(letter.as_char())),
            Err(()) => AppEvent::Error(format!("Not a letter: {letter}")),
        },

        ["clear"] | ["lc"] => AppEvent::Intent(Intent::LetterCleared),
        ["reset"] => AppEvent::ResetFilters,

        ["type", name] => match parse_type(name) {
            Some(artist_type) => AppEvent::Intent(Intent::TypeChanged(artist_type)),
            None => AppEvent::Error(format!("Unknown artist type: {name}")),
        },

        ["page", number] => match number.parse().ok().and_then(pager::goto_page) {
            Some(intent) => AppEvent::Intent(intent),
            None => AppEvent::Error(format!("Not a page number: {number}")),
        },

        ["go"] => AppEvent::Navigate(String::new()),
        ["go", query] => AppEvent::Navigate((*query).to_owned()),

        ["back"] => AppEvent::HistoryBack,
        ["forward"] => AppEvent::HistoryForward,

        [cmd, ..] => AppEvent::Error(format!("Unknown command: {cmd}")),
    };

    Some(event)
}

/// `all` selects every type; otherwise the label or the query value.
fn parse_type(name: &str) -> Option<Option<ArtistType>> {
    if name.eq_ignore_ascii_case("all") {
        return Some(None);
    }

    ArtistType::ALL
        .into_iter()
        .find(|t| name.eq_ignore_ascii_case(t.label()) || name == t.as_str())
        .map(Some)
}
