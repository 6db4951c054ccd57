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

//! Keyboard routing.
//!
//! A key press is offered to each consumer in turn and stops at the first one
//! that takes it:
//!
//! * the search input, while it is being edited;
//! * the command line, which opens on `:`;
//! * the filter bar (letters, type, starting a search);
//! * the artist table (cursor movement);
//! * the global bindings below.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent};

use crate::{
    App,
    components::{FilterBarEvent, pager},
    events::AppEvent,
    query::FilterState,
};

pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    let event = Event::Key(key);
    let filters = app.controller.filters();

    if !app.filter_bar.editing() && app.commander.handle_event(&event, &app.event_tx) {
        return Ok(());
    }

    match app.filter_bar.process_event(&event, &filters) {
        FilterBarEvent::Intent(intent) => {
            app.event_tx.send(AppEvent::Intent(intent))?;
            return Ok(());
        }
        FilterBarEvent::Consumed => return Ok(()),
        FilterBarEvent::Ignored => {}
    }

    let loading = app.controller.is_loading();
    if app
        .artist_table
        .as_widget(app.controller.records(), loading)
        .process_event(&event)
    {
        return Ok(());
    }

    process_global_key_event(app, key, &filters)
}

fn process_global_key_event(app: &mut App, key: KeyEvent, filters: &FilterState) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,

        KeyCode::Char(']') | KeyCode::Right => {
            if let Some(intent) = pager::next_page(filters, app.controller.page_count()) {
                app.event_tx.send(AppEvent::Intent(intent))?;
            }
        }
        KeyCode::Char('[') | KeyCode::Left => {
            if let Some(intent) = pager::previous_page(filters) {
                app.event_tx.send(AppEvent::Intent(intent))?;
            }
        }

        KeyCode::Char('<') => app.event_tx.send(AppEvent::HistoryBack)?,
        KeyCode::Char('>') => app.event_tx.send(AppEvent::HistoryForward)?,

        _ => {}
    }

    Ok(())
}
