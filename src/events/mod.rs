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

//! Application events and the main event loop.
//!
//! Every change to application state happens on the UI thread, in response to
//! an [`AppEvent`] received from one of:
//!
//! * the key-reader thread ([`AppEvent::Key`]);
//! * the location, through its listener ([`AppEvent::LocationChanged`]);
//! * the task worker ([`AppEvent::ArtistsFetched`]);
//! * the commander, which posts intents and navigation requests;
//! * the tick thread, which only forces a redraw.

mod handlers;
mod key_handlers;

use handlers::*;
use key_handlers::process_key_event;

use std::{io::Stdout, sync::mpsc::Sender};

use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{Terminal, prelude::CrosstermBackend};

use crate::{
    App,
    controller::{FetchCompletion, Intent},
    location::LocationListener,
    render::draw,
};

#[derive(Debug)]
pub(crate) enum AppEvent {
    Key(KeyEvent),

    LocationChanged(String),

    Intent(Intent),
    Navigate(String),
    ResetFilters,
    HistoryBack,
    HistoryForward,

    ArtistsFetched(FetchCompletion),

    Tick,

    ExitApplication,

    Error(String),
}

/// Forwards location changes into the event loop.
impl LocationListener for Sender<AppEvent> {
    fn on_location_changed(&self, query: &str) {
        let _ = self.send(AppEvent::LocationChanged(query.to_owned()));
    }
}

/// Runs the main application loop, handling events and rendering the UI in the
/// terminal.
///
/// This function loops until a 'quit' event is received or the event channel
/// is closed.
pub(crate) fn process_events(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
) -> Result<()> {
    terminal.draw(|f| draw(f, app))?;

    while let Ok(event) = app.event_rx.recv() {
        match event {
            AppEvent::ExitApplication => break,
            AppEvent::Key(key) => process_key_event(app, key)?,
            AppEvent::LocationChanged(query) => handle_location_changed(app, &query)?,
            AppEvent::Intent(intent) => handle_intent(app, &intent),
            AppEvent::Navigate(query) => handle_navigate(app, &query),
            AppEvent::ResetFilters => handle_reset_filters(app),
            AppEvent::HistoryBack => handle_history_back(app),
            AppEvent::HistoryForward => handle_history_forward(app),
            AppEvent::ArtistsFetched(completion) => handle_artists_fetched(app, completion),
            AppEvent::Error(message) => handle_error(app, message),
            AppEvent::Tick => handle_tick(app),
        }

        terminal.draw(|f| draw(f, app))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::location::Location;

    #[test]
    fn location_changes_arrive_as_events() {
        let (event_tx, event_rx) = mpsc::channel();
        let mut location = Location::new("");
        location.subscribe(event_tx);

        location.navigate("letter=B");

        match event_rx.try_recv().unwrap() {
            AppEvent::LocationChanged(query) => assert_eq!(query, "letter=B"),
            other => panic!("unexpected event {other:?}"),
        }
    }
}
