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

use anyhow::Result;
use tracing::warn;

use crate::{
    App,
    controller::{FetchCompletion, Intent},
    query::{self, FilterState},
    tasks::AppTask,
};

const FETCH_FAILED: &str = "Failed to load artists";

/// Re-reads the filters after any change of location and, when they differ,
/// hands the new request to the task worker.
pub(super) fn handle_location_changed(app: &mut App, query: &str) -> Result<()> {
    if let Some(request) = app.controller.sync(query) {
        app.task_tx.send(AppTask::FetchArtists(request))?;
        app.artist_table.reset_selection(app.controller.records().len());
    }

    let filters = app.controller.filters();
    app.filter_bar.sync_search(filters.search.as_deref());

    Ok(())
}

pub(super) fn handle_intent(app: &mut App, intent: &Intent) {
    app.controller.dispatch(intent, &mut app.location);
}

pub(super) fn handle_navigate(app: &mut App, query: &str) {
    app.location.navigate(query);
}

/// Drops every filter while keeping unrelated query keys.
pub(super) fn handle_reset_filters(app: &mut App) {
    let query = query::encode_state(&FilterState::default(), app.location.read());
    app.location.navigate(&query);
}

pub(super) fn handle_history_back(app: &mut App) {
    if !app.location.back() {
        app.status = Some("Already at the oldest location".to_owned());
    }
}

pub(super) fn handle_history_forward(app: &mut App) {
    if !app.location.forward() {
        app.status = Some("Already at the newest location".to_owned());
    }
}

pub(super) fn handle_artists_fetched(app: &mut App, completion: FetchCompletion) {
    if app.controller.complete(completion) {
        app.artist_table.reset_selection(app.controller.records().len());
        app.status = app.controller.is_errored().then(|| FETCH_FAILED.to_owned());
    }
}

pub(super) fn handle_error(app: &mut App, message: String) {
    warn!("{}", message);
    app.status = Some(message);
}

pub(super) fn handle_tick(_app: &mut App) {}

#[cfg(test)]
mod tests {
    use std::sync::mpsc::{self, Receiver};

    use reqwest::StatusCode;

    use super::*;
    use crate::{
        catalogue::{CatalogueError, FetchResult},
        config::AppConfig,
        controller::FetchRequest,
        events::AppEvent,
    };

    fn app(initial: &str) -> (App, Receiver<AppTask>) {
        let (task_tx, task_rx) = mpsc::channel();
        (App::new(AppConfig::default(), task_tx, initial), task_rx)
    }

    /// Drains pending location events the way the event loop would.
    fn pump(app: &mut App) {
        while let Ok(event) = app.event_rx.try_recv() {
            if let AppEvent::LocationChanged(query) = event {
                handle_location_changed(app, &query).unwrap();
            }
        }
    }

    fn next_request(task_rx: &Receiver<AppTask>) -> FetchRequest {
        match task_rx.try_recv().unwrap() {
            AppTask::FetchArtists(request) => request,
        }
    }

    fn result(total_items: u64) -> FetchResult {
        FetchResult {
            records: vec![],
            total_items,
        }
    }

    #[test]
    fn start_up_fetches_the_seeded_location() {
        let (mut app, task_rx) = app("?letter=b&page=2");
        app.location.announce();
        pump(&mut app);

        let request = next_request(&task_rx);
        assert_eq!(request.seq, 1);
        assert_eq!(request.query.page, 2);
        assert_eq!(request.query.letter.map(|l| l.as_char()), Some('B'));
        assert!(app.controller.is_loading());
    }

    #[test]
    fn search_intent_resets_page_and_refetches() {
        let (mut app, task_rx) = app("letter=B&page=3");
        app.location.announce();
        pump(&mut app);
        next_request(&task_rx);

        handle_intent(&mut app, &Intent::SearchSubmitted("Bart".to_owned()));
        pump(&mut app);

        assert_eq!(app.location.read(), "search=Bart&letter=B&page=1");
        let request = next_request(&task_rx);
        assert_eq!(request.seq, 2);
        assert_eq!(request.query.page, 1);
        assert_eq!(app.filter_bar.input.value(), "Bart");
    }

    #[test]
    fn unchanged_filters_issue_no_request() {
        let (mut app, task_rx) = app("page=1&utm=x");
        app.location.announce();
        pump(&mut app);
        next_request(&task_rx);

        handle_navigate(&mut app, "utm=y&page=1");
        pump(&mut app);

        assert!(task_rx.try_recv().is_err());
    }

    #[test]
    fn stale_completion_is_ignored() {
        let (mut app, task_rx) = app("");
        app.location.announce();
        pump(&mut app);
        handle_intent(&mut app, &Intent::LetterClicked('C'));
        pump(&mut app);
        let first = next_request(&task_rx);
        let second = next_request(&task_rx);

        handle_artists_fetched(&mut app, FetchCompletion { seq: first.seq, outcome: Ok(result(10)) });
        assert!(app.controller.is_loading());

        handle_artists_fetched(&mut app, FetchCompletion { seq: second.seq, outcome: Ok(result(120)) });
        assert_eq!(app.controller.total_items(), 120);
        assert_eq!(app.status, None);
    }

    #[test]
    fn failed_fetch_sets_status() {
        let (mut app, task_rx) = app("");
        app.location.announce();
        pump(&mut app);
        let request = next_request(&task_rx);

        handle_artists_fetched(
            &mut app,
            FetchCompletion {
                seq: request.seq,
                outcome: Err(CatalogueError::Api { status: StatusCode::INTERNAL_SERVER_ERROR }),
            },
        );

        assert!(app.controller.is_errored());
        assert!(app.controller.records().is_empty());
        assert_eq!(app.status.as_deref(), Some(FETCH_FAILED));
    }

    #[test]
    fn reset_keeps_unrelated_keys() {
        let (mut app, task_rx) = app("utm=news&search=Liszt&letter=L&page=4");
        app.location.announce();
        pump(&mut app);
        next_request(&task_rx);

        handle_reset_filters(&mut app);
        pump(&mut app);

        assert_eq!(app.location.read(), "utm=news&page=1");
        assert_eq!(app.filter_bar.input.value(), "");
        let request = next_request(&task_rx);
        assert_eq!(request.query.search, None);
        assert_eq!(request.query.page, 1);
    }

    #[test]
    fn history_navigation_refetches_previous_filters() {
        let (mut app, task_rx) = app("");
        app.location.announce();
        pump(&mut app);
        handle_intent(&mut app, &Intent::TypeChanged(Some(crate::query::ArtistType::Composer)));
        pump(&mut app);
        next_request(&task_rx);
        next_request(&task_rx);

        handle_history_back(&mut app);
        pump(&mut app);
        assert_eq!(app.location.read(), "");
        assert_eq!(next_request(&task_rx).query.artist_type, None);

        handle_history_back(&mut app);
        assert!(app.status.is_some());
    }
}
