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

//! Artist view state machine.
//!
//! The controller reads filter state from the location, decides when a new
//! catalogue fetch is needed and keeps the latest result for rendering.
//!
//! # States
//!
//! ```text
//!  Idle ──sync──▶ Loading ──complete(ok)──▶ Loaded
//!                    ▲    ──complete(err)─▶ Errored
//!                    └──────sync (any state, filters changed)
//! ```
//!
//! Every fetch is tagged with a monotonically increasing sequence number.
//! A completion is applied only when it carries the most recently issued
//! number; anything older belongs to filters that are no longer active and is
//! dropped without touching state.

mod intent;

pub(crate) use intent::Intent;

use tracing::{debug, error};

use crate::{
    catalogue::{ArtistQuery, ArtistRecord, CatalogueError, FetchResult, PER_PAGE},
    location::Location,
    query::{self, FilterState},
};

#[derive(Debug, Default)]
pub(crate) enum ViewState {
    #[default]
    Idle,
    /// A fetch is in flight; carries whatever was on screen before it.
    Loading(Option<FetchResult>),
    Loaded(FetchResult),
    Errored,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct FetchRequest {
    pub(crate) seq: u64,
    pub(crate) query: ArtistQuery,
}

#[derive(Debug)]
pub(crate) struct FetchCompletion {
    pub(crate) seq: u64,
    pub(crate) outcome: Result<FetchResult, CatalogueError>,
}

#[derive(Debug, Default)]
pub(crate) struct ViewController {
    state: ViewState,
    active: Option<FilterState>,
    latest_seq: u64,
}

impl ViewController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Re-reads the filters from a raw location query.
    ///
    /// Returns the request to issue when the decoded filters differ from the
    /// active ones, or on the first call.
    pub(crate) fn sync(&mut self, raw: &str) -> Option<FetchRequest> {
        let filters = query::decode(raw);
        if self.active.as_ref() == Some(&filters) {
            return None;
        }

        self.latest_seq += 1;

        let displayed = match std::mem::take(&mut self.state) {
            ViewState::Loaded(result) => Some(result),
            ViewState::Loading(previous) => previous,
            ViewState::Idle | ViewState::Errored => None,
        };
        self.state = ViewState::Loading(displayed);

        let request = FetchRequest {
            seq: self.latest_seq,
            query: ArtistQuery::from(&filters),
        };
        debug!("Issuing fetch #{} for {:?}", request.seq, filters);

        self.active = Some(filters);
        Some(request)
    }

    /// Applies a finished fetch, returning whether it was current.
    pub(crate) fn complete(&mut self, completion: FetchCompletion) -> bool {
        if completion.seq != self.latest_seq {
            debug!(
                "Discarding stale fetch #{} (latest #{})",
                completion.seq, self.latest_seq
            );
            return false;
        }

        self.state = match completion.outcome {
            Ok(result) => ViewState::Loaded(result),
            Err(e) => {
                error!("Failed to load artists: {:#}", anyhow::Error::from(e));
                ViewState::Errored
            }
        };

        true
    }

    /// Applies a user intent to the location, returning whether anything
    /// was pushed.
    pub(crate) fn dispatch(&self, intent: &Intent, location: &mut Location) -> bool {
        let Some(update) = intent.update() else {
            debug!("Ignoring intent {:?}", intent);
            return false;
        };

        location.push(&update);
        true
    }

    pub(crate) fn state(&self) -> &ViewState {
        &self.state
    }

    pub(crate) fn filters(&self) -> FilterState {
        self.active.clone().unwrap_or_default()
    }

    pub(crate) fn displayed(&self) -> Option<&FetchResult> {
        match &self.state {
            ViewState::Loaded(result) => Some(result),
            ViewState::Loading(previous) => previous.as_ref(),
            ViewState::Idle | ViewState::Errored => None,
        }
    }

    pub(crate) fn records(&self) -> &[ArtistRecord] {
        self.displayed().map_or(&[], |r| r.records.as_slice())
    }

    pub(crate) fn total_items(&self) -> u64 {
        self.displayed().map_or(0, |r| r.total_items)
    }

    pub(crate) fn page_count(&self) -> u32 {
        self.displayed().map_or(0, |r| r.page_count(PER_PAGE))
    }

    pub(crate) fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading(_))
    }

    pub(crate) fn is_errored(&self) -> bool {
        matches!(self.state, ViewState::Errored)
    }
}
