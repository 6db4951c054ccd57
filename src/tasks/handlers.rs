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

use crate::{
    controller::{FetchCompletion, FetchRequest},
    events::AppEvent,
    tasks::TaskContext,
};

/// Runs one catalogue fetch and posts the outcome, successful or not, tagged
/// with the request's sequence number.
pub(super) fn fetch_artists(ctx: &TaskContext, request: FetchRequest) -> Result<()> {
    let outcome = ctx.catalogue.fetch_artists(&request.query);

    ctx.event_tx.send(AppEvent::ArtistsFetched(FetchCompletion {
        seq: request.seq,
        outcome,
    }))?;

    Ok(())
}
