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

//! Asynchronous application task processing.
//!
//! This module implements the command pattern used to offload blocking
//! catalogue requests from the main UI thread. It provides a dedicated worker
//! loop that translates [`AppTask`] requests into catalogue calls and
//! broadcasts the results back to the application via [`AppEvent`]s.
//!
//! Only actions that may block, or may take more than a trivial amount of time
//! to process, should be implemented as tasks. Other actions are likely more
//! suited to by events.

mod handlers;

use anyhow::Result;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
};
use tracing::warn;

use crate::{catalogue::ArtistCatalogue, controller::FetchRequest, events::AppEvent};

#[derive(Debug)]
pub(crate) enum AppTask {
    FetchArtists(FetchRequest),
}

/// Spawns a background thread to process application tasks.
///
/// The worker takes ownership of the catalogue and enters a blocking loop,
/// listening for incoming [`AppTask`]s until the sending side is dropped.
///
/// # Arguments
///
/// * `catalogue` - The artist catalogue to query.
/// * `task_rx` - The receiving end of the task channel.
/// * `event_tx` - The sending end of the channel for broadcasting results.
pub(crate) fn spawn_task_worker<C>(
    catalogue: C,
    task_rx: Receiver<AppTask>,
    event_tx: Sender<AppEvent>,
) -> thread::JoinHandle<()>
where
    C: ArtistCatalogue + Send + 'static,
{
    thread::spawn(move || {
        while let Ok(task) = task_rx.recv() {
            let ctx = TaskContext {
                catalogue: &catalogue,
                event_tx: &event_tx,
            };

            if let Err(e) = handle_task(task, &ctx) {
                warn!("Task failed: {:#}", e);
                let _ = event_tx.send(AppEvent::Error(e.to_string()));
            }
        }
    })
}

/// Bundles shared resources required by task handlers to simplify resource
/// passing when invoking those handler functions.
struct TaskContext<'a> {
    catalogue: &'a dyn ArtistCatalogue,
    event_tx: &'a Sender<AppEvent>,
}

fn handle_task(task: AppTask, ctx: &TaskContext) -> Result<()> {
    match task {
        AppTask::FetchArtists(request) => handlers::fetch_artists(ctx, request),
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::mpsc, time::Duration};

    use reqwest::StatusCode;

    use super::*;
    use crate::{
        catalogue::{ArtistQuery, CatalogueError, FetchResult},
        controller::{FetchCompletion, ViewController},
    };

    /// Answers with a total derived from the page number, failing for page 13.
    struct PagedCatalogue;

    impl ArtistCatalogue for PagedCatalogue {
        fn fetch_artists(&self, query: &ArtistQuery) -> Result<FetchResult, CatalogueError> {
            if query.page == 13 {
                return Err(CatalogueError::Api {
                    status: StatusCode::BAD_GATEWAY,
                });
            }
            Ok(FetchResult {
                records: vec![],
                total_items: u64::from(query.page) * 100,
            })
        }
    }

    fn recv_completion(event_rx: &mpsc::Receiver<AppEvent>) -> FetchCompletion {
        match event_rx.recv_timeout(Duration::from_secs(5)).unwrap() {
            AppEvent::ArtistsFetched(completion) => completion,
            other => panic!("unexpected event {other:?}"),
        }
    }

    #[test]
    fn worker_posts_tagged_completions() {
        let (task_tx, task_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        spawn_task_worker(PagedCatalogue, task_rx, event_tx);

        let mut controller = ViewController::new();
        let first = controller.sync("page=2").unwrap();
        let second = controller.sync("page=13").unwrap();
        task_tx.send(AppTask::FetchArtists(first)).unwrap();
        task_tx.send(AppTask::FetchArtists(second)).unwrap();

        let completion = recv_completion(&event_rx);
        assert_eq!(completion.seq, 1);
        assert!(!controller.complete(completion));

        let completion = recv_completion(&event_rx);
        assert_eq!(completion.seq, 2);
        assert!(completion.outcome.is_err());
        assert!(controller.complete(completion));
        assert!(controller.is_errored());
    }

    #[test]
    fn worker_stops_when_tasks_close() {
        let (task_tx, task_rx) = mpsc::channel::<AppTask>();
        let (event_tx, _event_rx) = mpsc::channel();
        let handle = spawn_task_worker(PagedCatalogue, task_rx, event_tx);

        drop(task_tx);
        handle.join().unwrap();
    }
}
