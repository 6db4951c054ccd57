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

//! Application location and navigation history.
//!
//! The location is the single source of truth for filter state. It holds the
//! current raw query string, a back/forward history, and a set of listeners
//! that are told about every change, whether it came from a user intent, a
//! typed address or history navigation.

use tracing::debug;

use crate::query::{self, FilterUpdate};

pub(crate) trait LocationListener {
    fn on_location_changed(&self, query: &str);
}

#[derive(Default)]
pub(crate) struct Location {
    current: String,
    back: Vec<String>,
    forward: Vec<String>,
    listeners: Vec<Box<dyn LocationListener>>,
}

impl Location {
    pub(crate) fn new(initial: &str) -> Self {
        Self {
            current: initial.trim().trim_start_matches('?').to_owned(),
            ..Self::default()
        }
    }

    pub(crate) fn subscribe(&mut self, listener: impl LocationListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub(crate) fn read(&self) -> &str {
        &self.current
    }

    /// Encodes `update` against the current query and navigates to the
    /// result.
    pub(crate) fn push(&mut self, update: &FilterUpdate) {
        let next = query::encode(update, &self.current);
        self.navigate(&next);
    }

    /// Navigates to a raw query string, recording the current one in the
    /// back history.
    ///
    /// Navigating to the current query is a no-op.
    pub(crate) fn navigate(&mut self, raw: &str) {
        let next = raw.trim().trim_start_matches('?');
        if next == self.current {
            return;
        }

        let previous = std::mem::replace(&mut self.current, next.to_owned());
        self.back.push(previous);
        self.forward.clear();

        debug!("Navigated to ?{}", self.current);
        self.notify();
    }

    pub(crate) fn back(&mut self) -> bool {
        let Some(previous) = self.back.pop() else {
            return false;
        };

        let current = std::mem::replace(&mut self.current, previous);
        self.forward.push(current);

        debug!("Back to ?{}", self.current);
        self.notify();
        true
    }

    pub(crate) fn forward(&mut self) -> bool {
        let Some(next) = self.forward.pop() else {
            return false;
        };

        let current = std::mem::replace(&mut self.current, next);
        self.back.push(current);

        debug!("Forward to ?{}", self.current);
        self.notify();
        true
    }

    pub(crate) fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub(crate) fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    /// Tells every listener about the current query, used once at start-up.
    pub(crate) fn announce(&self) {
        self.notify();
    }

    fn notify(&self) {
        for listener in &self.listeners {
            listener.on_location_changed(&self.current);
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::query::{Change, Letter};

    /// Records every query it is notified about.
    #[derive(Clone, Default)]
    pub(crate) struct Recorder(pub(crate) Rc<RefCell<Vec<String>>>);

    impl LocationListener for Recorder {
        fn on_location_changed(&self, query: &str) {
            self.0.borrow_mut().push(query.to_owned());
        }
    }

    fn location_with_recorder(initial: &str) -> (Location, Recorder) {
        let recorder = Recorder::default();
        let mut location = Location::new(initial);
        location.subscribe(recorder.clone());
        (location, recorder)
    }

    #[test]
    fn new_strips_leading_question_mark() {
        assert_eq!(Location::new("?page=2").read(), "page=2");
    }

    #[test]
    fn push_encodes_against_current_query_and_notifies() {
        let (mut location, recorder) = location_with_recorder("page=3&keep=1");

        let update = FilterUpdate::first_page().with_letter(Change::Set(Letter::new('C').unwrap()));
        location.push(&update);

        assert_eq!(location.read(), "keep=1&letter=C&page=1");
        assert_eq!(*recorder.0.borrow(), vec!["keep=1&letter=C&page=1"]);
    }

    #[test]
    fn navigating_to_the_current_query_does_nothing() {
        let (mut location, recorder) = location_with_recorder("page=2");

        location.navigate("?page=2");

        assert!(recorder.0.borrow().is_empty());
        assert!(!location.can_go_back());
    }

    #[test]
    fn back_and_forward_walk_the_history() {
        let (mut location, recorder) = location_with_recorder("");

        location.navigate("page=2");
        location.navigate("page=3");

        assert!(location.back());
        assert_eq!(location.read(), "page=2");
        assert!(location.back());
        assert_eq!(location.read(), "");
        assert!(!location.back());

        assert!(location.forward());
        assert_eq!(location.read(), "page=2");

        assert_eq!(
            *recorder.0.borrow(),
            vec!["page=2", "page=3", "page=2", "", "page=2"]
        );
    }

    #[test]
    fn navigating_after_back_drops_forward_history() {
        let mut location = Location::new("");
        location.navigate("page=2");
        location.back();
        assert!(location.can_go_forward());

        location.navigate("letter=A");

        assert!(!location.can_go_forward());
        assert!(!location.forward());
        assert_eq!(location.read(), "letter=A");
    }

    #[test]
    fn announce_reports_current_query() {
        let (location, recorder) = location_with_recorder("type=is_primary");
        location.announce();
        assert_eq!(*recorder.0.borrow(), vec!["type=is_primary"]);
    }
}
