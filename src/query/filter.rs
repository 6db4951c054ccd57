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

//! Filter and pagination state.
//!
//! These are the values that fully determine which slice of the catalogue is
//! requested and displayed, along with the patch type used to change them.

use std::{fmt, str::FromStr};

pub(crate) const FIRST_PAGE: u32 = 1;

/// The artist role filter, absent meaning "all".
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) enum ArtistType {
    Composer,
    Performer,
    Primary,
}

impl ArtistType {
    pub(crate) const ALL: [ArtistType; 3] =
        [ArtistType::Composer, ArtistType::Performer, ArtistType::Primary];

    /// The value used for the `type` key, both in the location and in the
    /// catalogue request.
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ArtistType::Composer => "is_composer",
            ArtistType::Performer => "is_performer",
            ArtistType::Primary => "is_primary",
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            ArtistType::Composer => "Composer",
            ArtistType::Performer => "Performer",
            ArtistType::Primary => "Primary",
        }
    }

    /// Steps through "all" and every type, in menu order.
    pub(crate) fn cycle(current: Option<ArtistType>) -> Option<ArtistType> {
        match current {
            None => Some(ArtistType::Composer),
            Some(ArtistType::Composer) => Some(ArtistType::Performer),
            Some(ArtistType::Performer) => Some(ArtistType::Primary),
            Some(ArtistType::Primary) => None,
        }
    }

    pub(crate) fn cycle_back(current: Option<ArtistType>) -> Option<ArtistType> {
        match current {
            None => Some(ArtistType::Primary),
            Some(ArtistType::Primary) => Some(ArtistType::Performer),
            Some(ArtistType::Performer) => Some(ArtistType::Composer),
            Some(ArtistType::Composer) => None,
        }
    }
}

impl FromStr for ArtistType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "is_composer" => Ok(ArtistType::Composer),
            "is_performer" => Ok(ArtistType::Performer),
            "is_primary" => Ok(ArtistType::Primary),
            _ => Err(()),
        }
    }
}

/// A single uppercase ASCII letter used as an initial filter.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub(crate) struct Letter(char);

impl Letter {
    /// Accepts `a`-`z` and `A`-`Z`, normalised to uppercase.
    pub(crate) fn new(c: char) -> Option<Self> {
        c.is_ascii_alphabetic().then(|| Self(c.to_ascii_uppercase()))
    }

    pub(crate) fn all() -> impl Iterator<Item = Letter> {
        ('A'..='Z').map(Letter)
    }

    pub(crate) fn as_char(&self) -> char {
        self.0
    }
}

impl FromStr for Letter {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Letter::new(c).ok_or(()),
            _ => Err(()),
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct FilterState {
    pub(crate) page: u32,
    pub(crate) search: Option<String>,
    pub(crate) letter: Option<Letter>,
    pub(crate) artist_type: Option<ArtistType>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            page: FIRST_PAGE,
            search: None,
            letter: None,
            artist_type: None,
        }
    }
}

/// A change to a single location key.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) enum Change<T> {
    #[default]
    Keep,
    Set(T),
    Clear,
}

impl<T> Change<T> {
    /// `Set` for a present value, `Clear` for an absent one.
    pub(crate) fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Change::Set(v),
            None => Change::Clear,
        }
    }
}

/// A patch applied to the location through the codec.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct FilterUpdate {
    pub(crate) page: Change<u32>,
    pub(crate) search: Change<String>,
    pub(crate) letter: Change<Letter>,
    pub(crate) artist_type: Change<ArtistType>,
}

impl FilterUpdate {
    /// The patch that writes every field of `state`.
    pub(crate) fn replace(state: &FilterState) -> Self {
        Self {
            page: Change::Set(state.page),
            search: Change::from_option(state.search.clone()),
            letter: Change::from_option(state.letter),
            artist_type: Change::from_option(state.artist_type),
        }
    }

    pub(crate) fn first_page() -> Self {
        Self {
            page: Change::Set(FIRST_PAGE),
            ..Self::default()
        }
    }

    pub(crate) fn with_search(mut self, search: Change<String>) -> Self {
        self.search = search;
        self
    }

    pub(crate) fn with_letter(mut self, letter: Change<Letter>) -> Self {
        self.letter = letter;
        self
    }

    pub(crate) fn with_artist_type(mut self, artist_type: Change<ArtistType>) -> Self {
        self.artist_type = artist_type;
        self
    }
}
