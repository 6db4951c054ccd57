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

//! Query string codec.
//!
//! Maps a [`FilterState`] to and from the raw query string held by the
//! application location. Both directions are pure.
//!
//! Decoding never fails: a missing or malformed value falls back to its
//! default (page 1, every filter absent) and unknown keys are ignored.
//!
//! Encoding starts from the previous query string so that unrelated keys
//! survive, applies a [`FilterUpdate`] patch and emits a canonical string:
//! unrelated keys first in their original order, then `search`, `type`,
//! `letter` and `page`. Absent values are never written as empty strings.

mod filter;

pub(crate) use filter::{ArtistType, Change, FIRST_PAGE, FilterState, FilterUpdate, Letter};

use tracing::{debug, warn};

pub(crate) const PAGE_KEY: &str = "page";
pub(crate) const SEARCH_KEY: &str = "search";
pub(crate) const LETTER_KEY: &str = "letter";
pub(crate) const TYPE_KEY: &str = "type";

const KNOWN_KEYS: [&str; 4] = [SEARCH_KEY, TYPE_KEY, LETTER_KEY, PAGE_KEY];

type Pairs = Vec<(String, String)>;

/// Parses a raw query string, with or without a leading `?`.
pub(crate) fn decode(raw: &str) -> FilterState {
    let pairs = parse_pairs(raw);

    let page = first_value(&pairs, PAGE_KEY)
        .and_then(|v| v.parse::<u32>().ok())
        .filter(|p| *p >= FIRST_PAGE)
        .unwrap_or(FIRST_PAGE);

    let search = first_value(&pairs, SEARCH_KEY)
        .filter(|v| !v.is_empty())
        .map(str::to_owned);

    let letter = first_value(&pairs, LETTER_KEY).and_then(|v| v.parse::<Letter>().ok());

    let artist_type = first_value(&pairs, TYPE_KEY).and_then(|v| v.parse::<ArtistType>().ok());

    FilterState {
        page,
        search,
        letter,
        artist_type,
    }
}

/// Applies `update` on top of `previous` and returns the new query string.
pub(crate) fn encode(update: &FilterUpdate, previous: &str) -> String {
    let pairs = parse_pairs(previous);

    let page = update.page.as_ref().map(u32::to_string);
    let search = update.search.as_ref().map(String::clone);
    let letter = update.letter.as_ref().map(Letter::to_string);
    let artist_type = update.artist_type.as_ref().map(|t| t.as_str().to_owned());

    let mut out: Pairs = pairs
        .iter()
        .filter(|(key, _)| !KNOWN_KEYS.contains(&key.as_str()))
        .cloned()
        .collect();

    for (key, change) in [
        (SEARCH_KEY, search),
        (TYPE_KEY, artist_type),
        (LETTER_KEY, letter),
        (PAGE_KEY, page),
    ] {
        let value = match change {
            Change::Keep => first_value(&pairs, key).map(str::to_owned),
            Change::Set(v) => Some(v),
            Change::Clear => None,
        };

        if let Some(value) = value.filter(|v| !v.is_empty()) {
            out.push((key.to_owned(), value));
        }
    }

    serde_urlencoded::to_string(&out).unwrap_or_else(|e| {
        warn!("Failed to serialise query {:?}: {}", out, e);
        String::new()
    })
}

/// Encodes a complete state, replacing every known key in `previous`.
pub(crate) fn encode_state(state: &FilterState, previous: &str) -> String {
    encode(&FilterUpdate::replace(state), previous)
}

fn parse_pairs(raw: &str) -> Pairs {
    let raw = raw.trim().trim_start_matches('?');
    serde_urlencoded::from_str::<Pairs>(raw).unwrap_or_else(|e| {
        debug!("Ignoring malformed query {:?}: {}", raw, e);
        Pairs::new()
    })
}

fn first_value<'a>(pairs: &'a Pairs, key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

impl<T> Change<T> {
    fn as_ref(&self) -> Change<&T> {
        match self {
            Change::Keep => Change::Keep,
            Change::Set(v) => Change::Set(v),
            Change::Clear => Change::Clear,
        }
    }

    fn map<U>(self, f: impl FnOnce(T) -> U) -> Change<U> {
        match self {
            Change::Keep => Change::Keep,
            Change::Set(v) => Change::Set(f(v)),
            Change::Clear => Change::Clear,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(page: u32, search: Option<&str>, letter: Option<char>, t: Option<ArtistType>) -> FilterState {
        FilterState {
            page,
            search: search.map(str::to_owned),
            letter: letter.and_then(Letter::new),
            artist_type: t,
        }
    }

    #[test]
    fn decodes_every_known_key() {
        let decoded = decode("page=2&search=test&letter=K&type=is_performer");
        assert_eq!(
            decoded,
            state(2, Some("test"), Some('K'), Some(ArtistType::Performer))
        );
    }

    #[test]
    fn decodes_empty_query_to_defaults() {
        assert_eq!(decode(""), FilterState::default());
        assert_eq!(decode("?"), FilterState::default());
    }

    #[test]
    fn invalid_page_decodes_to_first_page() {
        for raw in ["page=0", "page=-3", "page=abc", "page=2.5", "page=", "foo=1"] {
            assert_eq!(decode(raw).page, 1, "{raw}");
        }
    }

    #[test]
    fn invalid_filters_decode_as_absent() {
        let decoded = decode("type=is_conductor&letter=KK&search=");
        assert_eq!(decoded, FilterState::default());

        assert_eq!(decode("letter=7").letter, None);
    }

    #[test]
    fn lowercase_letter_is_accepted() {
        assert_eq!(decode("letter=m").letter, Letter::new('M'));
    }

    #[test]
    fn leading_question_mark_and_unknown_keys_are_ignored() {
        let decoded = decode("?utm_source=x&page=4&sort=name");
        assert_eq!(decoded, state(4, None, None, None));
    }

    #[test]
    fn first_occurrence_of_a_repeated_key_wins() {
        assert_eq!(decode("page=3&page=9").page, 3);
    }

    #[test]
    fn search_is_percent_decoded() {
        assert_eq!(
            decode("search=Bart%C3%B3k+B%C3%A9la").search.as_deref(),
            Some("Bartók Béla")
        );
        assert_eq!(decode("search=a%26b").search.as_deref(), Some("a&b"));
    }

    #[test]
    fn encode_preserves_unrelated_keys_and_orders_known_keys() {
        let update = FilterUpdate::first_page()
            .with_search(Change::Set("Symphony".to_owned()))
            .with_artist_type(Change::Set(ArtistType::Composer))
            .with_letter(Change::Set(Letter::new('B').unwrap()));

        let encoded = encode(&update, "page=3&utm=abc");
        assert_eq!(
            encoded,
            "utm=abc&search=Symphony&type=is_composer&letter=B&page=1"
        );
    }

    #[test]
    fn encode_keeps_untouched_known_keys() {
        let update = FilterUpdate {
            page: Change::Set(2),
            ..FilterUpdate::default()
        };
        let encoded = encode(&update, "letter=M&search=test&type=is_composer&page=1");
        assert_eq!(encoded, "search=test&type=is_composer&letter=M&page=2");
    }

    #[test]
    fn clear_removes_every_occurrence_of_a_key() {
        let update = FilterUpdate::first_page().with_letter(Change::Clear);
        let encoded = encode(&update, "letter=C&letter=D&page=5");
        assert_eq!(encoded, "page=1");
        assert!(!encoded.contains("letter="));
    }

    #[test]
    fn empty_search_is_never_written() {
        let update = FilterUpdate::default().with_search(Change::Set(String::new()));
        assert_eq!(encode(&update, "search=old"), "");
    }

    #[test]
    fn encode_escapes_reserved_characters() {
        let update = FilterUpdate::default().with_search(Change::Set("rock & roll".to_owned()));
        let encoded = encode(&update, "");
        assert_eq!(encoded, "search=rock+%26+roll");
        assert_eq!(decode(&encoded).search.as_deref(), Some("rock & roll"));
    }

    #[test]
    fn decode_inverts_encode_state() {
        let states = [
            FilterState::default(),
            state(7, None, None, None),
            state(1, Some("Liszt"), None, None),
            state(2, Some("a=b&c"), Some('Z'), Some(ArtistType::Primary)),
            state(12, None, Some('A'), Some(ArtistType::Composer)),
            state(1, Some("  spaced  "), None, Some(ArtistType::Performer)),
        ];
        let bases = [
            "",
            "?page=9&letter=Q",
            "type=bogus&search=&x=1",
            "search=old&search=older&keep=me",
        ];

        for s in &states {
            for base in bases {
                assert_eq!(&decode(&encode_state(s, base)), s, "{base}");
            }
        }
    }

    #[test]
    fn encoding_the_same_update_twice_is_idempotent() {
        let update = FilterUpdate::first_page()
            .with_search(Change::Set("test".to_owned()))
            .with_letter(Change::Clear);

        for base in ["", "letter=C&page=4&foo=bar", "search=x&type=is_primary"] {
            let once = encode(&update, base);
            let twice = encode(&update, &once);
            assert_eq!(once, twice);
        }
    }
}
