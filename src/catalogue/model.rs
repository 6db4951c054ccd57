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

//! Catalogue records and response shapes.

use std::fmt;

use serde::Deserialize;

/// Artist identifier, opaque to the application.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deserialize)]
#[serde(untagged)]
pub(crate) enum ArtistId {
    Number(i64),
    Text(String),
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtistId::Number(n) => write!(f, "{}", n),
            ArtistId::Text(s) => write!(f, "{}", s),
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Deserialize)]
pub(crate) struct ArtistRecord {
    pub(crate) id: ArtistId,
    pub(crate) name: String,
    #[serde(rename = "albumCount", default)]
    pub(crate) album_count: u32,
    #[serde(default)]
    pub(crate) portrait: Option<String>,
}

/// One page of artists plus the total number of matches.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct FetchResult {
    pub(crate) records: Vec<ArtistRecord>,
    pub(crate) total_items: u64,
}

impl FetchResult {
    pub(crate) fn page_count(&self, per_page: u32) -> u32 {
        if per_page == 0 {
            return 0;
        }
        let pages = self.total_items.div_ceil(u64::from(per_page));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct Pagination {
    #[serde(default)]
    pub(super) total_items: Option<u64>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(super) current_page: Option<u32>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(super) per_page: Option<u32>,
    #[allow(dead_code)]
    #[serde(default)]
    pub(super) total_pages: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ArtistsResponse {
    #[serde(default)]
    pub(super) data: Option<Vec<ArtistRecord>>,
    #[serde(default)]
    pub(super) pagination: Option<Pagination>,
}

impl From<ArtistsResponse> for FetchResult {
    fn from(response: ArtistsResponse) -> Self {
        Self {
            records: response.data.unwrap_or_default(),
            total_items: response
                .pagination
                .and_then(|p| p.total_items)
                .unwrap_or(0),
        }
    }
}
