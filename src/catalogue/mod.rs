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

//! Remote artist catalogue client.
//!
//! Each call to [`ArtistCatalogue::fetch_artists`] issues exactly one HTTP
//! GET against `{base}/api/artists`. There is no retry and no caching; every
//! request asks intermediaries not to serve a stored copy.
//!
//! Optional filters are left out of the request entirely when absent, and
//! `include_image` and `per_page` are always sent.

mod model;

pub(crate) use model::{ArtistRecord, FetchResult};

use reqwest::{StatusCode, blocking::Client, header::CACHE_CONTROL};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::query::{ArtistType, FilterState, Letter};
use model::ArtistsResponse;

pub(crate) const PER_PAGE: u32 = 50;

const ARTISTS_PATH: &str = "/api/artists";

#[derive(Error, Debug)]
pub(crate) enum CatalogueError {
    #[error("API error")]
    Api { status: StatusCode },
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Malformed catalogue response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parameters for a single catalogue request.
#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct ArtistQuery {
    pub(crate) page: u32,
    pub(crate) per_page: u32,
    pub(crate) search: Option<String>,
    pub(crate) letter: Option<Letter>,
    pub(crate) artist_type: Option<ArtistType>,
}

impl ArtistQuery {
    /// The query pairs in the catalogue's parameter names.
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("include_image", "true".to_owned()),
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ];

        if let Some(search) = self.search.as_ref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search.clone()));
        }
        if let Some(letter) = self.letter {
            pairs.push(("letter", letter.to_string()));
        }
        if let Some(artist_type) = self.artist_type {
            pairs.push(("type", artist_type.as_str().to_owned()));
        }

        pairs
    }
}

impl From<&FilterState> for ArtistQuery {
    fn from(filters: &FilterState) -> Self {
        Self {
            page: filters.page,
            per_page: PER_PAGE,
            search: filters.search.clone(),
            letter: filters.letter,
            artist_type: filters.artist_type,
        }
    }
}

/// A source of artist pages.
pub(crate) trait ArtistCatalogue {
    fn fetch_artists(&self, query: &ArtistQuery) -> Result<FetchResult, CatalogueError>;
}

pub(crate) struct CatalogueClient {
    client: Client,
    base_url: String,
}

impl CatalogueClient {
    pub(crate) fn new(base_url: &str) -> Self {
        Self::with_client(base_url, Client::new())
    }

    pub(crate) fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }
}

impl ArtistCatalogue for CatalogueClient {
    fn fetch_artists(&self, query: &ArtistQuery) -> Result<FetchResult, CatalogueError> {
        let url = format!("{}{}", self.base_url, ARTISTS_PATH);
        let params = query.query_pairs();

        info!("Catalogue: GET {} with params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .header(CACHE_CONTROL, "no-store")
            .send()?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            warn!("Catalogue API error: {}", status);
            return Err(CatalogueError::Api { status });
        }

        let body = response.text()?;
        let result: FetchResult = serde_json::from_str::<ArtistsResponse>(&body)?.into();

        info!(
            "Catalogue returned {} artist(s) of {}",
            result.records.len(),
            result.total_items
        );

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    /// Serves a single canned response on a loopback port, returning the base
    /// URL and a handle yielding the raw request that was received.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut chunk = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut chunk).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&chunk[..n]);
            }
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&request).into_owned()
        });

        (format!("http://{addr}"), handle)
    }

    fn client(base_url: &str) -> CatalogueClient {
        let client = Client::builder().no_proxy().build().unwrap();
        CatalogueClient::with_client(base_url, client)
    }

    fn query(page: u32) -> ArtistQuery {
        ArtistQuery::from(&FilterState {
            page,
            ..FilterState::default()
        })
    }

    #[test]
    fn query_pairs_always_include_image_and_page_size() {
        let pairs = query(1).query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("include_image", "true".to_owned()),
                ("page", "1".to_owned()),
                ("per_page", "50".to_owned()),
            ]
        );
    }

    #[test]
    fn query_pairs_never_include_absent_or_empty_filters() {
        let mut q = query(2);
        q.search = Some(String::new());
        let keys: Vec<_> = q.query_pairs().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["include_image", "page", "per_page"]);

        q.search = Some("Liszt".to_owned());
        q.letter = Letter::new('L');
        q.artist_type = Some(ArtistType::Composer);
        let pairs = q.query_pairs();
        assert!(pairs.contains(&("search", "Liszt".to_owned())));
        assert!(pairs.contains(&("letter", "L".to_owned())));
        assert!(pairs.contains(&("type", "is_composer".to_owned())));
    }

    #[test]
    fn fetches_and_parses_a_page() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"data":[{"id":1,"name":"Artist One","albumCount":10,"portrait":"http://x/p1.jpg"}],"pagination":{"total_items":100}}"#,
        );

        let result = client(&base_url).fetch_artists(&query(1)).unwrap();

        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].name, "Artist One");
        assert_eq!(result.total_items, 100);

        let request = server.join().unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.starts_with("GET /api/artists?"), "{request_line}");
        assert!(request_line.contains("include_image=true"));
        assert!(request_line.contains("per_page=50"));
        assert!(request_line.contains("page=1"));
        assert!(!request_line.contains("search="));
        assert!(!request_line.contains("letter="));
        assert!(!request_line.contains("type="));
        assert!(request.to_ascii_lowercase().contains("cache-control: no-store"));
    }

    #[test]
    fn sends_present_filters() {
        let (base_url, server) = serve_once("200 OK", r#"{"data":[]}"#);

        let q = ArtistQuery::from(&FilterState {
            page: 3,
            search: Some("rock & roll".to_owned()),
            letter: Letter::new('K'),
            artist_type: Some(ArtistType::Performer),
        });
        let result = client(&format!("{base_url}/")).fetch_artists(&q).unwrap();
        assert_eq!(result.total_items, 0);

        let request = server.join().unwrap();
        let request_line = request.lines().next().unwrap();
        assert!(request_line.contains("page=3"));
        assert!(request_line.contains("search=rock+%26+roll"));
        assert!(request_line.contains("letter=K"));
        assert!(request_line.contains("type=is_performer"));
    }

    #[test]
    fn non_success_status_is_an_api_error() {
        let (base_url, server) = serve_once("500 Internal Server Error", r#"{"message":"boom"}"#);

        let err = client(&base_url).fetch_artists(&query(1)).unwrap_err();

        assert!(matches!(
            err,
            CatalogueError::Api { status } if status == StatusCode::INTERNAL_SERVER_ERROR
        ));
        assert_eq!(err.to_string(), "API error");
        server.join().unwrap();
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        let (base_url, server) = serve_once("200 OK", "<html>not json</html>");

        let err = client(&base_url).fetch_artists(&query(1)).unwrap_err();

        assert!(matches!(err, CatalogueError::Parse(_)));
        server.join().unwrap();
    }

    #[test]
    fn unreachable_host_is_a_transport_error() {
        let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();

        let err = client(&format!("http://{addr}")).fetch_artists(&query(1)).unwrap_err();

        assert!(matches!(err, CatalogueError::Transport(_)));
    }
}
