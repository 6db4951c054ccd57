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

//! Command-line arguments.

use clap::Parser;

/// Browse the Hungaroton artist catalogue from the terminal.
#[derive(Parser, Debug)]
#[command(name = "artistui", version, about)]
pub(crate) struct Cli {
    /// Initial location query, e.g. "letter=B&type=is_composer".
    /// A leading '?' is accepted.
    pub(crate) query: Option<String>,

    /// Catalogue API base URL, overriding the configuration file.
    #[arg(long, value_name = "URL")]
    pub(crate) base_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_and_base_url() {
        let cli = Cli::try_parse_from(["artistui", "?letter=B", "--base-url", "http://localhost:8080"]).unwrap();
        assert_eq!(cli.query.as_deref(), Some("?letter=B"));
        assert_eq!(cli.base_url.as_deref(), Some("http://localhost:8080"));
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::try_parse_from(["artistui"]).unwrap();
        assert!(cli.query.is_none());
        assert!(cli.base_url.is_none());
    }
}
