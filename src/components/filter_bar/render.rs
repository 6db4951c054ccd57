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

//! UI rendering logic for the filter bar.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    components::FilterBar,
    query::{ArtistType, FilterState, Letter},
    theme::Theme,
};

const SEARCH_LABEL: &str = "Search: ";
const SEARCH_PLACEHOLDER: &str = "press / to search";

impl FilterBar {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, filters: &FilterState, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(" Filters ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let type_selector = type_selector(filters.artist_type, theme);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(SEARCH_LABEL.len() as u16 + 1),
                Constraint::Length(type_selector.width() as u16),
            ])
            .split(rows[0]);

        self.draw_search(f, columns[0], theme);
        f.render_widget(Paragraph::new(type_selector), columns[1]);
        f.render_widget(Paragraph::new(letter_bar(filters.letter, theme)), rows[1]);
    }

    fn draw_search(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let label = Span::styled(SEARCH_LABEL, Style::default().fg(theme.accent_colour));
        let value = if self.input.value().is_empty() && !self.editing {
            Span::styled(SEARCH_PLACEHOLDER, Style::default().fg(theme.muted_colour))
        } else {
            Span::styled(self.input.value(), Style::default().fg(theme.table_name_fg))
        };

        f.render_widget(Paragraph::new(Line::from(vec![label, value])), area);

        if self.editing {
            let max_x = area.right().saturating_sub(1);
            let cursor_x = area.x + SEARCH_LABEL.len() as u16 + self.input.visual_cursor() as u16;
            f.set_cursor_position((cursor_x.min(max_x), area.y));
        }
    }
}

fn type_selector(active: Option<ArtistType>, theme: &Theme) -> Line<'static> {
    let mut spans = vec![
        Span::styled("Type: ", Style::default().fg(theme.accent_colour)),
        Span::styled(" All ", theme.toggle(active.is_none())),
    ];
    for artist_type in ArtistType::ALL {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", artist_type.label()),
            theme.toggle(active == Some(artist_type)),
        ));
    }

    Line::from(spans)
}

/// One button per letter, plus a clear button once a letter is chosen.
fn letter_bar(active: Option<Letter>, theme: &Theme) -> Line<'static> {
    let mut spans: Vec<Span> = Letter::all()
        .map(|letter| Span::styled(format!(" {letter} "), theme.toggle(active == Some(letter))))
        .collect();

    if active.is_some() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            " Clear ",
            Style::default()
                .fg(theme.error_colour)
                .add_modifier(Modifier::BOLD),
        ));
    }

    Line::from(spans)
}
