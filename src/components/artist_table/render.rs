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

//! UI rendering logic for the artist table.
//!
//! This module handles the visual representation of a page of artists,
//! including column layout, the loading indicator and theme application using
//! the Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use crate::{components::ArtistTable, render::Render, theme::Theme};

const PORTRAIT_ICON: &str = "\u{25C9}";
const NO_PORTRAIT_ICON: &str = "\u{00B7}";

impl Render for ArtistTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl ArtistTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let title = if self.loading { " Artists (loading\u{2026}) " } else { " Artists " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .title(title);

        if self.records.is_empty() {
            let message = if self.loading { "Loading\u{2026}" } else { "No artists found" };
            let placeholder = Paragraph::new(message)
                .style(Style::default().fg(theme.muted_colour))
                .alignment(Alignment::Center)
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let rows = self.records.iter().map(|item| {
            let portrait = if item.portrait.is_some() { PORTRAIT_ICON } else { NO_PORTRAIT_ICON };

            Row::new(vec![
                Cell::from(Line::from(portrait).style(Style::default().fg(theme.table_portrait_fg)).alignment(Alignment::Center)),
                Cell::from(Line::from(item.name.as_str()).style(Style::default().fg(theme.table_name_fg))),
                Cell::from(Line::from(item.album_count.to_string()).style(Style::default().fg(theme.table_album_count_fg)).alignment(Alignment::Right)),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(8),
                Constraint::Min(10),
                Constraint::Length(8),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Portrait").alignment(Alignment::Center)),
                Cell::from("Name"),
                Cell::from(Line::from("Albums").alignment(Alignment::Right)),
            ])
            .style(Style::default().bold().fg(theme.accent_colour))
            .bottom_margin(1),
        )
        .row_highlight_style(Style::default().bg(theme.table_highlight_bg).fg(theme.table_name_fg))
        .block(block);

        f.render_stateful_widget(table, area, self.table_state);
    }
}
