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

//! Render the pager and result summary.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{App, controller::ViewState};

pub(crate) fn draw_pager(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let controller = &app.controller;
    let page = controller.filters().page;
    let page_count = controller.page_count();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Min(0)])
        .horizontal_margin(1)
        .split(area);

    let arrow = |enabled: bool, symbol: &'static str| {
        let colour = if enabled { theme.accent_colour } else { theme.border_colour };
        Span::styled(symbol, Style::default().fg(colour))
    };

    let mut pages = vec![
        arrow(page > 1, "[ "),
        Span::raw(format!("Page {page} of {page_count}")),
        arrow(page < page_count, " ]"),
    ];
    if let Some(record) = app.artist_table.selected(controller.records()) {
        pages.push(Span::styled(
            format!("  {} #{}", record.name, record.id),
            Style::default().fg(theme.muted_colour),
        ));
    }
    f.render_widget(Paragraph::new(Line::from(pages)), columns[0]);

    let summary = match controller.state() {
        ViewState::Idle | ViewState::Loading(_) => {
            Span::styled("Loading\u{2026}", Style::default().fg(theme.accent_colour))
        }
        ViewState::Errored => Span::styled("0 artists", Style::default().fg(theme.error_colour)),
        ViewState::Loaded(result) => Span::styled(
            format!("{} artists", result.total_items),
            Style::default().fg(theme.muted_colour),
        ),
    };
    f.render_widget(
        Paragraph::new(Line::from(summary)).alignment(Alignment::Right),
        columns[1],
    );
}
