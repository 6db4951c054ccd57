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

//! User interface rendering logic.
//!
//! This module handles the translation of the [`App`] state into visual
//! widgets using the `ratatui` framework. It is responsible for layout
//! management, widget styling, and terminal frame composition.
//!
//! # Rendering Pipeline
//!
//! The primary entry point is the [`draw`] function, which is called after
//! every application event to provide a reactive user interface.

mod commander;
mod location;
mod pager;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    App,
    render::{commander::draw_commander, location::draw_location, pager::draw_pager},
    theme::Theme,
};

const TITLE: &str = "Hungaroton Artists";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// The screen is split, top to bottom, into the title, the location bar, the
/// filter bar, the artist table, the pager and the command line.
///
/// # Arguments
///
/// * `f` - The current terminal frame used for drawing.
/// * `app` - A mutable reference to the application state, allowing the UI
///   to update internal view state (like the table scroll position).
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    draw_title(f, outer[0], &app.theme);
    draw_location(f, outer[1], app);

    let filters = app.controller.filters();
    app.filter_bar.draw(f, outer[2], &filters, &app.theme);

    let theme = app.theme;
    app.artist_table
        .as_widget(app.controller.records(), app.controller.is_loading())
        .draw(f, outer[3], &theme);

    draw_pager(f, outer[4], app);
    draw_commander(f, outer[5], app);
}

fn draw_title(f: &mut Frame, area: Rect, theme: &Theme) {
    let title = Line::from(vec![Span::styled(
        format!(" {TITLE} "),
        Style::default()
            .fg(theme.accent_colour)
            .bg(theme.bar_bg)
            .add_modifier(Modifier::BOLD),
    )]);

    f.render_widget(Paragraph::new(title).style(Style::default().bg(theme.bar_bg)), area);
}
