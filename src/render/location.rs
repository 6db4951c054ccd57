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

//! Render the location bar.
//!
//! Shows the raw query string the view is built from, together with whether
//! history navigation is possible in either direction.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::App;

pub(crate) fn draw_location(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let history = |enabled: bool| {
        if enabled {
            Style::default().fg(theme.accent_colour)
        } else {
            Style::default().fg(theme.border_colour)
        }
    };

    let query = app.location.read();
    let line = Line::from(vec![
        Span::styled(" < ", history(app.location.can_go_back())),
        Span::styled("> ", history(app.location.can_go_forward())),
        Span::styled("/artists?", Style::default().fg(theme.muted_colour)),
        Span::styled(query, Style::default().fg(theme.table_name_fg)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
