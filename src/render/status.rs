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

//! Render the status line.
//!
//! The bottom line shows, in order of priority: an alert from outside the
//! form, the transient success notice, the degraded-storage warning, or key
//! hints for the focused component.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::{App, components::Focus};

const DEGRADED: &str = "Playlist storage unavailable: changes are kept only until you quit.";

/// What the status line is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StatusMessage<'a> {
    Alert(&'a str),
    Notice(&'a str),
    Degraded,
    Hints(&'static str),
}

/// Picks the status line content. A notice outranks the degraded-storage
/// warning, which stays up for the whole session once storage is lost.
pub(crate) fn status_message(app: &App) -> StatusMessage<'_> {
    if let Some(alert) = app.controller.alert() {
        StatusMessage::Alert(alert)
    } else if let Some(notice) = app.controller.notice() {
        StatusMessage::Notice(notice)
    } else if app.store.degraded() {
        StatusMessage::Degraded
    } else {
        StatusMessage::Hints(hints(app))
    }
}

pub(crate) fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let container = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1)])
        .horizontal_margin(1)
        .split(area);

    let (text, colour) = match status_message(app) {
        StatusMessage::Alert(text) => (text, app.theme.error_fg),
        StatusMessage::Notice(text) => (text, app.theme.success_fg),
        StatusMessage::Degraded => (DEGRADED, app.theme.warning_fg),
        StatusMessage::Hints(text) => (text, app.theme.muted_fg),
    };

    f.render_widget(
        Paragraph::new(text).style(Style::default().fg(colour).bg(app.theme.input_bg)),
        container[0],
    );
}

fn hints(app: &App) -> &'static str {
    match app.focus {
        Focus::Name | Focus::Url => "Enter: save   Tab: next field   Esc: list",
        Focus::Search => "Enter: done   Esc: clear search   Tab: next",
        Focus::List if app.controller.can_delete(&app.store) => {
            "Enter: play   d: delete   s: sort   /: search   a: add   q: quit"
        }
        Focus::List => "j/k: move   s: sort   /: search   a: add   q: quit",
    }
}
