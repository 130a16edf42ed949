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
//! every processed event. The visible song list is recomputed from the store
//! on each call rather than cached.

mod overlay;
pub(crate) mod status;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{
    App,
    components::Focus,
    render::{
        overlay::{draw_confirm_dialog, draw_player_overlay},
        status::draw_status,
    },
    theme::Theme,
    util::format::{format_plays, format_songs},
};

const EMPTY_LIST: &str = "The list is empty. Add a song to get started.";
const NO_MATCHES: &str = "No songs match the search.";

pub(crate) trait Render {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme);
}

/// Renders the user interface to the terminal frame.
///
/// It handles:
///
/// * **Layout**: Partitioning the screen into header, form, search box, song
///   list and status line.
/// * **State Mapping**: Projecting the playlist through the current search
///   and sort settings into the song table.
/// * **Dialogs**: Drawing the player overlay or the delete confirmation on
///   top of everything else.
pub(crate) fn draw(f: &mut Frame, app: &mut App) {
    let area = f.area();

    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.background_colour)),
        area,
    );

    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(5),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, outer[0], app);

    let modal = app.pending_delete.is_some() || app.controller.overlay_open();
    let focus = if modal { Focus::List } else { app.focus };

    app.song_form
        .draw(f, outer[1], focus, app.controller.feedback(), &app.theme);
    app.search_box
        .draw(f, outer[2], focus == Focus::Search, &app.theme);

    draw_songs(f, outer[3], app);

    draw_status(f, outer[4], app);

    if let Some(video_id) = &app.pending_delete {
        if let Some(song) = app.store.get(video_id.as_str()) {
            draw_confirm_dialog(f, area, song, &app.theme);
        }
    } else if let Some(song) = app.controller.overlay_song(&app.store) {
        draw_player_overlay(f, area, song, app.launcher.is_configured(), &app.theme);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &App) {
    let order = if app.controller.sort_by_plays() {
        "most played first"
    } else {
        "in order added"
    };

    let mut spans = vec![
        Span::styled(
            " Video Playlist ",
            Style::default()
                .fg(app.theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "| {} | {} | {}",
                format_songs(app.store.len()),
                format_plays(app.store.total_plays()),
                order
            ),
            Style::default().fg(app.theme.muted_fg),
        ),
    ];

    if app.store.degraded() {
        spans.push(Span::styled(
            " | not saved",
            Style::default().fg(app.theme.warning_fg),
        ));
    }

    let title = Line::from(spans);

    f.render_widget(Paragraph::new(title), area);
}

fn draw_songs(f: &mut Frame, area: Rect, app: &mut App) {
    let border_colour = if app.focus == Focus::List {
        app.theme.accent_colour
    } else {
        app.theme.border_colour
    };

    let block = Block::default()
        .title(" Songs ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_colour))
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let songs = app.controller.visible(&app.store);

    if songs.is_empty() {
        let hint = if app.store.is_empty() {
            EMPTY_LIST
        } else {
            NO_MATCHES
        };

        f.render_widget(
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.muted_fg)),
            inner,
        );
        return;
    }

    app.song_table
        .as_widget(&songs, app.controller.selected())
        .draw(f, inner, &app.theme);
}
