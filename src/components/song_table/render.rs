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

//! UI rendering logic for the song table.
//!
//! This module handles the visual representation of the songs, including
//! column layout, selection highlighting, and theme application using the
//! Ratatui widget system.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Cell, Row, Table},
};

use crate::{components::song_table::SongTable, render::Render, theme::Theme};

impl Render for SongTable<'_> {
    fn draw(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        self.draw_table(f, area, theme);
    }
}

impl SongTable<'_> {
    fn draw_table(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let rows = self.songs.iter().map(|song| {
            Row::new(vec![
                Cell::from(
                    Line::from(song.play_count.to_string())
                        .style(Style::default().fg(theme.table_plays_fg))
                        .alignment(Alignment::Right),
                ),
                Cell::from(""),
                Cell::from(
                    Line::from(song.name.as_str()).style(Style::default().fg(theme.table_name_fg)),
                ),
                Cell::from(
                    Line::from(song.video_id.as_str()).style(Style::default().fg(theme.table_id_fg)),
                ),
            ])
        });

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(1),
                Constraint::Min(10),
                Constraint::Length(11),
            ],
        )
        .header(
            Row::new(vec![
                Cell::from(Line::from("Plays").alignment(Alignment::Right)),
                Cell::from(""),
                Cell::from("Name"),
                Cell::from("Video"),
            ])
            .style(
                Style::default()
                    .fg(theme.accent_colour)
                    .add_modifier(Modifier::BOLD),
            )
            .bottom_margin(1),
        )
        .row_highlight_style(
            Style::default()
                .bg(theme.highlight_bg)
                .fg(theme.highlight_fg),
        )
        .block(Block::default());

        f.render_stateful_widget(table, area, self.table_state);
    }
}
