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

//! UI rendering logic for the song form.
//!
//! Draws the name and link inputs with their labels, the validation line
//! underneath, and places the terminal cursor in the focused field.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};
use tui_input::Input;

use crate::{
    components::{Focus, SongForm},
    controller::Feedback,
    model::link,
    theme::Theme,
};

const LABEL_WIDTH: u16 = 7;

impl SongForm {
    pub(crate) fn draw(
        &self,
        f: &mut Frame,
        area: Rect,
        focus: Focus,
        feedback: Feedback<'_>,
        theme: &Theme,
    ) {
        let block = Block::default()
            .title(" Add a song ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        draw_field(f, rows[0], "Name", &self.name, focus == Focus::Name, theme);
        draw_field(f, rows[1], "Link", &self.url, focus == Focus::Url, theme);

        let feedback_line = match feedback {
            Feedback::None => Line::from(""),
            Feedback::Valid => Line::from(Span::styled(
                link::VALID_MESSAGE,
                Style::default().fg(theme.success_fg),
            )),
            Feedback::Error(message) => {
                Line::from(Span::styled(message, Style::default().fg(theme.error_fg)))
            }
        };
        f.render_widget(Paragraph::new(feedback_line), rows[2]);
    }
}

fn draw_field(f: &mut Frame, area: Rect, label: &str, input: &Input, focused: bool, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
        .split(area);

    let label_style = if focused {
        Style::default()
            .fg(theme.accent_colour)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted_fg)
    };
    f.render_widget(Paragraph::new(format!("{label}:")).style(label_style), columns[0]);

    let width = columns[1].width.max(1) as usize;
    let scroll = input.visual_scroll(width);
    f.render_widget(
        Paragraph::new(input.value())
            .style(Style::default().fg(theme.input_fg).bg(theme.input_bg))
            .scroll((0, scroll as u16)),
        columns[1],
    );

    if focused {
        let cursor_x = columns[1].x + (input.visual_cursor().max(scroll) - scroll) as u16;
        f.set_cursor_position((cursor_x, columns[1].y));
    }
}
