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

//! Render the player overlay and the delete confirmation dialog.
//!
//! Both are centered popups drawn over the rest of the screen after clearing
//! the area underneath them.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::{controller::DELETE_PROMPT, model::SongEntry, theme::Theme, util::format::format_plays};

/// Renders the "now playing" popup for `song`.
pub(crate) fn draw_player_overlay(
    f: &mut Frame,
    area: Rect,
    song: &SongEntry,
    has_player: bool,
    theme: &Theme,
) {
    let popup = centered(area, 70, 9);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Now playing ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent_colour))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let hint = if has_player {
        "p: play again   Esc: close"
    } else {
        "p: play again   Esc: close   (set player_command to open videos)"
    };

    let lines = vec![
        Line::from(Span::styled(
            song.name.as_str(),
            Style::default()
                .fg(theme.accent_colour)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format_plays(u64::from(song.play_count)),
            Style::default().fg(theme.muted_fg),
        )),
        Line::from(""),
        Line::from(Span::styled(
            song.embed_url(),
            Style::default().fg(theme.input_fg),
        )),
        Line::from(""),
        Line::from(Span::styled(hint, Style::default().fg(theme.muted_fg))),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

/// Renders the yes/no question shown before `song` is deleted.
pub(crate) fn draw_confirm_dialog(f: &mut Frame, area: Rect, song: &SongEntry, theme: &Theme) {
    let popup = centered(area, 50, 7);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .title(" Delete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.error_fg))
        .style(Style::default().bg(theme.background_colour))
        .padding(Padding::horizontal(1));

    let lines = vec![
        Line::from(DELETE_PROMPT),
        Line::from(Span::styled(
            song.name.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled("y: delete   n: keep", Style::default().fg(theme.muted_fg))),
    ];

    f.render_widget(
        Paragraph::new(lines)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        popup,
    );
}

/// A rectangle `percent_x` wide and `height` rows tall in the middle of
/// `area`.
fn centered(area: Rect, percent_x: u16, height: u16) -> Rect {
    let [row] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);

    let [popup] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(row);

    popup
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_popup_sits_inside_area() {
        let area = Rect::new(0, 0, 100, 40);

        let popup = centered(area, 50, 8);

        assert_eq!(popup.width, 50);
        assert_eq!(popup.height, 8);
        assert_eq!(popup.x, 25);
        assert_eq!(popup.y, 16);
    }

    #[test]
    fn centered_popup_is_clamped_to_small_areas() {
        let area = Rect::new(0, 0, 20, 4);

        let popup = centered(area, 70, 9);

        assert!(popup.height <= area.height);
        assert!(popup.width <= area.width);
    }
}
