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

//! UI rendering logic for the search box.

use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::{components::SearchBox, theme::Theme};

const PLACEHOLDER: &str = "Type part of a song name...";

impl SearchBox {
    pub(crate) fn draw(&self, f: &mut Frame, area: Rect, focused: bool, theme: &Theme) {
        let border_colour = if focused {
            theme.accent_colour
        } else {
            theme.border_colour
        };

        let block = Block::default()
            .title(" Search ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_colour))
            .padding(Padding::horizontal(1));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let width = inner.width.max(1) as usize;
        let scroll = self.input.visual_scroll(width);

        let paragraph = if self.value().is_empty() && !focused {
            Paragraph::new(PLACEHOLDER).style(Style::default().fg(theme.muted_fg))
        } else {
            Paragraph::new(self.value())
                .style(Style::default().fg(theme.input_fg))
                .scroll((0, scroll as u16))
        };
        f.render_widget(paragraph, inner);

        if focused {
            let cursor_x = inner.x + (self.input.visual_cursor().max(scroll) - scroll) as u16;
            f.set_cursor_position((cursor_x, inner.y));
        }
    }
}
