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

//! Input handling and event processing for the song table.
//!
//! This module maps raw terminal keyboard events to table navigation and the
//! play, delete and sort actions.

use crossterm::event::{Event, KeyCode};

use crate::components::song_table::{SongTable, SongTableAction};

impl SongTable<'_> {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SongTableAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Char('j') | KeyCode::Down => {
                self.goto_next();
                self.current_id().map(SongTableAction::Select)
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.goto_previous();
                self.current_id().map(SongTableAction::Select)
            }
            KeyCode::Char('g') | KeyCode::Home => {
                self.goto_first();
                self.current_id().map(SongTableAction::Select)
            }
            KeyCode::Char('G') | KeyCode::End => {
                self.goto_last();
                self.current_id().map(SongTableAction::Select)
            }

            KeyCode::Enter | KeyCode::Char('p') => self.current_id().map(SongTableAction::Play),
            KeyCode::Char('d') | KeyCode::Delete => self.current_id().map(SongTableAction::Delete),

            KeyCode::Char('s') => Some(SongTableAction::ToggleSort),

            _ => None,
        }
    }
}
