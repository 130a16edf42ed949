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

//! Event routing for the search box.
//!
//! Text edits are reported as the new filter; Esc clears the filter and Enter
//! hands focus back to the list.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{SearchAction, SearchBox};

impl SearchBox {
    pub(crate) fn process_event(&mut self, event: &Event) -> Option<SearchAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        match key_event.code {
            KeyCode::Enter => Some(SearchAction::Done),
            KeyCode::Esc => {
                self.input.reset();
                Some(SearchAction::Changed(String::new()))
            }
            _ => {
                let changed = self.input.handle_event(event)?;
                changed
                    .value
                    .then(|| SearchAction::Changed(self.input.value().to_string()))
            }
        }
    }
}
