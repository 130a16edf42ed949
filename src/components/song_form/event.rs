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

//! Input handling for the song form.
//!
//! Keys are delegated to whichever text input has focus. Enter submits the
//! form from either field.

use crossterm::event::{Event, KeyCode};
use tui_input::backend::crossterm::EventHandler;

use crate::components::{FormAction, Focus, SongForm};

impl SongForm {
    pub(crate) fn process_event(&mut self, event: &Event, focus: Focus) -> Option<FormAction> {
        let Event::Key(key_event) = event else {
            return None;
        };

        if key_event.code == KeyCode::Enter {
            return Some(FormAction::Submit);
        }

        match focus {
            Focus::Name => {
                let changed = self.name.handle_event(event)?;
                changed
                    .value
                    .then(|| FormAction::NameChanged(self.name.value().to_string()))
            }
            Focus::Url => {
                let changed = self.url.handle_event(event)?;
                changed
                    .value
                    .then(|| FormAction::UrlChanged(self.url.value().to_string()))
            }
            Focus::Search | Focus::List => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEvent, KeyModifiers};

    use super::*;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn typing_reports_the_focused_field() {
        let mut form = SongForm::new();

        assert_eq!(
            form.process_event(&key(KeyCode::Char('a')), Focus::Name),
            Some(FormAction::NameChanged("a".to_string()))
        );
        assert_eq!(
            form.process_event(&key(KeyCode::Char('y')), Focus::Url),
            Some(FormAction::UrlChanged("y".to_string()))
        );
        assert_eq!(form.name.value(), "a");
        assert_eq!(form.url.value(), "y");
    }

    #[test]
    fn enter_submits_and_cursor_moves_are_silent() {
        let mut form = SongForm::new();
        form.process_event(&key(KeyCode::Char('a')), Focus::Name);

        assert_eq!(form.process_event(&key(KeyCode::Left), Focus::Name), None);
        assert_eq!(
            form.process_event(&key(KeyCode::Enter), Focus::Url),
            Some(FormAction::Submit)
        );
    }

    #[test]
    fn load_replaces_both_fields() {
        let mut form = SongForm::new();
        form.process_event(&key(KeyCode::Char('a')), Focus::Name);
        form.process_event(&key(KeyCode::Char('b')), Focus::Url);

        form.load("", "");
        assert_eq!(form.name.value(), "");
        assert_eq!(form.url.value(), "");

        form.load("Song", "youtu.be");
        assert_eq!(
            form.process_event(&key(KeyCode::Char('/')), Focus::Url),
            Some(FormAction::UrlChanged("youtu.be/".to_string()))
        );
    }
}
