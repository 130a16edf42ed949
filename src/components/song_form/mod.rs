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

//! The "add a song" form.
//!
//! Two single-line text inputs, one for the song name and one for its link.
//! Edits are reported as [`FormAction`]s so the controller can re-validate the
//! link on every keystroke.

mod event;
mod render;

use tui_input::Input;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum FormAction {
    NameChanged(String),
    UrlChanged(String),
    Submit,
}

pub(crate) struct SongForm {
    pub(crate) name: Input,
    pub(crate) url: Input,
}

impl SongForm {
    pub(crate) fn new() -> Self {
        Self {
            name: Input::default(),
            url: Input::default(),
        }
    }

    /// Replaces both fields with the drafts held by the controller, with the
    /// cursor at the end of each.
    pub(crate) fn load(&mut self, name: &str, url: &str) {
        self.name = Input::new(name.to_string());
        self.url = Input::new(url.to_string());
    }
}
