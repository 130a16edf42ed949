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

//! Interactive screen components.
//!
//! Each component keeps its own widget state, turns key events into
//! component-level actions in its `event` module, and draws itself in its
//! `render` module. Components never touch the playlist directly; the event
//! handlers translate their actions into controller intents.

mod search;
mod song_form;
mod song_table;

pub(crate) use search::{SearchAction, SearchBox};
pub(crate) use song_form::{FormAction, SongForm};
pub(crate) use song_table::{SongTableAction, SongTableState};

/// The component currently receiving key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Name,
    Url,
    Search,
    List,
}

impl Focus {
    pub(crate) fn next(self) -> Self {
        match self {
            Focus::Name => Focus::Url,
            Focus::Url => Focus::Search,
            Focus::Search => Focus::List,
            Focus::List => Focus::Name,
        }
    }

    pub(crate) fn previous(self) -> Self {
        match self {
            Focus::Name => Focus::List,
            Focus::Url => Focus::Name,
            Focus::Search => Focus::Url,
            Focus::List => Focus::Search,
        }
    }
}
