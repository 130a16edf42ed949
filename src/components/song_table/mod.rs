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

//! Interactive song table widget and state management.
//!
//! This module provides the table listing the visible songs. It separates
//! the state kept between frames (`SongTableState`, mostly the scroll offset)
//! from the transient widget view (`SongTable`) built over the songs being
//! shown. The highlighted row always follows the controller's selection, so
//! moving the cursor is reported as a selection change rather than tracked
//! here.

mod event;
mod render;

use ratatui::widgets::TableState;

use crate::model::{SongEntry, VideoId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SongTableAction {
    Select(VideoId),
    Play(VideoId),
    Delete(VideoId),
    ToggleSort,
}

pub(crate) struct SongTableState {
    pub(crate) table_state: TableState,
}

impl SongTableState {
    pub(crate) fn new() -> Self {
        Self {
            table_state: TableState::new(),
        }
    }

    /// Builds the widget over `songs`, highlighting `selected` when it is
    /// among them.
    pub(crate) fn as_widget<'a>(
        &'a mut self,
        songs: &'a [SongEntry],
        selected: Option<&VideoId>,
    ) -> SongTable<'a> {
        let index = selected.and_then(|id| songs.iter().position(|s| &s.video_id == id));
        self.table_state.select(index);

        SongTable {
            songs,
            table_state: &mut self.table_state,
        }
    }
}

pub(crate) struct SongTable<'a> {
    songs: &'a [SongEntry],
    table_state: &'a mut TableState,
}

impl SongTable<'_> {
    fn current(&self) -> Option<&SongEntry> {
        self.table_state.selected().and_then(|i| self.songs.get(i))
    }

    fn current_id(&self) -> Option<VideoId> {
        self.current().map(|s| s.video_id.clone())
    }

    fn goto_next(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i >= len - 1 {
                    0
                } else {
                    i + 1
                }
            }
            None => 0,
        };
        self.table_state.select(Some(i));
    }

    fn goto_previous(&mut self) {
        let len = self.songs.len();
        if len == 0 {
            return;
        }
        let i = match self.table_state.selected() {
            Some(i) => {
                if i == 0 {
                    len - 1
                } else {
                    i - 1
                }
            }
            None => len - 1,
        };
        self.table_state.select(Some(i));
    }

    fn goto_first(&mut self) {
        if !self.songs.is_empty() {
            self.table_state.select(Some(0));
        }
    }

    fn goto_last(&mut self) {
        if let Some(last) = self.songs.len().checked_sub(1) {
            self.table_state.select(Some(last));
        }
    }
}
