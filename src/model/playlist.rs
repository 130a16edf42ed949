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

//! Playlist store.
//!
//! This module owns the authoritative, insertion-ordered collection of
//! [`SongEntry`] records and every operation that changes it. Each change is
//! written through to the [`PersistenceBridge`] before the operation returns.
//!
//! Sorting and filtering never touch the stored order; [`PlaylistStore::list`]
//! is a pure projection computed on demand.

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::{
    model::{
        SongEntry,
        link::{self, Validation},
    },
    storage::bridge::PersistenceBridge,
};

/// Reasons a song could not be added. The message is shown to the user as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum AddError {
    #[error("The song name is required.")]
    EmptyName,

    #[error("The URL is required.")]
    InvalidOrMissingUrl,

    #[error("This song was already added.")]
    DuplicateUrl,
}

pub(crate) struct PlaylistStore {
    entries: Vec<SongEntry>,
    bridge: PersistenceBridge,
    degraded: bool,
}

impl PlaylistStore {
    /// Creates the store with whatever the bridge has persisted.
    pub(crate) fn open(bridge: PersistenceBridge) -> Self {
        let entries = bridge.load();
        info!(entries = entries.len(), "playlist loaded");

        Self {
            entries,
            bridge,
            degraded: false,
        }
    }

    /// Whether changes are currently only held in memory.
    pub(crate) fn degraded(&self) -> bool {
        self.degraded
    }

    pub(crate) fn set_degraded(&mut self) {
        self.degraded = true;
    }

    /// Validates and appends a new song.
    ///
    /// The name is checked first, so a blank name is reported even when the
    /// URL is also bad. A URL is a duplicate only when its trimmed text
    /// matches an existing entry exactly; another link to the same video is
    /// a separate entry.
    ///
    /// # Errors
    ///
    /// Returns the [`AddError`] describing the first failed check. The
    /// collection is left untouched on error.
    pub(crate) fn add(&mut self, name: &str, url: &str) -> Result<SongEntry, AddError> {
        let name = name.trim();
        let url = url.trim();

        if name.is_empty() {
            return Err(AddError::EmptyName);
        }

        let video_id = match link::validate(url) {
            Validation::Valid(id) => id,
            Validation::Empty | Validation::Invalid => return Err(AddError::InvalidOrMissingUrl),
        };

        if self.entries.iter().any(|e| e.url == url) {
            return Err(AddError::DuplicateUrl);
        }

        let entry = SongEntry::new(name.to_string(), url.to_string(), video_id);
        debug!(video_id = %entry.video_id, "adding song");
        self.entries.push(entry.clone());
        self.persist();

        Ok(entry)
    }

    /// Counts one play of every song with `video_id`.
    ///
    /// Returns `false`, and changes nothing, when no such song exists.
    pub(crate) fn increment_play(&mut self, video_id: &str) -> bool {
        let mut counted = 0;
        for entry in self.entries.iter_mut().filter(|e| e.video_id == video_id) {
            entry.play_count = entry.play_count.saturating_add(1);
            counted += 1;
        }

        if counted == 0 {
            return false;
        }

        debug!(video_id, entries = counted, "play counted");
        self.persist();

        true
    }

    /// Deletes every song with `video_id` and returns them, oldest first.
    ///
    /// Callers are expected to have confirmed the deletion with the user.
    /// Nothing is written when no song matched.
    pub(crate) fn remove(&mut self, video_id: &str) -> Vec<SongEntry> {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.entries)
            .into_iter()
            .partition(|e| e.video_id == video_id);
        self.entries = kept;

        if !removed.is_empty() {
            debug!(video_id, entries = removed.len(), "song removed");
            self.persist();
        }

        removed
    }

    /// Returns the songs whose name contains `filter`, ignoring case.
    ///
    /// Songs keep insertion order unless `sort_by_plays` is set, in which case
    /// they are ordered by descending play count with ties left in insertion
    /// order.
    pub(crate) fn list(&self, filter: &str, sort_by_plays: bool) -> Vec<SongEntry> {
        let needle = filter.to_lowercase();

        let mut songs: Vec<SongEntry> = self
            .entries
            .iter()
            .filter(|e| e.name.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if sort_by_plays {
            songs.sort_by(|a, b| b.play_count.cmp(&a.play_count));
        }

        songs
    }

    pub(crate) fn get(&self, video_id: &str) -> Option<&SongEntry> {
        self.entries.iter().find(|e| e.video_id == video_id)
    }

    pub(crate) fn contains(&self, video_id: &str) -> bool {
        self.get(video_id).is_some()
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[SongEntry] {
        &self.entries
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn total_plays(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.play_count)).sum()
    }

    fn persist(&mut self) {
        match self.bridge.save(&self.entries) {
            Ok(()) => self.degraded = false,
            Err(e) => {
                if !self.degraded {
                    warn!("playlist kept in memory only: {e:#}");
                }
                self.degraded = true;
            }
        }
    }
}
