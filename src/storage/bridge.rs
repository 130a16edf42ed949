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

//! Playlist persistence.
//!
//! Moves the whole playlist between memory and a single JSON blob in
//! [`Storage`]. The blob is read once at startup and rewritten in full after
//! every mutation; the last write wins.

use std::collections::HashSet;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::{
    model::{SongEntry, link},
    storage::Storage,
};

pub(crate) const DEFAULT_STORAGE_KEY: &str = "myItems";

pub(crate) struct PersistenceBridge {
    storage: Box<dyn Storage>,
    key: String,
}

impl PersistenceBridge {
    pub(crate) fn new(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    /// Reads the stored playlist.
    ///
    /// A missing blob, a failed read, or a blob that does not parse all yield
    /// an empty playlist; startup never fails because of stored data. Parsed
    /// entries are passed through [`sanitize`].
    pub(crate) fn load(&self) -> Vec<SongEntry> {
        let blob = match self.storage.get(&self.key) {
            Ok(Some(blob)) => blob,
            Ok(None) => {
                debug!(key = %self.key, "no stored playlist");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, "failed to read stored playlist: {e:#}");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Option<Vec<SongEntry>>>(&blob) {
            Ok(entries) => sanitize(entries.unwrap_or_default()),
            Err(e) => {
                warn!(key = %self.key, "ignoring unparseable stored playlist: {e}");
                Vec::new()
            }
        }
    }

    /// Overwrites the stored playlist with `entries`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub(crate) fn save(&mut self, entries: &[SongEntry]) -> Result<()> {
        let blob = serde_json::to_string(entries).context("Failed to serialize playlist")?;
        self.storage.set(&self.key, &blob)?;
        debug!(key = %self.key, entries = entries.len(), "playlist saved");
        Ok(())
    }
}

/// Re-derives each entry's video id from its link and drops entries whose
/// link is no longer valid or repeats an earlier entry's link.
fn sanitize(entries: Vec<SongEntry>) -> Vec<SongEntry> {
    let mut seen = HashSet::new();

    entries
        .into_iter()
        .filter_map(|mut entry| {
            let Some(video_id) = link::validate(&entry.url).video_id().cloned() else {
                warn!(url = %entry.url, "dropping stored song with an invalid link");
                return None;
            };

            if !seen.insert(entry.url.clone()) {
                warn!(url = %entry.url, "dropping stored song with a repeated link");
                return None;
            }

            if entry.video_id != video_id {
                warn!(url = %entry.url, stored = %entry.video_id, "re-deriving stored video id");
                entry.video_id = video_id;
            }

            Some(entry)
        })
        .collect()
}
