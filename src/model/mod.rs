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

//! Domain models and core data structures.
//!
//! This module defines the playlist record, [`SongEntry`], together with the
//! video identifier it is keyed by. Entries are serialized with the field
//! names used by the persisted playlist blob, so a blob written by an earlier
//! session loads back unchanged.

pub(crate) mod link;
pub(crate) mod playlist;

use std::fmt;

use serde::{Deserialize, Serialize};

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";
const EMBED_URL: &str = "https://www.youtube.com/embed/";

/// The 11 character identifier of a video.
///
/// Values are produced by [`link::validate`] or read back from storage, never
/// typed in directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct VideoId(String);

impl VideoId {
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    fn from_match(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for VideoId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for VideoId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A single playlist record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SongEntry {
    #[serde(alias = "nombre")]
    pub(crate) name: String,
    pub(crate) url: String,
    #[serde(rename = "videoId")]
    pub(crate) video_id: VideoId,
    #[serde(rename = "reproducciones", default)]
    pub(crate) play_count: u32,
}

impl SongEntry {
    pub(crate) fn new(name: String, url: String, video_id: VideoId) -> Self {
        Self {
            name,
            url,
            video_id,
            play_count: 0,
        }
    }

    /// The canonical watch page for this entry, handed to external players.
    pub(crate) fn watch_url(&self) -> String {
        format!("{WATCH_URL}{}", self.video_id)
    }

    /// The embeddable player URL shown in the overlay.
    pub(crate) fn embed_url(&self) -> String {
        format!("{EMBED_URL}{}?autoplay=1&mute=0&rel=0", self.video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> SongEntry {
        SongEntry::new(
            "Song A".to_string(),
            "https://youtu.be/dQw4w9WgXcQ".to_string(),
            VideoId::from_match("dQw4w9WgXcQ"),
        )
    }

    #[test]
    fn serializes_with_blob_field_names() {
        let json = serde_json::to_value(entry()).unwrap();

        assert_eq!(json["name"], "Song A");
        assert_eq!(json["url"], "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(json["videoId"], "dQw4w9WgXcQ");
        assert_eq!(json["reproducciones"], 0);
    }

    #[test]
    fn accepts_legacy_name_field() {
        let json = r#"{"nombre":"Vieja","url":"youtu.be/dQw4w9WgXcQ","videoId":"dQw4w9WgXcQ","reproducciones":4}"#;
        let entry: SongEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.name, "Vieja");
        assert_eq!(entry.play_count, 4);
    }

    #[test]
    fn builds_player_urls() {
        let entry = entry();

        assert_eq!(entry.watch_url(), "https://www.youtube.com/watch?v=dQw4w9WgXcQ");
        assert_eq!(
            entry.embed_url(),
            "https://www.youtube.com/embed/dQw4w9WgXcQ?autoplay=1&mute=0&rel=0"
        );
    }
}
