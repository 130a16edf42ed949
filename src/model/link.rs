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

//! Video link recognition.
//!
//! Extracts the video identifier from a pasted link. Three link shapes are
//! recognized, each optionally preceded by `http://` or `https://` and `www.`:
//!
//! * `youtube.com/watch?v=<id>`
//! * `youtube.com/embed/<id>`
//! * `youtu.be/<id>`
//!
//! The identifier is exactly 11 characters of `[A-Za-z0-9_-]` and is matched
//! case-sensitively. Everything before it is matched case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::VideoId;

static LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?i:https?://)?(?i:www\.)?(?i:youtube\.com/(?:watch\?v=|embed/)|youtu\.be/)([A-Za-z0-9_-]{11})(?:[?&#/].*)?$",
    )
    .expect("link pattern is a valid regex")
});

pub(crate) const EMPTY_MESSAGE: &str = "The URL cannot be empty.";
pub(crate) const INVALID_MESSAGE: &str =
    "The URL is not a valid link. Make sure it is a correct YouTube link.";
pub(crate) const VALID_MESSAGE: &str = "Valid link";

/// Outcome of checking the URL field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Validation {
    Empty,
    Valid(VideoId),
    Invalid,
}

impl Validation {
    pub(crate) fn video_id(&self) -> Option<&VideoId> {
        match self {
            Validation::Valid(id) => Some(id),
            _ => None,
        }
    }

    /// The line shown underneath the URL field.
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Validation::Empty => EMPTY_MESSAGE,
            Validation::Valid(_) => VALID_MESSAGE,
            Validation::Invalid => INVALID_MESSAGE,
        }
    }
}

/// Classifies raw URL field text.
///
/// Surrounding whitespace is ignored. A query string, fragment or trailing
/// path after the identifier is allowed, so `youtu.be/<id>?t=42` and
/// `watch?v=<id>&list=...` are both accepted, but a twelfth identifier
/// character is not.
pub(crate) fn validate(raw: &str) -> Validation {
    let value = raw.trim();
    if value.is_empty() {
        return Validation::Empty;
    }

    match LINK_PATTERN.captures(value).and_then(|c| c.get(1)) {
        Some(id) => Validation::Valid(VideoId::from_match(id.as_str())),
        None => Validation::Invalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id_of(raw: &str) -> Option<String> {
        validate(raw).video_id().map(|id| id.to_string())
    }

    #[test]
    fn accepts_short_links() {
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(id_of("youtu.be/dQw4w9WgXcQ").as_deref(), Some("dQw4w9WgXcQ"));
        assert_eq!(id_of("http://www.youtu.be/a_B-c1D2e3F").as_deref(), Some("a_B-c1D2e3F"));
    }

    #[test]
    fn accepts_watch_and_embed_links() {
        assert_eq!(
            id_of("https://www.youtube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            id_of("youtube.com/embed/dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(
            id_of("https://youtube.com/watch?v=dQw4w9WgXcQ&list=PL123").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_eq!(id_of("https://youtu.be/dQw4w9WgXcQ?t=42").as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn scheme_and_host_ignore_case_but_id_does_not() {
        assert_eq!(
            id_of("HTTPS://WWW.YouTube.com/watch?v=dQw4w9WgXcQ").as_deref(),
            Some("dQw4w9WgXcQ")
        );
        assert_ne!(validate("youtu.be/dQw4w9WgXcQ"), validate("youtu.be/DQW4W9WGXCQ"));
    }

    #[test]
    fn trims_whitespace() {
        assert_eq!(id_of("  https://youtu.be/dQw4w9WgXcQ \n").as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn blank_input_is_empty() {
        assert_eq!(validate(""), Validation::Empty);
        assert_eq!(validate("   \t"), Validation::Empty);
        assert_eq!(validate("").message(), EMPTY_MESSAGE);
    }

    #[test]
    fn rejects_everything_else() {
        for raw in [
            "hello",
            "https://vimeo.com/123456789",
            "https://youtu.be/short",
            "https://youtu.be/dQw4w9WgXcQX",
            "https://youtube.com/watch?x=dQw4w9WgXcQ",
            "https://m.youtube.com/watch?v=dQw4w9WgXcQ",
            "ftp://youtu.be/dQw4w9WgXcQ",
            "youtu.be/dQw4w9WgX!Q",
        ] {
            assert_eq!(validate(raw), Validation::Invalid, "{raw}");
        }
        assert_eq!(validate("nope").message(), INVALID_MESSAGE);
    }
}
