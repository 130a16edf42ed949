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

/// Formats a play counter for display, e.g. `"1 play"` or `"12 plays"`.
pub(crate) fn format_plays(count: u64) -> String {
    if count == 1 {
        "1 play".to_string()
    } else {
        format!("{count} plays")
    }
}

/// Formats a song counter for display, e.g. `"1 song"` or `"0 songs"`.
pub(crate) fn format_songs(count: usize) -> String {
    if count == 1 {
        "1 song".to_string()
    } else {
        format!("{count} songs")
    }
}
