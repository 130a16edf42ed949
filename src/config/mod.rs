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

//! Application configuration.
//!
//! This module manages the application configuration file, and resolves the
//! locations of the playlist database and log files.

use std::{path::PathBuf, time::Duration};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::storage::bridge::DEFAULT_STORAGE_KEY;

const CONFIG_NAME: &str = "tubelist";
const DATABASE_FILE: &str = "tubelist.db";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub version: u32,
    /// Key the playlist blob is stored under.
    pub storage_key: String,
    /// Overrides the default database location.
    pub database_file: Option<PathBuf>,
    /// How long the "song added" notice stays visible.
    pub notice_secs: u64,
    /// Program launched with the watch URL when asked to open a video, e.g.
    /// `mpv` or `xdg-open`.
    pub player_command: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            database_file: None,
            notice_secs: 3,
            player_command: None,
        }
    }
}

impl AppConfig {
    pub fn notice_duration(&self) -> Duration {
        Duration::from_secs(self.notice_secs)
    }

    pub fn database_path(&self) -> PathBuf {
        match &self.database_file {
            Some(path) => path.clone(),
            None => data_dir().join(DATABASE_FILE),
        }
    }
}

/// The per-user data directory, or the working directory if the platform
/// does not provide one.
pub fn data_dir() -> PathBuf {
    ProjectDirs::from("", "", CONFIG_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

pub fn load_config() -> AppConfig {
    confy::load(CONFIG_NAME, None).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stored_playlist_layout() {
        let config = AppConfig::default();

        assert_eq!(config.storage_key, "myItems");
        assert_eq!(config.notice_duration(), Duration::from_secs(3));
        assert!(config.player_command.is_none());
        assert!(config.database_path().ends_with(DATABASE_FILE));
    }

    #[test]
    fn explicit_database_file_wins() {
        let config = AppConfig {
            database_file: Some(PathBuf::from("/tmp/elsewhere.db")),
            ..AppConfig::default()
        };

        assert_eq!(config.database_path(), PathBuf::from("/tmp/elsewhere.db"));
    }
}
