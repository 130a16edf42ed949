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

//! External video player launching.
//!
//! The overlay shows what is playing; the video itself is handed to an
//! external program configured as `player_command` (for example `mpv` or
//! `xdg-open`). [`VideoLauncher`] spawns that program detached from the
//! terminal and reports a failed exit back to the event loop.

use std::{
    process::{Command, Stdio},
    sync::mpsc::Sender,
    thread,
};

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::events::AppEvent;

/// A handle for starting the configured external player.
pub(crate) struct VideoLauncher {
    command: Option<String>,
    event_tx: Sender<AppEvent>,
}

impl VideoLauncher {
    pub(crate) fn new(command: Option<String>, event_tx: Sender<AppEvent>) -> Self {
        let command = command.filter(|c| !c.trim().is_empty());
        Self { command, event_tx }
    }

    pub(crate) fn is_configured(&self) -> bool {
        self.command.is_some()
    }

    /// Starts the player on `url`.
    ///
    /// Returns `Ok(false)` when no player is configured. The child is waited
    /// on from a background thread so it never becomes a zombie; a non-zero
    /// exit is reported as an [`AppEvent::Error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the program cannot be started.
    pub(crate) fn open(&self, url: &str) -> Result<bool> {
        let Some(command_line) = &self.command else {
            return Ok(false);
        };

        let mut parts = command_line.split_whitespace();
        let Some(program) = parts.next() else {
            return Ok(false);
        };

        let mut child = Command::new(program)
            .args(parts)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .with_context(|| format!("Failed to start player {program}"))?;

        debug!(program, url, "player started");

        let program = program.to_string();
        let event_tx = self.event_tx.clone();
        thread::spawn(move || match child.wait() {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!(%program, %status, "player exited with failure");
                let _ = event_tx.send(AppEvent::Error(format!("{program} exited with {status}")));
            }
            Err(e) => warn!(%program, "failed to wait for player: {e}"),
        });

        Ok(true)
    }
}
