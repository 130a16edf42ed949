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

//! Handlers that turn component actions and helper-thread events into
//! controller intents.

use std::{sync::mpsc::Sender, thread, time::Duration};

use tracing::debug;

use crate::{
    App,
    components::{FormAction, Focus, SearchAction, SongTableAction},
    events::AppEvent,
    model::VideoId,
};

pub(super) fn handle_clear_notice(app: &mut App, generation: u64) {
    app.controller.clear_notice(generation);
}

pub(super) fn handle_error(app: &mut App, message: String) {
    app.controller.set_alert(message);
}

pub(super) fn handle_form_action(app: &mut App, action: FormAction) {
    match action {
        FormAction::NameChanged(name) => app.controller.set_draft_name(&name),
        FormAction::UrlChanged(url) => app.controller.set_draft_url(&url),
        FormAction::Submit => handle_save(app),
    }
}

pub(super) fn handle_search_action(app: &mut App, action: SearchAction) {
    match action {
        SearchAction::Changed(text) => app.controller.set_search(&text),
        SearchAction::Done => app.focus = Focus::List,
    }
}

pub(super) fn handle_table_action(app: &mut App, action: SongTableAction) {
    match action {
        SongTableAction::Select(video_id) => app.controller.select(Some(video_id)),
        SongTableAction::Play(video_id) => handle_play(app, &video_id),
        SongTableAction::Delete(video_id) => handle_request_delete(app, video_id),
        SongTableAction::ToggleSort => app.controller.toggle_sort(),
    }
}

/// Saves the drafted song; on success empties the form and arms the timer
/// that retires the success notice.
pub(super) fn handle_save(app: &mut App) {
    if let Ok(generation) = app.controller.save(&mut app.store) {
        app.song_form
            .load(app.controller.draft_name(), app.controller.draft_url());
        app.focus = Focus::Name;
        schedule_notice_clear(
            app.event_tx.clone(),
            generation,
            app.config.notice_duration(),
        );
    }
}

/// Counts a play, opens the overlay and hands the video to the external
/// player, if one is configured.
pub(super) fn handle_play(app: &mut App, video_id: &VideoId) {
    if !app.controller.play(&mut app.store, video_id) {
        return;
    }

    let Some(url) = app.store.get(video_id.as_str()).map(|s| s.watch_url()) else {
        return;
    };

    if let Err(e) = app.launcher.open(&url) {
        app.controller.set_alert(format!("{e:#}"));
    }
}

/// Replays whatever the overlay is showing.
pub(super) fn handle_replay(app: &mut App) {
    if let Some(video_id) = app.controller.selected().cloned() {
        handle_play(app, &video_id);
    }
}

/// Selects `video_id` and asks for confirmation before deleting it.
pub(super) fn handle_request_delete(app: &mut App, video_id: VideoId) {
    app.controller.select(Some(video_id.clone()));

    if app.controller.can_delete(&app.store) {
        app.pending_delete = Some(video_id);
    }
}

/// Applies the user's answer to the pending delete confirmation.
pub(super) fn handle_confirm_delete(app: &mut App, answer: bool) {
    let Some(video_id) = app.pending_delete.take() else {
        return;
    };

    let removed = app
        .controller
        .delete(&mut app.store, &video_id, &mut |_: &str| answer);
    if !removed.is_empty() {
        debug!(%video_id, entries = removed.len(), "deleted after confirmation");
    }
}

/// Sends [`AppEvent::ClearNotice`] once `after` has elapsed.
///
/// The timer is fire-and-forget: a newer notice bumps the controller's
/// generation, so a stale clear is simply ignored when it arrives.
pub(super) fn schedule_notice_clear(event_tx: Sender<AppEvent>, generation: u64, after: Duration) {
    thread::spawn(move || {
        thread::sleep(after);
        let _ = event_tx.send(AppEvent::ClearNotice(generation));
    });
}
