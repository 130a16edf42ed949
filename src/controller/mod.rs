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

//! View state and user intents.
//!
//! [`PlaylistController`] holds everything the screen needs that is not part
//! of the playlist itself: the draft form fields, validation feedback, search
//! text, sort mode, selection, overlay visibility and transient messages. Each
//! user intent is a method that updates that state and, where needed, calls
//! into the [`PlaylistStore`].
//!
//! The controller knows nothing about terminals. Deletion asks an injected
//! [`Confirm`] capability, and the success notice is cleared by whoever owns
//! the timer calling [`PlaylistController::clear_notice`] with the generation
//! returned from [`PlaylistController::save`].

use crate::model::{
    SongEntry, VideoId,
    link::{self, Validation},
    playlist::{AddError, PlaylistStore},
};

pub(crate) const DELETE_PROMPT: &str = "Are you sure you want to delete this song?";
pub(crate) const SONG_ADDED: &str = "Song added to the list";

/// Asks the user to confirm a destructive action.
pub(crate) trait Confirm {
    fn confirm(&mut self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> bool {
        self(prompt)
    }
}

/// What to show underneath the URL field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Feedback<'a> {
    None,
    Valid,
    Error(&'a str),
}

#[derive(Debug, Default)]
pub(crate) struct PlaylistController {
    draft_name: String,
    draft_url: String,
    validation: Option<Validation>,
    error: Option<String>,
    alert: Option<String>,
    notice: Option<String>,
    notice_generation: u64,
    selected: Option<VideoId>,
    search: String,
    sort_by_plays: bool,
    overlay_open: bool,
}

impl PlaylistController {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn draft_name(&self) -> &str {
        &self.draft_name
    }

    pub(crate) fn draft_url(&self) -> &str {
        &self.draft_url
    }

    pub(crate) fn set_draft_name(&mut self, text: &str) {
        self.draft_name = text.to_string();
    }

    /// Updates the URL draft and re-runs validation on it.
    pub(crate) fn set_draft_url(&mut self, text: &str) {
        self.draft_url = text.to_string();

        let validation = link::validate(text);
        self.error = match validation {
            Validation::Valid(_) => None,
            ref other => Some(other.message().to_string()),
        };
        self.validation = Some(validation);
    }

    /// The video id the next save will use, if the URL draft is valid.
    pub(crate) fn staged_id(&self) -> Option<&VideoId> {
        self.validation.as_ref().and_then(Validation::video_id)
    }

    pub(crate) fn feedback(&self) -> Feedback<'_> {
        if let Some(error) = self.error() {
            return Feedback::Error(error);
        }

        if self.staged_id().is_some() && !self.draft_url.trim().is_empty() {
            Feedback::Valid
        } else {
            Feedback::None
        }
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A failure outside the form, such as the external player, shown on the
    /// status line until the next play.
    pub(crate) fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub(crate) fn set_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
    }

    pub(crate) fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Adds the drafted song to the store.
    ///
    /// On success the drafts and validation state are cleared and the success
    /// notice is set. The returned generation identifies that notice; pass it
    /// to [`clear_notice`](Self::clear_notice) once the display window ends.
    ///
    /// # Errors
    ///
    /// Returns the store's [`AddError`]. Its message becomes the current error
    /// and the drafts are left as they were.
    pub(crate) fn save(&mut self, store: &mut PlaylistStore) -> Result<u64, AddError> {
        self.error = None;

        match store.add(&self.draft_name, &self.draft_url) {
            Ok(_) => {
                self.draft_name.clear();
                self.draft_url.clear();
                self.validation = None;

                self.notice = Some(SONG_ADDED.to_string());
                self.notice_generation += 1;
                Ok(self.notice_generation)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Clears the success notice, unless a newer one has replaced it.
    pub(crate) fn clear_notice(&mut self, generation: u64) -> bool {
        if generation != self.notice_generation || self.notice.is_none() {
            return false;
        }

        self.notice = None;
        true
    }

    /// Counts a play of `video_id`, selects it and opens the player overlay.
    ///
    /// Every call counts, even if the overlay is already showing the song.
    pub(crate) fn play(&mut self, store: &mut PlaylistStore, video_id: &VideoId) -> bool {
        if !store.increment_play(video_id.as_str()) {
            return false;
        }

        self.alert = None;
        self.selected = Some(video_id.clone());
        self.overlay_open = true;
        true
    }

    pub(crate) fn overlay_open(&self) -> bool {
        self.overlay_open
    }

    pub(crate) fn close_overlay(&mut self) {
        self.overlay_open = false;
    }

    /// The song shown in the overlay, while it is open.
    pub(crate) fn overlay_song<'a>(&self, store: &'a PlaylistStore) -> Option<&'a SongEntry> {
        if !self.overlay_open {
            return None;
        }

        self.selected.as_ref().and_then(|id| store.get(id.as_str()))
    }

    pub(crate) fn selected(&self) -> Option<&VideoId> {
        self.selected.as_ref()
    }

    pub(crate) fn select(&mut self, video_id: Option<VideoId>) {
        self.selected = video_id;
    }

    /// Whether the delete action is available: the selection must still exist.
    pub(crate) fn can_delete(&self, store: &PlaylistStore) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|id| store.contains(id.as_str()))
    }

    /// Deletes the songs with `video_id` after the user confirms, returning
    /// what was removed.
    ///
    /// When the removed id was selected the selection is cleared and the
    /// overlay is hidden.
    pub(crate) fn delete(
        &mut self,
        store: &mut PlaylistStore,
        video_id: &VideoId,
        confirm: &mut impl Confirm,
    ) -> Vec<SongEntry> {
        if !store.contains(video_id.as_str()) || !confirm.confirm(DELETE_PROMPT) {
            return Vec::new();
        }

        let removed = store.remove(video_id.as_str());

        if self.selected.as_ref() == Some(video_id) {
            self.selected = None;
            self.overlay_open = false;
        }

        removed
    }

    pub(crate) fn sort_by_plays(&self) -> bool {
        self.sort_by_plays
    }

    pub(crate) fn toggle_sort(&mut self) {
        self.sort_by_plays = !self.sort_by_plays;
    }

    pub(crate) fn set_search(&mut self, text: &str) {
        self.search = text.to_string();
    }

    /// The songs to render, filtered by the search text and sorted as
    /// requested.
    pub(crate) fn visible(&self, store: &PlaylistStore) -> Vec<SongEntry> {
        store.list(&self.search, self.sort_by_plays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{
        MemoryStorage,
        bridge::{DEFAULT_STORAGE_KEY, PersistenceBridge},
    };

    const RICK: &str = "https://youtu.be/dQw4w9WgXcQ";
    const GANGNAM: &str = "https://www.youtube.com/watch?v=9bZkp7q19f0";

    fn store() -> PlaylistStore {
        PlaylistStore::open(PersistenceBridge::new(
            Box::new(MemoryStorage::default()),
            DEFAULT_STORAGE_KEY,
        ))
    }

    fn id(url: &str) -> VideoId {
        link::validate(url).video_id().cloned().unwrap()
    }

    fn add(controller: &mut PlaylistController, store: &mut PlaylistStore, name: &str, url: &str) {
        controller.set_draft_name(name);
        controller.set_draft_url(url);
        controller.save(store).unwrap();
    }

    #[test]
    fn url_changes_update_feedback_and_staged_id() {
        let mut controller = PlaylistController::new();
        assert_eq!(controller.feedback(), Feedback::None);

        controller.set_draft_url("");
        assert_eq!(controller.feedback(), Feedback::Error(link::EMPTY_MESSAGE));
        assert!(controller.staged_id().is_none());

        controller.set_draft_url("youtu.be/nope");
        assert_eq!(controller.feedback(), Feedback::Error(link::INVALID_MESSAGE));

        controller.set_draft_url(RICK);
        assert_eq!(controller.feedback(), Feedback::Valid);
        assert_eq!(controller.staged_id(), Some(&id(RICK)));
    }

    #[test]
    fn successful_save_clears_drafts_and_sets_notice() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        controller.set_draft_name("Song A");
        controller.set_draft_url(RICK);

        let generation = controller.save(&mut store).unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(controller.draft_name(), "");
        assert_eq!(controller.draft_url(), "");
        assert_eq!(controller.feedback(), Feedback::None);
        assert_eq!(controller.notice(), Some(SONG_ADDED));
        assert!(controller.clear_notice(generation));
        assert_eq!(controller.notice(), None);
    }

    #[test]
    fn failed_save_keeps_drafts_and_reports_reason() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        controller.set_draft_name("  ");
        controller.set_draft_url(RICK);

        assert_eq!(controller.save(&mut store), Err(AddError::EmptyName));
        assert_eq!(controller.error(), Some("The song name is required."));
        assert_eq!(controller.draft_url(), RICK);
        assert!(store.is_empty());

        controller.set_draft_name("Song A");
        controller.set_draft_url("not a link");
        assert_eq!(controller.save(&mut store), Err(AddError::InvalidOrMissingUrl));
        assert_eq!(controller.error(), Some("The URL is required."));
        assert_eq!(controller.draft_name(), "Song A");
    }

    #[test]
    fn duplicate_save_is_rejected() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);

        controller.set_draft_name("Song A");
        controller.set_draft_url(RICK);

        assert_eq!(controller.save(&mut store), Err(AddError::DuplicateUrl));
        assert_eq!(controller.error(), Some("This song was already added."));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn stale_notice_timer_does_not_clear_newer_notice() {
        let mut store = store();
        let mut controller = PlaylistController::new();

        controller.set_draft_name("Song A");
        controller.set_draft_url(RICK);
        let first = controller.save(&mut store).unwrap();

        controller.set_draft_name("Song B");
        controller.set_draft_url(GANGNAM);
        let second = controller.save(&mut store).unwrap();

        assert!(!controller.clear_notice(first));
        assert_eq!(controller.notice(), Some(SONG_ADDED));
        assert!(controller.clear_notice(second));
        assert!(!controller.clear_notice(second));
    }

    #[test]
    fn play_counts_selects_and_opens_overlay_every_time() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);
        let rick = id(RICK);

        assert!(controller.play(&mut store, &rick));
        assert!(controller.play(&mut store, &rick));

        assert_eq!(controller.selected(), Some(&rick));
        assert!(controller.overlay_open());
        assert_eq!(controller.overlay_song(&store).map(|s| s.play_count), Some(2));

        controller.close_overlay();
        assert!(controller.overlay_song(&store).is_none());
        assert_eq!(controller.selected(), Some(&rick));
    }

    #[test]
    fn play_of_unknown_song_changes_nothing() {
        let mut store = store();
        let mut controller = PlaylistController::new();

        assert!(!controller.play(&mut store, &id(RICK)));
        assert!(!controller.overlay_open());
        assert!(controller.selected().is_none());
    }

    #[test]
    fn played_song_sorts_first() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Other", GANGNAM);
        add(&mut controller, &mut store, "Song A", RICK);

        controller.play(&mut store, &id(RICK));
        controller.toggle_sort();

        let visible = controller.visible(&store);
        assert_eq!(visible[0].video_id, "dQw4w9WgXcQ");

        controller.toggle_sort();
        assert_eq!(controller.visible(&store)[0].name, "Other");
    }

    #[test]
    fn search_filters_visible_songs() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Never Gonna Give", RICK);
        add(&mut controller, &mut store, "Gangnam Style", GANGNAM);

        controller.set_search("STYLE");

        let visible = controller.visible(&store);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Gangnam Style");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn deleting_selected_song_clears_selection() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);
        let rick = id(RICK);
        controller.play(&mut store, &rick);
        let mut prompts = Vec::new();

        let removed = controller.delete(&mut store, &rick, &mut |prompt: &str| {
            prompts.push(prompt.to_string());
            true
        });

        assert_eq!(removed.len(), 1);
        assert_eq!(removed[0].video_id, rick);
        assert_eq!(prompts, [DELETE_PROMPT]);
        assert!(controller.selected().is_none());
        assert!(!controller.overlay_open());
        assert!(store.is_empty());
    }

    #[test]
    fn declined_delete_keeps_song() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);
        controller.select(Some(id(RICK)));

        assert!(controller.delete(&mut store, &id(RICK), &mut |_: &str| false).is_empty());
        assert_eq!(store.len(), 1);
        assert_eq!(controller.selected(), Some(&id(RICK)));
    }

    #[test]
    fn deleting_another_song_keeps_selection() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);
        add(&mut controller, &mut store, "Song B", GANGNAM);
        controller.select(Some(id(RICK)));

        controller.delete(&mut store, &id(GANGNAM), &mut |_: &str| true);

        assert_eq!(controller.selected(), Some(&id(RICK)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn delete_needs_a_selection_that_still_exists() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);
        let mut asked = false;

        assert!(!controller.can_delete(&store));
        controller.select(Some(id(GANGNAM)));
        assert!(!controller.can_delete(&store));
        assert!(controller.delete(&mut store, &id(GANGNAM), &mut |_: &str| {
            asked = true;
            true
        }).is_empty());
        assert!(!asked);

        controller.select(Some(id(RICK)));
        assert!(controller.can_delete(&store));
    }

    #[test]
    fn alerts_stay_off_the_form_and_clear_on_next_play() {
        let mut store = store();
        let mut controller = PlaylistController::new();
        add(&mut controller, &mut store, "Song A", RICK);

        controller.set_alert("mpv exited with exit status: 1");
        controller.set_draft_url("youtu.be/");

        assert_eq!(controller.alert(), Some("mpv exited with exit status: 1"));
        assert_eq!(controller.feedback(), Feedback::Error(link::INVALID_MESSAGE));

        controller.play(&mut store, &id(RICK));
        assert_eq!(controller.alert(), None);
    }
}
