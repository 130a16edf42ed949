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

//! Keyboard routing.
//!
//! Modal state is checked first: a pending delete confirmation takes every
//! key, then the player overlay. Otherwise Tab moves focus and the focused
//! component gets the key.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::handlers::*;
use crate::{App, components::Focus, events::AppEvent};

/// Maps keyboard input to component actions and user intents.
///
/// This function acts as the primary input router for the TUI. It handles:
///
/// * **Application Control**: quitting with `q` from the list, or Ctrl-C
///   anywhere.
/// * **Dialogs**: answering the delete confirmation and closing the player
///   overlay.
/// * **Focus**: moving between the form fields, the search box and the list.
/// * **Editing**: delegating text input to the focused field.
///
/// # Errors
///
/// Returns an error if an application event cannot be sent.
pub(super) fn process_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.kind != KeyEventKind::Press {
        return Ok(());
    }

    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.event_tx.send(AppEvent::ExitApplication)?;
        return Ok(());
    }

    if app.pending_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => handle_confirm_delete(app, true),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                handle_confirm_delete(app, false)
            }
            _ => {}
        }
        return Ok(());
    }

    if app.controller.overlay_open() {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => app.controller.close_overlay(),
            KeyCode::Char('p') => handle_replay(app),
            _ => {}
        }
        return Ok(());
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.previous();
            return Ok(());
        }
        _ => {}
    }

    let event = Event::Key(key);

    match app.focus {
        Focus::Name | Focus::Url => {
            if key.code == KeyCode::Esc {
                app.focus = Focus::List;
            } else if let Some(action) = app.song_form.process_event(&event, app.focus) {
                handle_form_action(app, action);
            }
        }
        Focus::Search => {
            if let Some(action) = app.search_box.process_event(&event) {
                handle_search_action(app, action);
            }
        }
        Focus::List => process_list_key_event(app, &event, key)?,
    }

    Ok(())
}

fn process_list_key_event(app: &mut App, event: &Event, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') => app.event_tx.send(AppEvent::ExitApplication)?,
        KeyCode::Char('/') => app.focus = Focus::Search,
        KeyCode::Char('a') => app.focus = Focus::Name,
        _ => {
            let songs = app.controller.visible(&app.store);
            let action = app
                .song_table
                .as_widget(&songs, app.controller.selected())
                .process_event(event);

            if let Some(action) = action {
                handle_table_action(app, action);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::{
        config::AppConfig,
        controller::SONG_ADDED,
        model::playlist::PlaylistStore,
        render::status::{StatusMessage, status_message},
        storage::{
            MemoryStorage, Storage,
            bridge::{DEFAULT_STORAGE_KEY, PersistenceBridge},
        },
    };

    use super::*;

    struct ReadOnlyStorage;

    impl Storage for ReadOnlyStorage {
        fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> anyhow::Result<()> {
            anyhow::bail!("read-only")
        }
    }

    fn app_with(config: AppConfig, storage: Box<dyn Storage>) -> App {
        let store = PlaylistStore::open(PersistenceBridge::new(storage, DEFAULT_STORAGE_KEY));
        App::new(config, store)
    }

    fn app() -> App {
        app_with(AppConfig::default(), Box::new(MemoryStorage::default()))
    }

    fn press(app: &mut App, code: KeyCode) {
        process_key_event(app, KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn add_song(app: &mut App, name: &str, url: &str) {
        app.focus = Focus::Name;
        type_text(app, name);
        press(app, KeyCode::Tab);
        type_text(app, url);
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_enter_adds_a_song() {
        let mut app = app();

        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.store.entries()[0].video_id, "dQw4w9WgXcQ");
        assert_eq!(app.controller.notice(), Some(SONG_ADDED));
        assert_eq!(app.song_form.name.value(), "");
        assert_eq!(app.song_form.url.value(), "");
        assert_eq!(app.focus, Focus::Name);
    }

    #[test]
    fn invalid_link_keeps_form_contents() {
        let mut app = app();

        add_song(&mut app, "Song A", "not a link");

        assert!(app.store.is_empty());
        assert_eq!(app.controller.error(), Some("The URL is required."));
        assert_eq!(app.song_form.url.value(), "not a link");
    }

    #[test]
    fn play_from_list_counts_and_opens_overlay() {
        let mut app = app();
        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");
        app.focus = Focus::List;

        press(&mut app, KeyCode::Char('j'));
        press(&mut app, KeyCode::Enter);

        assert!(app.controller.overlay_open());
        assert_eq!(app.store.total_plays(), 1);

        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.store.total_plays(), 2);

        press(&mut app, KeyCode::Esc);
        assert!(!app.controller.overlay_open());
    }

    #[test]
    fn delete_asks_first_and_clears_selection() {
        let mut app = app();
        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('j'));

        press(&mut app, KeyCode::Char('d'));
        assert!(app.pending_delete.is_some());
        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.store.len(), 1);

        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('y'));
        assert!(app.store.is_empty());
        assert!(app.controller.selected().is_none());
        assert!(app.pending_delete.is_none());
    }

    #[test]
    fn search_box_filters_and_sort_toggles() {
        let mut app = app();
        add_song(&mut app, "Never Gonna Give", "https://youtu.be/dQw4w9WgXcQ");
        add_song(&mut app, "Gangnam Style", "https://www.youtube.com/watch?v=9bZkp7q19f0");
        app.focus = Focus::List;

        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "style");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.focus, Focus::List);
        assert_eq!(app.controller.visible(&app.store).len(), 1);

        press(&mut app, KeyCode::Char('s'));
        assert!(app.controller.sort_by_plays());
    }

    #[test]
    fn quit_keys_send_exit() {
        let mut app = app();
        app.focus = Focus::List;

        press(&mut app, KeyCode::Char('q'));

        assert!(matches!(app.event_rx.try_recv(), Ok(AppEvent::ExitApplication)));
    }

    #[test]
    fn q_in_a_text_field_is_just_text() {
        let mut app = app();

        press(&mut app, KeyCode::Char('q'));

        assert_eq!(app.song_form.name.value(), "q");
        assert!(app.event_rx.try_recv().is_err());
    }

    #[test]
    fn notice_shows_while_storage_is_degraded() {
        let mut app = app_with(AppConfig::default(), Box::new(ReadOnlyStorage));
        app.store.set_degraded();
        assert_eq!(status_message(&app), StatusMessage::Degraded);

        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");

        assert_eq!(app.store.len(), 1);
        assert!(app.store.degraded());
        assert_eq!(status_message(&app), StatusMessage::Notice(SONG_ADDED));
    }

    #[test]
    fn notice_timer_event_clears_the_notice() {
        let config = AppConfig {
            notice_secs: 0,
            ..AppConfig::default()
        };
        let mut app = app_with(config, Box::new(MemoryStorage::default()));

        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");
        assert_eq!(app.controller.notice(), Some(SONG_ADDED));

        let event = app.event_rx.recv_timeout(Duration::from_secs(5)).unwrap();
        let AppEvent::ClearNotice(generation) = event else {
            panic!("expected a notice clear, got {event:?}");
        };
        handle_clear_notice(&mut app, generation);

        assert_eq!(app.controller.notice(), None);
        assert!(matches!(status_message(&app), StatusMessage::Hints(_)));
    }

    #[test]
    fn player_errors_go_to_the_status_line() {
        let mut app = app();
        add_song(&mut app, "Song A", "https://youtu.be/dQw4w9WgXcQ");
        app.focus = Focus::Url;
        type_text(&mut app, "youtu.be/dQw4w9WgXcQ");

        handle_error(&mut app, "mpv exited with exit status: 1".to_string());
        press(&mut app, KeyCode::Backspace);

        assert_eq!(
            status_message(&app),
            StatusMessage::Alert("mpv exited with exit status: 1")
        );
        assert_eq!(app.controller.error(), Some(crate::model::link::INVALID_MESSAGE));
    }
}
