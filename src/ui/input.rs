use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::{App, FormField};
use crate::ui::form::RsvpChoice;
use crate::ui::scene::{Scene, SceneMode};

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.scene() {
        Scene::Landing => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => app.open_door(),
            KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        Scene::ThemeSelect => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.move_theme_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => app.move_theme_cursor(1),
            KeyCode::Enter | KeyCode::Char(' ') => app.choose_highlighted_theme(),
            KeyCode::Esc | KeyCode::Char('q') => app.request_quit(),
            _ => {}
        },
        Scene::InvitationForm => handle_form_key(app, key, now),
        Scene::Success => match key.code {
            KeyCode::Esc | KeyCode::Char('b') if app.scene_mode() == SceneMode::Picker => {
                app.back()
            }
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.request_quit(),
            _ => {}
        },
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent, now: Instant) {
    if is_ctrl_char(key, 's') {
        app.submit(now);
        return;
    }

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.focus_next();
            return;
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
            return;
        }
        KeyCode::Esc => {
            app.back();
            return;
        }
        KeyCode::Enter => {
            app.activate(now);
            return;
        }
        _ => {}
    }

    match app.focus() {
        FormField::Name => match key.code {
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.type_char(ch)
            }
            KeyCode::Backspace => app.backspace(),
            _ => {}
        },
        FormField::Guests => match key.code {
            KeyCode::Right | KeyCode::Char('+') | KeyCode::Char('=') => app.increment_guests(),
            KeyCode::Left | KeyCode::Char('-') => app.decrement_guests(),
            _ => {}
        },
        FormField::Option(choice) => match key.code {
            KeyCode::Char(' ') => app.select(choice, now),
            KeyCode::Char(ch) => {
                if let Some(choice) = shortcut_choice(ch) {
                    app.select(choice, now);
                }
            }
            _ => {}
        },
        FormField::Submit => {
            if let KeyCode::Char(ch) = key.code {
                if let Some(choice) = shortcut_choice(ch) {
                    app.select(choice, now);
                }
            }
        }
    }
}

/// `1`/`2`/`3` select a card when the name field is not focused.
fn shortcut_choice(ch: char) -> Option<RsvpChoice> {
    match ch {
        '1' => Some(RsvpChoice::Yes),
        '2' => Some(RsvpChoice::Maybe),
        '3' => Some(RsvpChoice::No),
        _ => None,
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
