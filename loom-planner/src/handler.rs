// Copyright (c) 2026 Graphcore Ltd. All rights reserved.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, AppResult, InputState};

/// Handles the key events and updates the state of [`App`].
pub fn handle_key_events(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    match app.state() {
        InputState::Default => handle_key_events_default(key_event, app),
        InputState::Entry => handle_key_events_entry(key_event, app),
        InputState::Help => handle_key_events_help(key_event, app),
    }
}

pub fn handle_key_events_default(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    if key_event.modifiers == KeyModifiers::CONTROL {
        match key_event.code {
            // Exit application on `Ctrl-C`
            KeyCode::Char('c') | KeyCode::Char('C') => {
                app.quit();
            }
            _ => {}
        }
    } else {
        match key_event.code {
            // Exit application on `q`
            KeyCode::Char('q') => {
                app.quit();
            }

            // Move around the control panel
            KeyCode::Down | KeyCode::Char('j') => {
                app.select_next();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.select_previous();
            }

            // Adjust the selected field by its step
            KeyCode::Right | KeyCode::Char('+') => {
                app.step_selected_up();
            }
            KeyCode::Left | KeyCode::Char('-') => {
                app.step_selected_down();
            }

            KeyCode::Char('r') => {
                app.reset();
            }
            KeyCode::Char('d') => {
                app.toggle_switch_sizing();
            }
            KeyCode::Char('l') => {
                app.toggle_language();
            }
            KeyCode::Char('e') => {
                app.export();
            }

            KeyCode::Char('?') => {
                app.set_state(InputState::Help);
            }

            // Digits (and a dot for the ratio) start direct entry
            KeyCode::Char(c) => {
                app.push_entry_char(c);
            }

            _ => {}
        }
    }
    Ok(())
}

pub fn handle_key_events_entry(key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    match key_event.code {
        KeyCode::Char(c) => {
            app.push_entry_char(c);
        }
        KeyCode::Backspace => {
            app.pop_entry_char();
        }
        KeyCode::Enter => {
            app.commit_entry();
        }
        KeyCode::Esc => {
            app.cancel_entry();
        }

        _ => {
            app.cancel_entry();
            return handle_key_events_default(key_event, app);
        }
    }
    Ok(())
}

pub fn handle_key_events_help(_key_event: KeyEvent, app: &mut App) -> AppResult<()> {
    app.set_state(InputState::Default);
    Ok(())
}
