//! Key handling for the music creation form: field navigation, inline text
//! editing, the licensor picker, and submit.

use super::helpers::{apply, collect_paste_batch};
use super::Command;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::{InputMode, MusicField};
use crossterm::event::{KeyCode, KeyEvent};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

pub fn handle_normal_key(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::SelectFieldDown),
        KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::SelectFieldUp),
        KeyCode::Enter => {
            let (field, current_name) = match state.read() {
                Ok(s) => (s.selected_field(), s.form.draft.licensor_name.clone()),
                Err(_) => return,
            };

            if field == MusicField::Licensor {
                // Seed the picker on the current selection when it still
                // exists in the list.
                if let Ok(mut s) = state.write() {
                    s.form.picker_index = s
                        .catalog
                        .licensors
                        .iter()
                        .position(|l| l.licensor_name == current_name)
                        .unwrap_or(0);
                }
                apply(state, AppAction::SetInputMode(InputMode::PickingLicensor));
            } else {
                apply(state, AppAction::StartFieldEdit);
            }
        }
        KeyCode::Char('s') => {
            let submitting = state.read().map(|s| s.form.submitting).unwrap_or(true);
            if !submitting {
                commands.push(Command::SubmitMusic);
            }
        }
        _ => {}
    }
}

pub fn handle_field_edit(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char(c) => {
            apply(state, AppAction::AppendToEditBuffer(collect_paste_batch(c)));
        }
        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceEditBuffer);
        }
        KeyCode::Esc => {
            apply(state, AppAction::CancelFieldEdit);
        }
        KeyCode::Enter => {
            let (field, buffer) = match state.read() {
                Ok(s) => (s.selected_field(), s.form.edit_buffer.clone()),
                Err(_) => return,
            };

            if field == MusicField::Logo {
                // The buffer holds a file path; reading + embedding happens
                // in the background, like every other suspension point.
                if !buffer.trim().is_empty() {
                    commands.push(Command::ReadLogo(PathBuf::from(buffer.trim())));
                }
            } else {
                apply(state, AppAction::SetMusicField(field, buffer));
            }
            apply(state, AppAction::CancelFieldEdit);
        }
        _ => {}
    }
}

pub fn handle_picker(key: KeyEvent, state: &Arc<RwLock<AppState>>) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::PickerDown),
        KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::PickerUp),
        KeyCode::Enter => {
            // With the list still loading (or empty) there is nothing to
            // confirm; just close the popup.
            let has_rows = state
                .read()
                .map(|s| !s.catalog.licensors.is_empty())
                .unwrap_or(false);
            if has_rows {
                apply(state, AppAction::ConfirmLicensorPick);
            } else {
                apply(state, AppAction::SetInputMode(InputMode::Normal));
            }
        }
        KeyCode::Esc => apply(state, AppAction::SetInputMode(InputMode::Normal)),
        _ => {}
    }
}
