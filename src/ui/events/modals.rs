//! Key handling for the text-entry modals (invoice id, bearer token) and the
//! clear-token confirmation.

use super::helpers::{apply, collect_paste_batch};
use super::Command;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::InputMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::{Arc, RwLock};

pub fn handle_invoice_id_input(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearInvoiceIdInput);
        }
        KeyCode::Char(c) => {
            apply(state, AppAction::AppendToInvoiceIdInput(collect_paste_batch(c)));
        }
        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceInvoiceIdInput);
        }
        KeyCode::Enter => {
            let id = state
                .read()
                .map(|s| s.inputs.invoice_id.trim().to_string())
                .unwrap_or_default();
            if !id.is_empty() {
                commands.push(Command::FetchInvoice(id));
            }
            apply(state, AppAction::ClearInvoiceIdInput);
            apply(state, AppAction::SetInputMode(InputMode::Normal));
        }
        KeyCode::Esc => {
            apply(state, AppAction::ClearInvoiceIdInput);
            apply(state, AppAction::SetInputMode(InputMode::Normal));
        }
        _ => {}
    }
}

pub fn handle_token_input(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            apply(state, AppAction::ClearTokenInput);
        }
        KeyCode::Char(c) => {
            apply(state, AppAction::AppendToTokenInput(collect_paste_batch(c)));
        }
        KeyCode::Backspace => {
            apply(state, AppAction::BackspaceTokenInput);
        }
        KeyCode::Enter => {
            let (entered, has_token) = state
                .read()
                .map(|s| (s.inputs.token.trim().to_string(), s.auth.token.is_some()))
                .unwrap_or_default();

            if !entered.is_empty() {
                apply(state, AppAction::SetAuthToken(entered.clone()));
                commands.push(Command::PersistToken(Some(entered)));
            } else if has_token {
                // Empty submit over an existing token asks before clearing.
                apply(state, AppAction::SetInputMode(InputMode::ConfirmClearToken));
            } else {
                apply(state, AppAction::SetInputMode(InputMode::Normal));
            }
        }
        KeyCode::Esc => {
            apply(state, AppAction::ClearTokenInput);
            apply(state, AppAction::SetInputMode(InputMode::Normal));
        }
        _ => {}
    }
}

pub fn handle_clear_confirmation(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => {
            apply(state, AppAction::ClearAuthToken);
            commands.push(Command::PersistToken(None));
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            apply(state, AppAction::SetInputMode(InputMode::Normal));
        }
        _ => {}
    }
}
