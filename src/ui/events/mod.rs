//! Event handling: polls the terminal, translates keys into `AppAction`s
//! applied to shared state, and returns `Command`s for work the app must
//! spawn (network calls, file reads, config persistence).
//!
//! Lock discipline: read the input mode once, drop the guard, then dispatch.
//! Handlers re-acquire the lock for the short sections that mutate state.

mod helpers;
mod invoice;
mod modals;
mod music;

pub use helpers::{apply, collect_paste_batch};

use crate::actions::AppAction;
use crate::config::Config;
use crate::state::AppState;
use crate::types::{InputMode, LoadingState, Screen};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Deferred work the render loop dispatches after event handling. Network
/// and file operations never run on the event path itself.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    FetchInvoice(String),
    DownloadPdf,
    FetchLicensors,
    SubmitMusic,
    ReadLogo(PathBuf),
    PersistToken(Option<String>),
}

#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_events(
        &mut self,
        state: Arc<RwLock<AppState>>,
        config: &Config,
    ) -> Result<Vec<Command>> {
        let mut commands = Vec::new();

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                let input_mode = state
                    .read()
                    .map(|s| s.input_mode.clone())
                    .unwrap_or(InputMode::Normal);

                match input_mode {
                    InputMode::EnteringInvoiceId => {
                        modals::handle_invoice_id_input(key, &state, &mut commands);
                    }
                    InputMode::EnteringToken => {
                        modals::handle_token_input(key, &state, &mut commands);
                    }
                    InputMode::ConfirmClearToken => {
                        modals::handle_clear_confirmation(key, &state, &mut commands);
                    }
                    InputMode::EditingField => {
                        music::handle_field_edit(key, &state, &mut commands);
                    }
                    InputMode::PickingLicensor => {
                        music::handle_picker(key, &state);
                    }
                    InputMode::PrintPreview => {
                        invoice::handle_print_preview(key, &state, &config.download_dir());
                    }
                    InputMode::Normal => {
                        self.handle_normal_mode(key, &state, config, &mut commands);
                    }
                }
            }
        }

        Ok(commands)
    }

    fn handle_normal_mode(
        &mut self,
        key: crossterm::event::KeyEvent,
        state: &Arc<RwLock<AppState>>,
        config: &Config,
        commands: &mut Vec<Command>,
    ) {
        match key.code {
            KeyCode::Char('q') => {
                self.should_quit = true;
            }
            KeyCode::Char('1') => {
                apply(state, AppAction::SwitchScreen(Screen::Invoice));
            }
            KeyCode::Char('2') => {
                apply(state, AppAction::SwitchScreen(Screen::CreateMusic));
                // Load the reference list on entering the form; a failed
                // load is re-attempted next time the screen opens.
                let needs_fetch = state
                    .read()
                    .map(|s| {
                        matches!(
                            s.catalog.loading,
                            LoadingState::Idle | LoadingState::Error(_)
                        )
                    })
                    .unwrap_or(false);
                if needs_fetch {
                    commands.push(Command::FetchLicensors);
                }
            }
            KeyCode::Char('a') => {
                apply(state, AppAction::SetInputMode(InputMode::EnteringToken));
            }
            _ => {
                let screen = state.read().map(|s| s.screen).unwrap_or(Screen::Invoice);
                match screen {
                    Screen::Invoice => {
                        invoice::handle_normal_key(key, state, &config.company_name(), commands);
                    }
                    Screen::CreateMusic => {
                        music::handle_normal_key(key, state, commands);
                    }
                }
            }
        }
    }
}
