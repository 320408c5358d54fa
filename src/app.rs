use crate::actions::{apply_action, AppAction};
use crate::api::{self, ApiClient};
use crate::config::Config;
use crate::export;
use crate::state::AppState;
use crate::types::{InputMode, Screen};
use crate::ui::{self, draw, Command};
use crate::utils::log_debug;
use color_eyre::Result;
use ratatui::{
    layout::{Constraint, Direction, Layout},
    DefaultTerminal, Frame,
};
use std::path::PathBuf;
use std::sync::{Arc, RwLock};
use std::time::Instant;

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    config: Config,
    event_handler: ui::EventHandler,
    spinner_index: usize,
    last_tick: Instant,
}

impl App {
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        if let Err(e) = crate::config::validate_url(&config.base_url()) {
            return Err(color_eyre::eyre::eyre!("Invalid base URL in config: {e}"));
        }

        let mut state = AppState::default();
        state.auth.token = config.auth.token.clone();

        Ok(Self {
            state: Arc::new(RwLock::new(state)),
            config,
            event_handler: ui::EventHandler::new(),
            spinner_index: 0,
            last_tick: Instant::now(),
        })
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed().as_millis() > 100 {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            self.apply_pending_redirect();

            terminal.draw(|frame| self.draw(frame))?;

            let commands = self
                .event_handler
                .handle_events(Arc::clone(&self.state), &self.config)?;
            for command in commands {
                self.dispatch(command)?;
            }
        }

        Ok(())
    }

    /// Client for the next background task; picks up the current token so a
    /// token change applies to subsequent actions, not in-flight ones.
    fn client(&self) -> ApiClient {
        let token = self
            .state
            .read()
            .ok()
            .and_then(|s| s.auth.token.clone());
        ApiClient::new(self.config.base_url(), token)
    }

    fn dispatch(&mut self, command: Command) -> Result<()> {
        match command {
            Command::FetchInvoice(id) => {
                api::invoices::fetch_invoice_background(Arc::clone(&self.state), self.client(), id);
            }
            Command::DownloadPdf => {
                let invoice_number = self
                    .state
                    .read()
                    .ok()
                    .and_then(|s| s.invoice.record.as_ref().map(|r| r.invoice_number.clone()));
                if let Some(invoice_number) = invoice_number {
                    api::invoices::download_pdf_background(
                        Arc::clone(&self.state),
                        self.client(),
                        invoice_number,
                        self.config.download_dir(),
                    );
                }
            }
            Command::FetchLicensors => {
                api::catalog::fetch_licensors_background(Arc::clone(&self.state), self.client());
            }
            Command::SubmitMusic => {
                api::catalog::submit_music_background(Arc::clone(&self.state), self.client());
            }
            Command::ReadLogo(path) => {
                read_logo_background(Arc::clone(&self.state), path);
            }
            Command::PersistToken(token) => {
                self.config.set_token(token)?;
            }
        }
        Ok(())
    }

    /// An accepted create navigates back to the invoice screen after the
    /// fixed delay; the deadline lives in form state and fires here.
    fn apply_pending_redirect(&self) {
        let due = self
            .state
            .read()
            .ok()
            .and_then(|s| s.form.redirect_at)
            .map(|at| at <= Instant::now())
            .unwrap_or(false);

        if due {
            if let Ok(mut s) = self.state.write() {
                s.form.redirect_at = None;
                apply_action(AppAction::SwitchScreen(Screen::Invoice), &mut s);
            }
        }
    }

    fn draw(&mut self, frame: &mut Frame) {
        let state = match self.state.read() {
            Ok(s) => s.clone(),
            Err(_) => return,
        };

        // Header, body, footer
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ])
            .split(frame.area());

        draw::render_header(frame, chunks[0], &self.config.base_url(), &state);

        match state.screen {
            Screen::Invoice => {
                draw::invoice::render_invoice_screen(frame, chunks[1], &state, self.spinner_index);
            }
            Screen::CreateMusic => {
                draw::music::render_music_screen(frame, chunks[1], &state, self.spinner_index);
            }
        }

        draw::render_footer(frame, chunks[2], &state);

        // Modals render last, over everything else.
        match state.input_mode {
            InputMode::EnteringInvoiceId => draw::modals::render_invoice_id_modal(frame, &state),
            InputMode::EnteringToken => draw::modals::render_token_modal(frame, &state),
            InputMode::ConfirmClearToken => draw::modals::render_clear_token_modal(frame),
            InputMode::PickingLicensor => draw::modals::render_licensor_picker(frame, &state),
            InputMode::PrintPreview => draw::modals::render_print_preview(frame, &state),
            InputMode::Normal | InputMode::EditingField => {}
        }
    }
}

/// Read the picked logo file and embed it in the draft as a base64 data URI.
/// Runs in the background like every network call.
fn read_logo_background(state: Arc<RwLock<AppState>>, path: PathBuf) {
    if let Ok(mut s) = state.write() {
        s.form.logo_reading = true;
    }

    tokio::spawn(async move {
        let result = match tokio::fs::read(&path).await {
            Ok(bytes) => export::logo_data_uri(&path, &bytes),
            Err(e) => Err(format!("Cannot read {}: {e}", path.display())),
        };

        if let Ok(mut s) = state.write() {
            s.form.logo_reading = false;
            match result {
                Ok(data_uri) => {
                    apply_action(
                        AppAction::SetMusicField(crate::types::MusicField::Logo, data_uri),
                        &mut s,
                    );
                }
                Err(e) => {
                    log_debug(&format!("logo embed failed: {e}"));
                    apply_action(AppAction::SetFormStatus(e), &mut s);
                }
            }
        }
    });
}
