//! Key handling for the invoice viewer: open/retry fetches and the three
//! export actions (print preview, email link, PDF download).

use super::helpers::apply;
use super::Command;
use crate::actions::AppAction;
use crate::export;
use crate::state::AppState;
use crate::types::{InputMode, PdfState};
use crate::utils::log_debug;
use arboard::Clipboard;
use crossterm::event::{KeyCode, KeyEvent};
use std::path::Path;
use std::sync::{Arc, RwLock};

pub fn handle_normal_key(
    key: KeyEvent,
    state: &Arc<RwLock<AppState>>,
    company_name: &str,
    commands: &mut Vec<Command>,
) {
    match key.code {
        KeyCode::Char('i') => {
            apply(state, AppAction::SetInputMode(InputMode::EnteringInvoiceId));
        }
        KeyCode::Char('r') => {
            let requested = state
                .read()
                .ok()
                .and_then(|s| s.invoice.requested_id.clone());
            if let Some(id) = requested {
                commands.push(Command::FetchInvoice(id));
            }
        }
        KeyCode::Char('d') => {
            let ready = state
                .read()
                .map(|s| s.invoice.record.is_some() && s.invoice.pdf != PdfState::Requesting)
                .unwrap_or(false);
            if ready {
                commands.push(Command::DownloadPdf);
            }
        }
        KeyCode::Char('e') => {
            copy_email_link(state, company_name);
        }
        KeyCode::Char('p') => {
            let has_record = state.read().map(|s| s.invoice.record.is_some()).unwrap_or(false);
            if has_record {
                if let Ok(mut s) = state.write() {
                    s.invoice.print_scroll = 0;
                }
                apply(state, AppAction::SetInputMode(InputMode::PrintPreview));
            }
        }
        _ => {}
    }
}

pub fn handle_print_preview(key: KeyEvent, state: &Arc<RwLock<AppState>>, download_dir: &Path) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => apply(state, AppAction::PrintScrollDown),
        KeyCode::Char('k') | KeyCode::Up => apply(state, AppAction::PrintScrollUp),
        KeyCode::Char('w') => {
            let record = state.read().ok().and_then(|s| s.invoice.record.clone());
            if let Some(invoice) = record {
                let document = export::print_document(&invoice);
                let notice =
                    match export::save_print_file(download_dir, &invoice.invoice_number, &document)
                    {
                        Ok(path) => format!("Saved {}", path.display()),
                        Err(e) => {
                            log_debug(&format!("print file save failed: {e}"));
                            "Could not write print file".to_string()
                        }
                    };
                apply(state, AppAction::SetInvoiceNotice(notice));
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => {
            apply(state, AppAction::SetInputMode(InputMode::Normal));
        }
        _ => {}
    }
}

/// Build the pre-filled `mailto:` link for the fetched record and put it on
/// the clipboard. There is no portable way to hand it straight to a mail
/// client from a terminal, so the clipboard is the export surface.
fn copy_email_link(state: &Arc<RwLock<AppState>>, company_name: &str) {
    let record = state.read().ok().and_then(|s| s.invoice.record.clone());
    let Some(invoice) = record else {
        return;
    };

    let link = export::mailto_link(&invoice, company_name);

    let notice = match Clipboard::new() {
        Ok(mut clipboard) => match clipboard.set_text(link) {
            Ok(()) => "Email link copied to clipboard".to_string(),
            Err(e) => {
                log_debug(&format!("clipboard write failed: {e}"));
                "Clipboard unavailable".to_string()
            }
        },
        Err(e) => {
            log_debug(&format!("clipboard unavailable: {e}"));
            "Clipboard unavailable".to_string()
        }
    };

    apply(state, AppAction::SetInvoiceNotice(notice));
}
