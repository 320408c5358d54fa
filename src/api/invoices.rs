//! Background tasks for the invoice viewer: record fetch and PDF download.

use super::ApiClient;
use crate::export;
use crate::state::AppState;
use crate::types::{LoadingState, PdfState};
use crate::utils::log_debug;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Spawn a task that fetches the invoice record and writes the outcome into
/// shared state. No timeout or de-duplication; a re-fetch while one is
/// pending just races to the last write.
pub fn fetch_invoice_background(state: Arc<RwLock<AppState>>, client: ApiClient, id: String) {
    if let Ok(mut s) = state.write() {
        s.invoice.requested_id = Some(id.clone());
        s.invoice.loading = LoadingState::Loading;
        s.invoice.record = None;
        s.invoice.pdf = PdfState::Idle;
        s.invoice.notice.clear();
    }

    tokio::spawn(async move {
        match client.invoice(&id).await {
            Ok(record) => {
                if let Ok(mut s) = state.write() {
                    s.invoice.record = Some(record);
                    s.invoice.loading = LoadingState::Loaded;
                }
            }
            Err(e) => {
                log_debug(&format!("invoice {id} fetch failed: {e}"));
                if let Ok(mut s) = state.write() {
                    s.invoice.loading = LoadingState::Error(e);
                }
            }
        }
    });
}

/// Spawn a task that requests the server-generated PDF and saves it as
/// `{invoiceNumber}.pdf` in the download directory.
pub fn download_pdf_background(
    state: Arc<RwLock<AppState>>,
    client: ApiClient,
    invoice_number: String,
    download_dir: PathBuf,
) {
    if let Ok(mut s) = state.write() {
        s.invoice.pdf = PdfState::Requesting;
        s.invoice.notice = format!("Requesting PDF for {invoice_number}...");
    }

    tokio::spawn(async move {
        match client.invoice_pdf(&invoice_number).await {
            Ok(bytes) => match export::save_pdf(&download_dir, &invoice_number, &bytes) {
                Ok(path) => {
                    if let Ok(mut s) = state.write() {
                        s.invoice.notice = format!("Saved {}", path.display());
                        s.invoice.pdf = PdfState::Saved(path);
                    }
                }
                Err(e) => {
                    log_debug(&format!("pdf save failed for {invoice_number}: {e}"));
                    if let Ok(mut s) = state.write() {
                        s.invoice.notice = "PDF download failed".to_string();
                        s.invoice.pdf = PdfState::Error(e);
                    }
                }
            },
            Err(e) => {
                log_debug(&format!("pdf request failed for {invoice_number}: {e}"));
                if let Ok(mut s) = state.write() {
                    s.invoice.notice = "PDF download failed".to_string();
                    s.invoice.pdf = PdfState::Error(e);
                }
            }
        }
    });
}
