use crate::types::{
    InputMode, Invoice, Licensor, LoadingState, MusicDraft, MusicField, PdfState, Screen,
};
use std::time::Instant;

/// Shared application state behind `Arc<RwLock<_>>`.
///
/// Background tasks write fetch outcomes here; the render loop only reads.
/// Locks are held for short sections and never across an await.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screen,
    pub input_mode: InputMode,
    pub auth: AuthState,
    pub invoice: InvoiceViewState,
    pub catalog: CatalogState,
    pub form: MusicFormState,
    pub inputs: ModalInputs,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            screen: Screen::Invoice,
            input_mode: InputMode::Normal,
            auth: AuthState::default(),
            invoice: InvoiceViewState::default(),
            catalog: CatalogState::default(),
            form: MusicFormState::default(),
            inputs: ModalInputs::default(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub token: Option<String>,
}

/// State of the invoice viewer screen.
#[derive(Debug, Clone)]
pub struct InvoiceViewState {
    /// Last id the operator asked for; kept so retry can re-fetch.
    pub requested_id: Option<String>,
    pub loading: LoadingState,
    pub record: Option<Invoice>,
    pub pdf: PdfState,
    /// One-line feedback for export actions (saved path, clipboard, errors).
    pub notice: String,
    /// Scroll offset inside the print preview modal.
    pub print_scroll: u16,
}

impl Default for InvoiceViewState {
    fn default() -> Self {
        Self {
            requested_id: None,
            loading: LoadingState::Idle,
            record: None,
            pdf: PdfState::Idle,
            notice: String::new(),
            print_scroll: 0,
        }
    }
}

/// Licensor reference list, fetched once for the music form picker.
#[derive(Debug, Clone)]
pub struct CatalogState {
    pub loading: LoadingState,
    pub licensors: Vec<Licensor>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            loading: LoadingState::Idle,
            licensors: Vec::new(),
        }
    }
}

/// State of the music creation form.
#[derive(Debug, Clone)]
pub struct MusicFormState {
    pub draft: MusicDraft,
    /// Index into `MusicField::ALL`.
    pub selected_field: usize,
    /// Buffer for the field currently being edited.
    pub edit_buffer: String,
    pub submitting: bool,
    /// Set while the logo file is being read and embedded.
    pub logo_reading: bool,
    /// Server message (acceptance or validation failure), shown verbatim.
    pub status: String,
    /// When set, the app navigates back to the invoice screen at this
    /// instant (the original console redirected one second after create).
    pub redirect_at: Option<Instant>,
    /// Highlighted row in the licensor picker popup.
    pub picker_index: usize,
}

impl Default for MusicFormState {
    fn default() -> Self {
        Self {
            draft: MusicDraft::default(),
            selected_field: 0,
            edit_buffer: String::new(),
            submitting: false,
            logo_reading: false,
            status: String::new(),
            redirect_at: None,
            picker_index: 0,
        }
    }
}

/// Text buffers for the id/token entry modals.
#[derive(Debug, Clone, Default)]
pub struct ModalInputs {
    pub invoice_id: String,
    pub token: String,
}

impl AppState {
    /// Form field under the cursor.
    pub fn selected_field(&self) -> MusicField {
        MusicField::ALL[self.form.selected_field.min(MusicField::ALL.len() - 1)]
    }
}
