use crate::state::AppState;
use crate::types::{CreateOutcome, InputMode, MusicDraft, MusicField, Screen};
use std::time::{Duration, Instant};

/// Delay between an accepted create and the navigate-away, matching the
/// original console's one-second redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(1);

/// State-changing actions. Input handling produces actions; `apply_action`
/// is the single place where form and view state mutate, which keeps the
/// field semantics testable without a terminal.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    SwitchScreen(Screen),
    SetInputMode(InputMode),

    // Music form
    SelectFieldUp,
    SelectFieldDown,
    StartFieldEdit,
    AppendToEditBuffer(String),
    BackspaceEditBuffer,
    CancelFieldEdit,
    SetMusicField(MusicField, String),
    PickerUp,
    PickerDown,
    /// Confirm the highlighted licensor in the picker popup.
    ConfirmLicensorPick,
    ApplyCreateOutcome(CreateOutcome),
    SetFormStatus(String),

    // Invoice id modal
    AppendToInvoiceIdInput(String),
    BackspaceInvoiceIdInput,
    ClearInvoiceIdInput,

    // Token modal
    AppendToTokenInput(String),
    BackspaceTokenInput,
    ClearTokenInput,
    SetAuthToken(String),
    ClearAuthToken,

    // Invoice view feedback
    SetInvoiceNotice(String),
    PrintScrollUp,
    PrintScrollDown,
}

/// Apply an action to the application state.
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::SwitchScreen(screen) => {
            state.screen = screen;
            state.input_mode = InputMode::Normal;
        }
        AppAction::SetInputMode(mode) => {
            state.input_mode = mode;
        }

        AppAction::SelectFieldUp => {
            state.form.selected_field = state.form.selected_field.saturating_sub(1);
        }
        AppAction::SelectFieldDown => {
            if state.form.selected_field + 1 < MusicField::ALL.len() {
                state.form.selected_field += 1;
            }
        }
        AppAction::StartFieldEdit => {
            state.form.edit_buffer = current_field_value(state).to_string();
            state.input_mode = InputMode::EditingField;
        }
        AppAction::AppendToEditBuffer(text) => {
            state.form.edit_buffer.push_str(&text);
        }
        AppAction::BackspaceEditBuffer => {
            state.form.edit_buffer.pop();
        }
        AppAction::CancelFieldEdit => {
            state.form.edit_buffer.clear();
            state.input_mode = InputMode::Normal;
        }
        AppAction::SetMusicField(field, value) => {
            set_music_field(state, field, value);
        }
        AppAction::PickerUp => {
            state.form.picker_index = state.form.picker_index.saturating_sub(1);
        }
        AppAction::PickerDown => {
            if state.form.picker_index + 1 < state.catalog.licensors.len() {
                state.form.picker_index += 1;
            }
        }
        AppAction::ConfirmLicensorPick => {
            let name = state
                .catalog
                .licensors
                .get(state.form.picker_index)
                .map(|l| l.licensor_name.clone())
                .unwrap_or_default();
            set_music_field(state, MusicField::Licensor, name);
            state.input_mode = InputMode::Normal;
        }
        AppAction::ApplyCreateOutcome(outcome) => match outcome {
            CreateOutcome::Accepted(message) => {
                state.form.status = message;
                state.form.draft = MusicDraft::default();
                state.form.submitting = false;
                state.form.redirect_at = Some(Instant::now() + REDIRECT_DELAY);
            }
            CreateOutcome::Rejected(message) => {
                // Surface the server message verbatim; the draft stays so the
                // operator can correct it.
                state.form.status = message;
                state.form.submitting = false;
            }
        },
        AppAction::SetFormStatus(message) => {
            state.form.status = message;
        }

        AppAction::AppendToInvoiceIdInput(text) => {
            state.inputs.invoice_id.push_str(&text);
        }
        AppAction::BackspaceInvoiceIdInput => {
            state.inputs.invoice_id.pop();
        }
        AppAction::ClearInvoiceIdInput => {
            state.inputs.invoice_id.clear();
        }

        AppAction::AppendToTokenInput(text) => {
            state.inputs.token.push_str(&text);
        }
        AppAction::BackspaceTokenInput => {
            state.inputs.token.pop();
        }
        AppAction::ClearTokenInput => {
            state.inputs.token.clear();
        }
        AppAction::SetAuthToken(token) => {
            state.auth.token = Some(token);
            state.inputs.token.clear();
            state.input_mode = InputMode::Normal;
        }
        AppAction::ClearAuthToken => {
            state.auth.token = None;
            state.input_mode = InputMode::Normal;
        }

        AppAction::SetInvoiceNotice(notice) => {
            state.invoice.notice = notice;
        }
        AppAction::PrintScrollUp => {
            state.invoice.print_scroll = state.invoice.print_scroll.saturating_sub(2);
        }
        AppAction::PrintScrollDown => {
            state.invoice.print_scroll = state.invoice.print_scroll.saturating_add(2);
        }
    }
}

/// Write a value into the draft. Setting the licensor name also resolves the
/// paired id against the loaded reference list; no match (including a list
/// that is still loading) leaves the id empty.
fn set_music_field(state: &mut AppState, field: MusicField, value: String) {
    match field {
        MusicField::Licensor => {
            state.form.draft.licensor_id = state
                .catalog
                .licensors
                .iter()
                .find(|l| l.licensor_name == value)
                .map(|l| l.id.clone())
                .unwrap_or_default();
            state.form.draft.licensor_name = value;
        }
        MusicField::MusicId => state.form.draft.music_id = value,
        MusicField::MusicName => state.form.draft.music_name = value,
        MusicField::Email => state.form.draft.music_email = value,
        MusicField::Commission => state.form.draft.commission = value,
        MusicField::Logo => state.form.draft.music_logo = value,
    }
}

fn current_field_value(state: &AppState) -> &str {
    match state.selected_field() {
        MusicField::Licensor => &state.form.draft.licensor_name,
        MusicField::MusicId => &state.form.draft.music_id,
        MusicField::MusicName => &state.form.draft.music_name,
        MusicField::Email => &state.form.draft.music_email,
        MusicField::Commission => &state.form.draft.commission,
        // Editing the logo field starts from a fresh path, not the data URI.
        MusicField::Logo => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Licensor;

    fn state_with_licensors() -> AppState {
        let mut state = AppState::default();
        state.catalog.licensors = vec![
            Licensor {
                id: "abc123".to_string(),
                licensor_name: "Northwind Rights".to_string(),
            },
            Licensor {
                id: "def456".to_string(),
                licensor_name: "Contoso Music".to_string(),
            },
        ];
        state.catalog.loading = crate::types::LoadingState::Loaded;
        state
    }

    #[test]
    fn selecting_licensor_resolves_paired_id() {
        let mut state = state_with_licensors();
        apply_action(
            AppAction::SetMusicField(MusicField::Licensor, "Contoso Music".to_string()),
            &mut state,
        );
        assert_eq!(state.form.draft.licensor_name, "Contoso Music");
        assert_eq!(state.form.draft.licensor_id, "def456");
    }

    #[test]
    fn unknown_licensor_name_leaves_id_empty() {
        let mut state = state_with_licensors();
        apply_action(
            AppAction::SetMusicField(MusicField::Licensor, "Nobody".to_string()),
            &mut state,
        );
        assert_eq!(state.form.draft.licensor_name, "Nobody");
        assert_eq!(state.form.draft.licensor_id, "");
    }

    #[test]
    fn selecting_while_list_still_loading_keeps_id_empty() {
        // Reference list not yet fetched: resolution must not panic and the
        // id stays empty.
        let mut state = AppState::default();
        apply_action(
            AppAction::SetMusicField(MusicField::Licensor, "Northwind Rights".to_string()),
            &mut state,
        );
        assert_eq!(state.form.draft.licensor_name, "Northwind Rights");
        assert_eq!(state.form.draft.licensor_id, "");
    }

    #[test]
    fn confirm_pick_uses_highlighted_row() {
        let mut state = state_with_licensors();
        state.form.picker_index = 1;
        state.input_mode = InputMode::PickingLicensor;
        apply_action(AppAction::ConfirmLicensorPick, &mut state);
        assert_eq!(state.form.draft.licensor_name, "Contoso Music");
        assert_eq!(state.form.draft.licensor_id, "def456");
        assert_eq!(state.input_mode, InputMode::Normal);
    }

    #[test]
    fn rejected_create_shows_message_and_keeps_draft() {
        let mut state = state_with_licensors();
        state.form.draft.music_name = "Summer Hits".to_string();
        state.form.submitting = true;

        apply_action(
            AppAction::ApplyCreateOutcome(CreateOutcome::Rejected("X".to_string())),
            &mut state,
        );

        assert_eq!(state.form.status, "X");
        assert_eq!(state.form.draft.music_name, "Summer Hits");
        assert!(!state.form.submitting);
        assert!(state.form.redirect_at.is_none());
    }

    #[test]
    fn accepted_create_resets_draft_and_schedules_redirect() {
        let mut state = state_with_licensors();
        state.form.draft.music_name = "Summer Hits".to_string();
        state.form.draft.licensor_id = "abc123".to_string();
        state.form.submitting = true;

        apply_action(
            AppAction::ApplyCreateOutcome(CreateOutcome::Accepted("Music created".to_string())),
            &mut state,
        );

        assert_eq!(state.form.status, "Music created");
        assert_eq!(state.form.draft, MusicDraft::default());
        assert!(state.form.redirect_at.is_some());
    }

    #[test]
    fn field_navigation_stays_in_bounds() {
        let mut state = AppState::default();
        apply_action(AppAction::SelectFieldUp, &mut state);
        assert_eq!(state.form.selected_field, 0);

        for _ in 0..20 {
            apply_action(AppAction::SelectFieldDown, &mut state);
        }
        assert_eq!(state.form.selected_field, MusicField::ALL.len() - 1);
    }

    #[test]
    fn start_edit_seeds_buffer_from_draft() {
        let mut state = AppState::default();
        state.form.draft.music_name = "Winter Mix".to_string();
        state.form.selected_field = 2; // MusicName
        apply_action(AppAction::StartFieldEdit, &mut state);
        assert_eq!(state.form.edit_buffer, "Winter Mix");
        assert_eq!(state.input_mode, InputMode::EditingField);
    }
}
