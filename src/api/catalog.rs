//! Background tasks for the music form: licensor list fetch and create
//! submission.

use super::{ApiClient, CreateError};
use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crate::types::{CreateOutcome, LoadingState};
use crate::utils::log_debug;
use std::sync::{Arc, RwLock};

/// Spawn a task that loads the licensor reference list for the picker.
pub fn fetch_licensors_background(state: Arc<RwLock<AppState>>, client: ApiClient) {
    if let Ok(mut s) = state.write() {
        s.catalog.loading = LoadingState::Loading;
    }

    tokio::spawn(async move {
        match client.licensors().await {
            Ok(licensors) => {
                if let Ok(mut s) = state.write() {
                    s.catalog.licensors = licensors;
                    s.catalog.loading = LoadingState::Loaded;
                }
            }
            Err(e) => {
                log_debug(&format!("licensor list fetch failed: {e}"));
                if let Ok(mut s) = state.write() {
                    s.catalog.loading = LoadingState::Error(e);
                }
            }
        }
    });
}

/// Spawn a task that posts the current draft.
///
/// A server-reported message (acceptance or rejection) lands in the form
/// status line via the reducer; transport failures are logged only, leaving
/// the draft and status untouched.
pub fn submit_music_background(state: Arc<RwLock<AppState>>, client: ApiClient) {
    let draft = {
        let Ok(mut s) = state.write() else { return };
        if s.form.submitting {
            // Key autorepeat would re-post the same draft; debounce while
            // one submission is visibly pending.
            return;
        }
        s.form.submitting = true;
        s.form.draft.clone()
    };

    tokio::spawn(async move {
        match client.create_music(&draft).await {
            Ok(message) => {
                if let Ok(mut s) = state.write() {
                    apply_action(
                        AppAction::ApplyCreateOutcome(CreateOutcome::Accepted(message)),
                        &mut s,
                    );
                }
            }
            Err(CreateError::Server(message)) => {
                if let Ok(mut s) = state.write() {
                    apply_action(
                        AppAction::ApplyCreateOutcome(CreateOutcome::Rejected(message)),
                        &mut s,
                    );
                }
            }
            Err(CreateError::Transport(e)) => {
                log_debug(&format!("music create failed: {e}"));
                if let Ok(mut s) = state.write() {
                    s.form.submitting = false;
                }
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pending_submission_debounces_a_second_submit() {
        let state = Arc::new(RwLock::new(AppState::default()));
        {
            let mut s = state.write().unwrap();
            s.form.submitting = true;
            s.form.draft.music_name = "Fields of Gold".to_string();
            s.form.status = "pending".to_string();
        }

        // Early return before the task spawns; nothing reaches the wire.
        let client = ApiClient::new("http://127.0.0.1:1", None);
        submit_music_background(Arc::clone(&state), client);

        let s = state.read().unwrap();
        assert!(s.form.submitting);
        assert_eq!(s.form.draft.music_name, "Fields of Gold");
        assert_eq!(s.form.status, "pending");
    }
}
