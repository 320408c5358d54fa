//! Small shared helpers for event handling.

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use std::sync::{Arc, RwLock};

/// Apply a single action to shared state.
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    if let Ok(mut s) = state.write() {
        apply_action(action, &mut s);
    }
}

/// Batch a typed character with any immediately queued character events, so
/// pasting into a text field arrives as one action instead of one per key.
pub fn collect_paste_batch(initial_char: char) -> String {
    let mut chars = vec![initial_char];

    while let Ok(true) = event::poll(std::time::Duration::from_millis(0)) {
        if let Ok(Event::Key(next_key)) = event::read() {
            match next_key.code {
                KeyCode::Char(c) if !next_key.modifiers.contains(KeyModifiers::CONTROL) => {
                    chars.push(c);
                }
                _ => break,
            }
        } else {
            break;
        }
    }

    chars.into_iter().collect()
}
