//! Music creation form panel.

use super::styling::{label_style, value_style, SPINNER};
use crate::state::AppState;
use crate::types::{InputMode, LoadingState, MusicField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_music_screen(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let block = Block::default().title("Create Music").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // fields
            Constraint::Length(2), // status line
        ])
        .split(inner);

    let mut lines: Vec<Line> = Vec::new();
    for (index, field) in MusicField::ALL.iter().enumerate() {
        let selected = index == state.form.selected_field;
        let editing = selected && state.input_mode == InputMode::EditingField;

        let marker = if selected { "> " } else { "  " };
        let value = if editing {
            format!("{}_", state.form.edit_buffer)
        } else {
            field_display(state, *field)
        };

        let value_span = if editing {
            Span::styled(value, Style::default().fg(Color::Yellow))
        } else if selected {
            Span::styled(value, value_style().fg(Color::Cyan))
        } else {
            Span::styled(value, value_style())
        };

        lines.push(Line::from(vec![
            Span::styled(
                format!("{marker}{:<16}", field.label()),
                if selected {
                    label_style().add_modifier(Modifier::BOLD)
                } else {
                    label_style()
                },
            ),
            value_span,
        ]));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let status = if state.form.submitting {
        Line::from(Span::styled(
            format!("{} Submitting...", SPINNER[spinner_index]),
            Style::default().fg(Color::Yellow),
        ))
    } else if state.form.logo_reading {
        Line::from(Span::styled(
            format!("{} Reading logo file...", SPINNER[spinner_index]),
            Style::default().fg(Color::Yellow),
        ))
    } else {
        // Server message, shown verbatim (acceptance or rejection).
        Line::from(Span::styled(
            state.form.status.clone(),
            Style::default().fg(Color::White),
        ))
    };
    frame.render_widget(Paragraph::new(status), chunks[1]);
}

fn field_display(state: &AppState, field: MusicField) -> String {
    let draft = &state.form.draft;
    match field {
        MusicField::Licensor => match &state.catalog.loading {
            LoadingState::Loading => "loading licensors...".to_string(),
            LoadingState::Error(e) => format!("licensors unavailable: {e}"),
            _ if draft.licensor_name.is_empty() => "Select Licensor".to_string(),
            _ => {
                if draft.licensor_id.is_empty() {
                    draft.licensor_name.clone()
                } else {
                    format!("{} ({})", draft.licensor_name, draft.licensor_id)
                }
            }
        },
        MusicField::MusicId => placeholder_or(&draft.music_id, "Enter music id"),
        MusicField::MusicName => placeholder_or(&draft.music_name, "Enter music name"),
        MusicField::Email => placeholder_or(&draft.music_email, "Enter email"),
        MusicField::Commission => placeholder_or(&draft.commission, "Enter commission"),
        MusicField::Logo => {
            if draft.music_logo.is_empty() {
                "Enter a .png/.jpg path".to_string()
            } else {
                // Data URIs are huge; show a stub.
                let prefix: String = draft.music_logo.chars().take(28).collect();
                format!("{prefix}... ({} bytes)", draft.music_logo.len())
            }
        }
    }
}

fn placeholder_or(value: &str, placeholder: &str) -> String {
    if value.is_empty() {
        placeholder.to_string()
    } else {
        value.to_string()
    }
}
