//! Rendering for the console: header/footer chrome, the invoice viewer, the
//! music creation form, and the modals layered on top.

pub mod invoice;
pub mod modals;
pub mod music;
pub mod styling;

use crate::state::AppState;
use crate::types::{InputMode, Screen};
use crate::utils::mask_token;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the header: app name, screen tabs, base URL, auth badge.
pub fn render_header(frame: &mut Frame, area: Rect, base_url: &str, state: &AppState) {
    let tab_style = |screen: Screen| {
        if state.screen == screen {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let auth_badge = match &state.auth.token {
        Some(token) => Span::styled(
            format!("auth: {}", mask_token(token)),
            Style::default().fg(Color::Green),
        ),
        None => Span::styled("no token", Style::default().fg(Color::Red)),
    };

    let line = Line::from(vec![
        Span::styled(
            "royalty-console",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled("[1] Invoices", tab_style(Screen::Invoice)),
        Span::raw("  "),
        Span::styled("[2] Create Music", tab_style(Screen::CreateMusic)),
        Span::raw("  |  "),
        Span::styled(base_url.to_string(), Style::default().fg(Color::Gray)),
        Span::raw("  |  "),
        auth_badge,
    ]);

    let header = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Render the footer with key hints for the active screen and input mode.
pub fn render_footer(frame: &mut Frame, area: Rect, state: &AppState) {
    let hints = match state.input_mode {
        InputMode::EnteringInvoiceId | InputMode::EnteringToken => {
            "Enter: Confirm | Ctrl+L: Clear | Esc: Cancel"
        }
        InputMode::ConfirmClearToken => "y: Clear token | n/Esc: Keep",
        InputMode::EditingField => "Enter: Save field | Esc: Cancel",
        InputMode::PickingLicensor => "↑↓/jk: Move | Enter: Select | Esc: Close",
        InputMode::PrintPreview => "j/k: Scroll | w: Write file | Esc: Close",
        InputMode::Normal => match state.screen {
            Screen::Invoice => {
                "i: Open invoice | p: Print | e: Email link | d: Download PDF | r: Retry | a: Token | q: Quit"
            }
            Screen::CreateMusic => {
                "↑↓/jk: Field | Enter: Edit/Pick | s: Submit | a: Token | q: Quit"
            }
        },
    };

    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Left)
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    frame.render_widget(footer, area);
}
