//! Modal dialog rendering: invoice id entry, token entry, clear-token
//! confirmation, the licensor picker, and the print preview.

use crate::export;
use crate::state::AppState;
use crate::types::LoadingState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Centered modal area sized as a fraction of the frame.
fn modal_area(frame: &Frame, width_pct: f32, max_width: u16, height: u16) -> Rect {
    let area = frame.area();
    let width = ((area.width as f32 * width_pct) as u16).min(max_width);
    Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height: height.min(area.height),
    }
}

fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White))
}

fn render_text_input_modal(frame: &mut Frame, title: &str, label: &str, value: &str, help: &str) {
    let area = modal_area(frame, 0.6, 80, 7);
    frame.render_widget(Clear, area);

    let block = modal_block(title, Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(label.to_string()).style(Style::default().fg(Color::LightCyan)),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(format!("{value}_")).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(help.to_string())
            .style(Style::default().fg(Color::Rgb(150, 150, 150)))
            .alignment(Alignment::Center),
        chunks[3],
    );
}

pub fn render_invoice_id_modal(frame: &mut Frame, state: &AppState) {
    render_text_input_modal(
        frame,
        " Open Invoice ",
        "Invoice id:",
        &state.inputs.invoice_id,
        "Enter: Fetch  |  Ctrl+L: Clear  |  Esc: Cancel",
    );
}

pub fn render_token_modal(frame: &mut Frame, state: &AppState) {
    render_text_input_modal(
        frame,
        " Enter Bearer Token ",
        "Token:",
        &state.inputs.token,
        "Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel",
    );
}

pub fn render_clear_token_modal(frame: &mut Frame) {
    let area = modal_area(frame, 0.5, 60, 7);
    frame.render_widget(Clear, area);

    let block = modal_block(" Clear Token? ", Color::Red);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new("This removes the saved authentication token.\nRequests will be sent unauthenticated.")
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new("y: Clear  |  n/Esc: Keep")
            .style(Style::default().fg(Color::Rgb(150, 150, 150)))
            .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Licensor picker over the music form. Selection by name; the paired id is
/// resolved by the reducer when the pick is confirmed.
pub fn render_licensor_picker(frame: &mut Frame, state: &AppState) {
    let height = (state.catalog.licensors.len() as u16 + 4).clamp(6, 18);
    let area = modal_area(frame, 0.5, 60, height);
    frame.render_widget(Clear, area);

    let block = modal_block(" Select Licensor ", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.catalog.loading {
        LoadingState::Loading | LoadingState::Idle => {
            frame.render_widget(
                Paragraph::new("Loading licensors...").style(Style::default().fg(Color::Yellow)),
                inner,
            );
        }
        LoadingState::Error(e) => {
            frame.render_widget(
                Paragraph::new(format!("Could not load licensors:\n{e}"))
                    .style(Style::default().fg(Color::Red)),
                inner,
            );
        }
        LoadingState::Loaded => {
            if state.catalog.licensors.is_empty() {
                frame.render_widget(Paragraph::new("No licensors found"), inner);
                return;
            }

            let items: Vec<ListItem> = state
                .catalog
                .licensors
                .iter()
                .map(|l| ListItem::new(l.licensor_name.clone()))
                .collect();

            let list = List::new(items)
                .highlight_style(
                    Style::default()
                        .bg(Color::DarkGray)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol(">> ");

            let mut list_state = ListState::default();
            list_state.select(Some(
                state
                    .form
                    .picker_index
                    .min(state.catalog.licensors.len() - 1),
            ));
            frame.render_stateful_widget(list, inner, &mut list_state);
        }
    }
}

/// Print preview of the fetched invoice, scrollable, writable to a file.
pub fn render_print_preview(frame: &mut Frame, state: &AppState) {
    let Some(invoice) = &state.invoice.record else {
        return;
    };

    let frame_area = frame.area();
    let area = Rect {
        x: frame_area.width / 10,
        y: 2,
        width: frame_area.width - frame_area.width / 5,
        height: frame_area.height.saturating_sub(4),
    };
    frame.render_widget(Clear, area);

    let block = modal_block(" Print Preview ", Color::Cyan);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let document = export::print_document(invoice);
    let preview = Paragraph::new(document).scroll((state.invoice.print_scroll, 0));
    frame.render_widget(preview, inner);
}
