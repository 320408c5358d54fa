//! Color helpers shared across panels and modals.

use crate::types::LoadingState;
use ratatui::style::Color;

pub fn loading_color(state: &LoadingState) -> Color {
    match state {
        LoadingState::Idle => Color::DarkGray,
        LoadingState::Loading => Color::Yellow,
        LoadingState::Loaded => Color::Green,
        LoadingState::Error(_) => Color::Red,
    }
}

pub fn label_style() -> ratatui::style::Style {
    ratatui::style::Style::default().fg(Color::Gray)
}

pub fn value_style() -> ratatui::style::Style {
    ratatui::style::Style::default()
        .fg(Color::White)
        .add_modifier(ratatui::style::Modifier::BOLD)
}

/// Spinner frames for in-flight background work.
pub const SPINNER: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
