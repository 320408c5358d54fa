//! Invoice viewer panel: a fixed-layout summary of the fetched record plus
//! export feedback. The monetary fields come straight from the server and
//! are rendered verbatim.

use super::styling::{self, label_style, value_style, SPINNER};
use crate::state::AppState;
use crate::types::{Invoice, LoadingState, PdfState};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_invoice_screen(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let block = Block::default()
        .title("Invoice")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::loading_color(&state.invoice.loading)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    match &state.invoice.loading {
        LoadingState::Idle => {
            let hint = Paragraph::new("No invoice open.\n\nPress [i] and enter an invoice id.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(hint, inner);
        }
        LoadingState::Loading => {
            let id = state.invoice.requested_id.as_deref().unwrap_or("");
            let loading = Paragraph::new(format!(
                "{} Fetching invoice {id}\n\nPlease wait...",
                SPINNER[spinner_index]
            ))
            .style(Style::default().fg(Color::Yellow));
            frame.render_widget(loading, inner);
        }
        LoadingState::Error(error) => {
            let message = Paragraph::new(format!("❌ {error}\n\nPress [r] to retry"))
                .style(Style::default().fg(Color::Red));
            frame.render_widget(message, inner);
        }
        LoadingState::Loaded => {
            if let Some(invoice) = &state.invoice.record {
                let paragraph = Paragraph::new(summary_lines(invoice, state));
                frame.render_widget(paragraph, inner);
            }
        }
    }
}

fn field(label: &str, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<20}"), label_style()),
        Span::styled(value.to_string(), value_style()),
    ])
}

fn section_break() -> Line<'static> {
    Line::from(Span::styled(
        "─".repeat(56),
        Style::default().fg(Color::DarkGray),
    ))
}

/// The fixed preview layout of the original console: parties, banking
/// details, channel, addresses, then the totals block.
fn summary_lines(invoice: &Invoice, state: &AppState) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            invoice.invoice_number.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Status: {}", invoice.status),
            Style::default().fg(Color::Gray),
        )),
        section_break(),
        field("Licensor", &invoice.licensor_name),
        field("Partner Name", &invoice.partner_name),
        field("Preferred currency", &invoice.currency),
        section_break(),
        field("Account Number", &invoice.acc_num),
        field("IFSC", &invoice.ifsc),
        field("IBAN", &invoice.iban),
        section_break(),
        field("Channel ID", &invoice.channel_id),
        field("Channel Name", &invoice.channel_name),
        field("Invoice Date", &invoice.date),
        section_break(),
        field("Licensor Address", &invoice.licensor_address),
        field("Licensor Email", &invoice.licensor_email),
        field("Channel Email", &invoice.channel_email),
        section_break(),
        field("Total Payout (USD)", &format!("${}", invoice.total_payout)),
        field(
            &format!("Commission {}%", invoice.commission),
            &format!("${}", invoice.commission_amount),
        ),
        field(
            &format!("Total Amount ({})", invoice.currency),
            &format!("{} {}", invoice.currency_symbol(), invoice.payout),
        ),
    ];

    // Export feedback under the record.
    lines.push(Line::default());
    match &state.invoice.pdf {
        PdfState::Requesting => lines.push(Line::from(Span::styled(
            "Generating PDF...",
            Style::default().fg(Color::Yellow),
        ))),
        PdfState::Error(e) => lines.push(Line::from(Span::styled(
            format!("PDF: {e}"),
            Style::default().fg(Color::Red),
        ))),
        PdfState::Idle | PdfState::Saved(_) => {}
    }
    if !state.invoice.notice.is_empty() {
        lines.push(Line::from(Span::styled(
            state.invoice.notice.clone(),
            Style::default().fg(Color::Green),
        )));
    }

    lines
}
