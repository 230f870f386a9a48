//! Main panel rendering
//!
//! - Form panel: topic and perspective inputs
//! - Results panel: loading spinner, formatted result or inline error

use super::styling::{self, SPINNER_FRAMES};
use crate::editor::TextInput;
use crate::format::Document;
use crate::state::AppState;
use crate::types::{FormField, InputMode, LoadingState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the topic and perspective inputs
pub fn render_form_panel(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(3)])
        .split(area);

    let editing = match state.ui.input_mode {
        InputMode::Editing(field) => Some(field),
        _ => None,
    };

    render_input(
        frame,
        chunks[0],
        "[t] Debate topic",
        &state.form.topic,
        editing == Some(FormField::Topic),
    );

    let perspective_title = format!("[p] {}", state.ui.current_mode.perspective_label());
    render_input(
        frame,
        chunks[1],
        &perspective_title,
        &state.form.perspective,
        editing == Some(FormField::Perspective),
    );
}

fn render_input(frame: &mut Frame, area: Rect, title: &str, input: &TextInput, active: bool) {
    let border_color = if active {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    // keep the cursor in view for long inputs
    let column = input.cursor_column();
    let offset = column.saturating_sub(inner.width.saturating_sub(1) as usize);

    let paragraph = Paragraph::new(input.content().to_string())
        .style(if active {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::White)
        })
        .scroll((0, offset as u16))
        .block(block);
    frame.render_widget(paragraph, area);

    if active {
        frame.set_cursor_position((inner.x + (column - offset) as u16, inner.y));
    }
}

/// Render the results panel for the current loading state
///
/// Returns the largest useful scroll offset for the result at this size,
/// counting wrapped rows. The offset applied here is clamped to it as well.
pub fn render_results_panel(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    spinner_index: usize,
) -> u16 {
    let has_result = state.analysis.document.is_some();
    let title = if has_result {
        "Results (y: copy, d: download)"
    } else {
        "Results"
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()));

    match &state.analysis.loading {
        LoadingState::Loading => {
            let loading_text = format!(
                "{} Analyzing debate...\n\nPlease wait...",
                SPINNER_FRAMES[spinner_index]
            );
            let loading = Paragraph::new(loading_text)
                .style(Style::default().fg(Color::Yellow))
                .block(block);
            frame.render_widget(loading, area);
            0
        }
        LoadingState::Error(detail) => {
            frame.render_widget(error_block(detail).block(block), area);
            0
        }
        LoadingState::Success | LoadingState::Idle => match &state.analysis.document {
            Some(document) => {
                let inner = block.inner(area);
                let paragraph =
                    Paragraph::new(document_to_text(document)).wrap(Wrap { trim: false });

                let rows = paragraph.line_count(inner.width);
                let max_scroll = rows
                    .saturating_sub(inner.height as usize)
                    .min(u16::MAX as usize) as u16;

                let paragraph = paragraph
                    .scroll((state.ui.results_scroll.min(max_scroll), 0))
                    .block(block);
                frame.render_widget(paragraph, area);
                max_scroll
            }
            None => {
                let hint = Paragraph::new(
                    "Enter a debate topic with [t], pick a mode, then press Enter to analyze.",
                )
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: true })
                .block(block);
                frame.render_widget(hint, area);
                0
            }
        },
    }
}

/// Inline error shown in place of results
fn error_block(detail: &str) -> Paragraph<'static> {
    let text = Text::from(vec![
        Line::from(Span::styled(
            "⚠",
            Style::default()
                .fg(styling::error_color())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Error analyzing debate. Please try again later.",
            Style::default().fg(styling::error_color()),
        )),
        Line::from(""),
        Line::from(Span::styled(
            detail.to_string(),
            Style::default().fg(styling::muted_color()),
        )),
    ]);

    Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Convert a formatted document into styled terminal text
pub fn document_to_text(document: &Document) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = Vec::new();

    for (i, paragraph) in document.paragraphs.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }

        for line in &paragraph.lines {
            let spans: Vec<Span<'static>> = line
                .runs
                .iter()
                .map(|run| {
                    let mut style = Style::default();
                    if run.strong {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                    if run.emphasis {
                        style = style.add_modifier(Modifier::ITALIC);
                    }
                    Span::styled(run.text.clone(), style)
                })
                .collect();
            lines.push(Line::from(spans));
        }
    }

    Text::from(lines)
}
