//! Reusable UI components
//!
//! - Header (title, server, loading status)
//! - Mode panel (analysis mode tabs + description of the active mode)
//! - Footer (command help)
//! - Toast overlay

use super::styling::{self, SPINNER_FRAMES};
use crate::notify::{Toast, ToastPhase};
use crate::types::{AnalysisMode, InputMode, LoadingState};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};
use std::time::Instant;

/// Render the application header with server and loading status
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    base_url: &str,
    loading: &LoadingState,
    spinner_index: usize,
) {
    let status_text = match loading {
        LoadingState::Idle => "Ready".to_string(),
        LoadingState::Loading => format!("{} Analyzing...", SPINNER_FRAMES[spinner_index]),
        LoadingState::Success => "Analysis complete".to_string(),
        LoadingState::Error(_) => "Error".to_string(),
    };

    let header_text = format!("debate assistant - {base_url} [{status_text}]");

    let header = Paragraph::new(header_text)
        .style(Style::default().fg(Color::Cyan))
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(header, area);
}

/// Render the mode tabs with the description of the active mode below
pub fn render_mode_panel(frame: &mut Frame, area: Rect, mode: AnalysisMode) {
    let block = Block::default()
        .title("Mode")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(styling::unfocused_border()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(inner);

    let titles: Vec<Line> = AnalysisMode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| Line::from(format!("[{}] {}", i + 1, m.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .select(mode.index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .divider(" | ");
    frame.render_widget(tabs, chunks[0]);

    // only the active mode's description is visible
    let description = Paragraph::new(mode.description())
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(description, chunks[1]);
}

/// Render the footer with command help for the current input mode
pub fn render_footer(frame: &mut Frame, area: Rect, input_mode: &InputMode) {
    let footer_text = match input_mode {
        InputMode::Normal => {
            "t/p:Edit 1/2/←/→:Mode Enter:Analyze y:Copy d:Download j/k:Scroll ,:Server q:Quit"
        }
        InputMode::Editing(_) => "Enter:Analyze Tab:Next field Ctrl+W:Delete word Ctrl+L:Clear Esc:Done",
        InputMode::EnteringUrl => "Enter:Save Ctrl+L:Clear Esc:Cancel",
    };

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}

/// Render the toast in the top-right corner, if one is showing
pub fn render_toast(frame: &mut Frame, toast: &Toast, now: Instant) {
    let phase = toast.phase(now);
    if matches!(phase, ToastPhase::Entering | ToastPhase::Expired) {
        return;
    }

    let area = frame.area();
    let accent = styling::toast_accent(toast.kind);

    let text_width = toast.message.chars().count().saturating_add(4);
    let max_width = area.width as usize * 9 / 10;
    let width = text_width.min(max_width).max(20).min(area.width as usize) as u16;
    let height = 3;

    let toast_area = Rect {
        x: area.width.saturating_sub(width + 2),
        y: area.y + 1,
        width,
        height: height.min(area.height),
    };

    frame.render_widget(Clear, toast_area);

    let mut style = Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 30));
    if phase == ToastPhase::Leaving {
        style = style.add_modifier(Modifier::DIM);
    }

    let line = Line::from(vec![
        Span::styled(
            format!("{} ", toast.kind.icon()),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ),
        Span::raw(toast.message.clone()),
    ]);

    let widget = Paragraph::new(line)
        .style(style)
        .alignment(Alignment::Left)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent)),
        );

    frame.render_widget(widget, toast_area);
}
