//! Modal dialog rendering

use crate::state::AppState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the server URL modal
pub fn render_url_input_modal(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let modal_width = (area.width as f32 * 0.7).min(90.0) as u16;
    let modal_height = 9;
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x: modal_x,
        y: modal_y,
        width: modal_width,
        height: modal_height.min(area.height),
    };

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Analysis Server ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .style(Style::default().bg(Color::Rgb(30, 30, 30)).fg(Color::White));

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Description
            Constraint::Length(1), // Input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Validation message
            Constraint::Length(1), // Help
        ])
        .split(inner);

    let desc = Paragraph::new("Base URL of the analysis backend. Requests go to <base>/analyze.")
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: true });
    frame.render_widget(desc, chunks[0]);

    let url_input = &state.input.url_input;
    let column = url_input.cursor_column();
    let offset = column.saturating_sub(chunks[1].width.saturating_sub(1) as usize);

    let input = Paragraph::new(url_input.content().to_string())
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .scroll((0, offset as u16));
    frame.render_widget(input, chunks[1]);
    frame.set_cursor_position((chunks[1].x + (column - offset) as u16, chunks[1].y));

    if let Some(error) = &state.input.url_error {
        let message = Paragraph::new(error.clone()).style(Style::default().fg(Color::Red));
        frame.render_widget(message, chunks[3]);
    }

    let help = Paragraph::new("Enter: Save  |  Ctrl+L: Clear  |  Esc: Cancel")
        .style(Style::default().fg(Color::Rgb(150, 150, 150)))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}
