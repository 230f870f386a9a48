//! Styling utilities and color schemes

use crate::types::ToastKind;
use ratatui::style::Color;

/// Accent color for a toast kind
pub fn toast_accent(kind: ToastKind) -> Color {
    match kind {
        ToastKind::Info => Color::Rgb(0x4a, 0x6f, 0xa5),
        ToastKind::Success => Color::Rgb(0x28, 0xa7, 0x45),
        ToastKind::Error => Color::Rgb(0xdc, 0x35, 0x45),
    }
}

pub fn focused_border() -> Color {
    Color::Cyan
}

pub fn unfocused_border() -> Color {
    Color::DarkGray
}

pub fn error_color() -> Color {
    Color::Rgb(0xdc, 0x35, 0x45)
}

/// Muted gray used for secondary text such as error details
pub fn muted_color() -> Color {
    Color::Rgb(0x6c, 0x75, 0x7d)
}

/// Scroll lines per action (Ctrl+U / Ctrl+D)
pub const SCROLL_LINES_PER_ACTION: u16 = 5;

/// Loading spinner frames
pub const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];
