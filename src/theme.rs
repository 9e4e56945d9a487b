use ratatui::style::{Color, Modifier, Style};

// Centralized frame and popup colors.

pub const TITLE_ACTIVE_RGB: (u8, u8, u8) = (40, 80, 160);
pub const POPUP_BG_RGB: (u8, u8, u8) = (255, 255, 200);

pub fn rgb_to_color(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

// Title bar
pub fn title_style(active: bool) -> Style {
    if active {
        Style::default()
            .bg(rgb_to_color(TITLE_ACTIVE_RGB))
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().bg(Color::DarkGray).fg(Color::Gray)
    }
}

// Outline
pub fn outline_style(active: bool) -> Style {
    let fg = if active { Color::White } else { Color::DarkGray };
    Style::default().fg(fg).bg(Color::Reset)
}

// Popup
pub fn popup_style() -> Style {
    Style::default()
        .bg(rgb_to_color(POPUP_BG_RGB))
        .fg(Color::Black)
}

// Status line
pub fn status_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}
