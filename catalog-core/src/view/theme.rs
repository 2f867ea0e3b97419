//! src/view/theme.rs
//! ============================================================================
//! # Catppuccin Mocha Theme Color Palette
//!
//! Color constants for the Catppuccin Mocha theme, plus the per-category
//! accent colors keyed by category slug.
//! https://github.com/catppuccin/catppuccin

use ratatui::style::{Color, Modifier, Style};

pub const BACKGROUND: Color = Color::Rgb(30, 30, 46); // Base
pub const CURRENT_LINE: Color = Color::Rgb(69, 71, 90); // Surface1
pub const FOREGROUND: Color = Color::Rgb(205, 214, 244); // Text
pub const COMMENT: Color = Color::Rgb(127, 132, 156); // Overlay1
pub const BLUE: Color = Color::Rgb(137, 180, 250); // Blue
pub const CYAN: Color = Color::Rgb(137, 220, 235); // Sky
pub const GREEN: Color = Color::Rgb(166, 227, 161); // Green
pub const ORANGE: Color = Color::Rgb(250, 179, 135); // Peach
pub const PINK: Color = Color::Rgb(245, 194, 231); // Pink
pub const PURPLE: Color = Color::Rgb(203, 166, 247); // Mauve
pub const RED: Color = Color::Rgb(243, 139, 168); // Red
pub const TEAL: Color = Color::Rgb(148, 226, 213); // Teal
pub const YELLOW: Color = Color::Rgb(249, 226, 175); // Yellow

/// Accent for a category, looked up by its slug. Unknown categories get
/// the neutral comment color.
pub fn category_color(slug: &str) -> Color {
    match slug {
        "reparosmanutencao" => ORANGE,
        "casalimpeza" => CYAN,
        "belezabemestar" => PINK,
        "aulastreinamentos" => BLUE,
        "tecnologiadesign" => PURPLE,
        "pets" => GREEN,
        "eventosfotografia" => YELLOW,
        "automotivo" => RED,
        "todas" => TEAL,
        _ => COMMENT,
    }
}

pub fn base_style() -> Style {
    Style::default().bg(BACKGROUND).fg(FOREGROUND)
}

pub fn border_style() -> Style {
    Style::default().fg(COMMENT)
}

pub fn title_style() -> Style {
    Style::default().fg(PURPLE).add_modifier(Modifier::BOLD)
}

pub fn highlight_style() -> Style {
    Style::default().bg(CURRENT_LINE).add_modifier(Modifier::BOLD)
}

pub fn price_style() -> Style {
    Style::default().fg(GREEN).add_modifier(Modifier::BOLD)
}

pub fn rating_style() -> Style {
    Style::default().fg(YELLOW)
}

pub fn hint_key_style() -> Style {
    Style::default().fg(YELLOW).add_modifier(Modifier::BOLD)
}

pub fn hint_text_style() -> Style {
    Style::default().fg(COMMENT)
}

/// Filled chip for the active category, outlined text otherwise.
pub fn chip_style(color: Color, active: bool) -> Style {
    if active {
        Style::default()
            .bg(color)
            .fg(BACKGROUND)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    }
}
