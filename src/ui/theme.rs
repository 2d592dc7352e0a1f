//! UI theme handling
//!
//! Provides color theme functionality for the terminal UI

use crate::config::{AppConfig, PaletteConfig, ThemeKind};
use ratatui::style::Color;

/// Theme structure for UI colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Borders and headings
    pub primary: Color,
    /// Focus and selection highlight
    pub accent: Color,
    /// Background color
    pub background: Color,
    /// Foreground (text) color
    pub foreground: Color,
    /// Status bar background
    pub status: Color,
}

impl Theme {
    /// Create a new theme from the given palette
    pub fn new(palette: &PaletteConfig) -> Self {
        Self {
            primary: parse_hex_color(&palette.primary),
            accent: parse_hex_color(&palette.accent),
            background: parse_hex_color(&palette.background),
            foreground: parse_hex_color(&palette.foreground),
            status: parse_hex_color(&palette.status),
        }
    }

    /// Theme for `kind` using the palettes in `config`
    pub fn for_kind(kind: ThemeKind, config: &AppConfig) -> Self {
        match kind {
            ThemeKind::Light => Self::new(&config.light_palette),
            ThemeKind::Dark => Self::new(&config.dark_palette),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(&PaletteConfig::light())
    }
}

/// Convert hex color string to ratatui Color
pub fn parse_hex_color(hex: &str) -> Color {
    if hex == "default" {
        return Color::Reset;
    }

    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Color::Reset;
    }

    if let (Ok(r), Ok(g), Ok(b)) = (
        u8::from_str_radix(&hex[0..2], 16),
        u8::from_str_radix(&hex[2..4], 16),
        u8::from_str_radix(&hex[4..6], 16),
    ) {
        Color::Rgb(r, g, b)
    } else {
        Color::Reset
    }
}
