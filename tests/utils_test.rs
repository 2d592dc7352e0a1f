use std::time::Duration;

use ratatui::style::Color;
use text_analyzer::config::{parse_config, AppConfig, ThemeKind};
use text_analyzer::ui::{parse_hex_color, popup_size, Theme};
use text_analyzer::utils::*;

#[test]
fn test_truncate_string() {
    assert_eq!(truncate_string("Hello", 10), "Hello");
    assert_eq!(truncate_string("Hello, world!", 10), "Hello, ...");
    assert_eq!(truncate_string("This is a very long string", 15), "This is a ve...");
    assert_eq!(truncate_string("", 10), "");
    assert_eq!(truncate_string("abcdef", 2), "..");
    // Wide characters take two columns each
    assert_eq!(truncate_string("日本語のテキスト", 9), "日本語...");
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0s");
    assert_eq!(format_duration(30), "30s");
    assert_eq!(format_duration(60), "1m 0s");
    assert_eq!(format_duration(90), "1m 30s");
    assert_eq!(format_duration(3600), "1h 0m 0s");
    assert_eq!(format_duration(3661), "1h 1m 1s");
}

#[test]
fn test_format_number() {
    assert_eq!(format_number(0), "0");
    assert_eq!(format_number(123), "123");
    assert_eq!(format_number(1234), "1,234");
    assert_eq!(format_number(1234567), "1,234,567");
}

#[test]
fn test_format_ping() {
    assert_eq!(format_ping(Duration::from_millis(42)), "Ping: 42 ms");
    assert_eq!(format_ping(Duration::from_micros(1500)), "Ping: 1 ms");
}

#[test]
fn test_parse_level() {
    assert_eq!(parse_level("debug"), log::LevelFilter::Debug);
    assert_eq!(parse_level(" WARN "), log::LevelFilter::Warn);
    assert_eq!(parse_level("nonsense"), log::LevelFilter::Info);
}

#[test]
fn test_partial_config_uses_defaults() {
    let config = parse_config("theme: dark\nlist_capacity: 5\n").unwrap();
    assert_eq!(config.theme, ThemeKind::Dark);
    assert_eq!(config.list_capacity, 5);
    assert_eq!(config.auto_refresh_secs, 10);
    assert!(!config.logging_enabled);
    assert_eq!(config.palette().background, "#333333");

    assert!(parse_config("theme: [not, a, theme]").is_err());
}

#[test]
fn test_config_round_trips_through_yaml() {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap();
    let parsed = parse_config(&yaml).unwrap();
    assert_eq!(parsed.theme, config.theme);
    assert_eq!(parsed.list_capacity, 10);
    assert_eq!(parsed.light_palette, config.light_palette);
}

#[test]
fn test_theme_colors() {
    assert_eq!(parse_hex_color("#F5F5F5"), Color::Rgb(245, 245, 245));
    assert_eq!(parse_hex_color("default"), Color::Reset);
    assert_eq!(parse_hex_color("#12345"), Color::Reset);
    assert_eq!(parse_hex_color("#GGGGGG"), Color::Reset);

    let config = AppConfig::default();
    let dark = Theme::for_kind(ThemeKind::Dark, &config);
    assert_eq!(dark.background, Color::Rgb(0x33, 0x33, 0x33));
    assert_eq!(ThemeKind::Light.toggled(), ThemeKind::Dark);
}

#[test]
fn test_popup_size_counts_display_columns() {
    assert_eq!(popup_size("Help", "abc\nabcdef"), (10, 4));
    // Emoji and CJK text take two columns per character
    assert_eq!(popup_size("Help", "📚 Lists"), (12, 3));
    assert_eq!(popup_size("Hi", "日本語"), (10, 3));
    assert_eq!(popup_size("A longer title", ""), (18, 2));
}
