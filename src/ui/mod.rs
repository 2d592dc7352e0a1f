//! UI module for rendering the terminal interface
//!
//! This module handles all UI rendering aspects, including:
//! - Main layout
//! - Input area
//! - Conversion and analysis panels
//! - History and favorites lists
//! - Status bar and popups

use chrono::Local;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use strum::IntoEnumIterator;
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Focus, Overlay};
use crate::config::get_config;
use crate::store::ListKind;
use crate::utils::{current_time, format_duration, format_number};

mod components;
mod theme;
pub use components::popup_size;
pub use theme::{parse_hex_color, Theme};

/// Labels of the conversion panel, in display order
const CONVERSION_LABELS: [&str; 5] = ["Original", "Lower Case", "Upper Case", "Title Case", "Reversed Text"];

/// Labels of the analysis panel, in display order
const COUNT_LABELS: [&str; 5] = ["Letter Count", "Word Count", "Sentence Count", "Vowel Count", "Consonant Count"];

/// Main render function
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.size();
    let theme = Theme::for_kind(app.theme, &get_config());

    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.foreground)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(3), // Input
            Constraint::Length(7), // Conversions / analysis
            Constraint::Min(4),    // History / favorites
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    render_title(f, app, chunks[0], &theme);
    render_input_area(f, app, chunks[1], &theme);
    render_results(f, app, chunks[2], &theme);
    render_lists(f, app, chunks[3], &theme);
    render_status_bar(f, app, chunks[4], &theme);

    match &app.overlay {
        Overlay::None => {}
        Overlay::Message { title, body } => components::render_popup(f, title, body, &theme),
        Overlay::Confirm(kind) => {
            let (title, question) = match kind {
                ListKind::History => ("Clear History", "Are you sure you want to clear history?"),
                ListKind::Favorites => ("Clear Favorites", "Are you sure you want to clear favorites?"),
            };
            components::render_confirm(f, title, question, &theme);
        }
    }
}

fn render_title(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let title = Line::from(vec![
        Span::styled(
            " 💬 Text Analyzer ",
            Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {} theme ", app.theme)),
        Span::raw(if app.auto_refresh { " ⟳ auto refresh " } else { "" }),
        Span::raw("  F1 help"),
    ]);
    f.render_widget(Paragraph::new(title), area);
}

/// Render the input area
fn render_input_area(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let focused = app.focus == Focus::Input && app.overlay == Overlay::None;
    let border = if focused { theme.accent } else { theme.primary };
    let input_block = Block::default()
        .title(" Enter Text ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = input_block.inner(area);

    // Scroll horizontally so the cursor stays visible
    let prompt_width = 2;
    let before_cursor = app.input[..app.cursor_position].width();
    let visible = (inner.width as usize).saturating_sub(prompt_width + 1);
    let offset = before_cursor.saturating_sub(visible);

    let input_widget = Paragraph::new(format!("> {}", app.input))
        .block(input_block)
        .scroll((0, offset as u16));
    f.render_widget(input_widget, area);

    if focused {
        f.set_cursor(
            inner.x + (prompt_width + before_cursor - offset) as u16,
            inner.y,
        );
    }
}

fn render_results(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    let (conversions, counts): (Vec<String>, Vec<String>) = match &app.result {
        Some(r) => (
            vec![
                r.original.clone(),
                r.lower.clone(),
                r.upper.clone(),
                r.title_case.clone(),
                r.reversed.clone(),
            ],
            [r.letter_count, r.word_count, r.sentence_count, r.vowel_count, r.consonant_count]
                .iter()
                .map(|n| format_number(*n))
                .collect(),
        ),
        None => (vec![String::new(); 5], vec![String::new(); 5]),
    };

    let suffix = if app.processing { " (processing...)" } else { "" };
    render_labelled(f, columns[0], &format!("Conversions{}", suffix), &CONVERSION_LABELS, &conversions, theme);
    render_labelled(f, columns[1], "Analysis", &COUNT_LABELS, &counts, theme);
}

fn render_labelled(f: &mut Frame, area: Rect, title: &str, labels: &[&str], values: &[String], theme: &Theme) {
    let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0) + 1;
    let lines: Vec<Line> = labels
        .iter()
        .zip(values)
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:>width$} ", format!("{}:", label), width = label_width),
                    Style::default().fg(theme.primary),
                ),
                Span::raw(value.clone()),
            ])
        })
        .collect();

    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary));
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_lists(f: &mut Frame, app: &mut App, area: Rect, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    for (kind, column) in ListKind::iter().zip(columns.iter()) {
        let focused = app.focus.list() == Some(kind);
        let (items, state) = match kind {
            ListKind::History => (app.history.as_slice(), &mut app.history_state),
            ListKind::Favorites => (app.favorites.as_slice(), &mut app.favorites_state),
        };
        components::render_entry_list(f, *column, kind.title(), items, state, focused, theme);
    }
}

/// Render the status bar
fn render_status_bar(f: &mut Frame, app: &App, area: Rect, theme: &Theme) {
    let elapsed = (Local::now() - app.stats.start_time).num_seconds().max(0) as u64;

    let spans = vec![
        Span::styled(
            format!(" {} ", app.status),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::raw(app.ping_display.clone()),
        Span::raw(" │ "),
        Span::raw(format!("{} analysed", app.stats.analyses)),
        Span::raw(" │ "),
        Span::raw(format!("⏱️ {}", format_duration(elapsed))),
        Span::raw(" │ "),
        Span::raw(current_time()),
    ];

    let status_widget = Paragraph::new(Line::from(spans))
        .style(Style::default().bg(theme.status).fg(theme.foreground));

    f.render_widget(status_widget, area);
}
