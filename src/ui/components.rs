//! UI components module
//!
//! Provides reusable UI components for the terminal interface

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use unicode_width::UnicodeWidthStr;

use super::Theme;
use crate::utils::truncate_string;

/// Rectangle of `width` x `height` centred in `area`, clamped to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}

/// Outer size of a popup showing `content` under `title`, in terminal cells
pub fn popup_size(title: &str, content: &str) -> (u16, u16) {
    let lines = content.lines().count();
    let longest = content.lines().map(UnicodeWidthStr::width).max().unwrap_or(0);
    let width = longest.max(title.width()) + 4;
    (
        width.min(u16::MAX as usize) as u16,
        (lines + 2).min(u16::MAX as usize) as u16,
    )
}

/// Renders a popup message box
pub fn render_popup(f: &mut Frame, title: &str, content: &str, theme: &Theme) {
    let (width, height) = popup_size(title, content);
    let popup_area = centered_rect(f.size(), width, height);

    // Create block with border
    let popup_block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.primary))
        .style(Style::default().bg(theme.background).fg(theme.foreground));

    let popup_widget = Paragraph::new(Text::from(content.to_string()))
        .block(popup_block)
        .wrap(Wrap { trim: false });

    // Render popup over everything else
    f.render_widget(Clear, popup_area);
    f.render_widget(popup_widget, popup_area);
}

/// Renders a yes/no confirmation box
pub fn render_confirm(f: &mut Frame, title: &str, question: &str, theme: &Theme) {
    let width = question.width().max(title.width()) as u16 + 6;
    let popup_area = centered_rect(f.size(), width, 4);

    let popup_block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .style(Style::default().bg(theme.background).fg(theme.foreground));

    let text = vec![
        Line::from(question.to_string()),
        Line::from(vec![
            Span::styled("[y]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" Yes   "),
            Span::styled("[n]", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" No"),
        ]),
    ];

    f.render_widget(Clear, popup_area);
    f.render_widget(Paragraph::new(text).block(popup_block), popup_area);
}

/// Renders a selectable list inside a titled block
pub fn render_entry_list<T: AsRef<str>>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[T],
    state: &mut ListState,
    focused: bool,
    theme: &Theme,
) {
    let border = if focused { theme.accent } else { theme.primary };
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(theme.background).fg(theme.foreground));

    // Leave room for borders and the highlight symbol
    let max_width = area.width.saturating_sub(4) as usize;
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|i| ListItem::new(truncate_string(i.as_ref(), max_width)))
        .collect();

    let highlight = if focused {
        Style::default().bg(theme.accent).fg(theme.background)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let list = List::new(list_items)
        .block(block)
        .highlight_style(highlight)
        .highlight_symbol("> ");

    f.render_stateful_widget(list, area, state);
}
