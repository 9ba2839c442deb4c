//! Rendering logic for the bars pane and status bar

use crate::session::SessionStatus;
use crate::stepper::SortVariant;
use crate::ui::theme::DEFAULT_THEME;

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
};

/// Render the sequence buffer as a bar chart, one bar per element.
///
/// Bar heights are proportional to element values; since the buffer holds a
/// permutation of `1..=N`, the tallest bar always reaches the top of the pane.
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[u32],
    active: Option<SortVariant>,
) {
    let title = match active {
        Some(variant) => format!(" {} Sort ({} elements) ", variant.name(), values.len()),
        None => format!(" sortty ({} elements) ", values.len()),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(if active.is_some() {
            DEFAULT_THEME.success
        } else {
            DEFAULT_THEME.comment
        }))
        .title(Span::styled(
            title,
            Style::default()
                .fg(DEFAULT_THEME.primary)
                .add_modifier(Modifier::BOLD),
        ));

    // Fit all bars into the inner width: shrink bar width before giving up
    // the gap, so large buffers stay visible on narrow terminals
    let inner_width = area.width.saturating_sub(2) as usize;
    let n = values.len().max(1);
    let mut bar_width = (inner_width / n).saturating_sub(1).max(1);
    let mut bar_gap = 1;
    if n * (bar_width + bar_gap) > inner_width {
        bar_width = (inner_width / n).max(1);
        bar_gap = 0;
    }

    let bars: Vec<Bar> = values
        .iter()
        .map(|v| {
            Bar::default()
                .value(u64::from(*v))
                .text_value(String::new()) // bars speak for themselves
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width as u16)
        .bar_gap(bar_gap as u16)
        .bar_style(Style::default().fg(DEFAULT_THEME.bar))
        .value_style(Style::default().fg(DEFAULT_THEME.bar))
        .max(values.len() as u64)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Render the status bar at the bottom: message and run state on the left,
/// keybind legend on the right.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    status: SessionStatus,
) {
    // Split status bar into left and right
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(50),
            ratatui::layout::Constraint::Percentage(50),
        ])
        .split(area);

    // Left side: run state badge and message
    let badge = match status {
        SessionStatus::Running => Span::styled(
            " SORTING ",
            Style::default()
                .bg(DEFAULT_THEME.success)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        SessionStatus::Idle => Span::styled(
            " IDLE ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    };

    let left_spans = vec![
        badge,
        Span::styled(
            " | ",
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.comment),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default()
                .bg(DEFAULT_THEME.status_bg)
                .fg(DEFAULT_THEME.fg),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds with visual grouping
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.status_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" b ", key_style),
        Span::styled(" bubble ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" s ", key_style),
        Span::styled(" selection ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" i ", key_style),
        Span::styled(" insertion ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⎵ ", key_style),
        Span::styled(" stop ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" r ", key_style),
        Span::styled(" refill ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
