//! Scroll-synced browse view
//!
//! The center column is a scrollable list of slide titles; the side panels
//! always show the slide whose marker sits nearest the top of the list.
//! Scrolling re-derives the index on every event, with no throttling.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{App, MARKER_ROWS};
use crate::tui::components::{render_status_bar, render_top_bar};
use crate::tui::theme::Theme;
use crate::tui::utils::truncate_ellipsis;

pub fn render(app: &mut App, f: &mut Frame) {
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg_color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Top bar
            Constraint::Min(5),    // Columns
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_top_bar(f, chunks[0], &app.theme, "scroll to sync the panels");
    render_status_bar(
        f,
        chunks[2],
        &app.theme,
        app.view,
        &app.config.server_url,
    );

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(44),
            Constraint::Percentage(28),
        ])
        .split(chunks[1]);

    let current = app.browse.state().current().clone();
    render_side_panel(
        f,
        columns[0],
        &app.theme,
        "Abstract",
        &current.abstract_text,
        app.theme.accent_alt_color,
    );
    render_title_list(app, f, columns[1]);
    render_side_panel(
        f,
        columns[2],
        &app.theme,
        "Summary",
        &current.summary,
        app.theme.border_color,
    );

    app.layout.browse_list_area = Some(columns[1]);
}

/// The scrollable center list. Each title occupies a fixed number of rows
/// so marker offsets map directly onto the scroll position.
fn render_title_list(app: &App, f: &mut Frame, area: Rect) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::LEFT | Borders::RIGHT)
        .border_style(Style::default().fg(theme.border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let state = app.browse.state();
    let current = state.current_index();

    let mut lines: Vec<Line> = Vec::with_capacity(inner.height as usize);
    for i in 0..state.len() {
        // Top of this marker relative to the visible window
        let top = i as f32 * MARKER_ROWS - app.browse_scroll;
        let row = top.round() as i32;
        if row + (MARKER_ROWS as i32) < 0 || row >= inner.height as i32 {
            continue;
        }

        while (lines.len() as i32) < row {
            lines.push(Line::default());
        }
        if row < 0 {
            continue; // partially above the window, title row clipped
        }

        let title = truncate_ellipsis(
            &state.slides()[i].title,
            inner.width.saturating_sub(6) as usize,
        );
        let style = if i == current {
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim_color)
        };
        let marker = if i == current { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(theme.accent_color)),
            Span::styled(title, style),
        ]));
    }

    f.render_widget(Paragraph::new(lines), inner.inner(ratatui::layout::Margin::new(2, 0)));
}

fn render_side_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    body: &str,
    border: ratatui::style::Color,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {title} "),
            Style::default().fg(theme.text_color),
        ))
        .style(Style::default().bg(theme.panel_bg_color));

    f.render_widget(
        Paragraph::new(body)
            .style(Style::default().fg(theme.text_color))
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}
