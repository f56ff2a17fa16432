//! Fullscreen carousel view
//!
//! One slide at a time: centered title on the left, abstract and summary
//! panels on the right, vertical arrow hints at the right edge. The card
//! slides in from the edge matching the captured transition direction.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::components::{render_status_bar, render_top_bar};
use crate::tui::theme::Theme;
use crate::tui::utils::wrap_text;

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
            Constraint::Min(5),    // Card
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_top_bar(f, chunks[0], &app.theme, "Tab: views   /: search");
    render_status_bar(
        f,
        chunks[2],
        &app.theme,
        app.view,
        &app.config.server_url,
    );

    let content = chunks[1];
    app.layout.home_area = Some(content);

    let now = Instant::now();
    let offset = app
        .home
        .presenter()
        .enter_offset(now, content.height as f32)
        .round() as i32;

    // Clip the shifted card to the content area; the part that has not
    // entered yet stays off-screen.
    let y0 = content.y as i32 + offset;
    let top = y0.max(content.y as i32) as u16;
    let bottom = (y0 + content.height as i32).min((content.y + content.height) as i32);
    if bottom <= top as i32 {
        return;
    }
    let card = Rect::new(content.x, top, content.width, (bottom - top as i32) as u16);

    render_card(app, f, card);
    render_nav_hints(app, f, content);
}

/// The slide card: title column + abstract/summary column
fn render_card(app: &App, f: &mut Frame, card: Rect) {
    let theme = &app.theme;
    let slide = app.home.state().current();

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(card.inner(ratatui::layout::Margin::new(2, 0)));

    // Left: title, vertically centered, uppercase like the original
    let title_width = columns[0].width.saturating_sub(4) as usize;
    let title_lines = wrap_text(&slide.title.to_uppercase(), title_width.max(8));
    let pad = (columns[0].height as usize).saturating_sub(title_lines.len()) / 2;

    let mut text: Vec<Line> = vec![Line::default(); pad];
    for line in title_lines {
        text.push(Line::from(Span::styled(
            line,
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        )));
    }
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        columns[0],
    );

    // Right: abstract panel above, summary panel below
    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(columns[1]);

    render_panel(
        f,
        panels[0],
        theme,
        "Abstract",
        &slide.abstract_text,
        theme.accent_alt_color,
        true,
    );
    render_panel(
        f,
        panels[1],
        theme,
        "Summary",
        &slide.summary,
        theme.border_color,
        false,
    );
}

fn render_panel(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    title: &str,
    body: &str,
    border: ratatui::style::Color,
    italic: bool,
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

    let mut style = Style::default().fg(theme.text_color);
    if italic {
        style = style.add_modifier(Modifier::ITALIC);
    }

    f.render_widget(
        Paragraph::new(body)
            .style(style)
            .wrap(Wrap { trim: true })
            .block(block),
        area,
    );
}

/// Arrow hints and position indicator at the right edge. An arrow is only
/// drawn when the corresponding move is possible, so the boundary is
/// visible instead of silently rejected.
fn render_nav_hints(app: &App, f: &mut Frame, content: Rect) {
    let theme = &app.theme;
    let state = app.home.state();
    if content.width < 4 || content.height < 5 {
        return;
    }

    let x = content.x + content.width - 3;
    let mid = content.y + content.height / 2;
    let hint_style = Style::default().fg(theme.dim_color);

    if !state.at_start() {
        f.render_widget(
            Paragraph::new(Span::styled("▲", hint_style)),
            Rect::new(x, mid - 2, 2, 1),
        );
    }
    if !state.at_end() {
        f.render_widget(
            Paragraph::new(Span::styled("▼", hint_style)),
            Rect::new(x, mid + 2, 2, 1),
        );
    }

    let position = format!("{}/{}", state.current_index() + 1, state.len());
    let pos_x = (content.x + content.width).saturating_sub(position.len() as u16 + 2);
    f.render_widget(
        Paragraph::new(Span::styled(position, hint_style)),
        Rect::new(pos_x, mid, content.width.min(8), 1),
    );
}
