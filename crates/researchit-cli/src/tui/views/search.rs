//! Search view: query input and scrollable result cards

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::components::{render_status_bar, render_top_bar, result_card_lines};

pub fn render(app: &mut App, f: &mut Frame) {
    let theme = app.theme.clone();
    let area = f.area();
    f.render_widget(
        Block::default().style(Style::default().bg(theme.bg_color)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Top bar
            Constraint::Length(3), // Input
            Constraint::Min(3),    // Results
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_top_bar(f, chunks[0], &theme, "semantic search over arXiv");
    render_status_bar(f, chunks[3], &theme, app.view, &app.config.server_url);

    // Query input with a block cursor
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent_color))
        .title(Span::styled(" Query ", Style::default().fg(theme.text_color)));
    let input_line = Line::from(vec![
        Span::styled(app.search.input.clone(), Style::default().fg(theme.text_color)),
        Span::styled("█", Style::default().fg(theme.accent_color)),
    ]);
    f.render_widget(Paragraph::new(input_line).block(input_block), chunks[1]);

    let results_area = chunks[2];
    app.layout.search_results_area = Some(results_area);

    let width = results_area.width.saturating_sub(4) as usize;
    // Cards borrow from the response, so keep a copy alive for the whole
    // render instead of fighting the in-place mutation of scroll bounds.
    let response_snapshot = app.search.results.clone();
    let mut lines: Vec<Line> = Vec::new();

    if app.search.is_searching {
        lines.push(Line::from(Span::styled(
            format!("  {} Searching...", app.search.spinner_frame()),
            Style::default().fg(theme.accent_color),
        )));
    } else if let Some(error) = &app.search.error {
        lines.push(Line::from(Span::styled(
            format!("  ✗ {error}"),
            Style::default()
                .fg(theme.error_color)
                .add_modifier(Modifier::BOLD),
        )));
    } else if let Some(response) = &response_snapshot {
        if response.results.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("  No papers found for \"{}\"", response.query),
                Style::default().fg(theme.dim_color),
            )));
        } else {
            let mut info = format!(
                "  Found {} papers in {:.0} ms",
                response.total_results, response.search_time_ms
            );
            if let Some(mode) = &response.mode_used {
                info.push_str(&format!("  ·  mode: {mode}"));
            }
            lines.push(Line::from(Span::styled(
                info,
                Style::default().fg(theme.dim_color),
            )));
            lines.push(Line::default());

            for result in &response.results {
                lines.extend(result_card_lines(result, width, &theme));
            }
        }
    } else {
        lines.push(Line::from(Span::styled(
            "  Type a query and press Enter",
            Style::default().fg(theme.dim_color),
        )));
    }

    let visible = results_area.height as usize;
    app.search.max_scroll = lines.len().saturating_sub(visible);
    app.search.scroll = app.search.scroll.min(app.search.max_scroll);

    f.render_widget(
        Paragraph::new(lines).scroll((app.search.scroll as u16, 0)),
        results_area,
    );
}
