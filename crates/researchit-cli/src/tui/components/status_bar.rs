//! Bottom status bar with key hints

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::View;
use crate::tui::theme::Theme;

/// Render the one-line status bar: view name, key hints, server URL
pub fn render_status_bar(f: &mut Frame, area: Rect, theme: &Theme, view: View, server_url: &str) {
    let hints = match view {
        View::Home => "↑/↓ navigate  scroll one slide per gesture  Tab views  q quit",
        View::Browse => "↑/↓ or scroll to move the list  Tab views  q quit",
        View::Search => "type a query  Enter search  ↑/↓ scroll  Esc back  Tab views",
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", view.title()),
            Style::default().fg(theme.bg_color).bg(theme.accent_color),
        ),
        Span::raw(" "),
        Span::styled(hints, Style::default().fg(theme.dim_color)),
        Span::raw("  "),
        Span::styled(server_url, Style::default().fg(theme.border_color)),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
