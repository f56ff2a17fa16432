//! Top bar with the brand mark and a per-view hint

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::theme::Theme;

/// Render the top bar: brand on the left, hint on the right
pub fn render_top_bar(f: &mut Frame, area: Rect, theme: &Theme, hint: &str) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let brand = Span::styled(
        " R E S E A R C H I T ",
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(Paragraph::new(Line::from(brand)), inner);

    let hint_width = hint.len() as u16;
    if inner.width > hint_width + 1 {
        let hint_area = Rect::new(
            inner.x + inner.width - hint_width - 1,
            inner.y,
            hint_width,
            1,
        );
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.dim_color))),
            hint_area,
        );
    }
}
