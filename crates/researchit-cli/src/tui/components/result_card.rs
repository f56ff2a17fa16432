//! Result card rendering for search hits
//!
//! Mirrors the web front end's cards: score badge, arXiv id, title,
//! authors, date and categories, truncated abstract, and a link line.

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use researchit_core::constants::search::{FAIR_SCORE, STRONG_SCORE};
use researchit_core::PaperResult;

use crate::tui::theme::Theme;
use crate::tui::utils::{format_date, wrap_text};

/// Abstracts are cut to this many characters before wrapping
const ABSTRACT_PREVIEW_CHARS: usize = 300;

/// Score badge color and marker, by the same cutoffs the site used
fn score_style(score: f64, theme: &Theme) -> (Style, &'static str) {
    if score > STRONG_SCORE {
        (Style::default().fg(theme.success_color), "●")
    } else if score > FAIR_SCORE {
        (Style::default().fg(theme.warning_color), "●")
    } else {
        (Style::default().fg(theme.error_color), "○")
    }
}

/// Build the lines for one result card
pub fn result_card_lines<'a>(
    result: &'a PaperResult,
    width: usize,
    theme: &Theme,
) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let (badge_style, marker) = score_style(result.score, theme);

    lines.push(Line::from(vec![
        Span::styled(marker, badge_style),
        Span::styled(format!(" {:.4}  ", result.score), badge_style),
        Span::styled(
            result.arxiv_id.as_str(),
            Style::default().fg(theme.accent_alt_color),
        ),
    ]));

    match &result.metadata {
        Some(meta) => {
            for title_line in wrap_text(&meta.title, width) {
                lines.push(Line::from(Span::styled(
                    title_line,
                    Style::default()
                        .fg(theme.text_color)
                        .add_modifier(Modifier::BOLD),
                )));
            }

            if !meta.authors.is_empty() {
                let shown: Vec<&str> = meta.authors.iter().take(3).map(String::as_str).collect();
                let mut byline = shown.join(", ");
                if meta.authors.len() > 3 {
                    byline.push_str(&format!(" et al. ({} authors)", meta.authors.len()));
                }
                lines.push(Line::from(Span::styled(
                    byline,
                    Style::default().fg(theme.dim_color),
                )));
            }

            let mut facts = Vec::new();
            if let Some(published) = &meta.published {
                facts.push(format_date(published));
            }
            if !meta.categories.is_empty() {
                let cats: Vec<&str> = meta.categories.iter().take(3).map(String::as_str).collect();
                facts.push(cats.join(", "));
            }
            if let Some(journal) = &meta.journal_ref {
                facts.push(journal.clone());
            }
            if !facts.is_empty() {
                lines.push(Line::from(Span::styled(
                    facts.join("  ·  "),
                    Style::default().fg(theme.dim_color),
                )));
            }

            if !meta.abstract_text.is_empty() {
                let preview: String = if meta.abstract_text.chars().count() > ABSTRACT_PREVIEW_CHARS
                {
                    let cut: String = meta
                        .abstract_text
                        .chars()
                        .take(ABSTRACT_PREVIEW_CHARS)
                        .collect();
                    format!("{cut}...")
                } else {
                    meta.abstract_text.clone()
                };
                for abs_line in wrap_text(&preview, width.saturating_sub(2)) {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(abs_line, Style::default().fg(theme.text_color)),
                    ]));
                }
            }
        }
        None => {
            lines.push(Line::from(Span::styled(
                "Metadata not available for this paper",
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines.push(Line::from(Span::styled(
        result.arxiv_url(),
        Style::default()
            .fg(theme.accent_color)
            .add_modifier(Modifier::UNDERLINED),
    )));
    lines.push(Line::default());
    lines
}
