//! src/view/components/empty_state.rs
//! ============================================================================
//! # EmptyState: No-results Panel
//!
//! Headline and suggestion depend on whether a search and/or a category
//! filter is active; the tips list is fixed.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{
    model::app_state::AppState,
    query::format::{EMPTY_STATE_TIPS, empty_state_message, empty_state_suggestion, results_label},
    view::theme,
};

pub struct EmptyState;

impl EmptyState {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let search = app.filters.committed_search().trim();
        let category = app.filters.descriptor().category.as_str();

        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled("🔍", Style::default().fg(theme::COMMENT))),
            Line::from(""),
            Line::from(Span::styled(
                empty_state_message(search, category),
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                empty_state_suggestion(search),
                theme::hint_text_style(),
            )),
            Line::from(""),
            Line::from(Span::styled("Sugestões:", theme::hint_text_style())),
        ];
        lines.extend(
            EMPTY_STATE_TIPS
                .iter()
                .map(|tip| Line::from(Span::styled(format!("• {tip}"), theme::hint_text_style()))),
        );

        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", results_label(0)))
                    .title_style(theme::title_style())
                    .border_style(theme::border_style())
                    .style(Style::default().bg(theme::BACKGROUND)),
            );
        frame.render_widget(para, area);
    }
}
