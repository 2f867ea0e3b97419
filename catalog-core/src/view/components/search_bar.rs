//! src/view/components/search_bar.rs
//! ============================================================================
//! # SearchBar: Search Input with Sort Indicator
//!
//! - Shows the raw search text, or the category-aware placeholder
//! - Border turns cyan while search mode captures the keyboard
//! - A trailing `…` marks text still waiting out the debounce
//! - Right-hand box shows the active sort key

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{app_state::AppState, ui_state::UIMode},
    query::format::search_placeholder,
    view::theme,
};

pub struct SearchBar;

impl SearchBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Fill(1), Constraint::Length(26)])
            .split(area);

        Self::render_input(frame, app, chunks[0]);
        Self::render_sort(frame, app, chunks[1]);
    }

    fn render_input(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let descriptor = app.filters.descriptor();
        let editing = app.ui.mode == UIMode::Search;

        let mut spans = vec![Span::styled("🔍 ", Style::default().fg(theme::COMMENT))];
        if descriptor.search_text.is_empty() && !editing {
            spans.push(Span::styled(
                search_placeholder(&descriptor.category),
                theme::hint_text_style().add_modifier(Modifier::ITALIC),
            ));
        } else {
            spans.push(Span::styled(
                descriptor.search_text.as_str(),
                Style::default().fg(theme::FOREGROUND),
            ));
            if editing {
                spans.push(Span::styled("▏", Style::default().fg(theme::CYAN)));
            }
        }
        if app.filters.is_search_pending() {
            spans.push(Span::styled(" …", theme::hint_text_style()));
        }

        let border = if editing {
            Style::default().fg(theme::CYAN)
        } else {
            theme::border_style()
        };

        let para = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Buscar ")
                .title_style(theme::title_style())
                .border_style(border),
        );
        frame.render_widget(para, area);
    }

    fn render_sort(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let sort_key = app.filters.descriptor().sort_key;
        let para = Paragraph::new(Line::from(Span::styled(
            sort_key.label(),
            Style::default()
                .fg(theme::ORANGE)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Ordenar [s] ")
                .title_style(theme::title_style())
                .border_style(theme::border_style()),
        );
        frame.render_widget(para, area);
    }
}
