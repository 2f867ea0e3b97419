//! src/view/components/status_bar.rs
//! ============================================================================
//! # StatusBar: Mode, Last Status and Key Hints
//!
//! - Left: last status message, or the current mode
//! - Right: key hints for the current mode

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    model::{app_state::AppState, ui_state::UIMode},
    view::theme,
};

const BROWSE_HINTS: [(&str, &str); 6] = [
    ("/", "buscar"),
    ("←→", "categoria"),
    ("s", "ordenar"),
    ("c", "limpar"),
    ("?", "ajuda"),
    ("q", "sair"),
];

const SEARCH_HINTS: [(&str, &str); 2] = [("Enter", "aplicar"), ("Esc", "voltar")];

pub struct StatusBar;

impl StatusBar {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let status_block = Block::default()
            .borders(Borders::TOP)
            .border_style(theme::border_style());
        let inner = status_block.inner(area);
        frame.render_widget(status_block, area);

        let (msg, style) = match (&app.ui.last_status, app.ui.mode) {
            (_, UIMode::Search) => ("BUSCA".to_string(), Style::default().fg(theme::CYAN).bold()),
            (Some(status), UIMode::Browse) => (status.to_string(), Style::default().fg(theme::GREEN)),
            (None, UIMode::Browse) => ("Pronto".to_string(), theme::hint_text_style()),
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(inner);

        let left = Paragraph::new(Line::from(Span::styled(format!(" {msg} "), style)))
            .alignment(Alignment::Left);

        let hints: &[(&str, &str)] = match app.ui.mode {
            UIMode::Browse => &BROWSE_HINTS,
            UIMode::Search => &SEARCH_HINTS,
        };
        let mut spans = Vec::with_capacity(hints.len() * 2);
        for (key, label) in hints {
            spans.push(Span::styled(*key, theme::hint_key_style()));
            spans.push(Span::styled(format!(" {label}  "), theme::hint_text_style()));
        }
        let right = Paragraph::new(Line::from(spans)).alignment(Alignment::Right);

        frame.render_widget(left, chunks[0]);
        frame.render_widget(right, chunks[1]);
    }
}
