//! src/view/components/header.rs

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::view::theme;

pub const TITLE: &str = "Marketplace de Serviços Locais";
pub const SUBTITLE: &str = "Encontre os melhores profissionais da sua região";

pub struct Header;

impl Header {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                TITLE,
                Style::default()
                    .fg(theme::PURPLE)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, theme::hint_text_style())),
        ];

        let para = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::BOTTOM)
                    .border_style(theme::border_style()),
            )
            .style(theme::base_style());

        frame.render_widget(para, area);
    }
}
