//! src/view/components/category_chips.rs

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{model::app_state::AppState, query::format::slugify, view::theme};

pub struct CategoryChips;

impl CategoryChips {
    /// One chip per category, `Name (count)`, the active one filled.
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let active = app.active_chip();

        let mut spans = Vec::new();
        for (i, chip) in app.category_chips().into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let color = theme::category_color(&slugify(&chip.name));
            spans.push(Span::styled(
                format!(" {} ({}) ", chip.name, chip.count),
                theme::chip_style(color, active == Some(i)),
            ));
        }

        let para = Paragraph::new(Line::from(spans))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Categorias [←/→] ")
                    .title_style(theme::title_style())
                    .border_style(theme::border_style()),
            );
        frame.render_widget(para, area);
    }
}
