//! src/view/components/listing_table.rs

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table, TableState},
};

use crate::{
    model::app_state::AppState,
    query::format::{format_currency, results_label, slugify},
    view::theme,
};

pub struct ListingTable;

impl ListingTable {
    pub fn render(frame: &mut Frame<'_>, app: &AppState, area: Rect) {
        let results = app.filters.results();

        let header = Row::new(vec!["Serviço", "Categoria", "Local", "Nota", "Avaliações", "Preço"])
            .style(Style::default().fg(theme::YELLOW).bold())
            .bottom_margin(1);

        let rows: Vec<Row> = results
            .iter()
            .map(|listing| {
                let accent = theme::category_color(&slugify(&listing.category));
                Row::new(vec![
                    Cell::from(listing.name.as_str()).style(Style::default().fg(theme::FOREGROUND)),
                    Cell::from(listing.category.as_str()).style(Style::default().fg(accent)),
                    Cell::from(listing.location.as_str()).style(theme::hint_text_style()),
                    Cell::from(format!("★ {:.1}", listing.rating)).style(theme::rating_style()),
                    Cell::from(listing.review_count.to_string()).style(theme::hint_text_style()),
                    Cell::from(Text::from(format_currency(listing.price)).alignment(Alignment::Right))
                        .style(theme::price_style()),
                ])
            })
            .collect();

        let widths = [
            Constraint::Fill(2),
            Constraint::Fill(1),
            Constraint::Length(22),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(12),
        ];

        let mut table_state = TableState::default().with_selected(Some(app.ui.cursor));

        let table = Table::new(rows, widths)
            .header(header)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(format!(" {} ", results_label(results.len())))
                    .title_style(theme::title_style())
                    .border_style(theme::border_style())
                    .style(Style::default().bg(theme::BACKGROUND)),
            )
            .row_highlight_style(theme::highlight_style())
            .highlight_symbol("▶ ")
            .highlight_spacing(HighlightSpacing::Always);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}
