//! src/view/components/detail_overlay.rs
//! ============================================================================
//! # DetailOverlay: Modal Listing Details
//!
//! Rendered only while the controller reports the detail overlay visible.
//! The contact buttons are shown as hints; they trigger nothing.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::{
    model::listing::Listing,
    query::format::{format_currency, slugify},
    view::{theme, ui::centered_rect},
};

pub struct DetailOverlay;

impl DetailOverlay {
    pub fn render(frame: &mut Frame<'_>, listing: &Listing, area: Rect) {
        let accent = theme::category_color(&slugify(&listing.category));

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    format!(" {} ", listing.category),
                    theme::chip_style(accent, true),
                ),
                Span::raw("  "),
                Span::styled(format!("📍 {}", listing.location), theme::hint_text_style()),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled(format!("★ {:.1}", listing.rating), theme::rating_style()),
                Span::styled(
                    format!("   {} avaliações", listing.review_count),
                    theme::hint_text_style(),
                ),
            ]),
            Line::from(Span::styled(format_currency(listing.price), theme::price_style())),
            Line::from(""),
            Line::from(Span::styled(
                "Descrição do Serviço",
                Style::default()
                    .fg(theme::FOREGROUND)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                listing.description.as_str(),
                Style::default().fg(theme::FOREGROUND),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Imagem: ", theme::hint_text_style()),
                Span::styled(listing.alt_or_name(), Style::default().fg(theme::FOREGROUND)),
            ]),
            Line::from(Span::styled(
                listing.image_ref.as_str(),
                Style::default().fg(theme::BLUE).add_modifier(Modifier::UNDERLINED),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    " 📞 Ligar Agora ",
                    Style::default()
                        .bg(theme::PURPLE)
                        .fg(theme::BACKGROUND)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled(
                    " 💬 Enviar Mensagem ",
                    Style::default().fg(theme::PURPLE),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled("Esc para fechar", theme::hint_text_style())),
        ];

        let overlay_area = centered_rect(70, 70, area);
        frame.render_widget(Clear, overlay_area);

        let para = Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .title(format!(" {} ", listing.name))
                    .title_alignment(Alignment::Center)
                    .title_style(theme::title_style())
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(accent))
                    .style(theme::base_style()),
            );

        frame.render_widget(para, overlay_area);
    }
}
