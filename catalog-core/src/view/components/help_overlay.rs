use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::view::{theme, ui::centered_rect};

pub struct HelpOverlay;

/// Renders the help overlay centered in the given area.
impl HelpOverlay {
    pub fn render(frame: &mut Frame<'_>, area: Rect) {
        let help_text = vec![
            Line::from(Span::styled(
                "Marketplace: Ajuda",
                Style::default()
                    .fg(theme::YELLOW)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Busca:"),
            Line::from("  /             Editar busca"),
            Line::from("  Enter         Aplicar busca agora"),
            Line::from("  Esc           Sair da busca"),
            Line::from(""),
            Line::from("Filtros:"),
            Line::from("  Left/Right    Categoria anterior/seguinte (h/l)"),
            Line::from("  s             Alternar ordenação"),
            Line::from("  c             Limpar filtros"),
            Line::from(""),
            Line::from("Navegação:"),
            Line::from("  Up/Down       Mover seleção (k/j)"),
            Line::from("  Enter         Ver detalhes"),
            Line::from("  Esc           Fechar detalhes"),
            Line::from(""),
            Line::from("Geral:"),
            Line::from("  ?             Mostrar/ocultar ajuda"),
            Line::from("  q             Sair"),
            Line::from(""),
            Line::from("Pressione Esc ou ? para fechar."),
        ];

        let overlay_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, overlay_area);

        let help_paragraph = Paragraph::new(Text::from(help_text))
            .block(
                Block::default()
                    .title(" Ajuda ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme::BLUE))
                    .style(theme::base_style()),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        frame.render_widget(help_paragraph, overlay_area);
    }
}
