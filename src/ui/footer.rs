use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Footer<'a> {
    backend_url: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(backend_url: &'a str) -> Self {
        Self { backend_url }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = " Type: Search │ Tab: Category │ Arrows: Select │ Enter: Add to cart │ Esc: Quit";
        let backend = format!("Backend: {} ", self.backend_url);

        // Padding by char count, not byte count
        let hints_width = hints.chars().count();
        let backend_width = backend.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(backend_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(backend, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}
