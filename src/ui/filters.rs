use crate::ui::catalog::CategoryFilter;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Category chips: `All` first, the selected one highlighted.
pub fn filter_bar(options: &[CategoryFilter], selected: &CategoryFilter) -> Paragraph<'static> {
    let mut spans = vec![Span::raw(" ")];
    for option in options {
        let label = option.name().unwrap_or("All").to_string();
        let style = if option == selected {
            Style::default()
                .fg(Color::White)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(" Categories ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
