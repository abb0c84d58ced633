use crate::ui::cart::CartState;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub const TITLE: &str = "Storefront Lite";

/// `Cart: 3 items • $42.50`
pub fn cart_summary(cart: &CartState) -> String {
    format!(
        "Cart: {} items • ${:.2}",
        cart.total_items(),
        cart.subtotal()
    )
}

pub struct Header<'a> {
    query: &'a str,
    cart: &'a CartState,
}

impl<'a> Header<'a> {
    pub fn new(query: &'a str, cart: &'a CartState) -> Self {
        Self { query, cart }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let search = if self.query.is_empty() {
            Span::styled(
                "Search for products",
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::ITALIC),
            )
        } else {
            Span::styled(self.query.to_string(), text_style)
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {TITLE}"),
                Style::default().fg(BRAND_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled("Search: ", text_style),
            search,
            Span::styled("▏", text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(cart_summary(self.cart), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
