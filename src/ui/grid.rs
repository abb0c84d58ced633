use crate::api::Product;
use crate::ui::app::GRID_COLUMNS;
use crate::ui::catalog::ListingView;
use crate::ui::layout::grid_cells;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_TEXT,
    RATING_BADGE, SKELETON,
};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Card height including borders.
pub const CARD_HEIGHT: u16 = 7;

pub const EMPTY_MESSAGE: &str = "No products found";

pub fn render_listing(
    frame: &mut Frame<'_>,
    area: Rect,
    view: ListingView<'_>,
    selection: Option<usize>,
) {
    match view {
        ListingView::Loading { placeholders } => {
            for cell in grid_cells(area, GRID_COLUMNS, CARD_HEIGHT, placeholders) {
                frame.render_widget(skeleton_card(), cell);
            }
        }
        ListingView::Empty => {
            let message = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(MUTED_TEXT),
            )))
            .alignment(Alignment::Center);
            let y = area.y + area.height / 2;
            frame.render_widget(message, Rect { y, height: area.height.min(1), ..area });
        }
        ListingView::Products(items) => {
            let first = first_visible_index(area, selection.unwrap_or(0));
            let visible = &items[first.min(items.len())..];
            let cells = grid_cells(area, GRID_COLUMNS, CARD_HEIGHT, visible.len());
            for (offset, (product, cell)) in visible.iter().zip(cells).enumerate() {
                let selected = selection == Some(first + offset);
                frame.render_widget(product_card(product, selected), cell);
            }
        }
    }
}

/// Index of the first card drawn so the selected card's row stays on screen.
pub fn first_visible_index(area: Rect, selected: usize) -> usize {
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    let selected_row = selected / GRID_COLUMNS;
    selected_row.saturating_sub(visible_rows - 1) * GRID_COLUMNS
}

/// Prices render like plain numbers: `20`, `199.5`.
pub fn format_price(price: f64) -> String {
    format!("${price}")
}

pub fn card_lines(product: &Product, selected: bool) -> Vec<Line<'static>> {
    let mut price_line = vec![Span::styled(
        format_price(product.price),
        Style::default().fg(PRICE_TEXT).add_modifier(Modifier::BOLD),
    )];
    if let Some(rating) = product.rating {
        price_line.push(Span::raw("  "));
        price_line.push(Span::styled(
            format!(" {rating:.1} ★ "),
            Style::default().fg(Color::White).bg(RATING_BADGE),
        ));
    }

    let image = if product.image.is_some() {
        "[image]"
    } else {
        "No Image"
    };

    let action_style = if selected {
        Style::default().fg(Color::White).bg(BRAND_BLUE)
    } else {
        Style::default().fg(MUTED_TEXT)
    };

    vec![
        Line::from(Span::styled(
            product.title.clone(),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            product.description.clone(),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(price_line),
        Line::from(Span::styled(image, Style::default().fg(MUTED_TEXT))),
        Line::from(Span::styled(" Add to cart ", action_style)),
    ]
}

fn product_card(product: &Product, selected: bool) -> Paragraph<'static> {
    let (border, background) = if selected {
        (BRAND_BLUE, ACTIVE_HIGHLIGHT)
    } else {
        (GLOBAL_BORDER, Color::Reset)
    };
    Paragraph::new(card_lines(product, selected)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(background)),
    )
}

fn skeleton_card() -> Paragraph<'static> {
    let bar = Style::default().fg(SKELETON);
    Paragraph::new(vec![
        Line::from(Span::styled("▇▇▇▇▇▇▇▇▇▇▇▇", bar)),
        Line::from(Span::styled("▇▇▇▇▇▇▇▇", bar)),
        Line::from(Span::styled("▇▇▇▇", bar)),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(SKELETON)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ProductId;
    use crate::ui::catalog::SKELETON_CARDS;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn render_rows(view: ListingView<'_>, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| render_listing(frame, frame.area(), view, Some(0)))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn count(rows: &[String], needle: &str) -> usize {
        rows.iter().map(|row| row.matches(needle).count()).sum()
    }

    fn product(rating: Option<f64>, image: Option<&str>) -> Product {
        Product {
            id: ProductId::new("p1"),
            title: "Desk Lamp".to_string(),
            description: "Warm light".to_string(),
            price: 19.5,
            image: image.map(str::to_string),
            rating,
            category: None,
        }
    }

    fn text(line: &Line<'_>) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn price_formats_like_a_plain_number() {
        assert_eq!(format_price(20.0), "$20");
        assert_eq!(format_price(199.5), "$199.5");
    }

    #[test]
    fn rating_shows_one_decimal() {
        let lines = card_lines(&product(Some(4.3), None), false);
        assert_eq!(text(&lines[2]), "$19.5   4.3 ★ ");
    }

    #[test]
    fn missing_rating_and_image() {
        let lines = card_lines(&product(None, None), false);
        assert_eq!(text(&lines[2]), "$19.5");
        assert_eq!(text(&lines[3]), "No Image");
    }

    #[test]
    fn image_placeholder_when_present() {
        let lines = card_lines(&product(None, Some("https://img.example/lamp.png")), true);
        assert_eq!(text(&lines[3]), "[image]");
    }

    #[test]
    fn selection_scrolls_by_whole_rows() {
        let area = Rect::new(0, 0, 80, CARD_HEIGHT * 2);
        assert_eq!(first_visible_index(area, 0), 0);
        assert_eq!(first_visible_index(area, 7), 0);
        assert_eq!(first_visible_index(area, 8), GRID_COLUMNS);
        assert_eq!(first_visible_index(area, 13), GRID_COLUMNS * 2);
    }

    #[test]
    fn loading_draws_every_skeleton_card() {
        let rows = render_rows(
            ListingView::Loading {
                placeholders: SKELETON_CARDS,
            },
            80,
            CARD_HEIGHT * 2,
        );
        assert_eq!(count(&rows, "┌"), SKELETON_CARDS);
        assert_eq!(count(&rows, EMPTY_MESSAGE), 0);
    }

    #[test]
    fn empty_listing_draws_message_and_no_cards() {
        let rows = render_rows(ListingView::Empty, 80, CARD_HEIGHT * 2);
        assert_eq!(count(&rows, EMPTY_MESSAGE), 1);
        assert_eq!(count(&rows, "┌"), 0);
        assert_eq!(count(&rows, "▇"), 0);
    }

    #[test]
    fn products_draw_one_card_each() {
        let items = [product(Some(4.3), None), product(None, None)];
        let rows = render_rows(ListingView::Products(&items), 80, CARD_HEIGHT * 2);
        assert_eq!(count(&rows, "┌"), 2);
        assert_eq!(count(&rows, "Desk Lamp"), 2);
        assert_eq!(count(&rows, EMPTY_MESSAGE), 0);
    }
}
