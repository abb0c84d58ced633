use ratatui::layout::Rect;

/// Screen regions, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub header: Rect,
    pub filters: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn layout_regions(area: Rect) -> Regions {
    let header_height = area.height.min(3);
    let filters_height = 3.min(area.height.saturating_sub(header_height));
    let footer_height = 3.min(area.height.saturating_sub(header_height + filters_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let filters = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: filters_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height + filters_height,
        width: area.width,
        height: area
            .height
            .saturating_sub(header_height + filters_height + footer_height),
    };
    Regions {
        header,
        filters,
        body,
        footer,
    }
}

/// Splits `area` into a grid of `columns` cells per row, each `cell_height` tall.
///
/// Returns one rect per visible cell, row-major; cells that would fall
/// below `area` are omitted.
pub fn grid_cells(area: Rect, columns: usize, cell_height: u16, count: usize) -> Vec<Rect> {
    let columns = columns.max(1) as u16;
    if area.width == 0 || area.height < cell_height || cell_height == 0 {
        return Vec::new();
    }
    let cell_width = area.width / columns;
    let visible_rows = (area.height / cell_height) as usize;
    let mut cells = Vec::with_capacity(count);
    for index in 0..count {
        let row = index / columns as usize;
        if row >= visible_rows {
            break;
        }
        let col = (index % columns as usize) as u16;
        let width = if col + 1 == columns {
            area.width - cell_width * col
        } else {
            cell_width
        };
        cells.push(Rect {
            x: area.x + cell_width * col,
            y: area.y + row as u16 * cell_height,
            width,
            height: cell_height,
        });
    }
    cells
}
