use crate::ui::app::App;
use crate::ui::filters::filter_bar;
use crate::ui::footer::Footer;
use crate::ui::grid::render_listing;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let catalog = app.catalog();

    let header = Header::new(catalog.query_text(), app.cart());
    frame.render_widget(header.widget(), regions.header);

    let options = app.category_options();
    frame.render_widget(filter_bar(&options, catalog.category()), regions.filters);

    frame.render_widget(Clear, regions.body);
    render_listing(frame, regions.body, catalog.view(), app.selection());

    let footer = Footer::new(app.backend_url());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}
