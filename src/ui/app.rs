use crate::api::Product;
use crate::catalog::{CatalogEvent, QueryController};
use crate::ui::cart::{CartIntent, CartReducer, CartState};
use crate::ui::catalog::{CatalogState, CategoryFilter, ListingView};
use crate::ui::mvi::dispatch;

/// Cards per grid row; arrow-key navigation and rendering share it.
pub const GRID_COLUMNS: usize = 4;

pub struct App {
    should_quit: bool,
    catalog: QueryController,
    /// Cart state (MVI pattern).
    cart: CartState,
    /// Index of the highlighted card in the current listing.
    selection: usize,
    backend_url: String,
}

impl App {
    pub fn new(catalog: QueryController, backend_url: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            catalog,
            cart: CartState::default(),
            selection: 0,
            backend_url: backend_url.into(),
        }
    }

    /// Runs the one-time bootstrap and the initial fetch cycle.
    pub fn start(&mut self) {
        self.catalog.initialize();
        self.catalog.mount();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn catalog(&self) -> &CatalogState {
        self.catalog.state()
    }

    pub fn cart(&self) -> &CartState {
        &self.cart
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Highlighted card, only while products are displayed.
    pub fn selection(&self) -> Option<usize> {
        match self.catalog.state().view() {
            ListingView::Products(items) if !items.is_empty() => {
                Some(self.selection.min(items.len() - 1))
            }
            _ => None,
        }
    }

    pub fn selected_product(&self) -> Option<&Product> {
        match self.catalog.state().view() {
            ListingView::Products(items) => items.get(self.selection),
            _ => None,
        }
    }

    // -- Search ---------------------------------------------------------------

    pub fn push_query_char(&mut self, ch: char) {
        let mut text = self.catalog().query_text().to_string();
        text.push(ch);
        self.set_query_text(text);
    }

    pub fn pop_query_char(&mut self) {
        let mut text = self.catalog().query_text().to_string();
        if text.pop().is_some() {
            self.set_query_text(text);
        }
    }

    pub fn clear_query(&mut self) {
        self.set_query_text(String::new());
    }

    pub fn set_query_text(&mut self, text: impl Into<String>) {
        self.catalog.set_query_text(text);
        self.selection = 0;
    }

    // -- Category filter ------------------------------------------------------

    /// `All` followed by the fetched categories, each listed once.
    ///
    /// A fetched name that is itself a sentinel (`""`, `"all"`) folds into
    /// the leading `All`.
    pub fn category_options(&self) -> Vec<CategoryFilter> {
        let mut options = vec![CategoryFilter::All];
        for name in self.catalog().categories() {
            let option = CategoryFilter::from_name(name);
            if !options.contains(&option) {
                options.push(option);
            }
        }
        options
    }

    pub fn select_category(&mut self, category: CategoryFilter) {
        self.catalog.set_category(category);
        self.selection = 0;
    }

    pub fn next_category(&mut self) {
        self.step_category(1);
    }

    pub fn previous_category(&mut self) {
        self.step_category(-1);
    }

    fn step_category(&mut self, delta: isize) {
        let options = self.category_options();
        let current = options
            .iter()
            .position(|option| option == self.catalog().category())
            .unwrap_or(0);
        let len = options.len() as isize;
        let next = (current as isize + delta).rem_euclid(len) as usize;
        if let Some(category) = options.into_iter().nth(next) {
            self.select_category(category);
        }
    }

    // -- Grid & cart ----------------------------------------------------------

    /// Moves the highlight by `delta` cards, clamped to the listing.
    pub fn move_selection(&mut self, delta: isize) {
        let ListingView::Products(items) = self.catalog.state().view() else {
            return;
        };
        let max = items.len().saturating_sub(1) as isize;
        let next = (self.selection.min(max as usize) as isize + delta).clamp(0, max);
        self.selection = next as usize;
    }

    pub fn add_to_cart(&mut self, product: Product) {
        tracing::debug!(product_id = %product.id, "Adding product to cart");
        dispatch::<CartReducer>(&mut self.cart, CartIntent::Add(product));
    }

    /// Adds the highlighted product. Returns false when nothing is selected.
    pub fn add_selected_to_cart(&mut self) -> bool {
        let Some(product) = self.selected_product().cloned() else {
            return false;
        };
        self.add_to_cart(product);
        true
    }

    // -- Background results ---------------------------------------------------

    pub fn on_catalog_event(&mut self, event: CatalogEvent) {
        self.catalog.apply(event);
        let len = self.catalog().listing().len();
        self.selection = self.selection.min(len.saturating_sub(1));
    }

    /// Cancels outstanding fetches before the view goes away.
    pub fn teardown(&mut self) {
        self.catalog.teardown();
    }
}
