//! State for the catalog view.

use crate::api::{Product, ProductQuery};
use crate::ui::mvi::UiState;

/// Number of placeholder cards shown while a fetch is outstanding.
pub const SKELETON_CARDS: usize = 8;

/// Category selection. `All` means no category filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Named(String),
}

impl CategoryFilter {
    /// Maps the `""` and `"all"` sentinels to [`CategoryFilter::All`].
    pub fn from_name(name: &str) -> Self {
        if name.is_empty() || name == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(name.to_string())
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(name) => Some(name),
        }
    }
}

/// What the user is currently asking for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchIntent {
    pub query_text: String,
    pub category: CategoryFilter,
}

impl SearchIntent {
    /// Request filters; empty text and `All` are omitted.
    pub fn to_query(&self) -> ProductQuery {
        ProductQuery {
            search: Some(self.query_text.clone()).filter(|text| !text.is_empty()),
            category: self.category.name().map(str::to_string),
        }
    }
}

/// What the product grid should render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListingView<'a> {
    Loading { placeholders: usize },
    Empty,
    Products(&'a [Product]),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    pub(super) search: SearchIntent,
    pub(super) categories: Vec<String>,
    pub(super) listing: Vec<Product>,
    pub(super) loading: bool,
    /// Bumped by every fetch cycle; results tagged with an older value are stale.
    pub(super) generation: u64,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            search: SearchIntent::default(),
            categories: Vec::new(),
            listing: Vec::new(),
            // The mount cycle starts immediately, so a fresh view is loading.
            loading: true,
            generation: 0,
        }
    }
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn search(&self) -> &SearchIntent {
        &self.search
    }

    pub fn query_text(&self) -> &str {
        &self.search.query_text
    }

    pub fn category(&self) -> &CategoryFilter {
        &self.search.category
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Most recently committed listing. Kept while a newer fetch is loading.
    pub fn listing(&self) -> &[Product] {
        &self.listing
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    pub fn view(&self) -> ListingView<'_> {
        if self.loading {
            ListingView::Loading {
                placeholders: SKELETON_CARDS,
            }
        } else if self.listing.is_empty() {
            ListingView::Empty
        } else {
            ListingView::Products(&self.listing)
        }
    }
}
