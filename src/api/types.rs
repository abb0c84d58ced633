//! Wire types for the catalog backend.

use serde::Deserialize;
use std::fmt;

/// Product identifier, normalised to a string.
///
/// The backend may send either `id` or `_id`, as a JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawId> for ProductId {
    fn from(raw: RawId) -> Self {
        match raw {
            RawId::Text(text) => ProductId(text),
            RawId::Number(number) => ProductId(number.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for ProductId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        RawId::deserialize(deserializer).map(ProductId::from)
    }
}

/// A catalog product as returned by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image: Option<String>,
    pub rating: Option<f64>,
    pub category: Option<String>,
}

/// Every field but `price` may be missing or `null`.
#[derive(Deserialize)]
struct RawProduct {
    id: Option<ProductId>,
    #[serde(rename = "_id")]
    object_id: Option<ProductId>,
    title: Option<String>,
    description: Option<String>,
    price: f64,
    image: Option<String>,
    rating: Option<f64>,
    category: Option<String>,
}

impl TryFrom<RawProduct> for Product {
    type Error = String;

    fn try_from(raw: RawProduct) -> Result<Self, Self::Error> {
        let title = raw.title.unwrap_or_default();
        let id = raw
            .id
            .or(raw.object_id)
            .ok_or_else(|| format!("product '{title}' has neither id nor _id"))?;

        Ok(Product {
            id,
            title,
            description: raw.description.unwrap_or_default(),
            price: raw.price,
            // An empty image string renders the same as a missing one.
            image: raw.image.filter(|url| !url.is_empty()),
            rating: raw.rating,
            category: raw.category,
        })
    }
}

/// `{ "items": [...] }` envelope shared by the list endpoints.
///
/// A missing or `null` list reads as empty.
#[derive(Debug, Deserialize)]
pub(crate) struct Items<T> {
    items: Option<Vec<T>>,
}

impl<T> Items<T> {
    pub(crate) fn into_vec(self) -> Vec<T> {
        self.items.unwrap_or_default()
    }
}

/// Filters for a product listing request.
///
/// Absent fields are omitted from the query string, never sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProductQuery {
    pub search: Option<String>,
    pub category: Option<String>,
}

impl ProductQuery {
    /// Query string pairs in request order.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        let mut pairs = Vec::with_capacity(2);
        if let Some(search) = self.search.as_deref().filter(|s| !s.is_empty()) {
            pairs.push(("search", search));
        }
        if let Some(category) = self.category.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("category", category));
        }
        pairs
    }
}
