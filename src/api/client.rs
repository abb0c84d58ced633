use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::api::error::{ApiError, Endpoint};
use crate::api::types::{Items, Product, ProductQuery};
use crate::api::CatalogApi;
use crate::config::BackendConfig;

/// reqwest-backed [`CatalogApi`].
pub struct HttpCatalog {
    client: Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(config: &BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(ApiError::Client)?;

        let catalog = Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        };
        // Fail at construction rather than on the first fetch.
        catalog.url(Endpoint::Products)?;
        Ok(catalog)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: Endpoint) -> Result<Url, ApiError> {
        let raw = format!("{}{}", self.base_url, endpoint.path());
        Url::parse(&raw).map_err(|e| ApiError::InvalidUrl {
            url: raw,
            reason: e.to_string(),
        })
    }

    async fn fetch_items<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        url: Url,
    ) -> Result<Vec<T>, ApiError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let envelope: Items<T> = serde_json::from_slice(&body)
            .map_err(|source| ApiError::Decode { endpoint, source })?;
        Ok(envelope.into_vec())
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn seed(&self) -> Result<(), ApiError> {
        let endpoint = Endpoint::Seed;
        let response = self
            .client
            .post(self.url(endpoint)?)
            .send()
            .await
            .map_err(|source| ApiError::Request { endpoint, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    async fn categories(&self) -> Result<Vec<String>, ApiError> {
        let endpoint = Endpoint::Categories;
        self.fetch_items(endpoint, self.url(endpoint)?).await
    }

    async fn products(&self, query: &ProductQuery) -> Result<Vec<Product>, ApiError> {
        let endpoint = Endpoint::Products;
        let mut url = self.url(endpoint)?;
        let pairs = query.pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        self.fetch_items(endpoint, url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> BackendConfig {
        BackendConfig {
            base_url: base_url.to_string(),
            ..BackendConfig::default()
        }
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let catalog = HttpCatalog::new(&config("http://localhost:8000/")).unwrap();
        assert_eq!(catalog.base_url(), "http://localhost:8000");
        assert_eq!(
            catalog.url(Endpoint::Categories).unwrap().as_str(),
            "http://localhost:8000/api/categories"
        );
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let catalog = HttpCatalog::new(&config("https://example.com/shop")).unwrap();
        assert_eq!(
            catalog.url(Endpoint::Seed).unwrap().as_str(),
            "https://example.com/shop/api/seed"
        );
    }

    #[test]
    fn invalid_base_url_fails_construction() {
        assert!(matches!(
            HttpCatalog::new(&config("no scheme here")),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
