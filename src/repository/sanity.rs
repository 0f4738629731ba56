//! Repository implementation backed by the Sanity HTTP query endpoint.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::Value;

use crate::domain::product::{FullProduct, SimplifiedProduct};
use crate::domain::types::{CategoryName, Slug};
use crate::groq::{self, Query};
use crate::models::config::SanityConfig;
use crate::models::product::{project_detail, project_listing};
use crate::repository::ProductReader;
use crate::repository::errors::{StoreError, StoreResult};

/// Envelope returned by the Sanity query endpoint.
#[derive(Debug, Deserialize)]
struct QueryResponse {
    result: Option<Value>,
}

/// Thin client over the store's read endpoint.
///
/// Owns the endpoint and credentials, nothing else: no retries, no
/// backoff, no caching. Every `fetch` is a fresh network round trip,
/// which is what keeps storefront pages in step with out-of-band
/// catalog edits.
#[derive(Debug, Clone)]
pub struct SanityClient {
    http: reqwest::Client,
    config: SanityConfig,
}

impl SanityClient {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Execute a GROQ query and return the raw `result` value.
    ///
    /// Zero matches are not an error: listing queries yield an empty
    /// array and single-document queries yield `Value::Null`.
    pub async fn fetch(&self, query: &Query) -> StoreResult<Value> {
        let mut request = self
            .http
            .get(self.config.query_url())
            .query(&[("query", query.as_str())]);
        if let Some(token) = &self.config.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        match response.status() {
            StatusCode::BAD_REQUEST => {
                let body = response.text().await.unwrap_or_default();
                return Err(StoreError::Query(body));
            }
            status if !status.is_success() => {
                return Err(StoreError::Unavailable(format!(
                    "store responded with status {status}"
                )));
            }
            _ => {}
        }

        let envelope: QueryResponse = response
            .json()
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(envelope.result.unwrap_or(Value::Null))
    }
}

/// [`ProductReader`] composing the query builder, the client and the
/// projection layer. Cheap to clone; the whole application shares one
/// instance constructed at startup.
#[derive(Debug, Clone)]
pub struct SanityRepository {
    client: SanityClient,
}

impl SanityRepository {
    pub fn new(config: SanityConfig) -> Self {
        Self {
            client: SanityClient::new(config),
        }
    }

    async fn fetch_listing(&self, query: &Query) -> StoreResult<Vec<SimplifiedProduct>> {
        let result = self.client.fetch(query).await?;
        match result {
            Value::Null => Ok(vec![]),
            Value::Array(documents) => Ok(project_listing(documents)),
            other => Err(StoreError::Query(format!(
                "expected an array of documents, got {other}"
            ))),
        }
    }
}

#[async_trait]
impl ProductReader for SanityRepository {
    async fn list_by_category(
        &self,
        category: &CategoryName,
    ) -> StoreResult<Vec<SimplifiedProduct>> {
        self.fetch_listing(&groq::category_query(category)).await
    }

    async fn list_newest(&self, limit: usize) -> StoreResult<Vec<SimplifiedProduct>> {
        self.fetch_listing(&groq::newest_query(limit)).await
    }

    async fn get_by_slug(&self, slug: &Slug) -> StoreResult<Option<FullProduct>> {
        let result = self.client.fetch(&groq::by_slug_query(slug)).await?;
        match result {
            Value::Null => Ok(None),
            document => project_detail(document).map(Some),
        }
    }
}
