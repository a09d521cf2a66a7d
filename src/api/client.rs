// ABOUTME: reqwest-backed `CloudApi` implementation.
// ABOUTME: Every request carries Basic auth and `Accept: application/json`.

use super::error::ApiError;
use super::models::{Service, Stack, StackList};
use super::{CloudApi, STACKS_PATH};
use crate::types::Credentials;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

/// HTTP client for the orchestration API.
///
/// Authentication headers are fixed at construction, so the client can be
/// shared by reference across concurrent requests.
#[derive(Debug, Clone)]
pub struct CloudClient {
    http: reqwest::Client,
    base_url: String,
}

impl CloudClient {
    pub fn new(base_url: &str, credentials: &Credentials) -> Result<Self, ApiError> {
        let mut auth = HeaderValue::from_str(&credentials.basic_auth())
            .map_err(|e| ApiError::InvalidHeader(e.to_string()))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ApiError::Client)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ApiError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|source| ApiError::Decode { url, source })
    }
}

#[async_trait]
impl CloudApi for CloudClient {
    async fn list_stacks(&self) -> Result<Vec<Stack>, ApiError> {
        let list: StackList = self.get_json(STACKS_PATH).await?;
        tracing::debug!(count = list.objects.len(), "fetched stacks");
        Ok(list.objects)
    }

    async fn get_service(&self, path: &str) -> Result<Service, ApiError> {
        self.get_json(path).await
    }
}
