// ABOUTME: Docker Cloud style orchestration API: models, client, and trait seam.
// ABOUTME: Resolvers depend on `CloudApi` so they can run against in-memory fakes.

mod client;
mod error;
mod models;

pub use client::CloudClient;
pub use error::ApiError;
pub use models::{LinkedService, Service, Stack, StackList};

use async_trait::async_trait;

pub const DEFAULT_API_URL: &str = "https://cloud.docker.com";
pub const STACKS_PATH: &str = "/api/app/v1/stack/";

/// Read access to stacks and services.
#[async_trait]
pub trait CloudApi: Send + Sync {
    /// Fetch every stack visible to the credentials.
    async fn list_stacks(&self) -> Result<Vec<Stack>, ApiError>;

    /// Fetch one service by the resource path a stack references it with.
    async fn get_service(&self, path: &str) -> Result<Service, ApiError>;
}
