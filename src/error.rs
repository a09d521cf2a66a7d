// ABOUTME: Application-wide error type for next-target-code.
// ABOUTME: Joins validation, client setup, and resolution failures.

use crate::api::ApiError;
use crate::config::ValidationError;
use crate::resolve::ResolveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("could not create API client: {0}")]
    Client(#[from] ApiError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),
}

pub type Result<T> = std::result::Result<T, Error>;
