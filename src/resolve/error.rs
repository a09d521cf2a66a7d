// ABOUTME: Resolution error types with SNAFU pattern.
// ABOUTME: Descriptive failures carry their own message; fetch failures wrap a raw `ApiError`.

use snafu::Snafu;

use crate::api::ApiError;

/// Failure while resolving the service a load balancer currently points at.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum ResolveError {
    #[snafu(display("Could not fetch stacks"))]
    FetchStacks { source: ApiError },

    #[snafu(display("Stack {stack} not found"))]
    StackNotFound { stack: String },

    #[snafu(display("Could not fetch services for stack {stack}"))]
    FetchServices { stack: String, source: ApiError },

    #[snafu(display("Loadbalancer {lb}.{stack} not found"))]
    LoadbalancerNotFound { lb: String, stack: String },

    #[snafu(display("Loadbalancer {lb}.{stack} is not linked to any services"))]
    NotLinked { lb: String, stack: String },

    #[snafu(display("Loadbalancer {lb}.{stack} is linked more than one service"))]
    LinkedToMany {
        lb: String,
        stack: String,
        count: usize,
    },

    #[snafu(display(
        "Service {service}.{stack} linked to {lb}.{stack} does not contain suffix from provided options {options}"
    ))]
    SuffixNotInOptions {
        service: String,
        stack: String,
        lb: String,
        linked: String,
        options: String,
    },

    #[snafu(display("Service {service}.{stack} not found"))]
    ServiceNotFound { service: String, stack: String },

    #[snafu(display("Current code \"{code}\" is not one of {options}"))]
    UnknownCode { code: String, options: String },
}

/// Error kind for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A stack, load balancer, or service does not exist.
    NotFound,
    /// The load balancer is not linked to exactly one service.
    Linkage,
    /// A service name does not carry one of the configured codes.
    Validation,
    /// The API could not be reached or returned an unusable response.
    Fetch,
}

impl ResolveError {
    /// Returns the error kind for programmatic handling.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ResolveError::FetchStacks { .. } | ResolveError::FetchServices { .. } => {
                ErrorKind::Fetch
            }
            ResolveError::StackNotFound { .. }
            | ResolveError::LoadbalancerNotFound { .. }
            | ResolveError::ServiceNotFound { .. } => ErrorKind::NotFound,
            ResolveError::NotLinked { .. } | ResolveError::LinkedToMany { .. } => {
                ErrorKind::Linkage
            }
            ResolveError::SuffixNotInOptions { .. } | ResolveError::UnknownCode { .. } => {
                ErrorKind::Validation
            }
        }
    }

    /// Returns the underlying transport error for fetch failures.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ResolveError::FetchStacks { source } | ResolveError::FetchServices { source, .. } => {
                Some(source)
            }
            _ => None,
        }
    }
}
