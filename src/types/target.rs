// ABOUTME: Deployment target parsed from a `service.stack` token.
// ABOUTME: Rejects whitespace, missing halves, and extra separators.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("target cannot be empty")]
    Empty,

    #[error("target cannot contain whitespace")]
    Whitespace,

    #[error("target must contain exactly one '.' separator, found {0}")]
    Separators(usize),

    #[error("target is missing the service name")]
    MissingService,

    #[error("target is missing the stack name")]
    MissingStack,
}

/// A service within a stack, written `service.stack`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    service: String,
    stack: String,
}

impl Target {
    pub fn parse(value: &str) -> Result<Self, TargetError> {
        if value.is_empty() {
            return Err(TargetError::Empty);
        }

        if value.chars().any(char::is_whitespace) {
            return Err(TargetError::Whitespace);
        }

        let separators = value.matches('.').count();
        if separators != 1 {
            return Err(TargetError::Separators(separators));
        }

        let (service, stack) = value
            .split_once('.')
            .ok_or(TargetError::Separators(separators))?;

        if service.is_empty() {
            return Err(TargetError::MissingService);
        }
        if stack.is_empty() {
            return Err(TargetError::MissingStack);
        }

        Ok(Self {
            service: service.to_string(),
            stack: stack.to_string(),
        })
    }

    pub fn service(&self) -> &str {
        &self.service
    }

    pub fn stack(&self) -> &str {
        &self.stack
    }
}

impl FromStr for Target {
    type Err = TargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.service, self.stack)
    }
}
