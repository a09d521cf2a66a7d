// ABOUTME: The pair of color codes a service alternates between.
// ABOUTME: Parses `a,b` lists and extracts color suffixes from service names.

use std::fmt;
use thiserror::Error;

pub const DEFAULT_CODE_OPTIONS: &str = "blue,green";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeOptionsError {
    #[error("expected exactly two comma-delimited options, found {0}")]
    Count(usize),

    #[error("option codes cannot be empty")]
    EmptyCode,

    #[error("option codes must differ, got \"{0}\" twice")]
    Duplicate(String),
}

/// Two distinct color codes, in the order they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeOptions {
    codes: [String; 2],
}

impl CodeOptions {
    pub fn new(first: &str, second: &str) -> Result<Self, CodeOptionsError> {
        if first.is_empty() || second.is_empty() {
            return Err(CodeOptionsError::EmptyCode);
        }
        if first == second {
            return Err(CodeOptionsError::Duplicate(first.to_string()));
        }
        Ok(Self {
            codes: [first.to_string(), second.to_string()],
        })
    }

    pub fn parse(value: &str) -> Result<Self, CodeOptionsError> {
        let parts: Vec<&str> = value.split(',').collect();
        match parts.as_slice() {
            [first, second] => Self::new(first, second),
            _ => Err(CodeOptionsError::Count(parts.len())),
        }
    }

    pub(crate) fn codes(&self) -> &[String; 2] {
        &self.codes
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.iter().any(|c| c == code)
    }

    /// The code that is not `code`, or `None` when `code` is not an option.
    pub fn other(&self, code: &str) -> Option<&str> {
        match &self.codes {
            [first, second] if first == code => Some(second),
            [first, second] if second == code => Some(first),
            _ => None,
        }
    }

    /// Options rendered as `"blue" or "green"`.
    pub fn quoted(&self) -> String {
        let [first, second] = self.codes();
        format!("\"{first}\" or \"{second}\"")
    }
}

impl Default for CodeOptions {
    fn default() -> Self {
        Self {
            codes: ["blue".to_string(), "green".to_string()],
        }
    }
}

impl fmt::Display for CodeOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [first, second] = self.codes();
        write!(f, "{first},{second}")
    }
}

/// Last `-`-delimited token of a service name (`web-blue` -> `blue`).
pub fn color_suffix(name: &str) -> &str {
    name.rsplit('-').next().unwrap_or(name)
}
