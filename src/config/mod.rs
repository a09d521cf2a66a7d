// ABOUTME: Typed run configuration built from raw command-line values.
// ABOUTME: Validates target, lb, options, user, and token in that order.

mod error;

pub use error::ValidationError;

use crate::api::DEFAULT_API_URL;
use crate::decide::CodeMode;
use crate::types::{CodeOptions, Credentials, DEFAULT_CODE_OPTIONS, Target, TargetError};

/// Raw parameter values as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Params {
    pub target: Option<String>,
    pub lb: Option<String>,
    pub options: Option<String>,
    pub user: Option<String>,
    pub token: Option<String>,
    pub active: bool,
    pub api_url: Option<String>,
}

/// A validated lookup request.
#[derive(Debug, Clone)]
pub struct Config {
    pub target: Target,
    pub lb: String,
    pub options: CodeOptions,
    pub credentials: Credentials,
    pub mode: CodeMode,
    pub api_url: String,
}

impl Config {
    /// Validate `params`, reporting the first failing check.
    pub fn from_params(params: &Params) -> Result<Self, ValidationError> {
        let target = validate_target(params.target.as_deref())?;
        let lb = validate_lb(params.lb.as_deref())?;
        let options = validate_options(params.options.as_deref())?;
        let user = required(params.user.as_deref()).ok_or(ValidationError::User)?;
        let token = required(params.token.as_deref()).ok_or(ValidationError::Token)?;

        Ok(Self {
            target,
            lb: lb.to_string(),
            options,
            credentials: Credentials::new(user, token),
            mode: CodeMode::from_active_flag(params.active),
            api_url: params
                .api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        })
    }
}

fn validate_target(target: Option<&str>) -> Result<Target, ValidationError> {
    let target = target.ok_or(ValidationError::Target(TargetError::Empty))?;
    Target::parse(target).map_err(ValidationError::Target)
}

fn validate_lb(lb: Option<&str>) -> Result<&str, ValidationError> {
    required(lb).ok_or(ValidationError::Lb)
}

fn validate_options(options: Option<&str>) -> Result<CodeOptions, ValidationError> {
    CodeOptions::parse(options.unwrap_or(DEFAULT_CODE_OPTIONS)).map_err(ValidationError::Options)
}

fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
