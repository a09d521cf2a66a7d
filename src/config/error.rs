// ABOUTME: Command-line validation failures.
// ABOUTME: Each variant names the parameter at fault and how to supply it.

use crate::types::{CodeOptionsError, TargetError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(
        "--target parameter must be used to specify the intended target in the format of [service].[stack]"
    )]
    Target(#[source] TargetError),

    #[error("--lb parameter must be used to specify the service load balancer")]
    Lb,

    #[error("--options parameter use requires exactly two options delimited by a comma")]
    Options(#[source] CodeOptionsError),

    #[error("--user parameter must be used to specify a docker cloud username")]
    User,

    #[error("--token parameter must be used to specify a docker cloud API token matched with --user")]
    Token,
}
