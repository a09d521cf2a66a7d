// ABOUTME: Validated domain types built from command-line input.
// ABOUTME: Targets, color code options, and API credentials.

mod code_options;
mod credentials;
mod target;

pub use code_options::{CodeOptions, CodeOptionsError, DEFAULT_CODE_OPTIONS, color_suffix};
pub use credentials::Credentials;
pub use target::{Target, TargetError};
