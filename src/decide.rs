// ABOUTME: Chooses which color code to report for the current service.
// ABOUTME: Active mode echoes the current code; next mode returns the other option.

use crate::api::Service;
use crate::resolve::ResolveError;
use crate::types::{CodeOptions, color_suffix};

/// Which of the two codes to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeMode {
    /// The code to deploy next (the one not currently live).
    #[default]
    Next,
    /// The code currently receiving traffic.
    Active,
}

impl CodeMode {
    pub fn from_active_flag(active: bool) -> Self {
        if active { CodeMode::Active } else { CodeMode::Next }
    }
}

pub fn decide_code(
    current: &Service,
    options: &CodeOptions,
    mode: CodeMode,
) -> Result<String, ResolveError> {
    let current_code = color_suffix(&current.name);

    let code = match mode {
        CodeMode::Active if options.contains(current_code) => Some(current_code),
        CodeMode::Active => None,
        CodeMode::Next => options.other(current_code),
    };

    code.map(str::to_string)
        .ok_or_else(|| ResolveError::UnknownCode {
            code: current_code.to_string(),
            options: options.quoted(),
        })
}
