// ABOUTME: Resolution pipeline from a target to its active and next codes.
// ABOUTME: Stack lookup, then load balancer lookup, then the code decision.

mod error;
mod service;
mod stack;

pub use error::{ErrorKind, ResolveError};
pub use service::resolve_current_service;
pub use stack::resolve_stack;

use crate::api::CloudApi;
use crate::config::Config;
use crate::decide::decide_code;
use crate::diagnostics::Diagnostics;

/// Outcome of a full lookup.
#[derive(Debug)]
pub struct Resolution {
    /// The code to print.
    pub code: String,
    /// Name of the service the load balancer currently routes to.
    pub current_service: String,
    pub diagnostics: Diagnostics,
}

/// Run the full lookup for a validated configuration.
pub async fn resolve_code(
    api: &impl CloudApi,
    config: &Config,
) -> Result<Resolution, ResolveError> {
    let mut diagnostics = Diagnostics::default();

    let stack = resolve_stack(api, config.target.stack(), &mut diagnostics).await?;
    let current = resolve_current_service(
        api,
        &config.target,
        &config.lb,
        &config.options,
        &stack,
        &mut diagnostics,
    )
    .await?;
    let code = decide_code(&current, &config.options, config.mode)?;

    tracing::debug!(current = %current.name, mode = ?config.mode, %code, "decided code");
    Ok(Resolution {
        code,
        current_service: current.name,
        diagnostics,
    })
}

/// Last item matching `predicate`, with the total number of matches.
fn find_last<T>(items: &[T], predicate: impl Fn(&T) -> bool) -> Option<(&T, usize)> {
    let matches = items.iter().filter(|item| predicate(item)).count();
    items
        .iter()
        .rev()
        .find(|item| predicate(item))
        .map(|item| (item, matches))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_last_prefers_later_items() {
        let items = [("a", 1), ("b", 2), ("a", 3)];
        let (found, matches) = find_last(&items, |(name, _)| *name == "a").unwrap();
        assert_eq!(*found, ("a", 3));
        assert_eq!(matches, 2);
    }

    #[test]
    fn find_last_without_match_is_none() {
        let items = [1, 2, 3];
        assert!(find_last(&items, |n| *n > 5).is_none());
    }
}
