// ABOUTME: Locates a stack by name in the full stack listing.
// ABOUTME: Duplicate names resolve to the last listed stack and are flagged.

use snafu::{OptionExt, ResultExt};

use super::error::{FetchStacksSnafu, ResolveError, StackNotFoundSnafu};
use super::find_last;
use crate::api::{CloudApi, Stack};
use crate::diagnostics::{Diagnostics, Warning};

/// Fetch all stacks and return the one named `name`.
pub async fn resolve_stack(
    api: &impl CloudApi,
    name: &str,
    diagnostics: &mut Diagnostics,
) -> Result<Stack, ResolveError> {
    let stacks = api.list_stacks().await.context(FetchStacksSnafu)?;

    let (stack, matches) =
        find_last(&stacks, |s| s.name == name).context(StackNotFoundSnafu { stack: name })?;

    if matches > 1 {
        diagnostics.warn(Warning::duplicate_stack(name, matches));
    }

    tracing::debug!(
        stack = %stack.name,
        services = stack.services.len(),
        "resolved stack"
    );
    Ok(stack.clone())
}
