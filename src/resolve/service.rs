// ABOUTME: Resolves the service a stack's load balancer currently routes to.
// ABOUTME: Fetches the stack's services concurrently, then validates the single link.

use futures::future::try_join_all;
use snafu::{OptionExt, ResultExt, ensure};

use super::error::{
    FetchServicesSnafu, LinkedToManySnafu, LoadbalancerNotFoundSnafu, NotLinkedSnafu,
    ResolveError, ServiceNotFoundSnafu, SuffixNotInOptionsSnafu,
};
use super::find_last;
use crate::api::{CloudApi, Service, Stack};
use crate::diagnostics::{Diagnostics, Warning};
use crate::types::{CodeOptions, Target, color_suffix};

/// Return the service currently linked to load balancer `lb` in `stack`.
///
/// Every service path of the stack is fetched concurrently; a single failed
/// request fails the whole lookup. The load balancer must be linked to exactly
/// one service, and that service's name must end in one of `options`.
pub async fn resolve_current_service(
    api: &impl CloudApi,
    target: &Target,
    lb: &str,
    options: &CodeOptions,
    stack: &Stack,
    diagnostics: &mut Diagnostics,
) -> Result<Service, ResolveError> {
    let stack_name = target.stack();

    let services = try_join_all(stack.services.iter().map(|path| api.get_service(path)))
        .await
        .context(FetchServicesSnafu { stack: stack_name })?;
    tracing::debug!(count = services.len(), stack = stack_name, "fetched services");

    let (loadbalancer, matches) = find_last(&services, |s| s.name == lb).context(
        LoadbalancerNotFoundSnafu {
            lb,
            stack: stack_name,
        },
    )?;
    if matches > 1 {
        diagnostics.warn(Warning::duplicate_loadbalancer(lb, stack_name, matches));
    }

    let linked = match loadbalancer.linked_to_service.as_slice() {
        [] => {
            return NotLinkedSnafu {
                lb,
                stack: stack_name,
            }
            .fail();
        }
        [linked] => linked,
        many => {
            return LinkedToManySnafu {
                lb,
                stack: stack_name,
                count: many.len(),
            }
            .fail();
        }
    };
    tracing::debug!(lb, linked = %linked.name, "load balancer link");

    ensure!(
        options.contains(color_suffix(&linked.name)),
        SuffixNotInOptionsSnafu {
            service: target.service(),
            stack: stack_name,
            lb,
            linked: linked.name.as_str(),
            options: options.quoted(),
        }
    );

    let (current, matches) = find_last(&services, |s| s.name == linked.name).context(
        ServiceNotFoundSnafu {
            service: target.service(),
            stack: stack_name,
        },
    )?;
    if matches > 1 {
        diagnostics.warn(Warning::duplicate_service(&linked.name, stack_name, matches));
    }

    Ok(current.clone())
}
