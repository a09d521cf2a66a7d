// ABOUTME: Diagnostics accumulator for non-fatal data-quality warnings.
// ABOUTME: Records duplicate name matches that were resolved by taking the last one.

/// Collects non-fatal warnings during resolution.
#[derive(Debug, Default)]
pub struct Diagnostics {
    warnings: Vec<Warning>,
}

impl Diagnostics {
    /// Record a warning, auto-logging it via tracing.
    pub fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning.message);
        self.warnings.push(warning);
    }

    /// Get all collected warnings.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check if any warnings were collected.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// A non-fatal warning collected during resolution.
#[derive(Debug, Clone)]
pub struct Warning {
    pub kind: WarningKind,
    pub message: String,
}

impl Warning {
    /// Several stacks share the requested name.
    pub fn duplicate_stack(stack: &str, matches: usize) -> Self {
        Self {
            kind: WarningKind::DuplicateStack,
            message: format!("{matches} stacks named {stack}, using the last one"),
        }
    }

    /// Several services in the stack share the load balancer's name.
    pub fn duplicate_loadbalancer(lb: &str, stack: &str, matches: usize) -> Self {
        Self {
            kind: WarningKind::DuplicateLoadbalancer,
            message: format!("{matches} services named {lb}.{stack}, using the last one"),
        }
    }

    /// Several services in the stack share the linked service's name.
    pub fn duplicate_service(service: &str, stack: &str, matches: usize) -> Self {
        Self {
            kind: WarningKind::DuplicateService,
            message: format!("{matches} services named {service}.{stack}, using the last one"),
        }
    }
}

/// Categories of warnings that can occur during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// More than one stack matched by name.
    DuplicateStack,
    /// More than one load balancer matched by name.
    DuplicateLoadbalancer,
    /// More than one service matched the load balancer's link.
    DuplicateService,
}
