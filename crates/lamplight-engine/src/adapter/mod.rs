//! Adapter around the host's configure and enable primitives.
//!
//! Normalises the outcome of an activation call into an [`AdapterOutcome`]
//! recording whether it succeeded and whether the modern interface handled
//! it. Failures from the host are caught here, reported once through the
//! notification capability, and never propagate into the scheduling pass.

use lamplight_config::ConfigTable;
use lamplight_host::{ActivationBindings, ActivationRoute, EditorHost, Severity};

use crate::tracking::TrackingState;

/// Result of one activation call through the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AdapterOutcome {
    /// Whether the configure call succeeded.
    pub(crate) succeeded: bool,
    /// Whether the modern configuration interface handled the call.
    pub(crate) modern: bool,
}

/// Applies a provider's configuration through the memoised route.
///
/// A host with no activation capability at all fails silently: capability
/// absence is not a provider-specific problem, so nothing is reported.
pub(crate) fn configure_provider<H>(
    host: &H,
    route: ActivationRoute,
    name: &str,
    config: &ConfigTable,
) -> AdapterOutcome
where
    H: EditorHost + ActivationBindings,
{
    if route == ActivationRoute::Unavailable {
        tracing::debug!(provider = name, "no activation capability on host");
        return AdapterOutcome {
            succeeded: false,
            modern: false,
        };
    }

    match host.configure(route, name, config) {
        Ok(()) => AdapterOutcome {
            succeeded: true,
            modern: route.is_modern(),
        },
        Err(error) => {
            host.notify(
                Severity::Error,
                &format!("failed to configure {name}: {error}"),
            );
            AdapterOutcome {
                succeeded: false,
                modern: route.is_modern(),
            }
        }
    }
}

/// Registers a provider for automatic enablement, at most once per engine
/// lifetime.
///
/// A host without a registration primitive counts as trivially successful;
/// a failed registration is reported and left unmarked so a later recheck
/// cycle retries it.
pub(crate) fn register_enable<H>(host: &H, tracking: &mut TrackingState, name: &str) -> bool
where
    H: EditorHost + ActivationBindings,
{
    if tracking.enabled(name) {
        return true;
    }
    match host.enable(name) {
        None => {
            tracking.mark_enabled(name);
            true
        }
        Some(Ok(())) => {
            tracking.mark_enabled(name);
            true
        }
        Some(Err(error)) => {
            host.notify(Severity::Error, &format!("failed to enable {name}: {error}"));
            false
        }
    }
}
