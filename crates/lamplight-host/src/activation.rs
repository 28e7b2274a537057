//! Activation primitives and the capability routes the host may expose.

use lamplight_config::ConfigTable;

use crate::error::HostError;

/// Activation call form detected on the host.
///
/// Hosts differ in how provider configuration is applied: newer ones expose
/// a single configure-by-name function or a callable configuration object,
/// slightly older ones a per-name table of setup entries, and the oldest
/// only a legacy per-provider module. The engine probes once, memoises the
/// result, and dispatches on it thereafter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationRoute {
    /// Modern single-call `configure(name, config)` function.
    ModernFunction,
    /// Modern configuration object that is itself callable.
    ModernCallable,
    /// Modern per-name entries exposing a `setup` operation.
    SetupTable,
    /// Legacy per-provider setup module.
    Legacy,
    /// No activation capability at all.
    Unavailable,
}

impl ActivationRoute {
    /// Whether this route goes through the modern configuration interface.
    ///
    /// Modern routes require a separate enable-registration step after a
    /// successful configure call; the legacy route does not.
    #[must_use]
    pub const fn is_modern(self) -> bool {
        matches!(
            self,
            Self::ModernFunction | Self::ModernCallable | Self::SetupTable
        )
    }

    /// Returns a short label for diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ModernFunction => "modern-function",
            Self::ModernCallable => "modern-callable",
            Self::SetupTable => "setup-table",
            Self::Legacy => "legacy",
            Self::Unavailable => "unavailable",
        }
    }
}

/// Host primitives that turn a provider name and configuration into a
/// running server.
///
/// # Example
///
/// ```
/// use lamplight_config::ConfigTable;
/// use lamplight_host::{ActivationBindings, ActivationRoute, HostError};
///
/// struct StubBindings;
///
/// impl ActivationBindings for StubBindings {
///     fn probe(&self) -> ActivationRoute {
///         ActivationRoute::ModernFunction
///     }
///
///     fn configure(
///         &self,
///         _route: ActivationRoute,
///         _name: &str,
///         _config: &ConfigTable,
///     ) -> Result<(), HostError> {
///         Ok(())
///     }
///
///     fn enable(&self, _name: &str) -> Option<Result<(), HostError>> {
///         None
///     }
/// }
/// ```
pub trait ActivationBindings {
    /// Detects which activation route the host supports.
    ///
    /// Called at most once per engine instance; the result is memoised.
    fn probe(&self) -> ActivationRoute;

    /// Applies a provider's configuration through the given route.
    ///
    /// Never called with [`ActivationRoute::Unavailable`].
    ///
    /// # Errors
    ///
    /// Returns a [`HostError`] when the underlying activation call fails;
    /// the engine catches it, reports it, and records the provider Failed.
    fn configure(
        &self,
        route: ActivationRoute,
        name: &str,
        config: &ConfigTable,
    ) -> Result<(), HostError>;

    /// Registers a provider for automatic future enablement.
    ///
    /// Returns `None` when the host has no registration primitive, in which
    /// case the engine treats registration as trivially successful.
    fn enable(&self, name: &str) -> Option<Result<(), HostError>>;
}
