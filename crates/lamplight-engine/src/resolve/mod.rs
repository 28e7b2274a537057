//! Resolution of a provider's effective configuration.

use lamplight_config::{ConfigSource, ConfigTable, GlobalDefaults, ProviderDefinition, deep_merge};
use lamplight_host::EditorHost;

/// Computes a provider's effective configuration, or `None` when the
/// provider is unavailable.
///
/// The configuration source is consulted in a fixed order: a producer is
/// invoked, a table is taken as-is, `true` accepts the defaults, `false`
/// disables the provider, and an absent source falls back to probing the
/// declared executable on the system path. When a table is obtained, the
/// global defaults are resolved (memoising a lazy producer in place) and
/// the provider's table is merged over them, provider keys winning.
pub(crate) fn resolve_config<H: EditorHost + ?Sized>(
    host: &H,
    definition: &ProviderDefinition,
    defaults: &mut GlobalDefaults,
) -> Option<ConfigTable> {
    let table = match definition.config() {
        ConfigSource::Producer(produce) => produce(),
        ConfigSource::Table(table) => table.clone(),
        ConfigSource::Flag(true) => ConfigTable::new(),
        ConfigSource::Flag(false) => return None,
        ConfigSource::Absent => match definition.executable() {
            Some(command) if host.has_executable(command) => ConfigTable::new(),
            _ => return None,
        },
    };
    Some(deep_merge(defaults.resolve(), &table))
}
