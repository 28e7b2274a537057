//! Configuration data model for the Lamplight activation engine.
//!
//! The crate defines how a provider's configuration is declared
//! ([`ConfigSource`]), how a user-supplied mapping of provider definitions is
//! read permissively ([`definitions_from_value`]), and how a provider's table
//! is combined with workspace-wide defaults ([`GlobalDefaults`],
//! [`deep_merge`]). It deliberately knows nothing about scheduling or the
//! host editor; resolution policy lives in `lamplight-engine`.

#![deny(missing_docs)]

mod defaults;
mod merge;
mod provider;

pub use defaults::GlobalDefaults;
pub use merge::deep_merge;
pub use provider::{ConfigSource, ConfigTable, ProviderDefinition, definitions_from_value};
