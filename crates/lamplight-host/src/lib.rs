//! Host editor capability surface consumed by the activation engine.
//!
//! The engine never talks to an editor directly. Everything it needs from
//! the host — deferred execution, buffer enumeration and classification,
//! lifecycle notification replay, user-visible notifications, executable
//! probing, and the activation primitives themselves — is expressed here as
//! narrow traits, so tests and higher-level crates can inject lightweight
//! implementations without a real editor behind them.

#![deny(missing_docs)]

mod activation;
mod editor;
mod error;
mod events;

pub use activation::{ActivationBindings, ActivationRoute};
pub use editor::{BufferId, EditorHost};
pub use error::HostError;
pub use events::{LifecycleEvent, ReplayOptions, Severity};
