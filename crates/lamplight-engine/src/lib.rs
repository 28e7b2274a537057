//! Lazy activation engine for language-server providers.
//!
//! The engine decides, per provider, whether an activation attempt has
//! already been made, performs the configuration-resolution and activation
//! sequence exactly once (unless an explicit recheck is requested), and
//! afterwards replays editor lifecycle notifications so buffers opened
//! before activation behave as if the provider had been active from the
//! start.
//!
//! Every side-effecting unit of work is submitted to the host's deferred
//! queue rather than executed inline, so the public operations on
//! [`Activator`] return immediately and the real work interleaves with the
//! host's own event processing on its single control thread. Failures never
//! propagate out of the engine: they are absorbed into tracking state and
//! surfaced, at most once each, through the host's notification capability.

#![deny(missing_docs)]

mod activator;
mod adapter;
mod registry;
mod replay;
mod resolve;
mod tracking;

#[cfg(test)]
mod tests;

pub use activator::Activator;
pub use registry::Registry;
pub use tracking::CheckState;
