//! Per-engine record of which providers and tags have been processed.

use std::collections::{HashMap, HashSet};

/// Outcome of the most recent activation attempt for a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckState {
    /// No activation attempt has been made yet.
    #[default]
    Unchecked,
    /// The provider was configured (and, where applicable, enabled).
    Succeeded,
    /// Resolution or activation failed; retried only on an explicit recheck.
    Failed,
}

/// Mutable bookkeeping owned by one engine instance.
///
/// Entries are only ever added or flipped between states, never removed;
/// the state lives for the lifetime of the engine instance.
#[derive(Debug, Default)]
pub(crate) struct TrackingState {
    providers: HashMap<String, CheckState>,
    tags: HashSet<String>,
    enabled: HashSet<String>,
}

impl TrackingState {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded state for a provider; absent means unchecked.
    pub(crate) fn provider(&self, name: &str) -> CheckState {
        self.providers.get(name).copied().unwrap_or_default()
    }

    pub(crate) fn record(&mut self, name: &str, state: CheckState) {
        self.providers.insert(name.to_owned(), state);
    }

    /// Returns the currently failed providers in a stable (sorted) order.
    pub(crate) fn failed_providers(&self) -> Vec<String> {
        let mut failed: Vec<String> = self
            .providers
            .iter()
            .filter(|(_, state)| **state == CheckState::Failed)
            .map(|(name, _)| name.clone())
            .collect();
        failed.sort();
        failed
    }

    pub(crate) fn tag_scheduled(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub(crate) fn mark_tag(&mut self, tag: &str) {
        self.tags.insert(tag.to_owned());
    }

    pub(crate) fn enabled(&self, name: &str) -> bool {
        self.enabled.contains(name)
    }

    pub(crate) fn mark_enabled(&mut self, name: &str) {
        self.enabled.insert(name.to_owned());
    }
}
