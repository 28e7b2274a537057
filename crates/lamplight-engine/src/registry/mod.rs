//! Provider registry and the derived tag index.
//!
//! The [`Registry`] stores provider definitions keyed by name and derives,
//! once at construction, the mapping from category tag to the providers
//! indexed under it. Index entries keep first-seen order and are
//! de-duplicated. Providers that declare no tags at all form the generic
//! set driven by [`Activator::check_generics`](crate::Activator::check_generics).

use std::collections::HashMap;

use lamplight_config::ProviderDefinition;

/// Read-only lookup structure built from a provider-definitions mapping.
///
/// # Example
///
/// ```
/// use lamplight_config::ProviderDefinition;
/// use lamplight_engine::Registry;
///
/// let registry = Registry::from_definitions([(
///     "gopls".to_owned(),
///     ProviderDefinition::new().with_tags(["go", "gomod"]),
/// )]);
/// assert_eq!(registry.providers_for_tag("go"), ["gopls"]);
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    definitions: HashMap<String, ProviderDefinition>,
    by_tag: HashMap<String, Vec<String>>,
    generic: Vec<String>,
}

impl Registry {
    /// Builds the registry and tag index from a definitions mapping.
    ///
    /// Iteration order of the input determines index order. A duplicate
    /// name replaces the earlier definition; its index position keeps the
    /// first occurrence.
    #[must_use]
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = (String, ProviderDefinition)>,
    ) -> Self {
        let mut registry = Self::default();
        for (name, definition) in definitions {
            if definition.tags().is_empty() {
                if !registry.generic.contains(&name) {
                    registry.generic.push(name.clone());
                }
            } else {
                for tag in definition.tags() {
                    let indexed = registry.by_tag.entry(tag.clone()).or_default();
                    if !indexed.contains(&name) {
                        indexed.push(name.clone());
                    }
                }
            }
            registry.definitions.insert(name, definition);
        }
        registry
    }

    /// Looks up a provider definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&ProviderDefinition> {
        self.definitions.get(name)
    }

    /// Returns the providers indexed under a tag, in first-seen order.
    #[must_use]
    pub fn providers_for_tag(&self, tag: &str) -> &[String] {
        self.by_tag.get(tag).map_or(&[], Vec::as_slice)
    }

    /// Returns the providers not tied to any tag, in first-seen order.
    #[must_use]
    pub fn generic_providers(&self) -> &[String] {
        &self.generic
    }

    /// Returns the number of registered providers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Returns `true` when no providers are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
