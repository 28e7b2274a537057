//! Public engine facade and the per-provider activation state machine.

use std::cell::{OnceCell, RefCell};
use std::rc::Rc;

use lamplight_config::{GlobalDefaults, ProviderDefinition};
use lamplight_host::{ActivationBindings, ActivationRoute, EditorHost, LifecycleEvent};

use crate::adapter;
use crate::registry::Registry;
use crate::replay;
use crate::resolve;
use crate::tracking::{CheckState, TrackingState};

/// Lazy activation engine for a set of providers.
///
/// Construct one per host session. The public operations return immediately;
/// activation attempts and notification replays run as deferred tasks on the
/// host's control thread, in submission order within each call. Cloning is
/// cheap (the core is shared), so deferred tasks and host callbacks can hold
/// their own handle.
///
/// # Example
///
/// ```no_run
/// use std::rc::Rc;
///
/// use lamplight_config::{GlobalDefaults, ProviderDefinition};
/// use lamplight_engine::Activator;
/// # use lamplight_config::ConfigTable;
/// # use lamplight_host::{
/// #     ActivationBindings, ActivationRoute, BufferId, EditorHost, HostError,
/// #     LifecycleEvent, ReplayOptions, Severity,
/// # };
/// # struct Editor;
/// # impl EditorHost for Editor {
/// #     fn defer(&self, task: Box<dyn FnOnce()>) { task() }
/// #     fn buffers(&self) -> Vec<BufferId> { Vec::new() }
/// #     fn buffer_tag(&self, _: BufferId) -> Option<String> { None }
/// #     fn emit(&self, _: LifecycleEvent, _: BufferId, _: &ReplayOptions) {}
/// #     fn notify(&self, _: Severity, _: &str) {}
/// #     fn has_executable(&self, _: &str) -> bool { false }
/// # }
/// # impl ActivationBindings for Editor {
/// #     fn probe(&self) -> ActivationRoute { ActivationRoute::ModernFunction }
/// #     fn configure(
/// #         &self,
/// #         _: ActivationRoute,
/// #         _: &str,
/// #         _: &ConfigTable,
/// #     ) -> Result<(), HostError> { Ok(()) }
/// #     fn enable(&self, _: &str) -> Option<Result<(), HostError>> { None }
/// # }
///
/// let host = Rc::new(Editor);
/// let activator = Activator::new(
///     Rc::clone(&host),
///     [(
///         "gopls".to_owned(),
///         ProviderDefinition::new().with_tags(["go"]),
///     )],
///     GlobalDefaults::default(),
/// );
/// activator.check_filetype("go", false);
/// ```
pub struct Activator<H> {
    inner: Rc<Inner<H>>,
}

impl<H> Clone for Activator<H> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

struct Inner<H> {
    host: Rc<H>,
    registry: Registry,
    defaults: RefCell<GlobalDefaults>,
    tracking: RefCell<TrackingState>,
    route: OnceCell<ActivationRoute>,
}

impl<H> Activator<H>
where
    H: EditorHost + ActivationBindings + 'static,
{
    /// Builds an engine from a definitions mapping and global defaults.
    ///
    /// Tracking state starts empty; nothing is activated until one of the
    /// check operations runs.
    #[must_use]
    pub fn new(
        host: Rc<H>,
        definitions: impl IntoIterator<Item = (String, ProviderDefinition)>,
        defaults: GlobalDefaults,
    ) -> Self {
        Self {
            inner: Rc::new(Inner {
                host,
                registry: Registry::from_definitions(definitions),
                defaults: RefCell::new(defaults),
                tracking: RefCell::new(TrackingState::new()),
                route: OnceCell::new(),
            }),
        }
    }

    /// Returns the registry derived at construction.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }

    /// Returns the recorded activation state for a provider.
    #[must_use]
    pub fn provider_state(&self, name: &str) -> CheckState {
        self.inner.tracking.borrow().provider(name)
    }

    /// Runs one activation attempt for a provider, synchronously.
    ///
    /// A provider that already succeeded is never re-attempted; one that
    /// failed is re-attempted only when `recheck` is true, in which case the
    /// whole resolution and activation sequence is retried from scratch.
    pub fn check_server(&self, name: &str, recheck: bool) {
        self.inner.check_server(name, recheck);
    }

    /// Schedules activation of every provider indexed under a tag.
    ///
    /// The first call for a tag marks it scheduled; later calls are no-ops
    /// unless `recheck` is true. One deferred task is enqueued per indexed
    /// provider, followed by one task replaying the filetype notification
    /// for every open buffer whose tag matches.
    pub fn check_filetype(&self, tag: &str, recheck: bool) {
        {
            let mut tracking = self.inner.tracking.borrow_mut();
            if tracking.tag_scheduled(tag) && !recheck {
                return;
            }
            tracking.mark_tag(tag);
        }
        tracing::debug!(tag, recheck, "scheduling providers for tag");
        for name in self.inner.registry.providers_for_tag(tag) {
            self.schedule_check(name.clone(), recheck);
        }
        let inner = Rc::clone(&self.inner);
        let tag = tag.to_owned();
        self.inner
            .host
            .defer(Box::new(move || replay::replay_for_tag(&*inner.host, &tag)));
    }

    /// Schedules activation of every generic (untagged) provider, then one
    /// replay of the buffer-read notification across all open buffers.
    pub fn check_generics(&self, recheck: bool) {
        for name in self.inner.registry.generic_providers() {
            self.schedule_check(name.clone(), recheck);
        }
        let inner = Rc::clone(&self.inner);
        self.inner.host.defer(Box::new(move || {
            replay::replay_all(&*inner.host, LifecycleEvent::BufRead);
        }));
    }

    /// Schedules a retry for every provider currently recorded as failed,
    /// then replays both lifecycle notifications across all open buffers.
    ///
    /// This is the manual recovery entry point, meant for after the user
    /// changes system state, such as installing a missing executable.
    pub fn refresh(&self) {
        let failed = self.inner.tracking.borrow().failed_providers();
        tracing::debug!(count = failed.len(), "refreshing failed providers");
        for name in failed {
            self.schedule_check(name, true);
        }
        let inner = Rc::clone(&self.inner);
        self.inner.host.defer(Box::new(move || {
            replay::replay_all(&*inner.host, LifecycleEvent::FileType);
            replay::replay_all(&*inner.host, LifecycleEvent::BufRead);
        }));
    }

    fn schedule_check(&self, name: String, recheck: bool) {
        let inner = Rc::clone(&self.inner);
        self.inner
            .host
            .defer(Box::new(move || inner.check_server(&name, recheck)));
    }
}

impl<H> Inner<H>
where
    H: EditorHost + ActivationBindings,
{
    fn check_server(&self, name: &str, recheck: bool) {
        match self.tracking.borrow().provider(name) {
            CheckState::Succeeded => return,
            CheckState::Failed if !recheck => return,
            CheckState::Failed | CheckState::Unchecked => {}
        }

        let Some(definition) = self.registry.definition(name) else {
            tracing::debug!(provider = name, "unknown provider requested");
            self.tracking.borrow_mut().record(name, CheckState::Failed);
            return;
        };

        let resolved = {
            let mut defaults = self.defaults.borrow_mut();
            resolve::resolve_config(&*self.host, definition, &mut defaults)
        };
        let Some(config) = resolved else {
            tracing::debug!(provider = name, "provider unavailable");
            self.tracking.borrow_mut().record(name, CheckState::Failed);
            return;
        };

        let route = *self.route.get_or_init(|| {
            let route = self.host.probe();
            tracing::debug!(route = route.as_str(), "activation route probed");
            route
        });

        let outcome = adapter::configure_provider(&*self.host, route, name, &config);
        let succeeded = if outcome.succeeded && outcome.modern {
            let mut tracking = self.tracking.borrow_mut();
            adapter::register_enable(&*self.host, &mut tracking, name)
        } else {
            outcome.succeeded
        };

        let state = if succeeded {
            CheckState::Succeeded
        } else {
            CheckState::Failed
        };
        tracing::debug!(
            provider = name,
            ?state,
            modern = outcome.modern,
            "activation attempt finished"
        );
        self.tracking.borrow_mut().record(name, state);
    }
}
