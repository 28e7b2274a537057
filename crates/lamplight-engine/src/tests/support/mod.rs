//! Recording fake host used across engine tests.
//!
//! The fake implements both host traits over interior-mutable state: a FIFO
//! deferred-task queue drained on demand, scripted buffers, executables, and
//! failure injection, plus a record of every call routed through it so tests
//! can assert on ordering and payloads.

use std::cell::RefCell;
use std::collections::{HashSet, VecDeque};

use lamplight_config::ConfigTable;
use lamplight_host::{
    ActivationBindings, ActivationRoute, BufferId, EditorHost, HostError, LifecycleEvent,
    ReplayOptions, Severity,
};

/// One recorded configure call.
#[derive(Debug, Clone)]
pub(crate) struct ConfigureCall {
    pub(crate) route: ActivationRoute,
    pub(crate) name: String,
    pub(crate) config: ConfigTable,
}

/// One recorded lifecycle emission.
#[derive(Debug, Clone)]
pub(crate) struct EmittedEvent {
    pub(crate) event: LifecycleEvent,
    pub(crate) buffer: BufferId,
    pub(crate) group: Option<String>,
    pub(crate) modeline: bool,
}

#[derive(Default)]
struct FakeState {
    queue: VecDeque<Box<dyn FnOnce()>>,
    buffers: Vec<(BufferId, Option<String>)>,
    executables: HashSet<String>,
    failing_configure: HashSet<String>,
    failing_enable: HashSet<String>,
    probe_calls: u32,
    configure_calls: Vec<ConfigureCall>,
    enable_calls: Vec<String>,
    emitted: Vec<EmittedEvent>,
    notifications: Vec<(Severity, String)>,
}

/// Test double standing in for the host editor.
pub(crate) struct FakeHost {
    route: ActivationRoute,
    enable_supported: bool,
    state: RefCell<FakeState>,
}

impl FakeHost {
    /// Creates a fake exposing the given activation route, with an enable
    /// primitive present.
    pub(crate) fn new(route: ActivationRoute) -> Self {
        Self {
            route,
            enable_supported: true,
            state: RefCell::new(FakeState::default()),
        }
    }

    /// Creates a fake whose host has no enable-registration primitive.
    pub(crate) fn without_enable(route: ActivationRoute) -> Self {
        Self {
            route,
            enable_supported: false,
            state: RefCell::new(FakeState::default()),
        }
    }

    pub(crate) fn open_buffer(&self, raw: u64, tag: &str) {
        self.state
            .borrow_mut()
            .buffers
            .push((BufferId::new(raw), Some(tag.to_owned())));
    }

    pub(crate) fn open_untagged_buffer(&self, raw: u64) {
        self.state
            .borrow_mut()
            .buffers
            .push((BufferId::new(raw), None));
    }

    pub(crate) fn install_executable(&self, command: &str) {
        self.state
            .borrow_mut()
            .executables
            .insert(command.to_owned());
    }

    pub(crate) fn fail_configure(&self, name: &str) {
        self.state
            .borrow_mut()
            .failing_configure
            .insert(name.to_owned());
    }

    pub(crate) fn clear_configure_failures(&self) {
        self.state.borrow_mut().failing_configure.clear();
    }

    pub(crate) fn fail_enable(&self, name: &str) {
        self.state
            .borrow_mut()
            .failing_enable
            .insert(name.to_owned());
    }

    pub(crate) fn clear_enable_failures(&self) {
        self.state.borrow_mut().failing_enable.clear();
    }

    /// Drains the deferred queue, running tasks in submission order; tasks
    /// may enqueue further tasks, which run in the same drain.
    pub(crate) fn run_queue(&self) {
        loop {
            let task = self.state.borrow_mut().queue.pop_front();
            let Some(task) = task else { break };
            task();
        }
    }

    pub(crate) fn queued(&self) -> usize {
        self.state.borrow().queue.len()
    }

    pub(crate) fn probe_calls(&self) -> u32 {
        self.state.borrow().probe_calls
    }

    pub(crate) fn configure_calls(&self) -> Vec<ConfigureCall> {
        self.state.borrow().configure_calls.clone()
    }

    pub(crate) fn configured_names(&self) -> Vec<String> {
        self.state
            .borrow()
            .configure_calls
            .iter()
            .map(|call| call.name.clone())
            .collect()
    }

    pub(crate) fn enable_calls(&self) -> Vec<String> {
        self.state.borrow().enable_calls.clone()
    }

    pub(crate) fn emitted(&self) -> Vec<EmittedEvent> {
        self.state.borrow().emitted.clone()
    }

    pub(crate) fn notifications(&self) -> Vec<(Severity, String)> {
        self.state.borrow().notifications.clone()
    }
}

impl EditorHost for FakeHost {
    fn defer(&self, task: Box<dyn FnOnce()>) {
        self.state.borrow_mut().queue.push_back(task);
    }

    fn buffers(&self) -> Vec<BufferId> {
        self.state
            .borrow()
            .buffers
            .iter()
            .map(|(buffer, _)| *buffer)
            .collect()
    }

    fn buffer_tag(&self, buffer: BufferId) -> Option<String> {
        self.state
            .borrow()
            .buffers
            .iter()
            .find(|(candidate, _)| *candidate == buffer)
            .and_then(|(_, tag)| tag.clone())
    }

    fn emit(&self, event: LifecycleEvent, buffer: BufferId, options: &ReplayOptions) {
        self.state.borrow_mut().emitted.push(EmittedEvent {
            event,
            buffer,
            group: options.group.clone(),
            modeline: options.modeline,
        });
    }

    fn notify(&self, severity: Severity, message: &str) {
        self.state
            .borrow_mut()
            .notifications
            .push((severity, message.to_owned()));
    }

    fn has_executable(&self, command: &str) -> bool {
        self.state.borrow().executables.contains(command)
    }
}

impl ActivationBindings for FakeHost {
    fn probe(&self) -> ActivationRoute {
        self.state.borrow_mut().probe_calls += 1;
        self.route
    }

    fn configure(
        &self,
        route: ActivationRoute,
        name: &str,
        config: &ConfigTable,
    ) -> Result<(), HostError> {
        let mut state = self.state.borrow_mut();
        state.configure_calls.push(ConfigureCall {
            route,
            name: name.to_owned(),
            config: config.clone(),
        });
        if state.failing_configure.contains(name) {
            return Err(HostError::new(format!("{name} refused the configuration")));
        }
        Ok(())
    }

    fn enable(&self, name: &str) -> Option<Result<(), HostError>> {
        if !self.enable_supported {
            return None;
        }
        let mut state = self.state.borrow_mut();
        state.enable_calls.push(name.to_owned());
        if state.failing_enable.contains(name) {
            return Some(Err(HostError::new(format!("{name} cannot be enabled"))));
        }
        Some(Ok(()))
    }
}
