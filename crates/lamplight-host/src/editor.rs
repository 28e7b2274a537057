//! Editor-facing capabilities the engine schedules and replays through.

use crate::events::{LifecycleEvent, ReplayOptions, Severity};

/// Opaque handle identifying one open buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BufferId(u64);

impl BufferId {
    /// Wraps a raw host buffer handle.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw host buffer handle.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Behaviour required from the host editor.
///
/// All engine work that touches the host runs through this trait, and every
/// side-effecting unit of engine work is submitted via [`EditorHost::defer`]
/// rather than executed inline. Implementations must run deferred tasks on
/// the single control thread, in submission order within one batch, and must
/// not call back into the engine synchronously from any of these methods.
pub trait EditorHost {
    /// Submits a task to run later on the host's control thread.
    fn defer(&self, task: Box<dyn FnOnce()>);

    /// Lists the currently open buffers.
    fn buffers(&self) -> Vec<BufferId>;

    /// Returns the category tag of a buffer, when it has one.
    fn buffer_tag(&self, buffer: BufferId) -> Option<String>;

    /// Re-fires a lifecycle notification for one buffer.
    fn emit(&self, event: LifecycleEvent, buffer: BufferId, options: &ReplayOptions);

    /// Shows a single-line leveled notification to the user.
    ///
    /// Best-effort: hosts without a notification surface may discard the
    /// message.
    fn notify(&self, severity: Severity, message: &str);

    /// Reports whether a command resolves on the system path.
    fn has_executable(&self, command: &str) -> bool;
}
