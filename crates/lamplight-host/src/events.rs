//! Lifecycle notification types replayed through the host.

use std::fmt;

/// Editor lifecycle notification the engine can re-fire for a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    /// Fired when a buffer's filetype classification is applied.
    FileType,
    /// Fired when a buffer is read into the editor.
    BufRead,
}

impl LifecycleEvent {
    /// Returns the canonical event name used by the host.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FileType => "FileType",
            Self::BufRead => "BufRead",
        }
    }
}

impl fmt::Display for LifecycleEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Options carried by a replayed lifecycle notification.
///
/// Defaults to no grouping identity and modeline reprocessing suppressed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayOptions {
    /// Grouping identity attached to the replayed notification.
    pub group: Option<String>,
    /// Whether the host should reprocess modelines while handling the event.
    pub modeline: bool,
}

impl ReplayOptions {
    /// Builds options carrying a grouping identity, modeline suppressed.
    #[must_use]
    pub fn grouped(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            modeline: false,
        }
    }
}

/// Level attached to a user-visible notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// A failure the user should act on.
    Error,
    /// A degraded but working situation.
    Warn,
    /// Informational only.
    Info,
}

impl Severity {
    /// Returns the canonical lower-case label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}
