//! Lifecycle notification replay for already-open buffers.
//!
//! Once a provider becomes available, buffers opened before activation have
//! already missed the lifecycle notifications that would normally trigger
//! buffer-local setup. Re-firing those notifications lets the downstream
//! effects run as if the provider had been active from the start.

use lamplight_host::{EditorHost, LifecycleEvent, ReplayOptions};

/// Grouping identity attached to replayed notifications.
pub(crate) const REPLAY_GROUP: &str = "lamplight";

/// Re-fires the filetype notification for every open buffer whose category
/// tag matches.
pub(crate) fn replay_for_tag<H: EditorHost + ?Sized>(host: &H, tag: &str) {
    let options = ReplayOptions::grouped(REPLAY_GROUP);
    for buffer in host.buffers() {
        if host.buffer_tag(buffer).as_deref() == Some(tag) {
            host.emit(LifecycleEvent::FileType, buffer, &options);
        }
    }
}

/// Re-fires a lifecycle notification for every open buffer.
pub(crate) fn replay_all<H: EditorHost + ?Sized>(host: &H, event: LifecycleEvent) {
    let options = ReplayOptions::grouped(REPLAY_GROUP);
    for buffer in host.buffers() {
        host.emit(event, buffer, &options);
    }
}
