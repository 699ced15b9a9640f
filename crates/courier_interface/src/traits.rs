//! Trait definitions for the fetch manager and the media cache.

use crate::{FetchSignal, InteractiveFetchRequest, ResourceFetchRequest, ResourceSignal, StatusSignal};
use courier_core::{FetchKey, MediaResourceId};

/// Scheduler that executes, prioritises and retries media downloads.
///
/// Implementations own all queueing and locking. Every method must be safe to
/// call repeatedly with the same key.
pub trait FetchManager: Send + Sync {
    /// Registers (or joins) an interactive fetch and returns its completion signal.
    fn interactively_fetched(&self, request: InteractiveFetchRequest) -> FetchSignal;

    /// Cancels every interactive fetch registered under `key`.
    ///
    /// Cancelling an unknown or finished fetch is a no-op.
    fn cancel_interactive_fetches(&self, key: &FetchKey);

    /// Pauses or resumes all fetches of a resource.
    fn toggle_interactive_fetch_paused(&self, resource_id: &MediaResourceId, is_paused: bool);

    /// Observes the status of the resource registered under `key`.
    fn fetch_status(&self, key: &FetchKey) -> StatusSignal;
}

/// Local media cache able to fetch resources by reference.
pub trait MediaBox: Send + Sync {
    /// Fetches a resource, optionally only a byte range of it.
    fn fetched_media_resource(&self, request: ResourceFetchRequest) -> ResourceSignal;

    /// Cancels an interactive fetch of `resource_id` that is not tied to a message.
    fn cancel_interactive_resource_fetch(&self, resource_id: &MediaResourceId);
}
