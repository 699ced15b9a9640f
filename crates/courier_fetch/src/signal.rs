//! Error-free signals returned by the facade.

use courier_core::FetchResourceSourceType;
use courier_error::FetchError;
use futures::future;
use futures::stream::{Stream, StreamExt};
use std::pin::Pin;

/// Completion signal that never reports an error.
///
/// Items mark progress; callers must not rely on receiving any before the
/// stream ends.
pub type CompletionSignal = Pin<Box<dyn Stream<Item = ()> + Send>>;

/// Source-type signal that never reports an error.
pub type SourceSignal = Pin<Box<dyn Stream<Item = FetchResourceSourceType> + Send>>;

/// Ends `signal` at its first error instead of forwarding it.
pub(crate) fn complete_on_error<T, S>(signal: S, key: String) -> impl Stream<Item = T> + Send
where
    T: Send + 'static,
    S: Stream<Item = Result<T, FetchError>> + Send + 'static,
{
    signal
        .take_while(move |item| {
            if let Err(e) = item {
                tracing::debug!(key = %key, error = %e, "Fetch failed, completing silently");
            }
            future::ready(item.is_ok())
        })
        .filter_map(|item| future::ready(item.ok()))
}
