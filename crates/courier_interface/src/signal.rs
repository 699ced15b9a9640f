//! Stream aliases for observable fetch results.

use courier_core::{FetchResourceSourceType, MediaResourceStatus};
use courier_error::FetchError;
use futures_util::stream::Stream;
use std::pin::Pin;

/// Completion signal of an interactive fetch.
///
/// The stream yields `Ok(())` as data arrives and ends when the fetch is done.
/// An `Err` item reports a failure; nothing follows it.
pub type FetchSignal = Pin<Box<dyn Stream<Item = Result<(), FetchError>> + Send>>;

/// Result stream of a fetch issued directly against the media cache.
pub type ResourceSignal =
    Pin<Box<dyn Stream<Item = Result<FetchResourceSourceType, FetchError>> + Send>>;

/// Stream of status updates for a resource.
pub type StatusSignal = Pin<Box<dyn Stream<Item = MediaResourceStatus> + Send>>;
