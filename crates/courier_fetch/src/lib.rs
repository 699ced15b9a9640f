//! Dispatch facade for chat media fetches.
//!
//! These functions translate messages, files and photos into calls against an
//! injected [`FetchManager`] and [`MediaBox`]. They add no scheduling, retry or
//! caching of their own.
//!
//! # Error visibility
//!
//! - Message-scoped fetches and free file fetches never surface errors: a
//!   failure simply ends the stream.
//! - [`free_media_file_resource_interactive_fetched`] propagates the typed
//!   [`FetchError`](courier_error::FetchError) to its caller.
//!
//! # Example
//!
//! ```rust,ignore
//! use courier_fetch::{message_media_file_interactive_fetched, FetchContext};
//! use futures::StreamExt;
//!
//! let context = FetchContext::new(fetch_manager, media_box);
//! let mut done = message_media_file_interactive_fetched(
//!     &context, message_id, &message_reference, &file,
//!     ByteRangeSet::full(), true, FetchPriority::UserInitiated,
//! );
//! while done.next().await.is_some() {}
//! ```
//!
//! [`FetchManager`]: courier_interface::FetchManager
//! [`MediaBox`]: courier_interface::MediaBox

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod context;
mod dispatch;
mod signal;

pub use category::{fetch_category_for_file, fetch_category_for_image};
pub use context::FetchContext;
pub use dispatch::{
    cancel_free_media_file_interactive_fetch, free_media_file_interactive_fetched,
    free_media_file_resource_interactive_fetched, message_media_file_cancel_interactive_fetch,
    message_media_file_interactive_fetched, message_media_file_status,
    message_media_photo_interactive_fetched, toggle_interactive_fetch_paused,
    try_message_media_photo_interactive_fetched,
};
pub use signal::{CompletionSignal, SourceSignal};
