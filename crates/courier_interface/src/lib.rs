//! Trait definitions for the subsystems the fetch facade talks to.
//!
//! The fetch manager (scheduling, prioritisation, retry) and the media cache
//! are external collaborators. This crate describes the contract the facade
//! relies on and the request types it hands over.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod signal;
mod traits;
mod types;

pub use signal::{FetchSignal, ResourceSignal, StatusSignal};
pub use traits::{FetchManager, MediaBox};
pub use types::{
    InteractiveFetchRequest, InteractiveFetchRequestBuilder, ResourceFetchRequest,
    ResourceFetchRequestBuilder,
};
