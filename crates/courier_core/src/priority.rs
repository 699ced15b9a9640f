//! Fetch priorities passed through to the fetch manager and media cache.

use serde::{Deserialize, Serialize};

/// Scheduling priority of an interactive fetch.
///
/// Variants are ordered: any background prefetch ranks below a user-initiated
/// fetch.
///
/// # Examples
///
/// ```
/// use courier_core::FetchPriority;
///
/// let prefetch = FetchPriority::BackgroundPrefetch { location_order: 0, local_order: 3 };
/// assert!(prefetch < FetchPriority::UserInitiated);
/// assert_eq!(FetchPriority::default(), FetchPriority::UserInitiated);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchPriority {
    /// Speculative download of nearby media
    BackgroundPrefetch {
        /// Order of the chat location in the prefetch queue
        location_order: i32,
        /// Order of the media within its location
        local_order: i32,
    },
    /// Download requested by the user
    #[default]
    UserInitiated,
}

/// Priority of a ranged fetch issued directly against the media cache.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum MediaBoxFetchPriority {
    /// Regular priority
    #[default]
    #[display("default")]
    Default,
    /// Raised above regular fetches
    #[display("elevated")]
    Elevated,
    /// Served before everything else
    #[display("maximum")]
    Maximum,
}
