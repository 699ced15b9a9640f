//! Request types handed to collaborators.

use courier_core::{
    ByteRangeSet, FetchKey, FetchPriority, MediaBoxFetchPriority, MediaResourceReference,
    StatsCategory, UserContentType, UserLocation,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Everything the fetch manager needs to register an interactive fetch.
///
/// # Examples
///
/// ```
/// use courier_core::{
///     ByteRangeSet, FetchCategory, FetchKey, FetchPriority, MediaFileBuilder, MediaReference,
///     MediaResource, MessageId, MessageReference, PeerId, StatsCategory,
/// };
/// use courier_interface::InteractiveFetchRequest;
///
/// let message_id = MessageId::new(PeerId(3), 0, 77);
/// let file = MediaFileBuilder::default()
///     .resource(MediaResource::new("doc", Some(1024)))
///     .build()
///     .unwrap();
/// let reference = MediaReference::message(MessageReference::new(message_id, 0), file.clone());
///
/// let request = InteractiveFetchRequest::new(
///     FetchKey::for_message(FetchCategory::File, message_id, file.resource().id().clone()),
///     reference.resource_reference(file.resource()),
///     StatsCategory::File,
/// )
/// .with_user_initiated(true);
///
/// assert!(request.ranges().is_full());
/// assert_eq!(*request.priority(), FetchPriority::UserInitiated);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct InteractiveFetchRequest {
    /// Composite key (category, location, location key, resource id)
    key: FetchKey,
    /// Resource plus the media reference it is reached through
    resource_reference: MediaResourceReference,
    /// Byte ranges to fetch
    #[builder(default)]
    ranges: ByteRangeSet,
    /// Statistics category for network accounting
    stats_category: StatsCategory,
    /// Whether to jump ahead of same-priority fetches
    #[builder(default)]
    elevated_priority: bool,
    /// Whether the user explicitly asked for the download
    #[builder(default)]
    user_initiated: bool,
    /// Scheduling priority
    #[builder(default)]
    priority: FetchPriority,
}

impl InteractiveFetchRequest {
    /// Creates a full-range, user-priority request that is not user initiated.
    pub fn new(
        key: FetchKey,
        resource_reference: MediaResourceReference,
        stats_category: StatsCategory,
    ) -> Self {
        Self {
            key,
            resource_reference,
            ranges: ByteRangeSet::full(),
            stats_category,
            elevated_priority: false,
            user_initiated: false,
            priority: FetchPriority::default(),
        }
    }
}

/// A fetch issued directly against the media cache.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    Getters,
    derive_setters::Setters,
    derive_builder::Builder,
)]
#[setters(prefix = "with_")]
#[builder(setter(into))]
pub struct ResourceFetchRequest {
    /// Storage owner
    user_location: UserLocation,
    /// Content type for storage accounting
    user_content_type: UserContentType,
    /// Resource plus the media reference it is reached through
    reference: MediaResourceReference,
    /// Single byte range with its priority; `None` fetches everything
    #[builder(default)]
    range: Option<(Range<i64>, MediaBoxFetchPriority)>,
    /// Statistics category for network accounting
    #[builder(default = "StatsCategory::Generic")]
    stats_category: StatsCategory,
}

impl ResourceFetchRequest {
    /// Creates a whole-resource request with the generic statistics category.
    pub fn new(
        user_location: UserLocation,
        user_content_type: UserContentType,
        reference: MediaResourceReference,
    ) -> Self {
        Self {
            user_location,
            user_content_type,
            reference,
            range: None,
            stats_category: StatsCategory::Generic,
        }
    }
}
