//! Composite keys under which interactive fetches are registered.

use crate::{FetchCategory, MediaResourceId, MessageId, PeerId};
use serde::{Deserialize, Serialize};

/// Location grouping fetches for scheduling.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchLocation {
    /// Fetches originating from a chat
    #[display("chat({})", _0)]
    Chat(PeerId),
}

/// Key of a fetch within its location.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchLocationKey {
    /// Fetch for a message's media
    #[display("message({})", _0)]
    MessageId(MessageId),
}

/// The composite key identifying an interactive fetch.
///
/// Starting, cancelling and observing a fetch must all use the same key.
///
/// # Examples
///
/// ```
/// use courier_core::{FetchCategory, FetchKey, MediaResourceId, MessageId, PeerId};
///
/// let message = MessageId::new(PeerId(1), 0, 10);
/// let key = FetchKey::for_message(FetchCategory::Voice, message, MediaResourceId::new("r1"));
/// assert_eq!(key.to_string(), "voice/chat(peer:1)/message(peer:1/0/10)/r1");
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[display("{}/{}/{}/{}", category, location, location_key, resource_id)]
pub struct FetchKey {
    /// Scheduling category
    pub category: FetchCategory,
    /// Location grouping
    pub location: FetchLocation,
    /// Key within the location
    pub location_key: FetchLocationKey,
    /// Resource being fetched
    pub resource_id: MediaResourceId,
}

impl FetchKey {
    /// Key for media attached to a message, scoped to the message's chat.
    pub fn for_message(
        category: FetchCategory,
        message_id: MessageId,
        resource_id: MediaResourceId,
    ) -> Self {
        Self {
            category,
            location: FetchLocation::Chat(message_id.peer_id),
            location_key: FetchLocationKey::MessageId(message_id),
            resource_id,
        }
    }
}
