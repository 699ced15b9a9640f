//! Identifier types for peers, messages and media resources.

use serde::{Deserialize, Serialize};

/// Identifier of a chat peer (user, group or channel).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[display("peer:{}", _0)]
pub struct PeerId(pub i64);

/// Identifier of a message inside a peer's history.
///
/// # Examples
///
/// ```
/// use courier_core::{MessageId, PeerId};
///
/// let id = MessageId::new(PeerId(7), 0, 1024);
/// assert_eq!(id.peer_id, PeerId(7));
/// assert_eq!(id.to_string(), "peer:7/0/1024");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}/{}/{}", peer_id, namespace, id)]
pub struct MessageId {
    /// Peer whose history holds the message
    pub peer_id: PeerId,
    /// Message namespace (cloud, local, scheduled...)
    pub namespace: i32,
    /// Message id within the namespace
    pub id: i32,
}

impl MessageId {
    /// Creates a message id.
    pub fn new(peer_id: PeerId, namespace: i32, id: i32) -> Self {
        Self {
            peer_id,
            namespace,
            id,
        }
    }
}

/// Identifier of a remotely stored media resource.
///
/// The string representation is the key used to pause and resume fetches.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub struct MediaResourceId(String);

impl MediaResourceId {
    /// Creates a resource id from its string form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// String form of the id, used as the pause/resume key.
    pub fn string_representation(&self) -> &str {
        &self.0
    }
}

impl From<String> for MediaResourceId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for MediaResourceId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
