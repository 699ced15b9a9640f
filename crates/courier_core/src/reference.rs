//! References tying media to the context they were obtained from.

use crate::{
    Media, MediaFile, MediaImage, MediaResource, MessageId, PeerId, UserContentType,
};
use serde::{Deserialize, Serialize};

/// Enough information about a message to re-request its media from the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageReference {
    /// Message identity
    pub id: MessageId,
    /// Author of the message, when known
    pub author_id: Option<PeerId>,
    /// Send date as a unix timestamp
    pub timestamp: i32,
    /// Whether the message was received rather than sent
    pub incoming: bool,
}

impl MessageReference {
    /// Creates a reference to an incoming message with no known author.
    pub fn new(id: MessageId, timestamp: i32) -> Self {
        Self {
            id,
            author_id: None,
            timestamp,
            incoming: true,
        }
    }

    /// Peer whose history holds the message.
    pub fn peer_id(&self) -> PeerId {
        self.id.peer_id
    }
}

/// Where a media reference was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReferenceLocation {
    /// Attached to a message
    Message(MessageReference),
    /// Not tied to any message (profile photos, previews...)
    Standalone,
}

/// Owner of cached media, used for storage accounting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLocation {
    /// Media belongs to a chat peer
    Peer(PeerId),
    /// Media belongs to no particular chat
    Other,
}

/// A media descriptor together with the location it was obtained from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaReference<M> {
    /// Where the media was obtained
    pub location: ReferenceLocation,
    /// The media itself
    pub media: M,
}

/// Reference to a file.
pub type FileMediaReference = MediaReference<MediaFile>;
/// Reference to a photo.
pub type ImageMediaReference = MediaReference<MediaImage>;
/// Reference to any media.
pub type AnyMediaReference = MediaReference<Media>;

impl<M> MediaReference<M> {
    /// Media attached to a message.
    pub fn message(message: MessageReference, media: M) -> Self {
        Self {
            location: ReferenceLocation::Message(message),
            media,
        }
    }

    /// Media not tied to a message.
    pub fn standalone(media: M) -> Self {
        Self {
            location: ReferenceLocation::Standalone,
            media,
        }
    }

    /// Storage owner of this media.
    pub fn user_location(&self) -> UserLocation {
        match &self.location {
            ReferenceLocation::Message(message) => UserLocation::Peer(message.peer_id()),
            ReferenceLocation::Standalone => UserLocation::Other,
        }
    }
}

impl<M: Clone + Into<Media>> MediaReference<M> {
    /// Erases the media type.
    pub fn abstract_reference(&self) -> AnyMediaReference {
        MediaReference {
            location: self.location.clone(),
            media: self.media.clone().into(),
        }
    }

    /// Reference to one of this media's resources.
    pub fn resource_reference(&self, resource: &MediaResource) -> MediaResourceReference {
        MediaResourceReference {
            media_reference: self.abstract_reference(),
            resource: resource.clone(),
        }
    }
}

impl FileMediaReference {
    /// Content type of the referenced file.
    pub fn user_content_type(&self) -> UserContentType {
        UserContentType::for_file(&self.media)
    }
}

/// A resource together with the media reference it is reached through.
///
/// This is the composite identity handed to the fetch manager: the resource
/// id plus enough context to re-request it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaResourceReference {
    /// Media the resource belongs to
    pub media_reference: AnyMediaReference,
    /// The resource to fetch
    pub resource: MediaResource,
}
