//! Classifications of media used for scheduling and statistics.

use crate::MediaFile;
use serde::{Deserialize, Serialize};

/// Category under which the fetch manager schedules a download.
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
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchCategory {
    /// Photos
    #[display("image")]
    Image,
    /// Generic documents
    #[display("file")]
    File,
    /// Voice notes and round instant videos
    #[display("voice")]
    Voice,
    /// Looping animations
    #[display("animation")]
    Animation,
    /// Videos
    #[display("video")]
    Video,
}

/// Category used to account downloaded bytes in network statistics.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum StatsCategory {
    /// Anything not covered below
    #[display("generic")]
    Generic,
    /// Photos
    #[display("image")]
    Image,
    /// Videos
    #[display("video")]
    Video,
    /// Music and other audio
    #[display("audio")]
    Audio,
    /// Documents
    #[display("file")]
    File,
    /// Voice notes
    #[display("voice_messages")]
    VoiceMessages,
    /// Round instant videos
    #[display("video_messages")]
    VideoMessages,
    /// Stickers
    #[display("stickers")]
    Stickers,
}

impl StatsCategory {
    /// Derives the statistics category from a file's attributes.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_core::{FileAttribute, MediaFileBuilder, MediaResource, StatsCategory};
    ///
    /// let sticker = MediaFileBuilder::default()
    ///     .resource(MediaResource::new("st", None))
    ///     .attributes(vec![FileAttribute::Sticker { alt: "🙂".to_string() }])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(StatsCategory::for_file(&sticker), StatsCategory::Stickers);
    /// ```
    pub fn for_file(file: &MediaFile) -> Self {
        if file.is_voice() {
            StatsCategory::VoiceMessages
        } else if file.is_instant_video() {
            StatsCategory::VideoMessages
        } else if file.is_sticker() {
            StatsCategory::Stickers
        } else if file.is_video() {
            StatsCategory::Video
        } else if file.is_music() {
            StatsCategory::Audio
        } else {
            StatsCategory::File
        }
    }
}

/// Content type reported to the media cache for storage accounting.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum UserContentType {
    /// Anything not covered below
    #[display("other")]
    Other,
    /// Photos and image documents
    #[display("image")]
    Image,
    /// Videos
    #[display("video")]
    Video,
    /// Music
    #[display("audio")]
    Audio,
    /// Documents
    #[display("file")]
    File,
    /// Animations
    #[display("gif")]
    Gif,
    /// Stickers
    #[display("sticker")]
    Sticker,
    /// Voice notes and round videos
    #[display("audio_video_message")]
    AudioVideoMessage,
}

impl UserContentType {
    /// Derives the content type of a file.
    pub fn for_file(file: &MediaFile) -> Self {
        if file.is_voice() || file.is_instant_video() {
            UserContentType::AudioVideoMessage
        } else if file.is_sticker() {
            UserContentType::Sticker
        } else if file.is_animated() {
            UserContentType::Gif
        } else if file.is_video() {
            UserContentType::Video
        } else if file.is_music() {
            UserContentType::Audio
        } else if file.is_image_document() {
            UserContentType::Image
        } else {
            UserContentType::File
        }
    }
}
