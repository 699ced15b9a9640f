//! Media descriptors: files, images and their remote resources.

use crate::MediaResourceId;
use serde::{Deserialize, Serialize};

/// A remotely stored blob that can be fetched into the local media cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaResource {
    /// Resource identifier
    id: MediaResourceId,
    /// Size in bytes, when the server reported one
    size: Option<i64>,
}

impl MediaResource {
    /// Creates a resource descriptor.
    pub fn new(id: impl Into<MediaResourceId>, size: Option<i64>) -> Self {
        Self {
            id: id.into(),
            size,
        }
    }
}

/// Width and height in pixels.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[display("{}x{}", width, height)]
pub struct PixelDimensions {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl PixelDimensions {
    /// Creates dimensions from width and height.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Pixel area, widened to avoid overflow on large images.
    pub fn area(&self) -> i64 {
        i64::from(self.width) * i64::from(self.height)
    }

    /// Whether these dimensions are at least `target` on both axes.
    pub fn covers(&self, target: PixelDimensions) -> bool {
        self.width >= target.width && self.height >= target.height
    }
}

/// Attributes attached to a file by the sender's client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileAttribute {
    /// Audio track or voice note
    Audio {
        /// Recorded with the voice-note recorder
        is_voice: bool,
        /// Duration in seconds
        duration: u32,
        /// Track title
        title: Option<String>,
        /// Track performer
        performer: Option<String>,
    },
    /// Video clip
    Video {
        /// Duration in seconds
        duration: u32,
        /// Frame size
        dimensions: PixelDimensions,
        /// Round instant video message
        is_round: bool,
    },
    /// Looping animation (GIF or silent MP4)
    Animated,
    /// Sticker with its alternative emoji
    Sticker {
        /// Emoji the sticker stands for
        alt: String,
    },
    /// Original file name
    FileName(String),
    /// Pixel size for image documents
    ImageSize(PixelDimensions),
}

/// A file attached to a message (document, voice note, video, animation...).
///
/// # Examples
///
/// ```
/// use courier_core::{FileAttribute, MediaFileBuilder, MediaResource};
///
/// let file = MediaFileBuilder::default()
///     .resource(MediaResource::new("voice_1", Some(4096)))
///     .mime_type("audio/ogg")
///     .attributes(vec![FileAttribute::Audio {
///         is_voice: true,
///         duration: 3,
///         title: None,
///         performer: None,
///     }])
///     .build()
///     .expect("valid file");
///
/// assert!(file.is_voice());
/// assert!(!file.is_animated());
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct MediaFile {
    /// Remote resource holding the file body
    resource: MediaResource,
    /// MIME type reported by the sender
    #[builder(default)]
    mime_type: String,
    /// Attributes describing the file's kind
    #[builder(default)]
    attributes: Vec<FileAttribute>,
}

impl MediaFile {
    /// Voice note recorded in-app.
    pub fn is_voice(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Audio { is_voice: true, .. }))
    }

    /// Audio file that is not a voice note.
    pub fn is_music(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Audio { is_voice: false, .. }))
    }

    /// Round instant video message.
    pub fn is_instant_video(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Video { is_round: true, .. }))
    }

    /// Video of any shape, instant videos included.
    pub fn is_video(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Video { .. }))
    }

    /// Looping animation.
    pub fn is_animated(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Animated))
    }

    /// Sticker.
    pub fn is_sticker(&self) -> bool {
        self.attributes
            .iter()
            .any(|a| matches!(a, FileAttribute::Sticker { .. }))
    }

    /// Whether the MIME type declares an image.
    pub fn is_image_document(&self) -> bool {
        self.mime_type.starts_with("image/")
    }

    /// Original file name, if the sender provided one.
    pub fn file_name(&self) -> Option<&str> {
        self.attributes.iter().find_map(|a| match a {
            FileAttribute::FileName(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// One stored size of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRepresentation {
    /// Pixel size of this representation
    pub dimensions: PixelDimensions,
    /// Remote resource holding this size
    pub resource: MediaResource,
}

/// A photo with its available representations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct MediaImage {
    /// Photo identifier
    image_id: i64,
    /// Available sizes, in server order
    representations: Vec<ImageRepresentation>,
}

impl MediaImage {
    /// Creates an image from its representations.
    pub fn new(image_id: i64, representations: Vec<ImageRepresentation>) -> Self {
        Self {
            image_id,
            representations,
        }
    }

    /// Picks the representation to fetch for display at `size`.
    ///
    /// Prefers the smallest representation that covers `size` on both axes and
    /// falls back to the largest one by area. Returns `None` only when the
    /// image has no representations at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_core::{ImageRepresentation, MediaImage, MediaResource, PixelDimensions};
    ///
    /// let repr = |w, h, id: &str| ImageRepresentation {
    ///     dimensions: PixelDimensions::new(w, h),
    ///     resource: MediaResource::new(id, None),
    /// };
    /// let image = MediaImage::new(1, vec![repr(90, 90, "s"), repr(800, 600, "m"), repr(2560, 1920, "y")]);
    ///
    /// let picked = image
    ///     .representation_for_display_at_size(PixelDimensions::new(1280, 1280))
    ///     .unwrap();
    /// assert_eq!(picked.resource.id().string_representation(), "y");
    /// ```
    pub fn representation_for_display_at_size(
        &self,
        size: PixelDimensions,
    ) -> Option<&ImageRepresentation> {
        self.representations
            .iter()
            .filter(|r| r.dimensions.covers(size))
            .min_by_key(|r| r.dimensions.area())
            .or_else(|| {
                self.representations
                    .iter()
                    .max_by_key(|r| r.dimensions.area())
            })
    }
}

/// Any media that can be referenced from a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
pub enum Media {
    /// A file attachment
    File(MediaFile),
    /// A photo
    Image(MediaImage),
}
