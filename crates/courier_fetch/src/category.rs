//! Fetch category classification.

use courier_core::{FetchCategory, MediaFile, MediaImage};

/// Scheduling category of a file.
///
/// Voice notes and round videos share the voice queue; animations get their
/// own; everything else is a plain file.
///
/// # Examples
///
/// ```
/// use courier_core::{FetchCategory, FileAttribute, MediaFileBuilder, MediaResource};
/// use courier_fetch::fetch_category_for_file;
///
/// let gif = MediaFileBuilder::default()
///     .resource(MediaResource::new("gif", None))
///     .attributes(vec![FileAttribute::Animated])
///     .build()
///     .unwrap();
/// assert_eq!(fetch_category_for_file(&gif), FetchCategory::Animation);
/// ```
pub fn fetch_category_for_file(file: &MediaFile) -> FetchCategory {
    if file.is_voice() || file.is_instant_video() {
        FetchCategory::Voice
    } else if file.is_animated() {
        FetchCategory::Animation
    } else {
        FetchCategory::File
    }
}

/// Scheduling category of a photo, always [`FetchCategory::Image`].
pub fn fetch_category_for_image(_image: &MediaImage) -> FetchCategory {
    FetchCategory::Image
}
