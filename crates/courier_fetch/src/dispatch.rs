//! Fetch, cancel, pause and status operations for message media.

use crate::signal::complete_on_error;
use crate::{
    CompletionSignal, FetchContext, SourceSignal, fetch_category_for_file, fetch_category_for_image,
};
use courier_core::{
    ByteRangeSet, FetchCategory, FetchKey, FetchPriority, FileMediaReference,
    MediaBoxFetchPriority, MediaFile, MediaImage, MediaReference, MediaResource, MessageId,
    MessageReference, StatsCategory, UserLocation,
};
use courier_interface::{
    InteractiveFetchRequest, MediaBox, ResourceFetchRequest, ResourceSignal, StatusSignal,
};
use futures::stream::{self, StreamExt};
use std::ops::Range;
use tracing::{debug, instrument};

/// Fetches a file from the media cache, reporting typed errors.
///
/// Unlike the message-scoped operations, failures are forwarded so callers
/// can react to them.
#[instrument(
    skip(media_box, file_reference, resource),
    fields(resource_id = %resource.id(), ranged = range.is_some())
)]
pub fn free_media_file_resource_interactive_fetched(
    media_box: &dyn MediaBox,
    user_location: UserLocation,
    file_reference: &FileMediaReference,
    resource: &MediaResource,
    range: Option<(Range<i64>, MediaBoxFetchPriority)>,
) -> ResourceSignal {
    let request = ResourceFetchRequest::new(
        user_location,
        file_reference.user_content_type(),
        file_reference.resource_reference(resource),
    )
    .with_range(range);

    debug!("Dispatching resource fetch to media cache");
    media_box.fetched_media_resource(request)
}

/// Fetches a file's main resource from the media cache, hiding failures.
///
/// A `range`, when given, is fetched at default priority. Videos are
/// accounted as video traffic, everything else as file traffic.
#[instrument(
    skip(context, file_reference),
    fields(resource_id = %file_reference.media.resource().id())
)]
pub fn free_media_file_interactive_fetched(
    context: &FetchContext,
    file_reference: &FileMediaReference,
    range: Option<Range<i64>>,
) -> SourceSignal {
    let file = &file_reference.media;
    let stats_category = if file.is_video() {
        StatsCategory::Video
    } else {
        StatsCategory::File
    };

    let request = ResourceFetchRequest::new(
        file_reference.user_location(),
        file_reference.user_content_type(),
        file_reference.resource_reference(file.resource()),
    )
    .with_range(range.map(|r| (r, MediaBoxFetchPriority::Default)))
    .with_stats_category(stats_category);

    debug!(%stats_category, "Dispatching free file fetch");
    let key = file.resource().id().to_string();
    complete_on_error(context.media_box().fetched_media_resource(request), key).boxed()
}

/// Cancels a free-standing fetch of `resource`.
#[instrument(skip(context, resource), fields(resource_id = %resource.id()))]
pub fn cancel_free_media_file_interactive_fetch(context: &FetchContext, resource: &MediaResource) {
    debug!("Cancelling free resource fetch");
    context
        .media_box()
        .cancel_interactive_resource_fetch(resource.id());
}

/// Starts (or joins) the interactive fetch of a message's file.
///
/// The fetch is registered under (category of `file`, chat of the message,
/// message id, resource id). The returned signal completes when the fetch
/// finishes or fails; failures are never surfaced.
#[instrument(
    skip(context, message_reference, file, ranges),
    fields(message_id = %message_id, resource_id = %file.resource().id())
)]
pub fn message_media_file_interactive_fetched(
    context: &FetchContext,
    message_id: MessageId,
    message_reference: &MessageReference,
    file: &MediaFile,
    ranges: ByteRangeSet,
    user_initiated: bool,
    priority: FetchPriority,
) -> CompletionSignal {
    let media_reference = MediaReference::message(message_reference.clone(), file.clone());
    let key = FetchKey::for_message(
        fetch_category_for_file(file),
        message_id,
        file.resource().id().clone(),
    );

    let request = InteractiveFetchRequest::new(
        key.clone(),
        media_reference.resource_reference(file.resource()),
        StatsCategory::for_file(file),
    )
    .with_ranges(ranges)
    .with_elevated_priority(*context.config().elevated_priority())
    .with_user_initiated(user_initiated)
    .with_priority(priority);

    debug!(%key, "Dispatching message file fetch");
    complete_on_error(
        context.fetch_manager().interactively_fetched(request),
        key.to_string(),
    )
    .boxed()
}

/// Starts the interactive fetch of a message's photo, if it has a fetchable size.
///
/// Picks the representation suited for the configured display size and
/// registers it under category [`FetchCategory::Image`]. Returns `None` when
/// the photo has no representations.
#[instrument(
    skip(context, message_reference, image, ranges),
    fields(message_id = %message_id, image_id = image.image_id())
)]
pub fn try_message_media_photo_interactive_fetched(
    context: &FetchContext,
    message_id: MessageId,
    message_reference: &MessageReference,
    image: &MediaImage,
    ranges: ByteRangeSet,
    user_initiated: bool,
    priority: FetchPriority,
) -> Option<CompletionSignal> {
    let size = context.config().photo_display_size();
    let Some(representation) = image.representation_for_display_at_size(size) else {
        debug!(%size, "Photo has no representation to fetch");
        return None;
    };

    let media_reference = MediaReference::message(message_reference.clone(), image.clone());
    let key = FetchKey::for_message(
        fetch_category_for_image(image),
        message_id,
        representation.resource.id().clone(),
    );

    let request = InteractiveFetchRequest::new(
        key.clone(),
        media_reference.resource_reference(&representation.resource),
        StatsCategory::Image,
    )
    .with_ranges(ranges)
    .with_elevated_priority(*context.config().elevated_priority())
    .with_user_initiated(user_initiated)
    .with_priority(priority);

    debug!(%key, dimensions = %representation.dimensions, "Dispatching message photo fetch");
    Some(
        complete_on_error(
            context.fetch_manager().interactively_fetched(request),
            key.to_string(),
        )
        .boxed(),
    )
}

/// Starts the interactive fetch of a message's photo.
///
/// Same as [`try_message_media_photo_interactive_fetched`], except that a
/// photo without representations yields a signal that never emits and never
/// completes.
pub fn message_media_photo_interactive_fetched(
    context: &FetchContext,
    message_id: MessageId,
    message_reference: &MessageReference,
    image: &MediaImage,
    ranges: ByteRangeSet,
    user_initiated: bool,
    priority: FetchPriority,
) -> CompletionSignal {
    try_message_media_photo_interactive_fetched(
        context,
        message_id,
        message_reference,
        image,
        ranges,
        user_initiated,
        priority,
    )
    .unwrap_or_else(|| stream::pending().boxed())
}

/// Cancels the interactive fetch of a message's file.
///
/// Uses the same key as [`message_media_file_interactive_fetched`]; safe to
/// call when nothing is running.
#[instrument(skip(context, file), fields(message_id = %message_id, resource_id = %file.resource().id()))]
pub fn message_media_file_cancel_interactive_fetch(
    context: &FetchContext,
    message_id: MessageId,
    file: &MediaFile,
) {
    let key = FetchKey::for_message(
        fetch_category_for_file(file),
        message_id,
        file.resource().id().clone(),
    );
    debug!(%key, "Cancelling message file fetch");
    context.fetch_manager().cancel_interactive_fetches(&key);
}

/// Pauses or resumes every fetch of `file`'s resource.
#[instrument(skip(context, file), fields(resource_id = %file.resource().id()))]
pub fn toggle_interactive_fetch_paused(context: &FetchContext, file: &MediaFile, is_paused: bool) {
    debug!(is_paused, "Toggling fetch pause");
    context
        .fetch_manager()
        .toggle_interactive_fetch_paused(file.resource().id(), is_paused);
}

/// Observes the fetch status of a message's file.
///
/// Always queried under category [`FetchCategory::File`] in the message's chat.
#[instrument(
    skip(context, file_reference),
    fields(message_id = %message_id, resource_id = %file_reference.media.resource().id())
)]
pub fn message_media_file_status(
    context: &FetchContext,
    message_id: MessageId,
    file_reference: &FileMediaReference,
) -> StatusSignal {
    let key = FetchKey::for_message(
        FetchCategory::File,
        message_id,
        file_reference.media.resource().id().clone(),
    );
    debug!(%key, "Subscribing to file status");
    context.fetch_manager().fetch_status(&key)
}
