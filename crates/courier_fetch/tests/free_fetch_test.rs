//! Tests for fetches issued directly against the media cache.

mod test_utils;

use courier_core::{
    FetchResourceSourceType, FileAttribute, MediaBoxFetchPriority, MediaReference,
    MediaResource, PixelDimensions, StatsCategory, UserContentType, UserLocation,
};
use courier_error::FetchErrorKind;
use courier_fetch::{
    FetchContext, cancel_free_media_file_interactive_fetch, free_media_file_interactive_fetched,
    free_media_file_resource_interactive_fetched,
};
use futures::StreamExt;
use test_utils::*;

fn context_with(media_box: &std::sync::Arc<RecordingMediaBox>) -> FetchContext {
    FetchContext::new(
        RecordingFetchManager::new(MockBehavior::Succeed(1)),
        media_box.clone(),
    )
}

#[tokio::test]
async fn test_resource_fetch_propagates_errors() {
    let media_box = RecordingMediaBox::new(MockBehavior::FailAfter(
        1,
        FetchErrorKind::Storage("disk full".to_string()),
    ));
    let file = plain_file("doc");
    let reference = MediaReference::message(message_reference(), file.clone());

    let items: Vec<_> = free_media_file_resource_interactive_fetched(
        media_box.as_ref(),
        UserLocation::Peer(message_id().peer_id),
        &reference,
        file.resource(),
        Some((0..512, MediaBoxFetchPriority::Elevated)),
    )
    .collect()
    .await;

    assert_eq!(items.len(), 2);
    assert!(items[0].is_ok());
    let error = items[1].as_ref().unwrap_err();
    assert_eq!(error.kind(), &FetchErrorKind::Storage("disk full".to_string()));

    let request = &media_box.requests()[0];
    assert_eq!(
        request.range(),
        &Some((0..512, MediaBoxFetchPriority::Elevated))
    );
    assert_eq!(*request.stats_category(), StatsCategory::Generic);
    assert_eq!(*request.user_content_type(), UserContentType::File);
}

#[tokio::test]
async fn test_resource_fetch_can_target_secondary_resource() {
    let media_box = RecordingMediaBox::new(MockBehavior::Succeed(1));
    let file = plain_file("doc");
    let thumbnail = MediaResource::new("doc_thumb", Some(300));
    let reference = MediaReference::standalone(file);

    let items: Vec<_> = free_media_file_resource_interactive_fetched(
        media_box.as_ref(),
        UserLocation::Other,
        &reference,
        &thumbnail,
        None,
    )
    .collect()
    .await;

    assert_eq!(items.len(), 1);
    let request = &media_box.requests()[0];
    assert_eq!(request.reference().resource, thumbnail);
    assert_eq!(*request.user_location(), UserLocation::Other);
    assert!(request.range().is_none());
}

#[tokio::test]
async fn test_free_file_fetch_swallows_errors() {
    let media_box = RecordingMediaBox::new(MockBehavior::FailAfter(
        2,
        FetchErrorKind::Generic("timeout".to_string()),
    ));
    let context = context_with(&media_box);
    let reference = MediaReference::message(message_reference(), plain_file("doc"));

    let items: Vec<FetchResourceSourceType> =
        free_media_file_interactive_fetched(&context, &reference, None)
            .collect()
            .await;

    assert_eq!(items.len(), 2);
    assert!(items.iter().all(|s| matches!(s, FetchResourceSourceType::Remote { .. })));
}

#[tokio::test]
async fn test_free_file_fetch_accounts_video_as_video() {
    let media_box = RecordingMediaBox::new(MockBehavior::Succeed(1));
    let context = context_with(&media_box);
    let video = file_with(
        "clip",
        vec![FileAttribute::Video {
            duration: 12,
            dimensions: PixelDimensions::new(1920, 1080),
            is_round: false,
        }],
    );
    let reference = MediaReference::message(message_reference(), video);

    let _: Vec<_> = free_media_file_interactive_fetched(&context, &reference, Some(0..2048))
        .collect()
        .await;

    let request = &media_box.requests()[0];
    assert_eq!(*request.stats_category(), StatsCategory::Video);
    assert_eq!(*request.user_content_type(), UserContentType::Video);
    assert_eq!(*request.user_location(), UserLocation::Peer(message_id().peer_id));
    assert_eq!(
        request.range(),
        &Some((0..2048, MediaBoxFetchPriority::Default))
    );
}

#[tokio::test]
async fn test_free_file_fetch_accounts_documents_as_file() {
    let media_box = RecordingMediaBox::new(MockBehavior::Succeed(1));
    let context = context_with(&media_box);
    let reference = MediaReference::standalone(plain_file("doc"));

    let _: Vec<_> = free_media_file_interactive_fetched(&context, &reference, None)
        .collect()
        .await;

    let request = &media_box.requests()[0];
    assert_eq!(*request.stats_category(), StatsCategory::File);
    assert!(request.range().is_none());
}

#[test]
fn test_cancel_free_fetch_targets_resource() {
    let media_box = RecordingMediaBox::new(MockBehavior::Succeed(1));
    let context = context_with(&media_box);
    let resource = MediaResource::new("avatar_big", None);

    cancel_free_media_file_interactive_fetch(&context, &resource);
    cancel_free_media_file_interactive_fetch(&context, &resource);

    let cancelled = media_box.cancelled();
    assert_eq!(cancelled.len(), 2);
    assert!(cancelled.iter().all(|id| id == resource.id()));
}
