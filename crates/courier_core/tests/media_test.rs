use courier_core::{
    FileAttribute, ImageRepresentation, MediaFile, MediaFileBuilder, MediaImage, MediaReference,
    MediaResource, MessageId, MessageReference, PeerId, PixelDimensions, ReferenceLocation,
    StatsCategory, UserContentType, UserLocation,
};

fn file(mime: &str, attributes: Vec<FileAttribute>) -> MediaFile {
    MediaFileBuilder::default()
        .resource(MediaResource::new("res", Some(100)))
        .mime_type(mime)
        .attributes(attributes)
        .build()
        .expect("Valid file")
}

fn repr(width: i32, height: i32, id: &str) -> ImageRepresentation {
    ImageRepresentation {
        dimensions: PixelDimensions::new(width, height),
        resource: MediaResource::new(id, None),
    }
}

fn voice() -> FileAttribute {
    FileAttribute::Audio {
        is_voice: true,
        duration: 2,
        title: None,
        performer: None,
    }
}

fn round() -> FileAttribute {
    FileAttribute::Video {
        duration: 5,
        dimensions: PixelDimensions::new(240, 240),
        is_round: true,
    }
}

#[test]
fn builder_requires_resource() {
    assert!(MediaFileBuilder::default().mime_type("text/plain").build().is_err());
}

#[test]
fn file_flags_follow_attributes() {
    let voice_note = file("audio/ogg", vec![voice()]);
    assert!(voice_note.is_voice());
    assert!(!voice_note.is_music());

    let instant = file("video/mp4", vec![round()]);
    assert!(instant.is_instant_video());
    assert!(instant.is_video());

    let named = file("application/pdf", vec![FileAttribute::FileName("a.pdf".to_string())]);
    assert_eq!(named.file_name(), Some("a.pdf"));
    assert!(!named.is_animated());
}

#[test]
fn stats_category_by_kind() {
    assert_eq!(StatsCategory::for_file(&file("audio/ogg", vec![voice()])), StatsCategory::VoiceMessages);
    assert_eq!(StatsCategory::for_file(&file("video/mp4", vec![round()])), StatsCategory::VideoMessages);
    assert_eq!(
        StatsCategory::for_file(&file(
            "video/mp4",
            vec![FileAttribute::Video {
                duration: 1,
                dimensions: PixelDimensions::new(640, 360),
                is_round: false
            }]
        )),
        StatsCategory::Video
    );
    assert_eq!(StatsCategory::for_file(&file("application/zip", vec![])), StatsCategory::File);
}

#[test]
fn user_content_type_by_kind() {
    assert_eq!(UserContentType::for_file(&file("audio/ogg", vec![voice()])), UserContentType::AudioVideoMessage);
    assert_eq!(UserContentType::for_file(&file("video/mp4", vec![FileAttribute::Animated])), UserContentType::Gif);
    assert_eq!(UserContentType::for_file(&file("image/png", vec![])), UserContentType::Image);
    assert_eq!(UserContentType::for_file(&file("application/zip", vec![])), UserContentType::File);
}

#[test]
fn representation_prefers_smallest_cover() {
    let image = MediaImage::new(
        1,
        vec![repr(2560, 2560, "xl"), repr(1280, 1280, "l"), repr(320, 320, "s")],
    );
    let picked = image
        .representation_for_display_at_size(PixelDimensions::new(1280, 1280))
        .unwrap();
    assert_eq!(picked.resource.id().string_representation(), "l");
}

#[test]
fn representation_falls_back_to_largest() {
    let image = MediaImage::new(1, vec![repr(90, 90, "s"), repr(800, 600, "m"), repr(320, 240, "x")]);
    let picked = image
        .representation_for_display_at_size(PixelDimensions::new(1280, 1280))
        .unwrap();
    assert_eq!(picked.resource.id().string_representation(), "m");
}

#[test]
fn representation_absent_without_sizes() {
    let image = MediaImage::new(1, Vec::new());
    assert!(image
        .representation_for_display_at_size(PixelDimensions::new(1280, 1280))
        .is_none());
}

#[test]
fn references_carry_user_location() {
    let message_id = MessageId::new(PeerId(5), 0, 12);
    let reference = MediaReference::message(MessageReference::new(message_id, 0), file("text/plain", vec![]));
    assert_eq!(reference.user_location(), UserLocation::Peer(PeerId(5)));

    let resource_ref = reference.resource_reference(reference.media.resource());
    assert!(matches!(
        resource_ref.media_reference.location,
        ReferenceLocation::Message(ref m) if m.id == message_id
    ));

    let standalone = MediaReference::standalone(file("text/plain", vec![]));
    assert_eq!(standalone.user_location(), UserLocation::Other);
}
